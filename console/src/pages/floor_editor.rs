//! Floor editor page: the canvas workspace with its toolbar and side panels.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between the URL floor id,
//! the floor fetch, and the shared editor core. It refreshes table statuses
//! on an interval so bookings made elsewhere show up without a reload.

#[cfg(test)]
#[path = "floor_editor_test.rs"]
mod floor_editor_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use floorplan::booking::BookingForm;
use floorplan::doc::{ElementId, FloorId};
use floorplan::engine::EditorCore;

use crate::components::booking_panel::BookingPanel;
use crate::components::element_detail_panel::ElementDetailPanel;
use crate::components::floor_canvas::FloorCanvas;
use crate::components::floor_toolbar::FloorToolbar;
use crate::components::notice_bar::NoticeBar;
use crate::components::status_bar::StatusBar;
use crate::state::canvas_view::CanvasViewState;
use crate::state::session::{LoadStatus, SessionState};
use crate::util::editor_actions::{open_floor, submit_booking};

/// Seconds between table-status refreshes.
#[cfg(feature = "hydrate")]
const TABLE_REFRESH_SECS: u64 = 30;

fn parse_floor_id(raw: Option<String>) -> Option<FloorId> {
    raw.and_then(|value| Uuid::parse_str(value.trim()).ok())
}

fn floor_title(name: &str) -> String {
    if name.trim().is_empty() { "Untitled floor".to_owned() } else { name.to_owned() }
}

/// Fetch `floor_id` and load it into the editor once it arrives.
fn load_floor(
    floor_id: FloorId,
    editor: RwSignal<EditorCore>,
    session: RwSignal<SessionState>,
    canvas_view: RwSignal<CanvasViewState>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_floor(floor_id).await {
                Ok(floor) => {
                    log::debug!("floor {floor_id} loaded: {} tables", floor.tables.len());
                    if session.try_update(|s| s.finish_loading(floor_id, Ok(()))) == Some(true) {
                        crate::util::editor_actions::apply_fetched_floor(floor, editor, session, canvas_view);
                    }
                }
                Err(e) => {
                    log::warn!("fetch floor {floor_id} failed: {e}");
                    session.update(|s| {
                        s.finish_loading(floor_id, Err(e));
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (floor_id, editor, session, canvas_view);
    }
}

/// Floor editor page, mounted at `/floors/:id`.
#[component]
pub fn FloorEditorPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let form = expect_context::<RwSignal<BookingForm>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let params = use_params_map();

    let floor_id = move || parse_floor_id(params.read().get("id"));

    Effect::new(move || {
        let Some(id) = floor_id() else {
            session.update(|s| s.load = LoadStatus::Failed("invalid floor id".to_owned()));
            return;
        };
        let started = editor
            .try_update(|core| session.try_update(|s| open_floor(core, s, id)))
            .flatten();
        if started != Some(true) {
            return;
        }
        form.set(BookingForm::default());
        load_floor(id, editor, session, canvas_view);
    });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(TABLE_REFRESH_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let Some(id) = session.with_untracked(|s| s.is_ready().then_some(s.floor_id).flatten()) else {
                    continue;
                };
                match crate::net::api::fetch_floor(id).await {
                    Ok(floor) if session.with_untracked(|s| s.floor_id == Some(id)) => {
                        crate::util::editor_actions::apply_fetched_floor(floor, editor, session, canvas_view);
                    }
                    Ok(_) => {}
                    Err(e) => log::debug!("table refresh for {id} failed: {e}"),
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    on_cleanup(move || {
        editor.try_update(EditorCore::reset);
        session.try_update(|s| *s = SessionState::default());
    });

    let on_book = Callback::new(move |id: ElementId| submit_booking(id, editor, form, session));

    let title = move || editor.with(|core| floor_title(&core.floor.name));
    let failed = move || match session.with(|s| s.load.clone()) {
        LoadStatus::Failed(message) => Some(message),
        _ => None,
    };

    view! {
        <div class="floor-editor">
            <header class="floor-editor__header">
                <h2 class="floor-editor__title">{title}</h2>
            </header>
            <FloorToolbar/>
            <NoticeBar/>
            {move || failed().map(|message| view! {
                <p class="floor-editor__error">{format!("Could not load this floor: {message}")}</p>
            })}
            <div class="floor-editor__body">
                <FloorCanvas/>
                <div class="floor-editor__side">
                    <ElementDetailPanel on_book=on_book/>
                    <BookingPanel/>
                </div>
            </div>
            <StatusBar/>
        </div>
    }
}
