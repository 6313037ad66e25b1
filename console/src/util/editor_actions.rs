//! Side effects of editor actions: persistence, booking, and cursor updates.
//!
//! SYSTEM CONTEXT
//! ==============
//! `EditorCore` decides what happened; this module carries it out. Saves run
//! in the background and report back through `SessionState`, so the editor
//! never waits on the network.

#[cfg(test)]
#[path = "editor_actions_test.rs"]
mod editor_actions_test;

use leptos::prelude::*;

use floorplan::booking::BookingForm;
use floorplan::doc::{ElementId, Floor, FloorId};
use floorplan::engine::{Action, EditorCore};
use floorplan::wall::Wall;

use crate::state::canvas_view::CanvasViewState;
use crate::state::session::SessionState;

/// Carry out the side effects of `actions`.
pub fn dispatch(
    actions: Vec<Action>,
    session: RwSignal<SessionState>,
    canvas_view: RwSignal<CanvasViewState>,
) {
    for action in actions {
        match action {
            Action::WallCommitted { floor_id, wall } => persist_wall(floor_id, wall, session),
            Action::ElementMoved { floor_id, id, x, y } => persist_move(floor_id, id, x, y, session),
            Action::SetCursor(cursor) => canvas_view.update(|v| v.cursor = cursor),
            Action::ElementSelected(_selected) => {
                #[cfg(feature = "hydrate")]
                log::debug!("selection changed: {_selected:?}");
            }
            Action::Notice(_message) => {
                #[cfg(feature = "hydrate")]
                log::info!("editor notice: {_message}");
            }
            Action::RenderNeeded => {}
        }
    }
}

/// Save `wall` to the floor it was drawn on, which may no longer be the open one.
fn persist_wall(floor_id: FloorId, wall: Wall, session: RwSignal<SessionState>) {
    session.update(SessionState::begin_save);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::save_wall(floor_id, &wall).await;
            if let Err(e) = &result {
                log::warn!("save wall {} failed: {e}", wall.id);
            }
            session.update(|s| s.end_save(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (floor_id, wall);
    }
}

fn persist_move(floor_id: FloorId, id: ElementId, x: f64, y: f64, session: RwSignal<SessionState>) {
    session.update(SessionState::begin_save);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::move_table(floor_id, id, x, y).await;
            if let Err(e) = &result {
                log::warn!("move table {id} failed: {e}");
            }
            session.update(|s| s.end_save(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (floor_id, id, x, y);
    }
}

/// Book `id` with the current form. The gate is re-checked by the core before
/// anything is sent; the table turns booked locally only after the server confirms.
pub fn submit_booking(
    id: ElementId,
    editor: RwSignal<EditorCore>,
    form: RwSignal<BookingForm>,
    session: RwSignal<SessionState>,
) {
    let form_now = form.get_untracked();
    let Some(result) = editor.try_update(|core| core.request_booking(id, &form_now)) else {
        return;
    };
    let request = match result {
        Ok(request) => request,
        Err(_e) => {
            #[cfg(feature = "hydrate")]
            log::info!("booking refused for {id}: {_e}");
            return;
        }
    };
    if session.try_update(|s| s.begin_booking(id)) != Some(true) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::book_table(&request).await;
            match &result {
                Ok(()) => {
                    log::info!("table {id} booked");
                    editor.update(|core| {
                        core.apply_booking_confirmed(id);
                    });
                }
                Err(e) => log::warn!("booking {id} failed: {e}"),
            }
            session.update(|s| s.end_booking(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        session.update(|s| s.end_booking(Err("not available on server".to_owned())));
    }
}

/// Start loading `floor_id`. Switching away from the floor the editor holds
/// discards its wall path and selection, so nothing drawn there is committed
/// while the next floor is in flight. Returns whether a fetch should start.
pub fn open_floor(core: &mut EditorCore, session: &mut SessionState, floor_id: FloorId) -> bool {
    if !session.start_loading(floor_id) {
        return false;
    }
    if core.floor.id != floor_id {
        core.reset();
    }
    true
}

/// Load a freshly fetched floor, or only refresh its tables when it is already open.
///
/// A refresh keeps committed walls and the wall being drawn; a table that
/// disappeared takes the selection with it.
pub fn apply_fetched_floor(
    floor: Floor,
    editor: RwSignal<EditorCore>,
    session: RwSignal<SessionState>,
    canvas_view: RwSignal<CanvasViewState>,
) {
    let refresh = editor.with_untracked(|core| core.floor.id == floor.id);
    if refresh {
        let actions = editor.try_update(|core| core.replace_tables(floor.tables)).unwrap_or_default();
        dispatch(actions, session, canvas_view);
    } else {
        editor.update(|core| {
            core.reset();
            core.load_floor(floor);
        });
    }
}
