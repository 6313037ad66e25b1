//! Drawing toolbar: mode buttons, wall settings, and the in-progress draw controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `floorplan::panel::ToolbarModel` and routes clicks back into the
//! editor core. It keeps no state of its own.

use leptos::prelude::*;

use floorplan::engine::{Action, EditorCore};
use floorplan::panel::{DrawControls, ToolbarModel, WallControls};

use crate::state::canvas_view::CanvasViewState;
use crate::state::session::SessionState;
use crate::util::editor_actions::dispatch;
use crate::util::form_input::{parse_style_input, parse_thickness_input, style_value};

/// Drawing toolbar above the floor canvas.
#[component]
pub fn FloorToolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let model = Memo::new(move |_| editor.with(ToolbarModel::from_core));
    let run = move |actions: Vec<Action>| dispatch(actions, session, canvas_view);

    let mode_buttons = move || {
        model
            .get()
            .modes
            .into_iter()
            .map(|button| {
                let class = if button.active { "btn floor-toolbar__mode floor-toolbar__mode--active" } else { "btn floor-toolbar__mode" };
                view! {
                    <button
                        class=class
                        aria-pressed=button.active.to_string()
                        on:click=move |_| run(editor.try_update(|core| core.set_drawing_mode(button.mode)).unwrap_or_default())
                    >
                        {button.label}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="floor-toolbar">
            <div class="floor-toolbar__modes">{mode_buttons}</div>
            {move || model.get().wall.map(|wall| render_wall_controls(wall, editor))}
            {move || model.get().drawing.map(|drawing| render_draw_controls(drawing, editor, run))}
        </div>
    }
}

fn render_wall_controls(wall: WallControls, editor: RwSignal<EditorCore>) -> impl IntoView {
    let thickness = wall.thickness;
    let style_options = wall
        .styles
        .into_iter()
        .map(|option| {
            view! {
                <option value=style_value(option.style) selected=option.active>
                    {option.label}
                </option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="floor-toolbar__wall">
            <label class="floor-toolbar__field">
                "Thickness"
                <input
                    type="range"
                    min=thickness.min.to_string()
                    max=thickness.max.to_string()
                    step=thickness.step.to_string()
                    prop:value=thickness.value.to_string()
                    on:input=move |ev| {
                        if let Some(value) = parse_thickness_input(&event_target_value(&ev)) {
                            editor.update(|core| core.set_wall_thickness(value));
                        }
                    }
                />
                <span class="floor-toolbar__readout">{format!("{:.1}", thickness.value)}</span>
            </label>
            <label class="floor-toolbar__field">
                "Style"
                <select on:change=move |ev| {
                    if let Some(style) = parse_style_input(&event_target_value(&ev)) {
                        editor.update(|core| core.set_wall_style(style));
                    }
                }>
                    {style_options}
                </select>
            </label>
        </div>
    }
}

fn render_draw_controls(
    drawing: DrawControls,
    editor: RwSignal<EditorCore>,
    run: impl Fn(Vec<Action>) + Copy + 'static,
) -> impl IntoView {
    let commit = move |close: bool| {
        let result = editor.try_update(|core| if close { core.close_wall() } else { core.finish_wall() });
        // A rejected commit leaves its message on the core's notice.
        if let Some(Ok(actions)) = result {
            run(actions);
        }
    };

    view! {
        <div class="floor-toolbar__drawing">
            <span class="floor-toolbar__points">{format!("{} points", drawing.point_count)}</span>
            <button class="btn" disabled=!drawing.can_finish on:click=move |_| commit(false)>
                "Finish"
            </button>
            <button class="btn" disabled=!drawing.can_close on:click=move |_| commit(true)>
                "Close Room"
            </button>
            <button class="btn" on:click=move |_| run(editor.try_update(EditorCore::undo_point).unwrap_or_default())>
                "Undo Point"
            </button>
            <button class="btn btn--danger" on:click=move |_| run(editor.try_update(EditorCore::cancel_wall).unwrap_or_default())>
                "Cancel"
            </button>
        </div>
    }
}
