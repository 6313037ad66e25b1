//! Bridge component between Leptos state and the imperative `floorplan::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The editor core lives in a signal shared with the toolbar and panels. This
//! host maps DOM events into core calls, hands the resulting actions to
//! `editor_actions::dispatch`, and redraws the canvas whenever the core changes.

use leptos::prelude::*;

use floorplan::engine::EditorCore;

use crate::state::canvas_view::CanvasViewState;
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use floorplan::engine::Engine;
#[cfg(feature = "hydrate")]
use floorplan::input::{InputState, Key, WheelDelta};

#[cfg(feature = "hydrate")]
use crate::util::editor_actions::dispatch;
#[cfg(feature = "hydrate")]
use crate::util::floor_input::{
    map_button, map_modifiers, mouse_point, pointer_point, should_prevent_default_key, wheel_point,
};

/// Re-read the canvas size and device pixel ratio; touches the core only when they changed.
#[cfg(feature = "hydrate")]
fn sync_viewport(engine: &Engine, editor: RwSignal<EditorCore>, canvas_ref: NodeRef<leptos::html::Canvas>) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let rect = canvas.get_bounding_client_rect();
    let (width, height) = (rect.width(), rect.height());
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    let changed = editor.with_untracked(|core| {
        (core.viewport_width - width).abs() > f64::EPSILON
            || (core.viewport_height - height).abs() > f64::EPSILON
            || (core.dpr - dpr).abs() > f64::EPSILON
    });
    if changed {
        editor.update(|core| engine.set_viewport(core, width, height, dpr));
    }
}

/// Floor canvas: the drawing surface of the editor.
#[component]
pub fn FloorCanvas() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(not(feature = "hydrate"))]
    let _ = (editor, session, canvas_view);

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let instance = Engine::new(canvas);
            sync_viewport(&instance, editor, canvas_ref);
            *engine.borrow_mut() = Some(instance);
            log::debug!("floor canvas mounted");
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            editor.with(|core| {
                if let Some(engine) = engine.borrow().as_ref() {
                    if let Err(e) = engine.render(core) {
                        log::warn!("floor render failed: {e:?}");
                    }
                }
            });
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let cursor = canvas_view.with(|v| v.cursor.clone());
            if let Some(engine) = engine.borrow().as_ref() {
                if let Err(e) = engine.set_cursor(&cursor) {
                    log::debug!("cursor update failed: {e:?}");
                }
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(e) = canvas.focus() {
                        log::debug!("canvas focus failed: {e:?}");
                    }
                    if let Err(e) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture failed: {e:?}");
                    }
                }
                if !session.with_untracked(SessionState::is_ready) {
                    return;
                }
                if let Some(engine) = engine.borrow().as_ref() {
                    sync_viewport(engine, editor, canvas_ref);
                }
                let point = pointer_point(&ev);
                let button = map_button(ev.button());
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key());
                let actions = editor
                    .try_update(|core| core.on_pointer_down(point, button, modifiers))
                    .unwrap_or_default();
                dispatch(actions, session, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let world = editor.with_untracked(|core| core.camera.screen_to_world(point));
                canvas_view.update(|v| v.cursor_world = Some(world));
                // Hover in select mode changes nothing; skip the redraw.
                if editor.with_untracked(|core| matches!(core.input, InputState::Idle)) {
                    return;
                }
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key());
                let actions = editor
                    .try_update(|core| core.on_pointer_move(point, modifiers))
                    .unwrap_or_default();
                dispatch(actions, session, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let button = map_button(ev.button());
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key());
                let actions = editor
                    .try_update(|core| core.on_pointer_up(point, button, modifiers))
                    .unwrap_or_default();
                dispatch(actions, session, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                canvas_view.update(|v| v.cursor_world = None);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_double_click = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                let point = mouse_point(&ev);
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key());
                let actions = editor
                    .try_update(|core| core.on_double_click(point, modifiers))
                    .unwrap_or_default();
                dispatch(actions, session, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let point = wheel_point(&ev);
                let delta = WheelDelta { dy: ev.delta_y() };
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key());
                let actions = editor
                    .try_update(|core| core.on_wheel(point, delta, modifiers))
                    .unwrap_or_default();
                dispatch(actions, session, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                if should_prevent_default_key(&key) {
                    ev.prevent_default();
                }
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key());
                let actions = editor
                    .try_update(|core| core.on_key_down(Key(key), modifiers))
                    .unwrap_or_default();
                dispatch(actions, session, canvas_view);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    view! {
        <canvas
            class="floor-canvas"
            node_ref=canvas_ref
            tabindex="0"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:dblclick=on_double_click
            on:wheel=on_wheel
            on:keydown=on_key_down
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
