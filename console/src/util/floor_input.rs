//! DOM event mapping into `floorplan` input types.

#[cfg(test)]
#[path = "floor_input_test.rs"]
mod floor_input_test;

use floorplan::input::{Button, Modifiers};

#[cfg(feature = "hydrate")]
use floorplan::camera::Point;

/// Map a DOM `MouseEvent.button` code.
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

pub fn map_modifiers(shift: bool, ctrl: bool) -> Modifiers {
    Modifiers { shift, ctrl }
}

/// Keys the editor consumes; the browser default (form submit, history back) must not run.
pub fn should_prevent_default_key(key: &str) -> bool {
    matches!(key, "Enter" | "Escape" | "Backspace")
}

#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}
