//! # console
//!
//! Leptos + WASM host for the club floor editor.
//!
//! This crate contains the editor page, its toolbar and side panels, the
//! session state, and the REST helpers. It integrates with the `floorplan`
//! crate: the single [`floorplan::engine::EditorCore`] lives in a reactive
//! signal, and the `FloorCanvas` component binds it to a `<canvas>` through
//! [`floorplan::engine::Engine`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A logger may already be installed when the module is re-initialised.
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
    leptos::mount::hydrate_body(app::App);
}
