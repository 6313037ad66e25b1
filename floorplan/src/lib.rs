//! Floor-plan editor engine for the club management console.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interactive state of the floor editor: which drawing mode is active, the
//! wall path being drawn, the selected table, and the gate that decides when a
//! table may be booked. The host UI layer wires DOM events to the engine and
//! performs the side effects described by the returned [`engine::Action`]s
//! (REST calls, re-render).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EditorCore`] and its canvas binding |
//! | [`doc`] | Floor document: tables, walls, status |
//! | [`wall`] | Wall styles, thickness, and the in-progress wall path |
//! | [`snap`] | Pure grid and angle snapping |
//! | [`camera`] | Points, pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against tables |
//! | [`booking`] | Customer info, booking form, and the booking gate |
//! | [`panel`] | View models for the toolbar, detail panel, and booking panel |
//! | [`config`] | Editor configuration (grid, angle step, defaults) |
//! | [`error`] | Editor error types |
//! | [`render`] | Scene rendering onto a 2D canvas context |
//! | [`consts`] | Shared numeric constants |

pub mod booking;
pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod panel;
pub mod render;
pub mod snap;
pub mod wall;
