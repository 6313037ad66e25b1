//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The editor core and the booking form come from `floorplan` and are provided
//! directly as signals. This module holds only what the host adds on top:
//! which floor is open, its network round-trips, and canvas telemetry.

pub mod canvas_view;
pub mod session;
