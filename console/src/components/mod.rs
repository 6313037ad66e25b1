//! UI components of the floor editor page.

pub mod booking_panel;
pub mod element_detail_panel;
pub mod floor_canvas;
pub mod floor_toolbar;
pub mod notice_bar;
pub mod status_bar;
