//! Route-level page components.

pub mod floor_editor;
