//! Network layer for the REST collaborator.

pub mod api;
