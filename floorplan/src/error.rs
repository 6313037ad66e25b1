//! Editor error types.
//!
//! All editor failures are local to a single user action: they are surfaced
//! as a notice and never retried.

use crate::booking::BookingFormError;
use crate::doc::ElementId;

/// Why an editor operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("insufficient points: a wall needs at least {needed}, got {got}")]
    InsufficientPoints { needed: usize, got: usize },
    #[error("switch to wall mode to draw walls")]
    NotDrawing,
    #[error("table not found: {0}")]
    ElementNotFound(ElementId),
    #[error("table not available: {0}")]
    TableNotAvailable(ElementId),
    #[error("customer name and phone are required")]
    MissingCustomerInfo,
    #[error("booking incomplete: {0}")]
    IncompleteBooking(BookingFormError),
}
