//! Booking intent: customer contact info, the booking form, and the gate that
//! decides whether a table may be booked.
//!
//! The gate is the single source of truth for "may this table be booked now".
//! The detail panel uses it to enable its button, and [`BookingRequest::build`]
//! checks it again before a request can exist, so a request for a table that
//! is not available is unrepresentable.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::doc::{ElementId, FloorElement};
use crate::error::EditorError;

/// Opening hour of the first bookable slot.
const FIRST_SLOT_HOUR: u32 = 18;
/// Number of hourly slots offered, wrapping past midnight.
const SLOT_COUNT: u32 = 9;

/// Contact details collected before a booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
}

impl CustomerInfo {
    /// Both name and phone contain something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}

/// An hourly arrival slot, serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Parse `"HH:MM"`.
    ///
    /// # Errors
    ///
    /// Returns the chrono parse error for anything that is not a 24-hour time.
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        NaiveTime::parse_from_str(raw.trim(), "%H:%M").map(Self)
    }

    /// The evening slots the club sells, in the order a night runs (18:00 to 02:00).
    #[must_use]
    pub fn evening_slots() -> Vec<Self> {
        (0..SLOT_COUNT)
            .filter_map(|i| NaiveTime::from_hms_opt((FIRST_SLOT_HOUR + i) % 24, 0, 0))
            .map(Self)
            .collect()
    }

    #[must_use]
    pub fn time(self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).map_err(|e| format!("invalid time slot {value:?}: {e}"))
    }
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self {
        value.to_string()
    }
}

/// Why the booking form is incomplete or out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingFormError {
    #[error("choose a date")]
    MissingDate,
    #[error("{date} is in the past (today is {today})")]
    PastDate { date: NaiveDate, today: NaiveDate },
    #[error("choose a time slot")]
    MissingTimeSlot,
    #[error("guests must be between {min} and {max}, got {guests}")]
    GuestsOutOfRange { guests: u32, min: u32, max: u32 },
}

/// Controlled state of the client booking form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub date: Option<NaiveDate>,
    pub time_slot: Option<TimeSlot>,
    pub guests: u32,
    pub customer: CustomerInfo,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self { date: None, time_slot: None, guests: 2, customer: CustomerInfo::default() }
    }
}

impl BookingForm {
    /// Set the guest count, clamped to the configured bounds.
    pub fn set_guests(&mut self, guests: u32, config: &EditorConfig) {
        self.guests = guests.clamp(config.min_guests, config.max_guests);
    }

    /// Field-level validation mirroring the form's input constraints.
    ///
    /// This does not gate the booking action; see [`booking_gate`].
    ///
    /// # Errors
    ///
    /// Returns every problem found, in field order.
    pub fn validate(&self, today: NaiveDate, config: &EditorConfig) -> Result<(), Vec<BookingFormError>> {
        let mut errors = Vec::new();
        match self.date {
            None => errors.push(BookingFormError::MissingDate),
            Some(date) if date < today => errors.push(BookingFormError::PastDate { date, today }),
            Some(_) => {}
        }
        if self.time_slot.is_none() {
            errors.push(BookingFormError::MissingTimeSlot);
        }
        if !(config.min_guests..=config.max_guests).contains(&self.guests) {
            errors.push(BookingFormError::GuestsOutOfRange {
                guests: self.guests,
                min: config.min_guests,
                max: config.max_guests,
            });
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Whether a table can be booked right now, and if not, what blocks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingGate {
    /// Every precondition holds.
    Open,
    /// The table's status is not `available`. Checked first.
    TableNotAvailable,
    /// Customer name or phone is empty.
    MissingCustomerInfo,
}

impl BookingGate {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Button label naming the blocking precondition.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Book This Table",
            Self::TableNotAvailable => "Table Not Available",
            Self::MissingCustomerInfo => "Enter Customer Details",
        }
    }
}

/// Evaluate the booking preconditions for `element`.
#[must_use]
pub fn booking_gate(element: &FloorElement, customer: &CustomerInfo) -> BookingGate {
    if !element.status.is_available() {
        BookingGate::TableNotAvailable
    } else if !customer.is_complete() {
        BookingGate::MissingCustomerInfo
    } else {
        BookingGate::Open
    }
}

/// A booking handed to the external booking collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub table_id: ElementId,
    pub date: Option<NaiveDate>,
    pub time_slot: Option<TimeSlot>,
    pub guests: u32,
    pub customer_info: CustomerInfo,
}

impl BookingRequest {
    /// Build a request for `element` from the current form.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::TableNotAvailable`] or
    /// [`EditorError::MissingCustomerInfo`] when the gate is closed.
    pub fn build(element: &FloorElement, form: &BookingForm) -> Result<Self, EditorError> {
        match booking_gate(element, &form.customer) {
            BookingGate::TableNotAvailable => Err(EditorError::TableNotAvailable(element.id)),
            BookingGate::MissingCustomerInfo => Err(EditorError::MissingCustomerInfo),
            BookingGate::Open => Ok(Self {
                table_id: element.id,
                date: form.date,
                time_slot: form.time_slot,
                guests: form.guests,
                customer_info: CustomerInfo {
                    name: form.customer.name.trim().to_owned(),
                    phone: form.customer.phone.trim().to_owned(),
                },
            }),
        }
    }
}
