//! Parsing and formatting between form `<input>` strings and editor values.
//!
//! Browser inputs always hand back strings; these helpers keep the conversion
//! rules in one tested place. Unparseable input yields `None` and the caller
//! leaves the current value untouched.

#[cfg(test)]
#[path = "form_input_test.rs"]
mod form_input_test;

use chrono::NaiveDate;
use floorplan::booking::TimeSlot;
use floorplan::wall::WallStyle;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse an `<input type="date">` value. Empty means no date chosen.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

/// Format a date for an `<input type="date">` value or `min` attribute.
pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string()).unwrap_or_default()
}

/// Parse a `<select>` time-slot value. Empty means no slot chosen.
pub fn parse_time_slot_input(raw: &str) -> Option<TimeSlot> {
    TimeSlot::parse(raw).ok()
}

/// Parse the guests `<input type="number">`. Range clamping is left to the form.
pub fn parse_guests_input(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Parse the thickness slider value.
pub fn parse_thickness_input(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Value attribute of a wall style `<option>`.
pub fn style_value(style: WallStyle) -> &'static str {
    match style {
        WallStyle::Solid => "solid",
        WallStyle::Dotted => "dotted",
        WallStyle::Dashed => "dashed",
    }
}

/// Parse a wall style `<select>` value.
pub fn parse_style_input(raw: &str) -> Option<WallStyle> {
    WallStyle::ALL.into_iter().find(|s| style_value(*s) == raw)
}
