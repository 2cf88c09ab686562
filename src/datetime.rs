//! Unquoted, unescaped date and time fragments.
//!
//! Components are rendered as plain numerals with no zero padding, so
//! 2024-03-07 becomes `2024-3-7`. Callers embed these inside larger strings
//! and escape the result themselves. The scalar formatter's timestamp pattern
//! (`YYYY/M/D HH:MM:SS`) is a separate rendering and is not affected.

use chrono::{Datelike, Timelike};

/// Render `Y-M-D`.
#[must_use]
pub fn format_date<T: Datelike>(value: &T) -> String {
    format!("{}-{}-{}", value.year(), value.month(), value.day())
}

/// Render `Y-M-D H:M:S`.
#[must_use]
pub fn format_datetime<T: Datelike + Timelike>(value: &T) -> String {
    format!("{} {}", format_date(value), format_time(value))
}

/// Render `H:M:S`.
#[must_use]
pub fn format_time<T: Timelike>(value: &T) -> String {
    format!("{}:{}:{}", value.hour(), value.minute(), value.second())
}
