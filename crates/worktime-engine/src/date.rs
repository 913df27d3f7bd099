//! Calendar date validation.
//!
//! Dates are accepted only in ISO `YYYY-MM-DD` form. Anything else (wrong
//! shape, month above 12, day above 31, or a day the month does not have) is
//! rejected with [`ScheduleError::InvalidDate`].

use chrono::NaiveDate;

use crate::error::{Result, ScheduleError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate and normalize a `YYYY-MM-DD` date string.
///
/// # Errors
/// Returns `ScheduleError::InvalidDate` if the text is malformed or names a
/// date that does not exist.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();

    if !has_iso_shape(trimmed) {
        tracing::warn!(date = text, "rejected malformed date");
        return Err(ScheduleError::InvalidDate(text.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        tracing::warn!(date = text, error = %e, "rejected out-of-range date");
        ScheduleError::InvalidDate(text.to_string())
    })
}

/// Exactly `DDDD-DD-DD`; chrono alone would also accept unpadded fields.
fn has_iso_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
