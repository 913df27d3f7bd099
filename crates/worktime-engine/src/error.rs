//! Error types for worktime-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// A day, busy interval, or requested range whose start is not before its end.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Date {0} is not included in the work schedule")]
    UnknownDate(NaiveDate),

    #[error("Schedule JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read schedule from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScheduleError {
    /// True for the malformed-input family (bad date, bad time, start >= end).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidDate(_)
                | ScheduleError::InvalidTime(_)
                | ScheduleError::InvalidInterval(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
