//! Schedule records: working days and the busy intervals booked inside them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::time::{TimeOfDay, TimeRange};

/// A calendar day with defined working hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    /// Unique, stable identifier referenced by [`BusyInterval::day_id`].
    pub id: i64,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl WorkDay {
    /// Working hours as a range, or `InvalidInterval` if `start >= end`.
    pub fn hours(&self) -> Result<TimeRange> {
        TimeRange::new(self.start, self.end).map_err(|_| {
            ScheduleError::InvalidInterval(format!(
                "work day {} ({}) has start {} not before end {}",
                self.id, self.date, self.start, self.end
            ))
        })
    }
}

/// A time range already committed within a [`WorkDay`].
///
/// Intervals sharing a `day_id` may overlap; the gap sweep merges them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub id: i64,
    pub day_id: i64,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl BusyInterval {
    /// The interval as a range, or `InvalidInterval` if `start >= end`.
    pub fn range(&self) -> Result<TimeRange> {
        TimeRange::new(self.start, self.end).map_err(|_| {
            ScheduleError::InvalidInterval(format!(
                "busy interval {} (day {}) has start {} not before end {}",
                self.id, self.day_id, self.start, self.end
            ))
        })
    }
}
