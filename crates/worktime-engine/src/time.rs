//! Time-of-day values and ranges within a single day.
//!
//! Times cross the boundary as 24-hour "HH:MM" strings and ranges as
//! "HH:MM-HH:MM". Internally a time is stored as minutes since midnight so
//! that gap arithmetic is plain integer arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A wall-clock time within one day, at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build a time from hour and minute, or `None` if either is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Parse a 24-hour "HH:MM" string.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        // chrono accepts single-digit hours; the boundary format is strictly two digits.
        if trimmed.len() != 5 || trimmed.as_bytes()[2] != b':' {
            return Err(ScheduleError::InvalidTime(text.to_string()));
        }
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTime(text.to_string()))?;
        Ok(TimeOfDay::from(time))
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / MINUTES_PER_HOUR)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % MINUTES_PER_HOUR)
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    /// Convert back from signed minutes; `None` outside `[00:00, 23:59]`.
    pub(crate) fn from_minutes(minutes: i64) -> Option<Self> {
        if (0..i64::from(MINUTES_PER_DAY)).contains(&minutes) {
            Some(TimeOfDay(minutes as u16))
        } else {
            None
        }
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self> {
        TimeOfDay::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A half-open time range `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Build a range, rejecting `start >= end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::InvalidInterval(format!(
                "start {} is not before end {}",
                start, end
            )));
        }
        Ok(TimeRange { start, end })
    }

    /// Parse an "HH:MM-HH:MM" string.
    pub fn parse(text: &str) -> Result<Self> {
        let (start, end) = text
            .split_once('-')
            .ok_or_else(|| ScheduleError::InvalidTime(text.to_string()))?;
        TimeRange::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes() - self.start.minutes()
    }

    /// Two ranges overlap iff neither ends at or before the other's start.
    ///
    /// Adjacent ranges (one ends exactly when the other starts) do NOT overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// True if `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl FromStr for TimeRange {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        TimeRange::parse(s)
    }
}

impl TryFrom<String> for TimeRange {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self> {
        TimeRange::parse(&value)
    }
}

impl From<TimeRange> for String {
    fn from(range: TimeRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
