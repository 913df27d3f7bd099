//! Immutable, sorted index over a worker's days and busy intervals.
//!
//! Days are kept sorted by date and intervals by `(day_id, start)`, so both
//! lookups are binary searches over contiguous vectors. The index is never
//! mutated after construction; rebuilding means constructing a new value, which
//! keeps it safe to share between any number of concurrent readers.

use chrono::NaiveDate;

use crate::error::Result;
use crate::model::{BusyInterval, WorkDay};
use crate::source::{Schedule, ScheduleSource};

#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    days: Vec<WorkDay>,
    intervals: Vec<BusyInterval>,
}

impl ScheduleIndex {
    /// Build an index from raw day and interval lists.
    ///
    /// Sorting is stable, so days sharing a date and intervals sharing a
    /// `(day_id, start)` keep their input order.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidInterval` if any day or interval has
    /// `start >= end`.
    pub fn new(mut days: Vec<WorkDay>, mut intervals: Vec<BusyInterval>) -> Result<Self> {
        for day in &days {
            day.hours()?;
        }
        for interval in &intervals {
            interval.range()?;
        }

        days.sort_by_key(|day| day.date);
        intervals.sort_by_key(|interval| (interval.day_id, interval.start));

        tracing::debug!(
            days = days.len(),
            intervals = intervals.len(),
            "built schedule index"
        );

        Ok(Self { days, intervals })
    }

    pub fn from_schedule(schedule: Schedule) -> Result<Self> {
        Self::new(schedule.days, schedule.intervals)
    }

    /// Load records from `source` and build a fresh index from them.
    pub fn load(source: &impl ScheduleSource) -> Result<Self> {
        Self::from_schedule(source.load()?)
    }

    /// All working days, ascending by date.
    pub fn days(&self) -> &[WorkDay] {
        &self.days
    }

    /// All busy intervals, ascending by `(day_id, start)`.
    pub fn intervals(&self) -> &[BusyInterval] {
        &self.intervals
    }

    /// The working day on `date`; with duplicate dates the first in input order.
    pub fn find_day_by_date(&self, date: NaiveDate) -> Option<&WorkDay> {
        let pos = self.days.partition_point(|day| day.date < date);
        self.days.get(pos).filter(|day| day.date == date)
    }

    /// The contiguous run of intervals booked on `day_id`.
    ///
    /// Returns `None` when the day has no intervals at all, never an empty slice.
    pub fn find_intervals_for_day(&self, day_id: i64) -> Option<&[BusyInterval]> {
        let lo = self.intervals.partition_point(|i| i.day_id < day_id);
        let hi = lo + self.intervals[lo..].partition_point(|i| i.day_id == day_id);
        if lo == hi {
            None
        } else {
            Some(&self.intervals[lo..hi])
        }
    }
}
