//! Date-keyed availability queries on a [`ScheduleIndex`].
//!
//! Every query takes the date as `YYYY-MM-DD` text, validates it, and resolves
//! it to a working day. An unknown date is an `UnknownDate` error for every
//! query except [`ScheduleIndex::find_available_slots`], which returns an empty
//! list instead so that existing callers can treat "no such day" as "no slots".

use crate::date::parse_date;
use crate::error::{Result, ScheduleError};
use crate::freebusy;
use crate::index::ScheduleIndex;
use crate::model::{BusyInterval, WorkDay};
use crate::time::{TimeOfDay, TimeRange};

impl ScheduleIndex {
    /// Busy intervals booked on `date`, ascending by start.
    ///
    /// A day with nothing booked yields an empty slice.
    ///
    /// # Errors
    /// `InvalidDate` for malformed text, `UnknownDate` if the worker has no
    /// working day on `date`.
    pub fn list_busy_intervals_for_date(&self, date: &str) -> Result<&[BusyInterval]> {
        let day = self.resolve_day(date)?;
        Ok(self.find_intervals_for_day(day.id).unwrap_or(&[]))
    }

    /// Busy time on `date` merged into non-overlapping blocks within working hours.
    pub fn list_merged_busy_intervals(&self, date: &str) -> Result<Vec<TimeRange>> {
        let day = self.resolve_day(date)?;
        Ok(freebusy::merge_busy(&self.busy_ranges(day.id), day.hours()?))
    }

    /// Free gaps within working hours on `date`, in chronological order.
    ///
    /// Returns an empty list when the day is fully booked.
    ///
    /// # Errors
    /// `InvalidDate` for malformed text, `UnknownDate` for a date outside the
    /// schedule.
    pub fn list_free_intervals(&self, date: &str) -> Result<Vec<TimeRange>> {
        let day = self.resolve_day(date)?;
        let free = freebusy::find_free_gaps(&self.busy_ranges(day.id), day.hours()?);
        tracing::debug!(date = %day.date, gaps = free.len(), "computed free intervals");
        Ok(free)
    }

    /// Whether `[start, end)` on `date` lies inside working hours and overlaps
    /// no busy interval.
    ///
    /// # Errors
    /// `InvalidTime` for malformed times, `InvalidInterval` if `start >= end`,
    /// `InvalidDate` / `UnknownDate` as for the other queries.
    pub fn is_time_available(&self, date: &str, start: &str, end: &str) -> Result<bool> {
        let requested = TimeRange::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)?;
        let day = self.resolve_day(date)?;

        if !day.hours()?.contains(&requested) {
            return Ok(false);
        }

        let available = !self
            .busy_ranges(day.id)
            .iter()
            .any(|busy| busy.overlaps(&requested));
        Ok(available)
    }

    /// Gaps on `date` lasting at least `duration_minutes`, after padding every
    /// busy interval by `buffer_minutes` on both sides.
    ///
    /// An unknown date yields an empty list rather than an error.
    ///
    /// # Errors
    /// `InvalidDate` for malformed date text.
    pub fn find_available_slots(
        &self,
        date: &str,
        duration_minutes: u32,
        buffer_minutes: u32,
    ) -> Result<Vec<TimeRange>> {
        let day = match self.resolve_day(date) {
            Ok(day) => day,
            Err(ScheduleError::UnknownDate(date)) => {
                tracing::debug!(%date, "no working day; no slots available");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let slots = freebusy::find_gaps_with_buffer(
            &self.busy_ranges(day.id),
            day.hours()?,
            duration_minutes,
            buffer_minutes,
        );
        tracing::debug!(
            date = %day.date,
            duration_minutes,
            buffer_minutes,
            slots = slots.len(),
            "searched for available slots"
        );
        Ok(slots)
    }

    /// The earliest slot [`find_available_slots`](Self::find_available_slots) would return.
    pub fn find_first_available_slot(
        &self,
        date: &str,
        duration_minutes: u32,
        buffer_minutes: u32,
    ) -> Result<Option<TimeRange>> {
        Ok(self
            .find_available_slots(date, duration_minutes, buffer_minutes)?
            .into_iter()
            .next())
    }

    fn resolve_day(&self, date: &str) -> Result<&WorkDay> {
        let date = parse_date(date)?;
        self.find_day_by_date(date)
            .ok_or(ScheduleError::UnknownDate(date))
    }

    fn busy_ranges(&self, day_id: i64) -> Vec<TimeRange> {
        self.find_intervals_for_day(day_id)
            .unwrap_or(&[])
            .iter()
            .map(|i| TimeRange {
                start: i.start,
                end: i.end,
            })
            .collect()
    }
}
