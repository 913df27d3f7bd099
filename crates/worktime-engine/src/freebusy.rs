//! Compute free gaps inside a working window from a list of busy intervals.
//!
//! Busy intervals are clipped to the window, sorted by start, and swept left to
//! right with a cursor. Overlapping and fully-contained intervals need no
//! special handling: the cursor only ever advances to `max(cursor, end)`.

use crate::time::{TimeOfDay, TimeRange};

/// Free gaps in `window` not covered by any of `busy`.
///
/// `busy` may be unsorted and may overlap. Returns gaps sorted by start.
pub fn find_free_gaps(busy: &[TimeRange], window: TimeRange) -> Vec<TimeRange> {
    find_gaps_with_buffer(busy, window, 0, 0)
}

/// Gaps of at least `min_duration_minutes` in `window`, after padding every
/// busy interval by `buffer_minutes` on both sides.
///
/// Gaps shorter than the minimum are dropped, never truncated. Padding may push
/// neighbouring intervals into each other; the sweep merges them.
pub fn find_gaps_with_buffer(
    busy: &[TimeRange],
    window: TimeRange,
    min_duration_minutes: u32,
    buffer_minutes: u32,
) -> Vec<TimeRange> {
    let buffer = i64::from(buffer_minutes);
    let min_duration = i64::from(min_duration_minutes);
    let window_start = window.start.minutes();
    let window_end = window.end.minutes();

    // Signed minutes: a buffered interval may reach before midnight or past 24:00.
    let mut intervals: Vec<(i64, i64)> = busy
        .iter()
        .map(|r| (r.start.minutes() - buffer, r.end.minutes() + buffer))
        .filter(|&(start, end)| start < window_end && end > window_start)
        .map(|(start, end)| (start.max(window_start), end.min(window_end)))
        .collect();

    // Stable sort keeps equal starts in input order.
    intervals.sort_by_key(|&(start, _)| start);

    let mut gaps = Vec::new();
    let mut cursor = window_start;

    for (busy_start, busy_end) in intervals {
        if busy_start > cursor {
            push_gap(&mut gaps, cursor, busy_start, min_duration);
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing gap after the last busy period.
    if cursor < window_end {
        push_gap(&mut gaps, cursor, window_end, min_duration);
    }

    gaps
}

/// Merge overlapping or adjacent busy intervals, clipped to `window`.
pub fn merge_busy(busy: &[TimeRange], window: TimeRange) -> Vec<TimeRange> {
    let mut intervals: Vec<TimeRange> = busy
        .iter()
        .filter(|r| r.overlaps(&window))
        .map(|r| TimeRange {
            start: r.start.max(window.start),
            end: r.end.min(window.end),
        })
        .collect();
    intervals.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<TimeRange> = Vec::new();
    for range in intervals {
        if let Some(last) = merged.last_mut() {
            if range.start <= last.end {
                last.end = last.end.max(range.end);
                continue;
            }
        }
        merged.push(range);
    }
    merged
}

fn push_gap(gaps: &mut Vec<TimeRange>, start: i64, end: i64, min_duration: i64) {
    if end - start < min_duration {
        return;
    }
    // Both ends were clipped to the window, so they are valid times of day.
    if let (Some(start), Some(end)) = (TimeOfDay::from_minutes(start), TimeOfDay::from_minutes(end)) {
        gaps.push(TimeRange { start, end });
    }
}
