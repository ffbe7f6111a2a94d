//! Closed-interval overlap evaluation.
//!
//! All impact detection in the reassignment pipeline reduces to one question:
//! do two closed intervals intersect? The evaluator is deliberately
//! conservative — an interval whose start lies after its end is a caller
//! error and is treated as overlapping rather than rejected, so a malformed
//! record can never silently hide an affected task.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A time-off window in UTC.
///
/// The window is closed on both ends: a task whose due date equals the
/// window start is still affected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Calendar date of the window start (UTC).
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar date of the window end (UTC).
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// True iff this window intersects another, closed-interval semantics.
    pub fn overlaps(&self, other: &Window) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }
}

/// Decide whether two closed intervals `[a_start, a_end]` and
/// `[b_start, b_end]` intersect.
///
/// Shared boundary instants count as overlap. An inverted interval
/// (start after end) is treated as overlapping — unknown risk is reported
/// as risk, never skipped.
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    if a_start > a_end || b_start > b_end {
        return true;
    }
    !(a_end < b_start || a_start > b_end)
}

/// Decide whether a task's scheduled span overlaps a time-off window.
///
/// Comparison happens at calendar-date granularity: the store keeps task
/// start/due as dates while time off is a datetime range, so the window is
/// truncated to its UTC dates before the closed-interval test. A task with
/// a missing start or due date is assumed affected.
pub fn task_overlaps_window(
    task_start: Option<NaiveDate>,
    task_due: Option<NaiveDate>,
    window: &Window,
) -> bool {
    match (task_start, task_due) {
        (Some(start), Some(due)) => {
            overlaps(start, due, window.start_date(), window.end_date())
        }
        // Missing dates: assume the task might be affected.
        _ => true,
    }
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod interval_tests;
