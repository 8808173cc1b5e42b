//! Computed scheduling results.
//!
//! These types are derived values, never persisted: every call re-computes
//! them from the current booking set. Field names follow the JSON shape the
//! surrounding application already exposes (`total_minutes`,
//! `booked_minutes`, `available_minutes`, `next_available_start/end`), so
//! callers can serialize them unchanged.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::time::TimeRange;
use super::WeeklySlotId;

/// Capacity of one weekly slot on one concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub total_minutes: i64,
    pub booked_minutes: i64,
    pub available_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_available_start: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_available_end: Option<NaiveTime>,
}

impl CapacityResult {
    /// Builds a result from total and booked minutes.
    ///
    /// `available_minutes` floors at zero: overlapping bookings can book a
    /// slot past its nominal capacity, but availability never goes negative.
    pub fn new(total_minutes: i64, booked_minutes: i64) -> Self {
        Self {
            total_minutes,
            booked_minutes,
            available_minutes: (total_minutes - booked_minutes).max(0),
            next_available_start: None,
            next_available_end: None,
        }
    }

    pub fn with_next_available(mut self, range: Option<TimeRange>) -> Self {
        self.next_available_start = range.as_ref().map(TimeRange::start);
        self.next_available_end = range.as_ref().map(TimeRange::end);
        self
    }

    /// The next free contiguous sub-range, when one was requested and found.
    pub fn next_available(&self) -> Option<TimeRange> {
        match (self.next_available_start, self.next_available_end) {
            (Some(start), Some(end)) => TimeRange::new(start, end).ok(),
            _ => None,
        }
    }
}

/// One contiguous piece of a multi-day selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionFragment {
    pub slot_id: WeeklySlotId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub minutes: i64,
}

impl SelectionFragment {
    pub fn new(slot_id: WeeklySlotId, date: NaiveDate, window: TimeRange, minutes: i64) -> Self {
        Self {
            slot_id,
            date,
            start_time: window.start(),
            end_time: window.end(),
            minutes,
        }
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }
}

/// Outcome of the multi-day auto-selection search.
///
/// `fragments` is the source of truth for the occupied sub-ranges; the
/// envelope is only a presentation convenience. A result with
/// `fully_satisfied == false` is a warning condition the caller must surface,
/// never a silent success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub fragments: Vec<SelectionFragment>,
    pub accumulated_minutes: i64,
    pub fully_satisfied: bool,
    pub span_days: u32,
}

impl SelectionResult {
    /// Displayed bounds of the whole selection: a single fragment reports its
    /// own start/end, several fragments report the earliest start to the
    /// latest end.
    pub fn envelope(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = self.fragments.iter().map(SelectionFragment::starts_at).min()?;
        let end = self.fragments.iter().map(SelectionFragment::ends_at).max()?;
        Some((start, end))
    }

    /// Minutes still missing from the requested duration.
    pub fn shortfall(&self, required_minutes: i64) -> i64 {
        (required_minutes - self.accumulated_minutes).max(0)
    }
}
