//! Concrete, dated provider commitments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::TimeRange;
use super::{BookingId, ProviderId, WeeklySlotId};

/// Workflow status of a booking in the surrounding tracker.
///
/// The scheduling math never inspects this: a booking that reaches the core
/// occupies its time range regardless of how far along the work is.
/// Repositories are responsible for filtering out bookings that no longer
/// occupy time (cancelled or rejected work).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Scheduled,
    InProgress,
    Completed,
}

/// A commitment of provider time on a concrete calendar date.
///
/// The assigned window may be a sub-range of one weekly slot or span the
/// envelope of several; `slot_ids` records which weekly slots it was carved
/// from. Because weekly slots recur, the same slot produces distinct
/// bookings on different dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub provider_id: ProviderId,
    pub date: NaiveDate,
    pub window: TimeRange,
    #[serde(default)]
    pub slot_ids: Vec<WeeklySlotId>,
    pub status: BookingStatus,
}
