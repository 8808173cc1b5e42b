//! Double-booking detection.
//!
//! Validates a candidate assignment — an explicit time range or a set of
//! weekly slots — against the existing bookings of a provider on a date.
//!
//! # Check-then-act
//!
//! A `false` result is only valid at the instant it is computed: two
//! concurrent scheduling decisions can both pass the check before either
//! commits its booking. The caller must re-run the check and insert the
//! booking inside one atomic unit (transaction or row lock per provider and
//! date); this module performs pure reads and takes no locks itself.

use chrono::NaiveDate;
use log::debug;

use crate::algorithms::intervals;
use crate::db::repository::SchedulingRepository;
use crate::models::{BookingId, ProviderId, TimeRange, WeeklySlotId};

use super::error::SchedulingResult;

/// `true` iff any existing booking of `provider_id` on `date` overlaps
/// `range` (half-open semantics; touching is not overlapping).
///
/// This is the live-validation hook for manually entered start/end
/// overrides, and the final guard before committing any new booking.
///
/// # Arguments
/// * `exclude_booking_id` - Booking to ignore, so an edit does not conflict
///   with itself
pub async fn has_time_overlap<R: SchedulingRepository>(
    repo: &R,
    provider_id: ProviderId,
    date: NaiveDate,
    range: &TimeRange,
    exclude_booking_id: Option<BookingId>,
) -> SchedulingResult<bool> {
    let bookings = repo
        .bookings_for(provider_id, date, exclude_booking_id)
        .await?;
    let conflict = bookings
        .iter()
        .any(|b| intervals::overlaps(&b.window, range));

    if conflict {
        debug!(
            "overlap: provider={} date={} candidate={} conflicts with existing booking",
            provider_id, date, range
        );
    }
    Ok(conflict)
}

/// `true` iff a multi-slot candidate would double-book the provider.
///
/// The candidate slot ids are resolved to their time-of-day bounds and
/// collapsed into their envelope — earliest start to latest end — and the
/// check runs against that envelope, not the individual windows. A
/// multi-slot assignment occupies its full outer span, so a booking sitting
/// in a gap between the candidate slots still conflicts. This is
/// deliberately conservative.
///
/// An empty candidate list conflicts with nothing.
///
/// # Errors
/// * [`crate::db::repository::RepositoryError::SlotNotFound`] (wrapped) when
///   a candidate id does not resolve
pub async fn has_multi_slot_overlap<R: SchedulingRepository>(
    repo: &R,
    provider_id: ProviderId,
    date: NaiveDate,
    candidate_slot_ids: &[WeeklySlotId],
    exclude_booking_id: Option<BookingId>,
) -> SchedulingResult<bool> {
    let Some(envelope) = resolve_envelope(repo, candidate_slot_ids).await? else {
        return Ok(false);
    };
    has_time_overlap(repo, provider_id, date, &envelope, exclude_booking_id).await
}

/// Resolves candidate slots and returns their earliest-start-to-latest-end
/// envelope, or `None` for an empty candidate list.
async fn resolve_envelope<R: SchedulingRepository>(
    repo: &R,
    slot_ids: &[WeeklySlotId],
) -> SchedulingResult<Option<TimeRange>> {
    let mut bounds: Option<TimeRange> = None;
    for id in slot_ids {
        let slot = repo.get_slot(*id).await?;
        bounds = Some(match bounds {
            None => slot.window,
            Some(current) => {
                let start = current.start().min(slot.window.start());
                let end = current.end().max(slot.window.end());
                // The widened bounds of two valid ranges are always valid.
                TimeRange::new(start, end).unwrap_or(current)
            }
        });
    }
    Ok(bounds)
}
