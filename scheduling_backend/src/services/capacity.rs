//! Slot capacity computation.
//!
//! For one weekly slot on one concrete date: total minutes, minutes already
//! consumed by bookings, the remainder, and optionally the next contiguous
//! free sub-range of a requested size.

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::algorithms::intervals;
use crate::db::repository::SchedulingRepository;
use crate::models::{Booking, BookingId, CapacityResult, TimeRange, WeeklySlot};

use super::error::{SchedulingError, SchedulingResult};

/// Compute the capacity of `slot` on `date`.
///
/// `booked_minutes` sums each overlapping booking's portion clipped to the
/// slot window — a booking only partially inside the slot contributes only
/// its overlapping part. Bookings that overlap each other are summed as-is,
/// not merged, so a double-booked slot can report more booked minutes than
/// its total; `available_minutes` floors at zero either way, keeping
/// `0 <= available_minutes <= total_minutes`.
///
/// # Arguments
/// * `repo` - Scheduling data source
/// * `slot` - The weekly slot to measure
/// * `date` - Concrete date; its weekday must match the slot's
/// * `exclude_booking_id` - Booking to leave out when re-checking capacity
///   for a booking currently being edited
///
/// # Errors
/// * [`SchedulingError::DayMismatch`] when `date` does not fall on the
///   slot's weekday (caller bug, fails fast)
/// * [`SchedulingError::Repository`] when the booking lookup fails
pub async fn get_slot_capacity<R: SchedulingRepository>(
    repo: &R,
    slot: &WeeklySlot,
    date: NaiveDate,
    exclude_booking_id: Option<BookingId>,
) -> SchedulingResult<CapacityResult> {
    check_day(slot, date)?;

    let total_minutes = slot.window.duration_minutes();
    let bookings = repo
        .bookings_for(slot.provider_id, date, exclude_booking_id)
        .await?;
    let booked_minutes: i64 = clipped_windows(&bookings, &slot.window)
        .map(|w| w.duration_minutes())
        .sum();

    debug!(
        "capacity slot={} date={}: total={} booked={}",
        slot.id, date, total_minutes, booked_minutes
    );

    Ok(CapacityResult::new(total_minutes, booked_minutes))
}

/// Find the earliest contiguous free sub-range of `needed_minutes` within
/// `slot` on `date`.
///
/// Returns `Ok(None)` when no single gap is large enough — even if the
/// aggregate available minutes would suffice. An assignment must itself be
/// contiguous, so fragmentation legitimately makes a slot unusable for a
/// given duration.
pub async fn calculate_next_available_time<R: SchedulingRepository>(
    repo: &R,
    slot: &WeeklySlot,
    date: NaiveDate,
    needed_minutes: i64,
    exclude_booking_id: Option<BookingId>,
) -> SchedulingResult<Option<TimeRange>> {
    check_day(slot, date)?;

    let bookings = repo
        .bookings_for(slot.provider_id, date, exclude_booking_id)
        .await?;
    let occupied: Vec<TimeRange> = clipped_windows(&bookings, &slot.window).collect();

    Ok(intervals::find_free_subrange(
        &slot.window,
        &occupied,
        needed_minutes,
    ))
}

fn check_day(slot: &WeeklySlot, date: NaiveDate) -> SchedulingResult<()> {
    if slot.matches_date(date) {
        Ok(())
    } else {
        Err(SchedulingError::DayMismatch {
            slot_id: slot.id,
            expected: slot.weekday,
            actual: date.weekday(),
            date,
        })
    }
}

fn clipped_windows<'a>(
    bookings: &'a [Booking],
    bounds: &'a TimeRange,
) -> impl Iterator<Item = TimeRange> + 'a {
    bookings.iter().filter_map(move |b| b.window.clip_to(bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::models::{BookingStatus, ProviderId, WeeklySlotId};
    use chrono::{NaiveTime, Weekday};

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn workday_slot() -> WeeklySlot {
        WeeklySlot {
            id: WeeklySlotId::new(1),
            provider_id: ProviderId::new(1),
            weekday: Weekday::Mon,
            window: TimeRange::new(hm(9, 0), hm(17, 0)).unwrap(),
            active: true,
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
    }

    fn add_booking(repo: &LocalRepository, id: i64, start: (u32, u32), end: (u32, u32)) {
        repo.store_booking_impl(Booking {
            id: BookingId::new(id),
            provider_id: ProviderId::new(1),
            date: monday(),
            window: TimeRange::new(hm(start.0, start.1), hm(end.0, end.1)).unwrap(),
            slot_ids: vec![WeeklySlotId::new(1)],
            status: BookingStatus::Scheduled,
        });
    }

    #[tokio::test]
    async fn empty_slot_reports_full_capacity() {
        let repo = LocalRepository::new();
        let cap = get_slot_capacity(&repo, &workday_slot(), monday(), None)
            .await
            .unwrap();
        assert_eq!(cap.total_minutes, 480);
        assert_eq!(cap.booked_minutes, 0);
        assert_eq!(cap.available_minutes, 480);
    }

    #[tokio::test]
    async fn bookings_reduce_availability() {
        let repo = LocalRepository::new();
        add_booking(&repo, 1, (9, 0), (10, 0));
        add_booking(&repo, 2, (13, 0), (13, 45));

        let cap = get_slot_capacity(&repo, &workday_slot(), monday(), None)
            .await
            .unwrap();
        assert_eq!(cap.booked_minutes, 105);
        assert_eq!(cap.available_minutes, 375);
    }

    #[tokio::test]
    async fn partially_overlapping_booking_counts_only_its_overlap() {
        let repo = LocalRepository::new();
        // 08:00-10:00 booking against a 09:00-17:00 slot: only one hour is
        // inside the slot.
        add_booking(&repo, 1, (8, 0), (10, 0));

        let cap = get_slot_capacity(&repo, &workday_slot(), monday(), None)
            .await
            .unwrap();
        assert_eq!(cap.booked_minutes, 60);
        assert_eq!(cap.available_minutes, 420);
    }

    #[tokio::test]
    async fn double_booked_time_floors_availability_at_zero() {
        let repo = LocalRepository::new();
        let slot = WeeklySlot {
            window: TimeRange::new(hm(9, 0), hm(10, 0)).unwrap(),
            ..workday_slot()
        };
        add_booking(&repo, 1, (9, 0), (10, 0));
        add_booking(&repo, 2, (9, 0), (10, 0));

        let cap = get_slot_capacity(&repo, &slot, monday(), None).await.unwrap();
        assert_eq!(cap.total_minutes, 60);
        assert_eq!(cap.booked_minutes, 120);
        assert_eq!(cap.available_minutes, 0);
    }

    #[tokio::test]
    async fn excluded_booking_does_not_count_against_capacity() {
        let repo = LocalRepository::new();
        add_booking(&repo, 1, (9, 0), (12, 0));

        let cap = get_slot_capacity(&repo, &workday_slot(), monday(), Some(BookingId::new(1)))
            .await
            .unwrap();
        assert_eq!(cap.booked_minutes, 0);
        assert_eq!(cap.available_minutes, 480);
    }

    #[tokio::test]
    async fn wrong_weekday_fails_fast() {
        let repo = LocalRepository::new();
        let tuesday = NaiveDate::from_ymd_opt(2026, 8, 11).unwrap();
        let err = get_slot_capacity(&repo, &workday_slot(), tuesday, None)
            .await
            .unwrap_err();
        assert!(matches!(err, SchedulingError::DayMismatch { .. }));
    }

    #[tokio::test]
    async fn next_available_respects_existing_bookings() {
        let repo = LocalRepository::new();
        add_booking(&repo, 1, (9, 0), (10, 0));

        let next = calculate_next_available_time(&repo, &workday_slot(), monday(), 60, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(next, TimeRange::new(hm(10, 0), hm(11, 0)).unwrap());
    }

    #[tokio::test]
    async fn fragmented_capacity_yields_no_contiguous_gap() {
        let repo = LocalRepository::new();
        let slot = WeeklySlot {
            window: TimeRange::new(hm(9, 0), hm(11, 0)).unwrap(),
            ..workday_slot()
        };
        // 30 free minutes at each end, 60 in aggregate, no 60-minute gap.
        add_booking(&repo, 1, (9, 30), (10, 30));

        let cap = get_slot_capacity(&repo, &slot, monday(), None).await.unwrap();
        assert_eq!(cap.available_minutes, 60);

        let next = calculate_next_available_time(&repo, &slot, monday(), 60, None)
            .await
            .unwrap();
        assert!(next.is_none());
    }

    #[tokio::test]
    async fn capacity_reads_are_idempotent() {
        let repo = LocalRepository::new();
        add_booking(&repo, 1, (9, 0), (10, 0));

        let first = get_slot_capacity(&repo, &workday_slot(), monday(), None)
            .await
            .unwrap();
        let second = get_slot_capacity(&repo, &workday_slot(), monday(), None)
            .await
            .unwrap();
        assert_eq!(first, second);
    }
}
