//! Pure interval arithmetic over time-of-day ranges.
//!
//! Everything in this module is stateless: capacity and auto-selection build
//! on these functions but all booking data arrives as plain slices.

use chrono::TimeDelta;

use crate::models::TimeRange;

/// Half-open overlap test: `true` iff the two ranges share any instant.
///
/// Exactly-touching ranges (`a.end == b.start`) do not overlap.
pub fn overlaps(a: &TimeRange, b: &TimeRange) -> bool {
    a.overlaps(b)
}

/// Length of a range in whole minutes.
pub fn duration_minutes(range: &TimeRange) -> i64 {
    range.duration_minutes()
}

/// Sorts ranges by start and coalesces overlapping or touching neighbors
/// into a minimal disjoint ascending sequence.
pub fn merge_ranges(mut ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    if ranges.len() <= 1 {
        return ranges;
    }
    ranges.sort_by_key(TimeRange::start);

    let mut merged: Vec<TimeRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start() <= last.end() => {
                if range.end() > last.end() {
                    *last = TimeRange::new(last.start(), range.end()).unwrap_or(*last);
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Finds the first contiguous free sub-range of exactly `needed_minutes`
/// inside `bounds`, after subtracting all `occupied` ranges.
///
/// Occupied ranges are clipped to the bounds, merged, and the gaps scanned
/// in ascending order; the returned range starts at the earliest qualifying
/// point. Returns `None` when no single gap is large enough — aggregate free
/// minutes spread across several gaps do not count, because the caller needs
/// one contiguous assignment.
pub fn find_free_subrange(
    bounds: &TimeRange,
    occupied: &[TimeRange],
    needed_minutes: i64,
) -> Option<TimeRange> {
    if needed_minutes <= 0 || needed_minutes > bounds.duration_minutes() {
        return None;
    }

    let clipped: Vec<TimeRange> = occupied
        .iter()
        .filter_map(|r| r.clip_to(bounds))
        .collect();
    let merged = merge_ranges(clipped);

    let mut cursor = bounds.start();
    for busy in &merged {
        if (busy.start() - cursor).num_minutes() >= needed_minutes {
            break;
        }
        cursor = busy.end();
    }

    if (bounds.end() - cursor).num_minutes() >= needed_minutes {
        TimeRange::new(cursor, cursor + TimeDelta::minutes(needed_minutes)).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use proptest::prelude::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn range(s: (u32, u32), e: (u32, u32)) -> TimeRange {
        TimeRange::new(hm(s.0, s.1), hm(e.0, e.1)).unwrap()
    }

    #[test]
    fn merge_coalesces_overlapping_and_touching() {
        let merged = merge_ranges(vec![
            range((13, 0), (14, 0)),
            range((9, 0), (10, 0)),
            range((10, 0), (11, 0)),
            range((9, 30), (10, 30)),
        ]);
        assert_eq!(
            merged,
            vec![range((9, 0), (11, 0)), range((13, 0), (14, 0))]
        );
    }

    #[test]
    fn free_subrange_in_empty_slot_starts_at_bounds() {
        // Empty 09:00-17:00 slot, 60 minutes wanted.
        let found = find_free_subrange(&range((9, 0), (17, 0)), &[], 60).unwrap();
        assert_eq!(found, range((9, 0), (10, 0)));
    }

    #[test]
    fn free_subrange_skips_leading_booking() {
        // 09:00-10:00 is booked, so the next whole hour starts at 10:00.
        let found =
            find_free_subrange(&range((9, 0), (17, 0)), &[range((9, 0), (10, 0))], 60).unwrap();
        assert_eq!(found, range((10, 0), (11, 0)));
    }

    #[test]
    fn fragmented_slot_rejects_contiguous_request() {
        // 30 free minutes on either side of a booking, but no single
        // 60-minute gap.
        let occupied = vec![range((9, 30), (10, 30))];
        assert!(find_free_subrange(&range((9, 0), (11, 0)), &occupied, 60).is_none());
        // A 30-minute request fits in the first gap.
        assert_eq!(
            find_free_subrange(&range((9, 0), (11, 0)), &occupied, 30),
            Some(range((9, 0), (9, 30)))
        );
    }

    #[test]
    fn bookings_outside_bounds_are_ignored() {
        let occupied = vec![range((7, 0), (9, 0)), range((17, 0), (18, 0))];
        let found = find_free_subrange(&range((9, 0), (17, 0)), &occupied, 480).unwrap();
        assert_eq!(found, range((9, 0), (17, 0)));
    }

    #[test]
    fn zero_or_oversized_requests_find_nothing() {
        let bounds = range((9, 0), (10, 0));
        assert!(find_free_subrange(&bounds, &[], 0).is_none());
        assert!(find_free_subrange(&bounds, &[], -5).is_none());
        assert!(find_free_subrange(&bounds, &[], 61).is_none());
    }

    fn minute(m: i64) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(m as u32 * 60, 0).unwrap()
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in 0i64..1439, b in 0i64..1439, c in 0i64..1439, d in 0i64..1439) {
            prop_assume!(a < b && c < d);
            let x = TimeRange::new(minute(a), minute(b)).unwrap();
            let y = TimeRange::new(minute(c), minute(d)).unwrap();
            prop_assert_eq!(overlaps(&x, &y), overlaps(&y, &x));
        }

        #[test]
        fn touching_ranges_never_overlap(a in 0i64..720, len1 in 1i64..360, len2 in 1i64..360) {
            let x = TimeRange::new(minute(a), minute(a + len1)).unwrap();
            let y = TimeRange::new(minute(a + len1), minute(a + len1 + len2)).unwrap();
            prop_assert!(!overlaps(&x, &y));
        }

        #[test]
        fn found_subrange_is_exact_free_and_in_bounds(
            occ in proptest::collection::vec((0i64..1438, 1i64..180), 0..8),
            needed in 1i64..240,
        ) {
            let bounds = TimeRange::new(minute(480), minute(1020)).unwrap();
            let occupied: Vec<TimeRange> = occ
                .into_iter()
                .map(|(s, len)| {
                    let end = (s + len).min(1439);
                    TimeRange::new(minute(s), minute(end)).unwrap()
                })
                .collect();

            if let Some(found) = find_free_subrange(&bounds, &occupied, needed) {
                prop_assert_eq!(found.duration_minutes(), needed);
                prop_assert!(found.start() >= bounds.start());
                prop_assert!(found.end() <= bounds.end());
                for busy in &occupied {
                    prop_assert!(!overlaps(&found, busy));
                }
            }
        }
    }
}
