//! Time-of-day ranges.
//!
//! A [`TimeRange`] is a half-open interval `[start, end)` within a single
//! calendar day. All scheduling math in this crate is expressed in whole
//! minutes over these ranges.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Error raised when a range is constructed with `start >= end`.
///
/// Ranges are validated at construction so the scheduling math never has to
/// re-check the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid time range: start {start} is not before end {end}")]
pub struct InvalidTimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// A half-open time-of-day interval `[start, end)`.
///
/// Two ranges that merely touch (`a.end == b.start`) do not overlap.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use fms_scheduling::models::TimeRange;
///
/// let morning = TimeRange::new(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
/// ).unwrap();
///
/// assert_eq!(morning.duration_minutes(), 180);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    /// Creates a validated range.
    ///
    /// # Errors
    /// Returns [`InvalidTimeRange`] unless `start < end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, InvalidTimeRange> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidTimeRange { start, end })
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of the range in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open overlap test: `true` iff the ranges share any instant.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Intersects this range with `bounds`, returning the shared portion.
    ///
    /// Returns `None` when the ranges are disjoint or merely touching.
    pub fn clip_to(&self, bounds: &TimeRange) -> Option<TimeRange> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// `true` iff `instant` lies within `[start, end)`.
    pub fn contains(&self, instant: NaiveTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn rejects_inverted_and_empty_ranges() {
        assert!(TimeRange::new(hm(10, 0), hm(9, 0)).is_err());
        assert!(TimeRange::new(hm(9, 0), hm(9, 0)).is_err());
        assert!(TimeRange::new(hm(9, 0), hm(9, 1)).is_ok());
    }

    #[test]
    fn touching_ranges_do_not_overlap() {
        let a = TimeRange::new(hm(9, 0), hm(10, 0)).unwrap();
        let b = TimeRange::new(hm(10, 0), hm(11, 0)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn partial_overlap_is_symmetric() {
        let a = TimeRange::new(hm(9, 0), hm(10, 30)).unwrap();
        let b = TimeRange::new(hm(10, 0), hm(11, 0)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn clip_to_returns_shared_portion() {
        let slot = TimeRange::new(hm(9, 0), hm(17, 0)).unwrap();
        let booking = TimeRange::new(hm(8, 0), hm(10, 0)).unwrap();
        let clipped = booking.clip_to(&slot).unwrap();
        assert_eq!(clipped.start(), hm(9, 0));
        assert_eq!(clipped.end(), hm(10, 0));
        assert_eq!(clipped.duration_minutes(), 60);

        let outside = TimeRange::new(hm(7, 0), hm(9, 0)).unwrap();
        assert!(outside.clip_to(&slot).is_none());
    }

    #[test]
    fn display_is_hh_mm() {
        let r = TimeRange::new(hm(9, 5), hm(17, 30)).unwrap();
        assert_eq!(r.to_string(), "09:05-17:30");
    }
}
