//! Pure scheduling algorithms.
//!
//! This layer holds the stateless computations the service layer builds on.
//! Nothing here touches a repository: booking data always arrives as plain
//! slices, which keeps these functions trivially testable.
//!
//! # Components
//!
//! - [`intervals`]: time-of-day interval overlap, duration, and gap-finding

pub mod intervals;

pub use intervals::{duration_minutes, find_free_subrange, merge_ranges, overlaps};
