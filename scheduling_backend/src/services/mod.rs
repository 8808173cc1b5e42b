//! Scheduling service layer.
//!
//! The four operations the surrounding application calls: slot capacity,
//! next available time, overlap detection, and multi-day auto-selection.
//! Each is a free async function generic over a [`SchedulingRepository`]
//! bound — the only state is the injected data source, so every call
//! re-derives its answer from the current booking set.
//!
//! # Atomic commit contract
//!
//! These functions are pure reads and safe to call concurrently, but their
//! results go stale the moment another booking commits. Before persisting
//! any assignment, the caller must re-run the overlap check and insert the
//! booking inside a single atomic unit (transaction or row lock per
//! provider and date). The scheduling core never takes that lock itself.
//!
//! [`SchedulingRepository`]: crate::db::repository::SchedulingRepository

pub mod auto_select;
pub mod capacity;
pub mod error;
pub mod overlap;

pub use auto_select::{auto_select, DEFAULT_MAX_HORIZON_DAYS};
pub use capacity::{calculate_next_available_time, get_slot_capacity};
pub use error::{SchedulingError, SchedulingResult};
pub use overlap::{has_multi_slot_overlap, has_time_overlap};
