//! Error type for the scheduling services.

use chrono::Weekday;

use crate::db::repository::RepositoryError;
use crate::models::WeeklySlotId;

/// Result type for scheduling service operations
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// Errors surfaced by the scheduling services.
///
/// These are caller contract violations or infrastructure failures. Ordinary
/// scheduling outcomes — no free gap, an overlap, a partially satisfied
/// selection — are values (`Option`, `bool`, `fully_satisfied`), never
/// errors.
#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    /// `get_slot_capacity` was called with a date on the wrong weekday.
    /// This is a caller bug and fails fast rather than silently computing
    /// capacity against the wrong day.
    #[error("slot {slot_id} recurs on {expected:?} but date {date} is a {actual:?}")]
    DayMismatch {
        slot_id: WeeklySlotId,
        expected: Weekday,
        actual: Weekday,
        date: chrono::NaiveDate,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
