//! Error types for repository operations.

use crate::models::{BookingId, WeeklySlotId};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
///
/// Lookup misses carry the typed id that missed, so the service layer can
/// report exactly which slot or booking a caller referenced.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Weekly slot not found: {0}")]
    SlotNotFound(WeeklySlotId),

    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("Data validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}
