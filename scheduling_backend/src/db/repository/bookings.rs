//! Booking repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::models::{Booking, BookingId, ProviderId};

/// Repository trait for reading the existing-booking set.
///
/// Bookings are the "already occupied" time the capacity and overlap
/// computations subtract from availability. The scheduling core never
/// mutates them; committing a new booking is the calling application's
/// responsibility.
///
/// # Contract
/// Implementations must return only bookings that still occupy time.
/// Cancelled or rejected work must be filtered at the source, the same way
/// inactive weekly slots are.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Check that the backing store is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` if the store is healthy
    /// * `Ok(false)` if unhealthy but no error occurred
    /// * `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List all time-occupying bookings of a provider on one calendar date.
    ///
    /// # Arguments
    /// * `provider_id` - The provider whose time is committed
    /// * `date` - The concrete calendar date
    /// * `exclude` - Booking id to leave out, used when re-validating an
    ///   edit so the booking under edit does not conflict with itself
    ///
    /// # Returns
    /// * `Ok(Vec<Booking>)` - Matching bookings, possibly empty
    /// * `Err(RepositoryError)` - If the lookup fails
    async fn bookings_for(
        &self,
        provider_id: ProviderId,
        date: NaiveDate,
        exclude: Option<BookingId>,
    ) -> RepositoryResult<Vec<Booking>>;
}
