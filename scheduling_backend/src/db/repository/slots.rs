//! Weekly slot repository trait.

use async_trait::async_trait;
use chrono::Weekday;

use super::error::RepositoryResult;
use crate::models::{ProviderId, WeeklySlot, WeeklySlotId};

/// Repository trait for reading provider availability configuration.
///
/// Weekly slots are created and edited by the administrative layer; the
/// scheduling core only ever reads them.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait WeeklySlotRepository: Send + Sync {
    /// List the active weekly slots of a provider on one weekday, ordered by
    /// start time ascending.
    ///
    /// Inactive slots are filtered at the source: the scheduling core never
    /// sees a slot whose `active` flag is off.
    ///
    /// # Arguments
    /// * `provider_id` - The owning service provider
    /// * `weekday` - Day of week the slots recur on
    ///
    /// # Returns
    /// * `Ok(Vec<WeeklySlot>)` - Matching slots, possibly empty, sorted by start time
    /// * `Err(RepositoryError)` - If the lookup fails
    async fn active_slots_for(
        &self,
        provider_id: ProviderId,
        weekday: Weekday,
    ) -> RepositoryResult<Vec<WeeklySlot>>;

    /// Resolve a single weekly slot by id, active or not.
    ///
    /// Used when validating candidate slot ids supplied by a caller.
    ///
    /// # Returns
    /// * `Ok(WeeklySlot)` - The slot
    /// * `Err(RepositoryError::SlotNotFound)` - If no such slot exists
    async fn get_slot(&self, slot_id: WeeklySlotId) -> RepositoryResult<WeeklySlot>;
}
