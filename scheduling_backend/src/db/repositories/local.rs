//! In-memory local repository implementation.
//!
//! This module provides a local implementation of both repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMaps behind a read-write lock, giving fast,
//! deterministic, isolated execution without a real data store.

use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::{
    BookingRepository, RepositoryError, RepositoryResult, WeeklySlotRepository,
};
use crate::models::{Booking, BookingId, ProviderId, WeeklySlot, WeeklySlotId};

/// In-memory scheduling repository.
///
/// Cloning is cheap and all clones share the same underlying data, so a
/// repository can be handed to several tasks at once.
///
/// # Example
/// ```
/// use fms_scheduling::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// // Pre-populate with store_slot_impl / store_booking_impl, then hand the
/// // repository to the scheduling services.
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    slots: HashMap<WeeklySlotId, WeeklySlot>,
    bookings: HashMap<BookingId, Booking>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            bookings: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weekly slot, replacing any existing slot with the same id.
    ///
    /// This is a data-setup helper for tests, fixtures, and local
    /// development; it is deliberately not part of the repository traits,
    /// which are read-only to the scheduling core.
    pub fn store_slot_impl(&self, slot: WeeklySlot) -> WeeklySlotId {
        let mut data = self.data.write().unwrap();
        let id = slot.id;
        data.slots.insert(id, slot);
        id
    }

    /// Add a booking, replacing any existing booking with the same id.
    pub fn store_booking_impl(&self, booking: Booking) -> BookingId {
        let mut data = self.data.write().unwrap();
        let id = booking.id;
        data.bookings.insert(id, booking);
        id
    }

    /// Remove a booking, e.g. to simulate a cancellation.
    pub fn remove_booking_impl(&self, booking_id: BookingId) -> Option<Booking> {
        self.data.write().unwrap().bookings.remove(&booking_id)
    }

    /// Flip the health flag reported by `health_check`.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().unwrap().is_healthy = healthy;
    }
}

#[async_trait]
impl WeeklySlotRepository for LocalRepository {
    async fn active_slots_for(
        &self,
        provider_id: ProviderId,
        weekday: Weekday,
    ) -> RepositoryResult<Vec<WeeklySlot>> {
        let data = self.data.read().unwrap();
        let mut slots: Vec<WeeklySlot> = data
            .slots
            .values()
            .filter(|s| s.provider_id == provider_id && s.weekday == weekday && s.active)
            .cloned()
            .collect();
        slots.sort_by_key(|s| (s.window.start(), s.id));
        Ok(slots)
    }

    async fn get_slot(&self, slot_id: WeeklySlotId) -> RepositoryResult<WeeklySlot> {
        let data = self.data.read().unwrap();
        data.slots
            .get(&slot_id)
            .cloned()
            .ok_or(RepositoryError::SlotNotFound(slot_id))
    }
}

#[async_trait]
impl BookingRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }

    async fn bookings_for(
        &self,
        provider_id: ProviderId,
        date: NaiveDate,
        exclude: Option<BookingId>,
    ) -> RepositoryResult<Vec<Booking>> {
        let data = self.data.read().unwrap();
        let mut bookings: Vec<Booking> = data
            .bookings
            .values()
            .filter(|b| {
                b.provider_id == provider_id && b.date == date && Some(b.id) != exclude
            })
            .cloned()
            .collect();
        bookings.sort_by_key(|b| (b.window.start(), b.id));
        Ok(bookings)
    }
}
