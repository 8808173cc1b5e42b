//! Repository trait definitions for the scheduling core's data access.
//!
//! The core consumes two narrow read interfaces — weekly availability
//! configuration and the existing-booking set. Splitting them into separate
//! traits keeps implementations focused and lets tests stub exactly the
//! surface they exercise.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`slots`]: Weekly availability slot lookups
//! - [`bookings`]: Existing-booking lookups
//!
//! # Composite Trait Bound
//!
//! Service functions that need both sides take the [`SchedulingRepository`]
//! bound:
//!
//! ```ignore
//! async fn my_service<R: SchedulingRepository>(repo: &R) -> Result<()> {
//!     let slots = repo.active_slots_for(provider, Weekday::Mon).await?;
//!     let booked = repo.bookings_for(provider, date, None).await?;
//!     Ok(())
//! }
//! ```

pub mod bookings;
pub mod error;
pub mod slots;

pub use bookings::BookingRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use slots::WeeklySlotRepository;

/// Composite trait bound for a complete scheduling data source.
///
/// Automatically implemented for any type that implements both repository
/// traits; use it as the bound on service-layer functions.
pub trait SchedulingRepository: WeeklySlotRepository + BookingRepository {}

impl<T> SchedulingRepository for T where T: WeeklySlotRepository + BookingRepository {}
