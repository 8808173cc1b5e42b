//! Data access for the scheduling core.
//!
//! The core reads two things — weekly availability configuration and the
//! existing-booking set — through the Repository pattern, so storage
//! backends can be swapped without touching scheduling logic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (admin forms, API endpoints)         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Scheduling Logic           │
//! │  - capacity computation                                  │
//! │  - overlap detection                                     │
//! │  - multi-day auto-selection                              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! │  WeeklySlotRepository + BookingRepository               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Local Repository (repositories/local.rs, in-memory)    │
//! │  — production stores are implemented by the caller      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The repository traits are read-only: committing a booking, and the
//! serialization that must make the overlap check and the insert atomic,
//! live with the calling application.

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{
    BookingRepository, RepositoryError, RepositoryResult, SchedulingRepository,
    WeeklySlotRepository,
};
