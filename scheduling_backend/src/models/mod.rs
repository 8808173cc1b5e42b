//! Domain models for provider availability and bookings.

pub mod booking;
pub mod macros;
pub mod selection;
pub mod slot;
pub mod time;

pub use booking::{Booking, BookingStatus};
pub use selection::{CapacityResult, SelectionFragment, SelectionResult};
pub use slot::WeeklySlot;
pub use time::{InvalidTimeRange, TimeRange};

crate::id_type!(
    /// Identifier for a service provider.
    ProviderId(i64)
);

crate::id_type!(
    /// Identifier for a weekly availability slot.
    WeeklySlotId(i64)
);

crate::id_type!(
    /// Identifier for a booking.
    BookingId(i64)
);
