//! Data loading utilities.
//!
//! Loaders that turn the administrative layer's availability exports into
//! validated domain models, with error context pointing at the offending
//! record.
//!
//! # Example
//!
//! ```no_run
//! use fms_scheduling::io::loaders::AvailabilityLoader;
//! use std::path::Path;
//!
//! let data = AvailabilityLoader::load_from_file(Path::new("availability.json"))
//!     .expect("failed to load");
//! println!("loaded {} slots, {} bookings", data.slots.len(), data.bookings.len());
//! ```

pub mod loaders;


pub use loaders::{AvailabilityData, AvailabilityLoader};
