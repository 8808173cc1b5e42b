//! Repository implementations.
//!
//! Only the in-memory [`LocalRepository`] ships with the scheduling core:
//! production persistence belongs to the surrounding application, which
//! implements the repository traits over its own store.

pub mod local;

pub use local::LocalRepository;
