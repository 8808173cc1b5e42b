//! Scheduling core for a facility-maintenance issue tracker.
//!
//! Providers declare weekly recurring availability windows; work orders are
//! assigned into them as dated bookings. This crate computes what remains
//! bookable: per-slot capacity on a concrete date, the next contiguous free
//! sub-range of a requested size, double-booking detection for candidate
//! assignments, and a greedy multi-day auto-selection that spreads a
//! required duration across the soonest available time.
//!
//! The core is read-only and stateless between calls — every answer is
//! re-derived from the current booking set through injected repository
//! traits ([`db::repository`]). Committing a booking, and the transaction
//! that must make the overlap check and the insert atomic, belong to the
//! calling application; see [`services`] for the contract.

pub mod algorithms;
pub mod config;
pub mod db;
pub mod io;
pub mod models;
pub mod services;
