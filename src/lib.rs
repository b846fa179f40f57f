//! HostLedger Rental Finance Library
//!
//! Booking records, fee derivation, and dashboard aggregation for
//! short-term-rental hosts.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::bookings;
pub use modules::settings;
pub use modules::stats;
