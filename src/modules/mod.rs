pub mod bookings;
pub mod health;
pub mod settings;
pub mod stats;
