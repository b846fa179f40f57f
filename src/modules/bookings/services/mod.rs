pub mod booking_service;
pub mod fee_calculator;

pub use booking_service::BookingService;
pub use fee_calculator::FeeCalculator;
