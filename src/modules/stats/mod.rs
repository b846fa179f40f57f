// Stats module: dashboard aggregation over the booking collection

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ChannelStats, MonthlyStats, PropertyStats, StatsSummary};
pub use services::StatsAggregator;
