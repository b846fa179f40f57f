use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-property rollup: one row per distinct property name observed in the
/// booking collection, no zero rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyStats {
    /// Exact property name as recorded on the bookings
    pub property_name: String,
    pub total_revenue: Decimal,
    pub total_net_profit: Decimal,
    pub booking_count: i64,
}

impl PropertyStats {
    pub fn new(property_name: String) -> Self {
        Self {
            property_name,
            total_revenue: Decimal::ZERO,
            total_net_profit: Decimal::ZERO,
            booking_count: 0,
        }
    }
}

/// Per-channel rollup: one row per distinct channel name, no zero rows.
/// Tracks channel fees rather than net profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Exact channel name as recorded on the bookings
    pub channel_name: String,
    pub total_revenue: Decimal,
    pub total_fees: Decimal,
    pub booking_count: i64,
}

impl ChannelStats {
    pub fn new(channel_name: String) -> Self {
        Self {
            channel_name,
            total_revenue: Decimal::ZERO,
            total_fees: Decimal::ZERO,
            booking_count: 0,
        }
    }
}

/// Whole-collection totals for the dashboard header cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_revenue: Decimal,
    pub total_net_profit: Decimal,
    pub booking_count: i64,
}

impl StatsSummary {
    pub fn zero() -> Self {
        Self {
            total_revenue: Decimal::ZERO,
            total_net_profit: Decimal::ZERO,
            booking_count: 0,
        }
    }
}
