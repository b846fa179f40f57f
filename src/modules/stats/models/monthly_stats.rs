use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the trailing six-month dashboard rollup
///
/// Sums cover bookings whose check-in falls in the row's calendar month.
/// Rows exist for every month in the window even when nothing was booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Month label, e.g. "Jun 2025"
    pub month: String,
    pub total_revenue: Decimal,
    pub total_channel_fees: Decimal,
    pub total_cleaning_fees: Decimal,
    pub total_taxes: Decimal,
    pub total_other_costs: Decimal,
    pub total_net_profit: Decimal,
    pub booking_count: i64,
    /// Simplified occupancy proxy: bookings per day of month, as a whole
    /// percentage capped at 100. Not a calendar-accurate metric.
    pub occupancy_rate: u32,
}

impl MonthlyStats {
    /// An empty bucket for the given month label
    pub fn empty(month: String) -> Self {
        Self {
            month,
            total_revenue: Decimal::ZERO,
            total_channel_fees: Decimal::ZERO,
            total_cleaning_fees: Decimal::ZERO,
            total_taxes: Decimal::ZERO,
            total_other_costs: Decimal::ZERO,
            total_net_profit: Decimal::ZERO,
            booking_count: 0,
            occupancy_rate: 0,
        }
    }

    /// True when no booking contributed to this bucket
    pub fn is_empty(&self) -> bool {
        self.booking_count == 0
    }
}
