use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;

/// Process-wide application settings
///
/// Used to pre-populate new booking forms and for display-time currency
/// conversion only; settings never participate in aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Currency everything is displayed in
    pub currency: Currency,
    /// Single USD->EUR scalar used for display conversion in both directions
    pub exchange_rate: Decimal,
    /// Default tax rate (percent) for new bookings
    pub default_tax_rate: Decimal,
    /// Default channel fee (percent) for new bookings
    pub default_channel_fee_percentage: Decimal,
    /// Default cleaning fee for new bookings
    pub default_cleaning_fee: Decimal,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            exchange_rate: Decimal::new(92, 2), // 1 USD = 0.92 EUR
            default_tax_rate: Decimal::from(10),
            default_channel_fee_percentage: Decimal::from(3),
            default_cleaning_fee: Decimal::from(50),
        }
    }
}

/// Partial settings update: only the provided fields are replaced
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    pub currency: Option<Currency>,
    pub exchange_rate: Option<Decimal>,
    pub default_tax_rate: Option<Decimal>,
    pub default_channel_fee_percentage: Option<Decimal>,
    pub default_cleaning_fee: Option<Decimal>,
}

impl AppSettings {
    /// Merge a partial update into these settings
    pub fn merged_with(&self, update: SettingsUpdate) -> Self {
        Self {
            currency: update.currency.unwrap_or(self.currency),
            exchange_rate: update.exchange_rate.unwrap_or(self.exchange_rate),
            default_tax_rate: update.default_tax_rate.unwrap_or(self.default_tax_rate),
            default_channel_fee_percentage: update
                .default_channel_fee_percentage
                .unwrap_or(self.default_channel_fee_percentage),
            default_cleaning_fee: update
                .default_cleaning_fee
                .unwrap_or(self.default_cleaning_fee),
        }
    }
}
