use rust_decimal::Decimal;
use tracing::info;

use crate::core::{AppError, Currency, Result};
use crate::modules::settings::models::{AppSettings, SettingsUpdate};
use crate::modules::settings::repositories::SettingsRepository;

/// Service for application settings and display currency conversion
pub struct SettingsService {
    repo: SettingsRepository,
}

impl SettingsService {
    pub fn new(repo: SettingsRepository) -> Self {
        Self { repo }
    }

    pub async fn get(&self) -> AppSettings {
        self.repo.get().await
    }

    /// Merge a partial update, rejecting values that would break display
    /// conversion or seed invalid booking defaults.
    pub async fn update(&self, update: SettingsUpdate) -> Result<AppSettings> {
        if let Some(rate) = update.exchange_rate {
            if rate <= Decimal::ZERO {
                return Err(AppError::validation("exchange_rate must be positive"));
            }
        }
        if let Some(rate) = update.default_tax_rate {
            if rate < Decimal::ZERO {
                return Err(AppError::validation("default_tax_rate cannot be negative"));
            }
        }
        if let Some(pct) = update.default_channel_fee_percentage {
            if pct < Decimal::ZERO {
                return Err(AppError::validation(
                    "default_channel_fee_percentage cannot be negative",
                ));
            }
        }
        if let Some(fee) = update.default_cleaning_fee {
            if fee < Decimal::ZERO {
                return Err(AppError::validation(
                    "default_cleaning_fee cannot be negative",
                ));
            }
        }

        let settings = self.repo.update(update).await;
        info!(currency = %settings.currency, "Settings updated");
        Ok(settings)
    }

    /// Convert an amount from the configured display currency into `target`.
    ///
    /// Display-only transform over the single USD->EUR rate; stored booking
    /// amounts are never converted.
    pub async fn convert(&self, amount: Decimal, target: Currency) -> Decimal {
        let settings = self.repo.get().await;
        settings.currency.convert(amount, target, settings.exchange_rate)
    }
}
