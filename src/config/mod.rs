use crate::core::{AppError, Currency, Result};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

pub mod server;

pub use server::ServerConfig;

use crate::modules::settings::models::AppSettings;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Initial application settings, overridable from the environment
#[derive(Debug, Clone)]
pub struct DefaultsConfig {
    pub currency: Currency,
    pub exchange_rate: Decimal,
    pub default_tax_rate: Decimal,
    pub default_channel_fee_percentage: Decimal,
    pub default_cleaning_fee: Decimal,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let seed = AppSettings::default();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            defaults: DefaultsConfig {
                currency: parse_or(
                    "DEFAULT_CURRENCY",
                    seed.currency,
                    |s| Currency::from_str(s).ok(),
                )?,
                exchange_rate: parse_or("EXCHANGE_RATE", seed.exchange_rate, |s| {
                    Decimal::from_str(s).ok()
                })?,
                default_tax_rate: parse_or("DEFAULT_TAX_RATE", seed.default_tax_rate, |s| {
                    Decimal::from_str(s).ok()
                })?,
                default_channel_fee_percentage: parse_or(
                    "DEFAULT_CHANNEL_FEE_PERCENTAGE",
                    seed.default_channel_fee_percentage,
                    |s| Decimal::from_str(s).ok(),
                )?,
                default_cleaning_fee: parse_or(
                    "DEFAULT_CLEANING_FEE",
                    seed.default_cleaning_fee,
                    |s| Decimal::from_str(s).ok(),
                )?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.defaults.exchange_rate <= Decimal::ZERO {
            return Err(AppError::Configuration(
                "EXCHANGE_RATE must be positive".to_string(),
            ));
        }

        if self.defaults.default_tax_rate < Decimal::ZERO
            || self.defaults.default_channel_fee_percentage < Decimal::ZERO
            || self.defaults.default_cleaning_fee < Decimal::ZERO
        {
            return Err(AppError::Configuration(
                "Booking defaults cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Initial settings object seeded from the configured defaults
    pub fn initial_settings(&self) -> AppSettings {
        AppSettings {
            currency: self.defaults.currency,
            exchange_rate: self.defaults.exchange_rate,
            default_tax_rate: self.defaults.default_tax_rate,
            default_channel_fee_percentage: self.defaults.default_channel_fee_percentage,
            default_cleaning_fee: self.defaults.default_cleaning_fee,
        }
    }
}

/// Read an env var, falling back to `default` when unset and failing when
/// set but unparseable.
fn parse_or<T>(key: &str, default: T, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    match env::var(key) {
        Ok(raw) => {
            parse(&raw).ok_or_else(|| AppError::Configuration(format!("Invalid {}: '{}'", key, raw)))
        }
        Err(_) => Ok(default),
    }
}
