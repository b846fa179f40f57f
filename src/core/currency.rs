use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies
///
/// Conversion between the two is a display-only transform driven by the single
/// USD->EUR exchange rate held in the application settings. Stored booking
/// amounts are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::USD | Currency::EUR => 2,
        }
    }

    /// Returns the display symbol for this currency
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Formats an amount for display with the currency symbol
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!(
            "{}{:.width$}",
            self.symbol(),
            amount,
            width = self.scale() as usize
        )
    }

    /// Convert an amount held in this currency into `target`, using the
    /// single USD->EUR exchange rate. Same-currency conversion is a
    /// passthrough.
    pub fn convert(&self, amount: Decimal, target: Currency, usd_to_eur_rate: Decimal) -> Decimal {
        if *self == target {
            return amount;
        }
        match target {
            Currency::EUR => amount * usd_to_eur_rate,
            Currency::USD => amount / usd_to_eur_rate,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::USD => write!(f, "USD"),
            Currency::EUR => write!(f, "EUR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
