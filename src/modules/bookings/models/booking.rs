// Booking model with validation
//
// A booking is one recorded rental stay with its revenue, costs, and derived
// profit. The three derived fields (channel_fee, tax_amount, net_profit) are
// always recomputed by the fee calculator before a booking is stored; values
// arriving in a payload are never trusted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A stored booking record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking ID, assigned at creation and never reused
    pub id: Uuid,

    /// Property the stay took place at (exact string, used as grouping key)
    pub property_name: String,

    /// Guest display name
    pub guest_name: String,

    /// Booking channel, e.g. "Airbnb" (exact string, used as grouping key)
    pub channel_name: String,

    /// Check-in instant
    pub check_in: DateTime<Utc>,

    /// Check-out instant (>= check_in; equal means a zero-night stay)
    pub check_out: DateTime<Utc>,

    /// Gross revenue for the stay
    pub total_revenue: Decimal,

    /// Channel commission rate in percent (e.g. 3 for 3%)
    pub channel_fee_percentage: Decimal,

    /// Derived: total_revenue * channel_fee_percentage / 100
    pub channel_fee: Decimal,

    /// Cleaning fee charged to the host
    pub cleaning_fee: Decimal,

    /// Tax rate in percent
    pub tax_rate: Decimal,

    /// Derived: total_revenue * tax_rate / 100
    pub tax_amount: Decimal,

    /// Any additional costs for the stay
    pub other_costs: Decimal,

    /// Free-text description of the other costs
    #[serde(default)]
    pub other_costs_description: String,

    /// Derived: total_revenue minus all fees, taxes and costs (any sign)
    pub net_profit: Decimal,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// When the booking record was created, immutable thereafter
    pub created_at: DateTime<Utc>,
}

/// Create/update payload: every booking field except the identity fields.
///
/// The derived fields default to zero when omitted; the service overwrites
/// them via the fee calculator either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub property_name: String,
    pub guest_name: String,
    pub channel_name: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub total_revenue: Decimal,
    pub channel_fee_percentage: Decimal,
    #[serde(default)]
    pub channel_fee: Decimal,
    pub cleaning_fee: Decimal,
    pub tax_rate: Decimal,
    #[serde(default)]
    pub tax_amount: Decimal,
    pub other_costs: Decimal,
    #[serde(default)]
    pub other_costs_description: String,
    #[serde(default)]
    pub net_profit: Decimal,
    #[serde(default)]
    pub notes: String,
}

impl NewBooking {
    /// Validate business rules on the independent input fields.
    ///
    /// The fee calculator itself is total over all inputs; rejecting bad
    /// business data is this boundary's job.
    pub fn validate(&self) -> Result<()> {
        if self.property_name.is_empty() {
            return Err(AppError::validation("property_name cannot be empty"));
        }

        if self.check_out < self.check_in {
            return Err(AppError::validation(
                "check_out cannot be before check_in",
            ));
        }

        if self.total_revenue < Decimal::ZERO {
            return Err(AppError::validation("total_revenue cannot be negative"));
        }

        if self.channel_fee_percentage < Decimal::ZERO {
            return Err(AppError::validation(
                "channel_fee_percentage cannot be negative",
            ));
        }

        if self.cleaning_fee < Decimal::ZERO {
            return Err(AppError::validation("cleaning_fee cannot be negative"));
        }

        if self.tax_rate < Decimal::ZERO {
            return Err(AppError::validation("tax_rate cannot be negative"));
        }

        if self.other_costs < Decimal::ZERO {
            return Err(AppError::validation("other_costs cannot be negative"));
        }

        Ok(())
    }
}

impl Booking {
    /// Materialize a booking from a payload, assigning identity fields.
    pub fn from_draft(draft: NewBooking, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            property_name: draft.property_name,
            guest_name: draft.guest_name,
            channel_name: draft.channel_name,
            check_in: draft.check_in,
            check_out: draft.check_out,
            total_revenue: draft.total_revenue,
            channel_fee_percentage: draft.channel_fee_percentage,
            channel_fee: draft.channel_fee,
            cleaning_fee: draft.cleaning_fee,
            tax_rate: draft.tax_rate,
            tax_amount: draft.tax_amount,
            other_costs: draft.other_costs,
            other_costs_description: draft.other_costs_description,
            net_profit: draft.net_profit,
            notes: draft.notes,
            created_at,
        }
    }

    /// Full replacement of every field except id and created_at.
    pub fn replaced_with(&self, draft: NewBooking) -> Self {
        Booking::from_draft(draft, self.id, self.created_at)
    }

    /// Number of nights between check-in and check-out dates (zero for a
    /// degenerate same-day stay)
    pub fn nights(&self) -> i64 {
        (self.check_out.date_naive() - self.check_in.date_naive()).num_days()
    }
}
