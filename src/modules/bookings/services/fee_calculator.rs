use rust_decimal::Decimal;

use crate::modules::bookings::models::NewBooking;

/// FeeCalculator derives the dependent monetary fields of a booking from its
/// five independent inputs:
///
/// ```text
/// channel_fee = total_revenue * channel_fee_percentage / 100
/// tax_amount  = total_revenue * tax_rate / 100
/// net_profit  = total_revenue - channel_fee - cleaning_fee - tax_amount - other_costs
/// ```
///
/// The calculator is total over all inputs including zero and negative
/// values; it never validates and never rounds. Rounding to currency
/// precision is applied at display time only, never baked into the stored
/// fields.
pub struct FeeCalculator;

impl FeeCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Channel commission owed on the gross revenue
    pub fn channel_fee(&self, total_revenue: Decimal, channel_fee_percentage: Decimal) -> Decimal {
        total_revenue * channel_fee_percentage / Decimal::from(100)
    }

    /// Tax owed on the gross revenue
    pub fn tax_amount(&self, total_revenue: Decimal, tax_rate: Decimal) -> Decimal {
        total_revenue * tax_rate / Decimal::from(100)
    }

    /// What remains of the gross revenue after every fee, tax and cost (may
    /// be negative)
    pub fn net_profit(
        &self,
        total_revenue: Decimal,
        channel_fee: Decimal,
        cleaning_fee: Decimal,
        tax_amount: Decimal,
        other_costs: Decimal,
    ) -> Decimal {
        total_revenue - channel_fee - cleaning_fee - tax_amount - other_costs
    }

    /// Overwrite the three derived fields of a payload so they are
    /// consistent with its independent inputs.
    ///
    /// Applied on every create and every update, and re-applied when a
    /// stored booking is loaded for editing, so externally corrupted derived
    /// values can never survive a write.
    pub fn derive(&self, mut draft: NewBooking) -> NewBooking {
        let channel_fee = self.channel_fee(draft.total_revenue, draft.channel_fee_percentage);
        let tax_amount = self.tax_amount(draft.total_revenue, draft.tax_rate);

        draft.net_profit = self.net_profit(
            draft.total_revenue,
            channel_fee,
            draft.cleaning_fee,
            tax_amount,
            draft.other_costs,
        );
        draft.channel_fee = channel_fee;
        draft.tax_amount = tax_amount;

        draft
    }
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new()
    }
}
