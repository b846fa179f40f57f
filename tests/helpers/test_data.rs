use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use hostledger::modules::bookings::models::{Booking, NewBooking};
use hostledger::modules::bookings::services::FeeCalculator;

/// Fixed reference instant so windowed assertions are deterministic
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// A valid booking payload with typical defaults (3% channel fee,
/// cleaning 50, 10% tax, no other costs)
pub fn draft(
    property: &str,
    channel: &str,
    revenue: Decimal,
    check_in: DateTime<Utc>,
) -> NewBooking {
    NewBooking {
        property_name: property.to_string(),
        guest_name: "Alex Carter".to_string(),
        channel_name: channel.to_string(),
        check_in,
        check_out: check_in + Duration::days(3),
        total_revenue: revenue,
        channel_fee_percentage: dec!(3),
        channel_fee: Decimal::ZERO,
        cleaning_fee: dec!(50),
        tax_rate: dec!(10),
        tax_amount: Decimal::ZERO,
        other_costs: Decimal::ZERO,
        other_costs_description: String::new(),
        net_profit: Decimal::ZERO,
        notes: String::new(),
    }
}

/// A stored booking with consistent derived fields
pub fn booking(
    property: &str,
    channel: &str,
    revenue: Decimal,
    check_in: DateTime<Utc>,
) -> Booking {
    let derived = FeeCalculator::new().derive(draft(property, channel, revenue, check_in));
    Booking::from_draft(derived, Uuid::new_v4(), check_in)
}

/// JSON payload for the booking endpoints, mirroring `draft`
pub fn draft_json(
    property: &str,
    channel: &str,
    revenue: Decimal,
    check_in: DateTime<Utc>,
) -> serde_json::Value {
    serde_json::json!({
        "property_name": property,
        "guest_name": "Alex Carter",
        "channel_name": channel,
        "check_in": check_in.to_rfc3339(),
        "check_out": (check_in + Duration::days(3)).to_rfc3339(),
        "total_revenue": revenue.to_string(),
        "channel_fee_percentage": "3",
        "cleaning_fee": "50",
        "tax_rate": "10",
        "other_costs": "0",
    })
}
