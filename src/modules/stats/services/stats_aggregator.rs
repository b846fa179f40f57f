// Dashboard aggregation over the booking collection
//
// Three independent passes (monthly window, per-property, per-channel), each
// taking the full collection and returning a freshly built sequence. The
// passes are pure: no I/O, no shared state, deterministic for a given input
// and reference time.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::modules::bookings::models::Booking;
use crate::modules::stats::models::{ChannelStats, MonthlyStats, PropertyStats, StatsSummary};

/// Number of calendar months in the trailing dashboard window
const MONTHLY_WINDOW: u32 = 6;

pub struct StatsAggregator;

impl StatsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Trailing six-month rollup anchored at `now`'s calendar month.
    ///
    /// Always returns exactly six buckets, most recent month first.
    /// Bookings whose check-in falls outside the window are silently
    /// excluded here (they still count toward the property and channel
    /// rollups). `now` is injected by the caller so the window is
    /// deterministic and testable.
    pub fn monthly_stats(&self, bookings: &[Booking], now: DateTime<Utc>) -> Vec<MonthlyStats> {
        // Scaffold from oldest to newest month, keyed by (year, month)
        let mut keys = Vec::with_capacity(MONTHLY_WINDOW as usize);
        let mut buckets = Vec::with_capacity(MONTHLY_WINDOW as usize);
        for offset in (0..MONTHLY_WINDOW).rev() {
            let (year, month) = months_back(now.year(), now.month(), offset);
            keys.push((year, month));
            buckets.push(MonthlyStats::empty(month_label(year, month)));
        }

        for booking in bookings {
            let key = (booking.check_in.year(), booking.check_in.month());
            if let Some(idx) = keys.iter().position(|k| *k == key) {
                let bucket = &mut buckets[idx];
                bucket.total_revenue += booking.total_revenue;
                bucket.total_channel_fees += booking.channel_fee;
                bucket.total_cleaning_fees += booking.cleaning_fee;
                bucket.total_taxes += booking.tax_amount;
                bucket.total_other_costs += booking.other_costs;
                bucket.total_net_profit += booking.net_profit;
                bucket.booking_count += 1;
            }
        }

        // Booking count as an occupancy proxy: a documented simplification,
        // not calendar-accurate night tracking.
        for (idx, bucket) in buckets.iter_mut().enumerate() {
            let (year, month) = keys[idx];
            bucket.occupancy_rate = occupancy_rate(bucket.booking_count, days_in_month(year, month));
        }

        buckets.reverse();
        buckets
    }

    /// Per-property rollup, sorted descending by total revenue.
    ///
    /// Grouping is exact case-sensitive string match on the property name.
    /// The sort is stable, so equal-revenue properties keep first-encounter
    /// order.
    pub fn property_stats(&self, bookings: &[Booking]) -> Vec<PropertyStats> {
        let mut groups: Vec<PropertyStats> = Vec::new();

        for booking in bookings {
            let group = match groups
                .iter_mut()
                .find(|g| g.property_name == booking.property_name)
            {
                Some(group) => group,
                None => {
                    groups.push(PropertyStats::new(booking.property_name.clone()));
                    groups.last_mut().expect("group just pushed")
                }
            };
            group.total_revenue += booking.total_revenue;
            group.total_net_profit += booking.net_profit;
            group.booking_count += 1;
        }

        groups.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
        groups
    }

    /// Per-channel rollup, sorted descending by booking count, same grouping
    /// and tie-break discipline as `property_stats`.
    pub fn channel_stats(&self, bookings: &[Booking]) -> Vec<ChannelStats> {
        let mut groups: Vec<ChannelStats> = Vec::new();

        for booking in bookings {
            let group = match groups
                .iter_mut()
                .find(|g| g.channel_name == booking.channel_name)
            {
                Some(group) => group,
                None => {
                    groups.push(ChannelStats::new(booking.channel_name.clone()));
                    groups.last_mut().expect("group just pushed")
                }
            };
            group.total_revenue += booking.total_revenue;
            group.total_fees += booking.channel_fee;
            group.booking_count += 1;
        }

        groups.sort_by(|a, b| b.booking_count.cmp(&a.booking_count));
        groups
    }

    /// Whole-collection totals (no windowing)
    pub fn summary(&self, bookings: &[Booking]) -> StatsSummary {
        let mut summary = StatsSummary::zero();
        for booking in bookings {
            summary.total_revenue += booking.total_revenue;
            summary.total_net_profit += booking.net_profit;
            summary.booking_count += 1;
        }
        summary
    }
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// The calendar month `offset` months before (year, month)
fn months_back(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let zero_based = year as i64 * 12 + (month as i64 - 1) - offset as i64;
    let y = zero_based.div_euclid(12) as i32;
    let m = zero_based.rem_euclid(12) as u32 + 1;
    (y, m)
}

/// "Jun 2025" style label for a calendar month
fn month_label(year: i32, month: u32) -> String {
    // month is always 1-12 here
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month start");
    first.format("%b %Y").to_string()
}

/// Number of days in a calendar month
fn days_in_month(year: i32, month: u32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month start");
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid month start");
    (next - first).num_days()
}

/// min(100, round(count / days * 100)), rounding halves away from zero
fn occupancy_rate(booking_count: i64, days: i64) -> u32 {
    let rate = Decimal::from(booking_count) * Decimal::from(100) / Decimal::from(days);
    let rounded = rate
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0);
    rounded.min(100)
}
