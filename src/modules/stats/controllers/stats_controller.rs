use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::{AppError, Result};
use crate::modules::bookings::repositories::BookingRepository;
use crate::modules::stats::services::StatsAggregator;

/// Query parameters for the monthly rollup endpoint
#[derive(Debug, Deserialize)]
pub struct MonthlyStatsQuery {
    /// Optional reference instant anchoring the six-month window
    /// (RFC 3339). Defaults to the current time.
    #[serde(default)]
    pub at: Option<String>,
}

/// GET /stats/monthly
///
/// Trailing six-month rollup, most recent month first. `?at=` pins the
/// window anchor, which keeps the endpoint deterministic under test.
pub async fn monthly_stats(
    repo: web::Data<BookingRepository>,
    query: web::Query<MonthlyStatsQuery>,
) -> Result<HttpResponse> {
    let now = match &query.at {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| {
                AppError::validation(format!("Invalid at timestamp: '{}'. Expected RFC 3339", raw))
            })?,
        None => Utc::now(),
    };

    let bookings = repo.snapshot().await;
    let stats = StatsAggregator::new().monthly_stats(&bookings, now);
    Ok(HttpResponse::Ok().json(stats))
}

/// GET /stats/properties
///
/// Per-property totals, descending by revenue.
pub async fn property_stats(repo: web::Data<BookingRepository>) -> Result<HttpResponse> {
    let bookings = repo.snapshot().await;
    let stats = StatsAggregator::new().property_stats(&bookings);
    Ok(HttpResponse::Ok().json(stats))
}

/// GET /stats/channels
///
/// Per-channel totals, descending by booking count.
pub async fn channel_stats(repo: web::Data<BookingRepository>) -> Result<HttpResponse> {
    let bookings = repo.snapshot().await;
    let stats = StatsAggregator::new().channel_stats(&bookings);
    Ok(HttpResponse::Ok().json(stats))
}

/// GET /stats/summary
///
/// Whole-collection totals for the dashboard header.
pub async fn summary(repo: web::Data<BookingRepository>) -> Result<HttpResponse> {
    let bookings = repo.snapshot().await;
    let stats = StatsAggregator::new().summary(&bookings);
    Ok(HttpResponse::Ok().json(stats))
}

/// Configure routes for the stats module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stats")
            .route("/monthly", web::get().to(monthly_stats))
            .route("/properties", web::get().to(property_stats))
            .route("/channels", web::get().to(channel_stats))
            .route("/summary", web::get().to(summary)),
    );
}
