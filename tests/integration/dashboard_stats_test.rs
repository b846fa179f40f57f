// Dashboard aggregation over the HTTP surface
//
// Seeds the in-memory store through the booking endpoints, then reads the
// stats endpoints with a pinned window anchor so every assertion is
// deterministic.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::test_data::{draft_json, reference_now};

use actix_web::{test, web, App};
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

use hostledger::modules::bookings::controllers::booking_controller;
use hostledger::modules::bookings::repositories::BookingRepository;
use hostledger::modules::stats::controllers::stats_controller;

macro_rules! dashboard_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .configure(booking_controller::configure)
                .configure(stats_controller::configure),
        )
        .await
    };
}

macro_rules! seed {
    ($app:expr, $payload:expr) => {{
        let req = test::TestRequest::post()
            .uri("/bookings")
            .set_json($payload)
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), 201);
    }};
}

#[actix_web::test]
async fn test_monthly_stats_endpoint_with_pinned_anchor() {
    let repo = BookingRepository::new();
    let app = dashboard_app!(repo);

    let june = Utc.with_ymd_and_hms(2025, 6, 2, 15, 0, 0).unwrap();
    seed!(&app, draft_json("Seaside Loft", "Airbnb", dec!(1000), june));
    seed!(&app, draft_json("Seaside Loft", "Airbnb", dec!(400), june));
    // outside the six-month window
    seed!(
        &app,
        draft_json("Seaside Loft", "Airbnb", dec!(9999), june - Duration::days(365))
    );

    let req = test::TestRequest::get()
        .uri("/stats/monthly?at=2025-06-15T12%3A00%3A00Z")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["month"].as_str().unwrap(), "Jun 2025");
    assert_eq!(rows[0]["booking_count"].as_i64().unwrap(), 2);
    assert_eq!(
        Decimal::from_str(rows[0]["total_revenue"].as_str().unwrap()).unwrap(),
        dec!(1400)
    );
    // the year-old booking is not in any bucket
    let counted: i64 = rows.iter().map(|r| r["booking_count"].as_i64().unwrap()).sum();
    assert_eq!(counted, 2);
}

#[actix_web::test]
async fn test_monthly_stats_rejects_malformed_anchor() {
    let repo = BookingRepository::new();
    let app = dashboard_app!(repo);

    let req = test::TestRequest::get()
        .uri("/stats/monthly?at=yesterday")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_property_and_channel_endpoints() {
    let repo = BookingRepository::new();
    let app = dashboard_app!(repo);

    let now = reference_now();
    seed!(&app, draft_json("Loft", "Airbnb", dec!(500), now));
    seed!(&app, draft_json("Cabin", "Vrbo", dec!(200), now));
    seed!(&app, draft_json("Loft", "Vrbo", dec!(300), now));

    let req = test::TestRequest::get().uri("/stats/properties").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["property_name"].as_str().unwrap(), "Loft");
    assert_eq!(
        Decimal::from_str(rows[0]["total_revenue"].as_str().unwrap()).unwrap(),
        dec!(800)
    );
    assert_eq!(rows[0]["booking_count"].as_i64().unwrap(), 2);
    assert_eq!(rows[1]["property_name"].as_str().unwrap(), "Cabin");

    let req = test::TestRequest::get().uri("/stats/channels").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Vrbo has two bookings, Airbnb one
    assert_eq!(rows[0]["channel_name"].as_str().unwrap(), "Vrbo");
    assert_eq!(rows[0]["booking_count"].as_i64().unwrap(), 2);
}

#[actix_web::test]
async fn test_stats_endpoints_on_empty_store() {
    let repo = BookingRepository::new();
    let app = dashboard_app!(repo);

    let req = test::TestRequest::get().uri("/stats/monthly").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 6);

    let req = test::TestRequest::get().uri("/stats/properties").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.as_array().unwrap().is_empty());

    let req = test::TestRequest::get().uri("/stats/summary").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["booking_count"].as_i64().unwrap(), 0);
}

#[actix_web::test]
async fn test_summary_reflects_whole_collection() {
    let repo = BookingRepository::new();
    let app = dashboard_app!(repo);

    let now = reference_now();
    seed!(&app, draft_json("Loft", "Airbnb", dec!(1000), now));
    seed!(
        &app,
        draft_json("Cabin", "Vrbo", dec!(500), now - Duration::days(400))
    );

    let req = test::TestRequest::get().uri("/stats/summary").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["booking_count"].as_i64().unwrap(), 2);
    assert_eq!(
        Decimal::from_str(body["total_revenue"].as_str().unwrap()).unwrap(),
        dec!(1500)
    );
}
