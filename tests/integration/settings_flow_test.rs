// Settings endpoints: defaults, partial update, display conversion

use actix_web::{test, web, App};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

use hostledger::modules::settings::controllers::settings_controller;
use hostledger::modules::settings::models::AppSettings;
use hostledger::modules::settings::repositories::SettingsRepository;

macro_rules! settings_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .configure(settings_controller::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_get_settings_returns_defaults() {
    let repo = SettingsRepository::new(AppSettings::default());
    let app = settings_app!(repo);

    let req = test::TestRequest::get().uri("/settings").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["currency"].as_str().unwrap(), "USD");
    assert_eq!(
        Decimal::from_str(body["exchange_rate"].as_str().unwrap()).unwrap(),
        dec!(0.92)
    );
    assert_eq!(
        Decimal::from_str(body["default_cleaning_fee"].as_str().unwrap()).unwrap(),
        dec!(50)
    );
}

#[actix_web::test]
async fn test_partial_update_keeps_other_fields() {
    let repo = SettingsRepository::new(AppSettings::default());
    let app = settings_app!(repo);

    let req = test::TestRequest::put()
        .uri("/settings")
        .set_json(serde_json::json!({ "currency": "EUR", "default_tax_rate": "21" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get().uri("/settings").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["currency"].as_str().unwrap(), "EUR");
    assert_eq!(
        Decimal::from_str(body["default_tax_rate"].as_str().unwrap()).unwrap(),
        dec!(21)
    );
    // untouched default
    assert_eq!(
        Decimal::from_str(body["default_channel_fee_percentage"].as_str().unwrap()).unwrap(),
        dec!(3)
    );
}

#[actix_web::test]
async fn test_update_rejects_non_positive_exchange_rate() {
    let repo = SettingsRepository::new(AppSettings::default());
    let app = settings_app!(repo);

    let req = test::TestRequest::put()
        .uri("/settings")
        .set_json(serde_json::json!({ "exchange_rate": "0" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_convert_endpoint_applies_rate() {
    let repo = SettingsRepository::new(AppSettings::default());
    let app = settings_app!(repo);

    let req = test::TestRequest::get()
        .uri("/settings/convert?amount=100&target=EUR")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        Decimal::from_str(body["converted"].as_str().unwrap()).unwrap(),
        dec!(92)
    );

    // same currency is a passthrough
    let req = test::TestRequest::get()
        .uri("/settings/convert?amount=100&target=USD")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        Decimal::from_str(body["converted"].as_str().unwrap()).unwrap(),
        dec!(100)
    );
}

#[actix_web::test]
async fn test_convert_rejects_unknown_currency() {
    let repo = SettingsRepository::new(AppSettings::default());
    let app = settings_app!(repo);

    let req = test::TestRequest::get()
        .uri("/settings/convert?amount=100&target=GBP")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
