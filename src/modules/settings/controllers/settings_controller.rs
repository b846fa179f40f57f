use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::core::{AppError, Currency, Result};
use crate::modules::settings::models::SettingsUpdate;
use crate::modules::settings::repositories::SettingsRepository;
use crate::modules::settings::services::SettingsService;

/// Query parameters for the display conversion endpoint
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Amount in the configured display currency
    pub amount: Decimal,
    /// Target currency code ("USD" or "EUR")
    pub target: String,
}

/// GET /settings
pub async fn get_settings(repo: web::Data<SettingsRepository>) -> Result<HttpResponse> {
    let service = SettingsService::new(repo.get_ref().clone());
    let settings = service.get().await;
    Ok(HttpResponse::Ok().json(settings))
}

/// PUT /settings
///
/// Partial update: only the provided fields are replaced.
pub async fn update_settings(
    repo: web::Data<SettingsRepository>,
    payload: web::Json<SettingsUpdate>,
) -> Result<HttpResponse> {
    let service = SettingsService::new(repo.get_ref().clone());
    let settings = service.update(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(settings))
}

/// GET /settings/convert?amount=&target=
///
/// Display conversion of an amount from the configured currency into the
/// target currency.
pub async fn convert(
    repo: web::Data<SettingsRepository>,
    query: web::Query<ConvertQuery>,
) -> Result<HttpResponse> {
    let target = Currency::from_str(&query.target).map_err(AppError::validation)?;

    let service = SettingsService::new(repo.get_ref().clone());
    let converted = service.convert(query.amount, target).await;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "amount": query.amount.to_string(),
        "target": target.to_string(),
        "converted": converted.to_string(),
    })))
}

/// Configure routes for the settings module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/settings")
            .route("", web::get().to(get_settings))
            .route("", web::put().to(update_settings))
            .route("/convert", web::get().to(convert)),
    );
}
