use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::Result;
use crate::modules::bookings::models::NewBooking;
use crate::modules::bookings::repositories::BookingRepository;
use crate::modules::bookings::services::BookingService;

/// POST /bookings
///
/// Creates a booking from the submitted form fields. Derived fee fields in
/// the payload are ignored and recomputed server-side.
pub async fn create_booking(
    repo: web::Data<BookingRepository>,
    payload: web::Json<NewBooking>,
) -> Result<HttpResponse> {
    let service = BookingService::new(repo.get_ref().clone());
    let booking = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(booking))
}

/// GET /bookings
pub async fn list_bookings(repo: web::Data<BookingRepository>) -> Result<HttpResponse> {
    let service = BookingService::new(repo.get_ref().clone());
    let bookings = service.list().await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// GET /bookings/{id}
pub async fn get_booking(
    repo: web::Data<BookingRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = BookingService::new(repo.get_ref().clone());
    let booking = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(booking))
}

/// PUT /bookings/{id}
///
/// Full replacement of every field except id and created_at.
pub async fn update_booking(
    repo: web::Data<BookingRepository>,
    path: web::Path<Uuid>,
    payload: web::Json<NewBooking>,
) -> Result<HttpResponse> {
    let service = BookingService::new(repo.get_ref().clone());
    let booking = service.update(path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(booking))
}

/// DELETE /bookings/{id}
pub async fn delete_booking(
    repo: web::Data<BookingRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = BookingService::new(repo.get_ref().clone());
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure routes for the bookings module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings")
            .route("", web::post().to(create_booking))
            .route("", web::get().to(list_bookings))
            .route("/{id}", web::get().to(get_booking))
            .route("/{id}", web::put().to(update_booking))
            .route("/{id}", web::delete().to(delete_booking)),
    );
}
