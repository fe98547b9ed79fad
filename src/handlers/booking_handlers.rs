//! HTTP handlers for the `/api/bookings` resource.
//! Bodies must be JSON objects and are checked for required fields before
//! anything reaches `BookingService`.

use crate::{
    errors::AppError,
    extract::{ApiJson, BookingId},
    models::booking::{Booking, BookingPayload},
    services::booking_service::BookingService,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `POST /api/bookings` — create a booking.
pub async fn create_booking(
    State(service): State<BookingService>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingPayload::from_object(body)?.validate()?;
    let id = service.create(&booking).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Booking created successfully",
        }),
    ))
}

/// `GET /api/bookings` — every booking, newest first.
pub async fn list_bookings(
    State(service): State<BookingService>,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(service.list().await?))
}

/// `GET /api/bookings/{id}`
pub async fn get_booking(
    State(service): State<BookingService>,
    BookingId(id): BookingId,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(service.get(id).await?))
}

/// `PUT /api/bookings/{id}` — replace all writable fields.
pub async fn update_booking(
    State(service): State<BookingService>,
    BookingId(id): BookingId,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> Result<Json<MessageResponse>, AppError> {
    let booking = BookingPayload::from_object(body)?.validate()?;
    service.update(id, &booking).await?;

    Ok(Json(MessageResponse {
        message: "Booking updated successfully",
    }))
}

/// `DELETE /api/bookings/{id}`
pub async fn delete_booking(
    State(service): State<BookingService>,
    BookingId(id): BookingId,
) -> Result<Json<MessageResponse>, AppError> {
    service.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Booking deleted successfully",
    }))
}
