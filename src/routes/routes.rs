//! Defines routes for the booking API.
//!
//! ## Structure
//! - **Health endpoints**
//!   - `GET    /healthz` — liveness
//!   - `GET    /readyz`  — readiness (checks SQLite)
//!
//! - **Booking endpoints**
//!   - `GET    /api/bookings`      — list bookings, newest first
//!   - `POST   /api/bookings`      — create booking
//!   - `GET    /api/bookings/{id}` — fetch one booking
//!   - `PUT    /api/bookings/{id}` — replace booking fields
//!   - `DELETE /api/bookings/{id}` — delete booking

use crate::{
    handlers::{
        booking_handlers::{
            create_booking, delete_booking, get_booking, list_bookings, update_booking,
        },
        health_handlers::{healthz, readyz},
    },
    services::booking_service::BookingService,
};
use axum::{Router, routing::get};

/// Build the router for all booking routes.
///
/// The router carries shared state (`BookingService`) to all handlers.
pub fn routes() -> Router<BookingService> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route(
            "/api/bookings/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
}
