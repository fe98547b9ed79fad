//! Hotel booking management API.
//!
//! A single `bookings` resource served over HTTP/JSON and stored in SQLite.

pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::services::booking_service::BookingService;

/// Build the full application router: booking and health routes, request
/// tracing, and CORS open to any origin.
pub fn app(service: BookingService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(service)
}
