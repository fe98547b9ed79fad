#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use hotel_bookings::{app, db, services::booking_service::BookingService};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Full application router over a fresh SQLite file.
///
/// The returned `TempDir` owns the database file and must outlive the router.
pub async fn build_test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}", dir.path().join("bookings.db").display());
    let pool = db::connect(&url, 5).await.expect("open test database");
    db::ensure_schema(&pool).await.expect("create bookings table");

    (app(BookingService::new(Arc::new(pool))), dir)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
