//! Data models for the booking service.
//!
//! `Booking` maps a row of the `bookings` table via `sqlx::FromRow` and
//! serializes as the JSON returned by the API. `BookingPayload` is the
//! untyped request body that is checked before any statement runs.

pub mod booking;
