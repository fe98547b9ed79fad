//! Represents a hotel booking and the request body used to write one.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use std::fmt;

/// Field names every create/update body must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "fullname", "email", "phone", "checkin", "checkout", "roomtype", "guests",
];

/// A stored booking row.
///
/// `checkin` and `checkout` are kept exactly as submitted; no date parsing or
/// ordering is applied.
#[derive(Serialize, Clone, FromRow, Debug, PartialEq)]
pub struct Booking {
    /// Assigned by SQLite on insert, never reused.
    pub id: i64,

    pub fullname: String,

    pub email: String,

    pub phone: String,

    /// Check-in date.
    pub checkin: String,

    /// Check-out date.
    pub checkout: String,

    /// Room category, e.g. "suite" or "deluxe".
    pub roomtype: String,

    /// Number of guests.
    pub guests: i64,

    /// Set by the database default when the row is inserted.
    pub created_at: NaiveDateTime,
}

/// Incoming JSON body for create and update.
///
/// Every field is optional so that absent or empty values can be reported
/// together instead of failing on the first one. Types are still strict:
/// `guests` must be a JSON integer, so `2.0` or `"2"` is rejected as
/// malformed rather than coerced.
///
/// Build it with [`BookingPayload::from_object`]; the derived `Deserialize`
/// alone would also accept a positional JSON array.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct BookingPayload {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub roomtype: Option<String>,
    pub guests: Option<i64>,
}

/// The writable fields of a booking after presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub checkin: String,
    pub checkout: String,
    pub roomtype: String,
    pub guests: i64,
}

/// Names of required fields that were absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(pub Vec<&'static str>);

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing required fields: {}", self.0.join(", "))
    }
}

impl std::error::Error for MissingFields {}

impl BookingPayload {
    /// Read a payload from a JSON object body.
    pub fn from_object(body: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(body))
    }

    /// List the required fields that are absent, null, empty, or zero.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            filled(&self.fullname),
            filled(&self.email),
            filled(&self.phone),
            filled(&self.checkin),
            filled(&self.checkout),
            filled(&self.roomtype),
            self.guests.is_some_and(|g| g != 0),
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Turn the payload into a [`NewBooking`], or report every missing field.
    pub fn validate(self) -> Result<NewBooking, MissingFields> {
        match self {
            BookingPayload {
                fullname: Some(fullname),
                email: Some(email),
                phone: Some(phone),
                checkin: Some(checkin),
                checkout: Some(checkout),
                roomtype: Some(roomtype),
                guests: Some(guests),
            } if [&fullname, &email, &phone, &checkin, &checkout, &roomtype]
                .iter()
                .all(|s| !s.is_empty())
                && guests != 0 =>
            {
                Ok(NewBooking {
                    fullname,
                    email,
                    phone,
                    checkin,
                    checkout,
                    roomtype,
                    guests,
                })
            }
            other => Err(MissingFields(other.missing_fields())),
        }
    }
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}
