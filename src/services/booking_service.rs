//! BookingService: CRUD over the `bookings` table.
//!
//! Every operation is a single parameterized statement against the shared
//! SQLite pool. Isolation between concurrent requests is whatever SQLite
//! provides; nothing here adds locking.

use crate::models::booking::{Booking, NewBooking};
use sqlx::SqlitePool;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("booking `{0}` not found")]
    NotFound(i64),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type BookingResult<T> = Result<T, BookingError>;

// DATE columns have NUMERIC affinity, so digit-only dates come back as
// INTEGER or REAL unless cast.
const SELECT_COLUMNS: &str =
    "SELECT id, fullname, email, phone,
            CAST(checkin AS TEXT) AS checkin, CAST(checkout AS TEXT) AS checkout,
            roomtype, guests, created_at
     FROM bookings";

#[derive(Clone)]
pub struct BookingService {
    /// Shared SQLite connection pool, opened once at startup.
    pub db: Arc<SqlitePool>,
}

impl BookingService {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Insert a booking and return the id SQLite assigned to it.
    ///
    /// `created_at` comes from the column default.
    pub async fn create(&self, booking: &NewBooking) -> BookingResult<i64> {
        let result = sqlx::query(
            "INSERT INTO bookings (fullname, email, phone, checkin, checkout, roomtype, guests)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&booking.fullname)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(&booking.checkin)
        .bind(&booking.checkout)
        .bind(&booking.roomtype)
        .bind(booking.guests)
        .execute(&*self.db)
        .await?;

        let id = result.last_insert_rowid();
        info!(id, "created booking");
        Ok(id)
    }

    /// All bookings, newest first.
    ///
    /// `created_at` has one-second resolution, so rows created in the same
    /// second fall back to descending id.
    pub async fn list(&self) -> BookingResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(&format!(
            "{} ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&*self.db)
        .await?;

        debug!(count = rows.len(), "listed bookings");
        Ok(rows)
    }

    /// Fetch one booking by id.
    ///
    /// Returns NotFound if no row has that id.
    pub async fn get(&self, id: i64) -> BookingResult<Booking> {
        debug!(id, "fetching booking");
        sqlx::query_as::<_, Booking>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&*self.db)
            .await?
            .ok_or(BookingError::NotFound(id))
    }

    /// Overwrite every writable field of a booking. `id` and `created_at`
    /// are left alone.
    pub async fn update(&self, id: i64, booking: &NewBooking) -> BookingResult<()> {
        let result = sqlx::query(
            "UPDATE bookings
             SET fullname = ?, email = ?, phone = ?,
                 checkin = ?, checkout = ?, roomtype = ?, guests = ?
             WHERE id = ?",
        )
        .bind(&booking.fullname)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(&booking.checkin)
        .bind(&booking.checkout)
        .bind(&booking.roomtype)
        .bind(booking.guests)
        .bind(id)
        .execute(&*self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound(id));
        }

        info!(id, "updated booking");
        Ok(())
    }

    /// Hard-delete a booking.
    pub async fn delete(&self, id: i64) -> BookingResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&*self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound(id));
        }

        info!(id, "deleted booking");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use tempfile::TempDir;

    async fn service() -> (BookingService, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("bookings.db").display());
        let pool = db::connect(&url, 2).await.unwrap();
        db::ensure_schema(&pool).await.unwrap();
        (BookingService::new(Arc::new(pool)), dir)
    }

    fn booking(name: &str) -> NewBooking {
        NewBooking {
            fullname: name.into(),
            email: format!("{}@example.com", name),
            phone: "555".into(),
            checkin: "2024-01-01".into(),
            checkout: "2024-01-03".into(),
            roomtype: "suite".into(),
            guests: 2,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_submitted_fields() {
        let (svc, _dir) = service().await;
        let id = svc.create(&booking("jane")).await.unwrap();

        let stored = svc.get(id).await.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.fullname, "jane");
        assert_eq!(stored.email, "jane@example.com");
        assert_eq!(stored.checkin, "2024-01-01");
        assert_eq!(stored.checkout, "2024-01-03");
        assert_eq!(stored.guests, 2);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (svc, _dir) = service().await;
        let a = svc.create(&booking("a")).await.unwrap();
        let b = svc.create(&booking("b")).await.unwrap();
        let c = svc.create(&booking("c")).await.unwrap();

        let ids: Vec<i64> = svc.list().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![c, b, a]);
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let (svc, _dir) = service().await;
        let id = svc.create(&booking("jane")).await.unwrap();
        let before = svc.get(id).await.unwrap();

        let mut changed = booking("janet");
        changed.guests = 3;
        svc.update(id, &changed).await.unwrap();

        let after = svc.get(id).await.unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.fullname, "janet");
        assert_eq!(after.guests, 3);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let (svc, _dir) = service().await;

        assert!(matches!(svc.get(42).await, Err(BookingError::NotFound(42))));
        assert!(matches!(
            svc.update(42, &booking("x")).await,
            Err(BookingError::NotFound(42))
        ));
        assert!(matches!(svc.delete(42).await, Err(BookingError::NotFound(42))));
    }

    #[tokio::test]
    async fn numeric_looking_dates_read_back_as_text() {
        let (svc, _dir) = service().await;
        let mut odd = booking("jane");
        odd.checkin = "20240101".into();
        odd.checkout = "1.5".into();
        let id = svc.create(&odd).await.unwrap();

        let stored = svc.get(id).await.unwrap();
        assert_eq!(stored.checkin, "20240101");
        assert_eq!(stored.checkout, "1.5");
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let (svc, _dir) = service().await;
        svc.create(&booking("a")).await.unwrap();
        let b = svc.create(&booking("b")).await.unwrap();
        svc.delete(b).await.unwrap();

        let c = svc.create(&booking("c")).await.unwrap();
        assert!(c > b);
        assert!(matches!(svc.get(b).await, Err(BookingError::NotFound(_))));
    }
}
