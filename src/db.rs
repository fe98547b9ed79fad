//! SQLite connection setup and schema bootstrap.
//!
//! The pool is opened once at startup and shared for the lifetime of the
//! process. The `bookings` table is created if it does not exist yet.

use anyhow::{Context, Result};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{path::Path, str::FromStr};

const CREATE_BOOKINGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        fullname TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        checkin DATE NOT NULL,
        checkout DATE NOT NULL,
        roomtype TEXT NOT NULL,
        guests INTEGER NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Open a pool against `database_url`, creating the database file (and its
/// parent directory) when missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    tracing::debug!("Connecting using raw URL => {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid database URL `{}`", database_url))?
        .create_if_missing(true);

    let db_path = options.get_filename().to_path_buf();
    tracing::debug!("Interpreted SQLite path => {}", db_path.display());

    // Create parent directory if needed
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
            tracing::info!("Created missing directory {:?}", parent);
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("connecting to {}", database_url))?;

    tracing::info!("Connected to SQLite at {}", display_path(&db_path));
    Ok(pool)
}

/// Create the `bookings` table if it is not there yet. Safe to run on every
/// start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_BOOKINGS_TABLE)
        .execute(pool)
        .await
        .context("creating bookings table")?;

    tracing::info!("bookings table ready");
    Ok(())
}

fn display_path(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
