use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Hotel booking management API")]
pub struct Args {
    /// Host to bind to (overrides BOOKINGS_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides BOOKINGS_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// SQLite database URL (overrides BOOKINGS_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Size of the SQLite connection pool (overrides BOOKINGS_DB_MAX_CONNECTIONS)
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Ensure the bookings table exists and exit
    #[arg(long)]
    pub init_db: bool,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://./bookings.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and the init-db flag.
    pub fn from_env_and_args() -> Result<(Self, bool)> {
        Self::resolve(Args::parse(), |name| env::var(name))
    }

    /// Merge already-parsed CLI args over values produced by `lookup`.
    ///
    /// CLI flags win, then environment, then built-in defaults.
    pub fn resolve<F>(args: Args, lookup: F) -> Result<(Self, bool)>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        // --- Environment fallback ---
        let env_host = lookup("BOOKINGS_HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
        let env_port = parse_var(&lookup, "BOOKINGS_PORT", DEFAULT_PORT)?;
        let env_db =
            lookup("BOOKINGS_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let env_max = parse_var(
            &lookup,
            "BOOKINGS_DB_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database_url: args.database_url.unwrap_or(env_db),
            max_connections: args.max_connections.unwrap_or(env_max).max(1),
        };

        Ok((cfg, args.init_db))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Result<String, env::VarError>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("parsing {} value `{}`", name, value)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {}", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Result<String, env::VarError> + use<> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_without_env_or_flags() {
        let (cfg, init_db) = AppConfig::resolve(Args::default(), lookup_from(&[])).unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.database_url, "sqlite://./bookings.db");
        assert_eq!(cfg.max_connections, 5);
        assert!(!init_db);
        assert_eq!(cfg.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn env_overrides_defaults() {
        let lookup = lookup_from(&[
            ("BOOKINGS_HOST", "127.0.0.1"),
            ("BOOKINGS_PORT", "8080"),
            ("BOOKINGS_DATABASE_URL", "sqlite://./data/app.db"),
            ("BOOKINGS_DB_MAX_CONNECTIONS", "2"),
        ]);
        let (cfg, _) = AppConfig::resolve(Args::default(), lookup).unwrap();

        assert_eq!(cfg.addr(), "127.0.0.1:8080");
        assert_eq!(cfg.database_url, "sqlite://./data/app.db");
        assert_eq!(cfg.max_connections, 2);
    }

    #[test]
    fn flags_override_env() {
        let args = Args::try_parse_from([
            "hotel-bookings",
            "--port",
            "9000",
            "--database-url",
            "sqlite::memory:",
            "--init-db",
        ])
        .unwrap();
        let lookup = lookup_from(&[("BOOKINGS_PORT", "8080"), ("BOOKINGS_HOST", "localhost")]);
        let (cfg, init_db) = AppConfig::resolve(args, lookup).unwrap();

        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert!(init_db);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let lookup = lookup_from(&[("BOOKINGS_PORT", "not-a-port")]);
        let err = AppConfig::resolve(Args::default(), lookup).unwrap_err();

        assert!(err.to_string().contains("BOOKINGS_PORT"));
    }

    #[test]
    fn zero_max_connections_is_clamped() {
        let lookup = lookup_from(&[("BOOKINGS_DB_MAX_CONNECTIONS", "0")]);
        let (cfg, _) = AppConfig::resolve(Args::default(), lookup).unwrap();

        assert_eq!(cfg.max_connections, 1);
    }
}
