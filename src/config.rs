use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Vaxcard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the SQLite database file.
pub const DATABASE_ENV: &str = "VAXCARD_DATABASE";
/// Environment variable overriding the HTTP listen address.
pub const BIND_ENV: &str = "VAXCARD_BIND";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Get the application data directory (~/Vaxcard/ on all platforms).
///
/// Falls back to the working directory when no home directory is known
/// (containers running as a system user).
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default location of the record database.
pub fn default_database_path() -> PathBuf {
    app_data_dir().join("vaxcard.db")
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,vaxcard_lib=debug"
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid listen address in {var}: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Runtime configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup(DATABASE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let bind_raw = lookup(BIND_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ENV,
                value: bind_raw.clone(),
            })?;

        Ok(Self {
            database_path,
            bind_addr,
        })
    }
}
