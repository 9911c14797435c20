//! Directory configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DIRECTORY_DATABASE_URL` - `SQLite` connection string (falls back to
//!   the generic `DATABASE_URL`)
//!
//! ## Optional
//! - `DIRECTORY_UPLOAD_DIR` - Directory for stored uploads (default: `uploads`)
//! - `DIRECTORY_MAX_UPLOAD_BYTES` - Upload size ceiling (default: 1000000)
//! - `DIRECTORY_BIRTHDAY_WINDOW_DAYS` - Days ahead for the default
//!   birthday window (default: 7)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use crate::upload::DEFAULT_MAX_UPLOAD_BYTES;

/// Default number of days ahead covered by the birthday window.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Directory engine configuration.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// `SQLite` database connection URL (may embed credentials)
    pub database_url: SecretString,
    /// Directory uploaded files are stored under
    pub upload_dir: PathBuf,
    /// Hard byte ceiling for a single upload
    pub max_upload_bytes: u64,
    /// Days ahead the default birthday window covers
    pub birthday_window_days: i64,
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the database URL is missing or a numeric
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::load(|key| std::env::var(key).ok())
    }

    /// Load configuration through an injectable variable lookup.
    ///
    /// Tests supply a map-backed lookup instead of mutating process-global
    /// environment state.
    fn load(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get_database_url(&get, "DIRECTORY_DATABASE_URL")?;
        let upload_dir =
            PathBuf::from(get_or_default(&get, "DIRECTORY_UPLOAD_DIR", "uploads"));
        let max_upload_bytes = get_parsed(
            &get,
            "DIRECTORY_MAX_UPLOAD_BYTES",
            DEFAULT_MAX_UPLOAD_BYTES,
        )?;
        let birthday_window_days = get_parsed(
            &get,
            "DIRECTORY_BIRTHDAY_WINDOW_DAYS",
            DEFAULT_BIRTHDAY_WINDOW_DAYS,
        )?;

        Ok(Self {
            database_url,
            upload_dir,
            max_upload_bytes,
            birthday_window_days,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the database URL with fallback to the generic `DATABASE_URL`.
fn get_database_url(
    get: &impl Fn(&str) -> Option<String>,
    primary_key: &str,
) -> Result<SecretString, ConfigError> {
    if let Some(value) = get(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Some(value) = get("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_or_default(get: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get(key).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable parsed into a numeric type, with a default.
fn get_parsed<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let env = vars(&[("DIRECTORY_DATABASE_URL", "sqlite://rolodex.db")]);
        let config = DirectoryConfig::load(|key| env.get(key).cloned()).unwrap();

        assert_eq!(config.database_url.expose_secret(), "sqlite://rolodex.db");
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.max_upload_bytes, 1_000_000);
        assert_eq!(config.birthday_window_days, 7);
    }

    #[test]
    fn test_overrides() {
        let env = vars(&[
            ("DIRECTORY_DATABASE_URL", "sqlite://rolodex.db"),
            ("DIRECTORY_UPLOAD_DIR", "/var/lib/rolodex/uploads"),
            ("DIRECTORY_MAX_UPLOAD_BYTES", "2000000"),
            ("DIRECTORY_BIRTHDAY_WINDOW_DAYS", "14"),
        ]);
        let config = DirectoryConfig::load(|key| env.get(key).cloned()).unwrap();

        assert_eq!(config.upload_dir, PathBuf::from("/var/lib/rolodex/uploads"));
        assert_eq!(config.max_upload_bytes, 2_000_000);
        assert_eq!(config.birthday_window_days, 14);
    }

    #[test]
    fn test_generic_database_url_fallback() {
        let env = vars(&[("DATABASE_URL", "sqlite::memory:")]);
        let config = DirectoryConfig::load(|key| env.get(key).cloned()).unwrap();
        assert_eq!(config.database_url.expose_secret(), "sqlite::memory:");
    }

    #[test]
    fn test_missing_database_url() {
        let env = vars(&[]);
        let err = DirectoryConfig::load(|key| env.get(key).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "DIRECTORY_DATABASE_URL"));
    }

    #[test]
    fn test_invalid_numeric_variable() {
        let env = vars(&[
            ("DIRECTORY_DATABASE_URL", "sqlite://rolodex.db"),
            ("DIRECTORY_MAX_UPLOAD_BYTES", "a-lot"),
        ]);
        let err = DirectoryConfig::load(|key| env.get(key).cloned()).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "DIRECTORY_MAX_UPLOAD_BYTES")
        );
    }
}
