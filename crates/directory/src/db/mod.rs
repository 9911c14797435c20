//! Database operations for the contact directory (`SQLite`).
//!
//! ## Tables
//!
//! - `users` - Owner identities (created by the external auth layer)
//! - `contacts` - Directory entries, owner-scoped for every read and write
//!
//! Uniqueness of `contacts.email` and `contacts.contact_number` is global
//! across owners and enforced by unique indexes; the application-level
//! pre-check in [`uniqueness`] only produces a friendlier, field-named
//! error before the write. A racer that slips past the pre-check loses at
//! the INSERT/UPDATE and gets the same [`RepositoryError::Conflict`].
//!
//! # Migrations
//!
//! Migrations are stored in `crates/directory/migrations/` and embedded in
//! the binary via [`MIGRATOR`]; run them with `MIGRATOR.run(&pool)`.

use core::fmt;
use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod contacts;
pub mod uniqueness;
pub mod users;

pub use contacts::{ContactRepository, SearchField};
pub use uniqueness::UniquenessGuard;
pub use users::UserRepository;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// The contact field a uniqueness conflict was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    /// `contacts.email` or `users.email` collided.
    Email,
    /// `contacts.contact_number` collided.
    ContactNumber,
    /// `users.username` collided.
    Username,
}

impl fmt::Display for ConflictField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Email => "email",
            Self::ContactNumber => "contact number",
            Self::Username => "username",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    ///
    /// Single-item lookups signal absence silently (`Ok(None)`); this
    /// variant is for operations that have nothing to return, such as
    /// `set_avatar` on a missing user.
    #[error("not found")]
    NotFound,

    /// A multi-result search matched nothing.
    ///
    /// Distinct from the silent `None` of single-item lookups: search
    /// misses are an explicit failure the boundary layer must surface.
    #[error("no contacts matched the search")]
    SearchEmpty,

    /// Uniqueness violation on the named field.
    #[error("a record with this {0} already exists")]
    Conflict(ConflictField),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Map a unique-index violation on the `contacts` table to a field-named
/// [`RepositoryError::Conflict`]; anything else passes through as a
/// database error.
pub(crate) fn map_contact_unique_violation(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        let message = db_err.message();
        if message.contains("contacts.email") {
            return RepositoryError::Conflict(ConflictField::Email);
        }
        if message.contains("contacts.contact_number") {
            return RepositoryError::Conflict(ConflictField::ContactNumber);
        }
    }
    RepositoryError::Database(e)
}
