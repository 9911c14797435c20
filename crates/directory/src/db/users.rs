//! User repository for database operations.
//!
//! Owner identities are created by the external auth layer and never
//! deleted by this engine; everything here except `set_avatar` is
//! read-only. The credential hash is write-only from the engine's point
//! of view - it is stored at creation and never loaded into the domain
//! type.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use rolodex_core::{Email, UserId};

use super::{ConflictField, RepositoryError};
use crate::models::user::User;

/// Database row shape for a user.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: UserId,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
    avatar: Option<String>,
}

impl UserRow {
    fn into_user(self) -> Result<User, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(User {
            id: self.id,
            username: self.username,
            email,
            created_at: self.created_at,
            avatar: self.avatar,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user.
    ///
    /// `password_hash` is opaque to the engine; hashing happens in the
    /// auth layer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username or email
    /// already exists, `RepositoryError::Database` for other failures.
    pub async fn create(
        &self,
        username: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, email, password_hash, created_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING id, username, email, created_at, avatar",
        )
        .bind(username)
        .bind(email.as_str())
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                if db_err.message().contains("users.username") {
                    return RepositoryError::Conflict(ConflictField::Username);
                }
                return RepositoryError::Conflict(ConflictField::Email);
            }
            RepositoryError::Database(e)
        })?;

        let user = row.into_user()?;
        tracing::debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the email in the
    /// database is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, created_at, avatar FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the email in the
    /// database is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, created_at, avatar FROM users WHERE email = ?",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Update a user's avatar reference, the only mutable user field.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_avatar(&self, id: UserId, avatar: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE users SET avatar = ? WHERE id = ?")
            .bind(avatar)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
