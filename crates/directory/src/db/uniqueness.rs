//! Global uniqueness pre-check for contact email and phone number.
//!
//! The scan deliberately covers the entire contact population, not just
//! the acting owner's - two users cannot hold the same email or number.
//! This check only exists to produce a field-named error before the
//! write; the unique indexes in the schema are the authoritative
//! enforcement, so the check-then-write gap cannot admit a duplicate.

use sqlx::SqlitePool;

use rolodex_core::{ContactId, Email, PhoneNumber};

use super::{ConflictField, RepositoryError};

/// Pre-checks email and contact-number availability before a write.
pub struct UniquenessGuard<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UniquenessGuard<'a> {
    /// Create a new uniqueness guard.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Check that `email` and `contact_number` are each unused by any
    /// contact other than `exclude`.
    ///
    /// `exclude` is the contact being updated, if any: a record keeping
    /// its own email or number must not collide with itself. Creates pass
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` naming the first colliding
    /// field (email is checked before contact number), or
    /// `RepositoryError::Database` if a query fails.
    pub async fn ensure_available(
        &self,
        email: &Email,
        contact_number: &PhoneNumber,
        exclude: Option<ContactId>,
    ) -> Result<(), RepositoryError> {
        // Sentinel -1 never matches a real row, so one query covers both
        // the create and update cases.
        let excluded = exclude.map_or(-1, |id| id.as_i64());

        let email_taken =
            sqlx::query_scalar::<_, i64>("SELECT id FROM contacts WHERE email = ? AND id <> ?")
                .bind(email.as_str())
                .bind(excluded)
                .fetch_optional(self.pool)
                .await?;

        if let Some(holder) = email_taken {
            tracing::warn!(email = %email, holder, "uniqueness conflict on email");
            return Err(RepositoryError::Conflict(ConflictField::Email));
        }

        let number_taken = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM contacts WHERE contact_number = ? AND id <> ?",
        )
        .bind(contact_number.as_str())
        .bind(excluded)
        .fetch_optional(self.pool)
        .await?;

        if let Some(holder) = number_taken {
            tracing::warn!(
                contact_number = %contact_number,
                holder,
                "uniqueness conflict on contact number"
            );
            return Err(RepositoryError::Conflict(ConflictField::ContactNumber));
        }

        Ok(())
    }
}
