//! Contact repository for database operations.
//!
//! Every read and write here is scoped to the acting owner; the only
//! cross-owner access in the engine is the uniqueness scan in
//! [`super::uniqueness`]. Rows decode into plain row structs and convert
//! to validated domain types, so corrupt stored data surfaces as
//! `DataCorruption` instead of leaking out unvalidated.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use rolodex_core::{BirthDate, ContactId, Email, Name, PhoneNumber, UserId};

use super::uniqueness::UniquenessGuard;
use super::{RepositoryError, map_contact_unique_violation};
use crate::models::contact::{Contact, ContactDraft};

/// Searchable contact fields for exact-match lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    FirstName,
    LastName,
    Email,
}

/// Database row shape for a contact.
#[derive(sqlx::FromRow)]
struct ContactRow {
    id: ContactId,
    first_name: String,
    last_name: String,
    email: String,
    contact_number: String,
    birth_date: NaiveDate,
    additional_information: Option<String>,
    user_id: UserId,
}

impl ContactRow {
    /// Convert a row into the validated domain type.
    fn into_contact(self) -> Result<Contact, RepositoryError> {
        let first_name = Name::parse(&self.first_name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid first name in database: {e}"))
        })?;
        let last_name = Name::parse(&self.last_name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid last name in database: {e}"))
        })?;
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let contact_number = PhoneNumber::parse(&self.contact_number).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid contact number in database: {e}"))
        })?;

        Ok(Contact {
            id: self.id,
            first_name,
            last_name,
            email,
            contact_number,
            // Validated at write time; not re-checked against today's date.
            birth_date: BirthDate::from_stored(self.birth_date),
            additional_information: self.additional_information,
            owner: self.user_id,
        })
    }
}

/// Repository for contact database operations.
pub struct ContactRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List `owner`'s contacts in insertion order.
    ///
    /// `skip` and `limit` are applied as plain OFFSET/LIMIT; out-of-range
    /// values yield an empty or truncated result, never an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        owner: UserId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Contact>, RepositoryError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, first_name, last_name, email, contact_number, birth_date, \
             additional_information, user_id \
             FROM contacts WHERE user_id = ? ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(owner)
        .bind(i64::from(limit))
        .bind(i64::from(skip))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ContactRow::into_contact).collect()
    }

    /// Get a contact by id, only if `owner` owns it.
    ///
    /// Absence (including someone else's contact) is a silent `None` so
    /// the boundary layer can map it to its own not-found response.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored fields are invalid.
    pub async fn get(
        &self,
        id: ContactId,
        owner: UserId,
    ) -> Result<Option<Contact>, RepositoryError> {
        let row = sqlx::query_as::<_, ContactRow>(
            "SELECT id, first_name, last_name, email, contact_number, birth_date, \
             additional_information, user_id \
             FROM contacts WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(self.pool)
        .await?;

        row.map(ContactRow::into_contact).transpose()
    }

    /// Create a contact owned by `owner`.
    ///
    /// Runs the uniqueness pre-check first for a field-named error; the
    /// unique indexes remain the final authority, so a concurrent
    /// duplicate still comes back as `Conflict` rather than persisting.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email or contact number
    /// is already taken, `RepositoryError::Database` for other failures.
    pub async fn create(
        &self,
        draft: &ContactDraft,
        owner: UserId,
    ) -> Result<Contact, RepositoryError> {
        UniquenessGuard::new(self.pool)
            .ensure_available(&draft.email, &draft.contact_number, None)
            .await?;

        let row = sqlx::query_as::<_, ContactRow>(
            "INSERT INTO contacts \
             (first_name, last_name, email, contact_number, birth_date, \
              additional_information, user_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, first_name, last_name, email, contact_number, birth_date, \
             additional_information, user_id",
        )
        .bind(draft.first_name.as_str())
        .bind(draft.last_name.as_str())
        .bind(draft.email.as_str())
        .bind(draft.contact_number.as_str())
        .bind(draft.birth_date.as_date())
        .bind(draft.additional_information.as_deref())
        .bind(owner)
        .fetch_one(self.pool)
        .await
        .map_err(map_contact_unique_violation)?;

        let contact = row.into_contact()?;
        tracing::debug!(contact_id = %contact.id, owner = %owner, "contact created");
        Ok(contact)
    }

    /// Overwrite all mutable fields of an owned contact.
    ///
    /// The write is a single UPDATE, so either every new value takes
    /// effect or none does. Returns `None` when no contact with this id is
    /// owned by `owner`. Id and ownership never change.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the new email or contact
    /// number belongs to a different contact, `RepositoryError::Database`
    /// for other failures.
    pub async fn update(
        &self,
        id: ContactId,
        draft: &ContactDraft,
        owner: UserId,
    ) -> Result<Option<Contact>, RepositoryError> {
        // The record being updated is excluded from the scan: keeping your
        // own email or number is not a collision.
        UniquenessGuard::new(self.pool)
            .ensure_available(&draft.email, &draft.contact_number, Some(id))
            .await?;

        let row = sqlx::query_as::<_, ContactRow>(
            "UPDATE contacts \
             SET first_name = ?, last_name = ?, email = ?, contact_number = ?, \
                 birth_date = ?, additional_information = ? \
             WHERE id = ? AND user_id = ? \
             RETURNING id, first_name, last_name, email, contact_number, birth_date, \
             additional_information, user_id",
        )
        .bind(draft.first_name.as_str())
        .bind(draft.last_name.as_str())
        .bind(draft.email.as_str())
        .bind(draft.contact_number.as_str())
        .bind(draft.birth_date.as_date())
        .bind(draft.additional_information.as_deref())
        .bind(id)
        .bind(owner)
        .fetch_optional(self.pool)
        .await
        .map_err(map_contact_unique_violation)?;

        match row {
            Some(r) => {
                let contact = r.into_contact()?;
                tracing::debug!(contact_id = %contact.id, owner = %owner, "contact updated");
                Ok(Some(contact))
            }
            None => Ok(None),
        }
    }

    /// Remove and return an owned contact.
    ///
    /// Deletion is immediate and permanent; there is no soft delete.
    /// Returns `None` when no contact with this id is owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(
        &self,
        id: ContactId,
        owner: UserId,
    ) -> Result<Option<Contact>, RepositoryError> {
        let row = sqlx::query_as::<_, ContactRow>(
            "DELETE FROM contacts WHERE id = ? AND user_id = ? \
             RETURNING id, first_name, last_name, email, contact_number, birth_date, \
             additional_information, user_id",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(r) => {
                let contact = r.into_contact()?;
                tracing::debug!(contact_id = %contact.id, owner = %owner, "contact deleted");
                Ok(Some(contact))
            }
            None => Ok(None),
        }
    }

    /// Exact-match search on one field, scoped to `owner`.
    ///
    /// Unlike [`get`](Self::get), an empty result here is an explicit
    /// [`RepositoryError::SearchEmpty`] - the documented asymmetry between
    /// single-item misses and search misses.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::SearchEmpty` if nothing matched,
    /// `RepositoryError::Database` if the query fails.
    pub async fn find_by(
        &self,
        field: SearchField,
        value: &str,
        owner: UserId,
    ) -> Result<Vec<Contact>, RepositoryError> {
        let sql = match field {
            SearchField::FirstName => {
                "SELECT id, first_name, last_name, email, contact_number, birth_date, \
                 additional_information, user_id \
                 FROM contacts WHERE first_name = ? AND user_id = ? ORDER BY id"
            }
            SearchField::LastName => {
                "SELECT id, first_name, last_name, email, contact_number, birth_date, \
                 additional_information, user_id \
                 FROM contacts WHERE last_name = ? AND user_id = ? ORDER BY id"
            }
            SearchField::Email => {
                "SELECT id, first_name, last_name, email, contact_number, birth_date, \
                 additional_information, user_id \
                 FROM contacts WHERE email = ? AND user_id = ? ORDER BY id"
            }
        };

        let rows = sqlx::query_as::<_, ContactRow>(sql)
            .bind(value)
            .bind(owner)
            .fetch_all(self.pool)
            .await?;

        if rows.is_empty() {
            return Err(RepositoryError::SearchEmpty);
        }

        rows.into_iter().map(ContactRow::into_contact).collect()
    }
}
