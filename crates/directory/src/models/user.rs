//! User domain types.
//!
//! A user owns contacts; every store operation is scoped to one. Users are
//! created by the (external) auth subsystem and never deleted here. The
//! credential hash stays in the database - it is not part of the domain
//! type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use rolodex_core::{Email, UserId};

/// An owner identity (domain type).
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique username.
    pub username: String,
    /// User's email address.
    pub email: Email,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// Avatar reference, the only field mutable after creation.
    pub avatar: Option<String>,
}
