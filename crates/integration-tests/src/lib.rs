//! Integration test support for Rolodex.
//!
//! Each [`TestContext`] owns a fresh in-memory `SQLite` database with the
//! full schema applied and two seeded owner identities, so every test
//! starts from the same known state and tests never share mutable global
//! uniqueness state with each other.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rolodex-integration-tests
//! ```

// Test support crate; unwraps abort the test run, which is what we want.
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::Once;

use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use rolodex_core::Email;
use rolodex_directory::db::{ContactRepository, MIGRATOR, UserRepository};
use rolodex_directory::models::contact::{ContactDraft, ContactInput};
use rolodex_directory::models::user::User;

static INIT_TRACING: Once = Once::new();

/// The fixed "today" used by all test validation and windows.
#[must_use]
pub fn today() -> NaiveDate {
    date(2024, 6, 1)
}

/// Shorthand date constructor.
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A fresh database plus two seeded owners.
pub struct TestContext {
    pub pool: SqlitePool,
    pub owner: User,
    pub other: User,
}

impl TestContext {
    /// Create an in-memory database, apply migrations, seed two users.
    pub async fn new() -> Self {
        INIT_TRACING.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();
        });

        // A single connection keeps every query on the same in-memory
        // database; a second connection would see an empty one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        MIGRATOR.run(&pool).await.unwrap();

        let users = UserRepository::new(&pool);
        let owner = users
            .create("olha", &Email::parse("olha@example.com").unwrap(), "hash-a")
            .await
            .unwrap();
        let other = users
            .create("taras", &Email::parse("taras@example.com").unwrap(), "hash-b")
            .await
            .unwrap();

        Self { pool, owner, other }
    }

    /// Contact repository over this context's pool.
    #[must_use]
    pub fn contacts(&self) -> ContactRepository<'_> {
        ContactRepository::new(&self.pool)
    }
}

/// Raw input for the nth test contact, unique in email and number.
#[must_use]
pub fn nth_input(n: u32, birth_date: NaiveDate) -> ContactInput {
    ContactInput {
        first_name: format!("First{n}"),
        last_name: format!("Last{n}"),
        email: format!("contact{n}@example.com"),
        contact_number: format!("555-{n:03}-{n:04}"),
        birth_date,
        additional_information: None,
    }
}

/// Validated draft for the nth test contact.
#[must_use]
pub fn nth_draft(n: u32, birth_date: NaiveDate) -> ContactDraft {
    ContactDraft::parse(&nth_input(n, birth_date), today()).unwrap()
}
