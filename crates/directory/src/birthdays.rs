//! Upcoming-birthday queries.
//!
//! A birthday "falls in the window" when its `(month, day)` pair sits
//! strictly after the window's start and at or before its end, compared
//! lexicographically - the year is ignored entirely.
//!
//! Known limitation, preserved deliberately: the comparison does not wrap
//! across the December→January boundary. A window opened in late December
//! that ends in January has an end pair numerically *smaller* than its
//! start pair, so January birthdays are silently missed. Fixing this
//! would change result sets for existing callers; see DESIGN.md.

use chrono::{Datelike, Duration, NaiveDate};

use rolodex_core::{BirthDate, UserId};

use crate::db::contacts::ContactRepository;
use crate::db::RepositoryError;
use crate::models::contact::Contact;

/// A month/day window birthdays are tested against.
#[derive(Debug, Clone, Copy)]
pub struct BirthdayWindow {
    current: NaiveDate,
    to: NaiveDate,
}

impl BirthdayWindow {
    /// Build a window from two dates supplied by the caller.
    ///
    /// The engine never reads the wall clock; "today" is an input.
    #[must_use]
    pub const fn new(current: NaiveDate, to: NaiveDate) -> Self {
        Self { current, to }
    }

    /// The conventional "next N days" window starting at `current`.
    #[must_use]
    pub fn days_ahead(current: NaiveDate, days: i64) -> Self {
        Self {
            current,
            to: current + Duration::days(days),
        }
    }

    /// Whether a birthday falls inside the window.
    ///
    /// Inclusion is `current < birthday <= to` on `(month, day)` pairs; a
    /// birthday on the window's start date is excluded, one on its end
    /// date included.
    #[must_use]
    pub fn contains(&self, birth_date: BirthDate) -> bool {
        let cur = (self.current.month(), self.current.day());
        let to = (self.to.month(), self.to.day());
        let bd = birth_date.month_day();

        cur < bd && bd <= to
    }
}

/// Contacts of `owner` whose birthday falls inside `window`.
///
/// Pagination is applied to the base contact list *before* the birthday
/// filter, matching the store's order of operations: `skip`/`limit` carve
/// out a slice of the owner's contacts, and only that slice is filtered.
/// A page can therefore come back shorter than `limit` even when later
/// contacts would have matched.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the underlying list query fails.
pub async fn upcoming_birthdays(
    contacts: &ContactRepository<'_>,
    owner: UserId,
    window: BirthdayWindow,
    skip: u32,
    limit: u32,
) -> Result<Vec<Contact>, RepositoryError> {
    let page = contacts.list(owner, skip, limit).await?;

    Ok(page
        .into_iter()
        .filter(|contact| window.contains(contact.birth_date))
        .collect())
}
