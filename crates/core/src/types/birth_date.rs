//! Birth date type.

use core::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`BirthDate`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum BirthDateError {
    /// The date lies in the future relative to the supplied "today".
    #[error("invalid birth date: {value} is in the future")]
    InFuture {
        /// The rejected date.
        value: NaiveDate,
    },
}

/// A contact's birth date.
///
/// A birth date may be at most "today"; what "today" is gets passed in by
/// the caller so validation never reads the wall clock and stays testable.
/// Birthday-window queries only look at the `(month, day)` pair - the year
/// is kept for display but never compared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Validate a birth date against the supplied current date.
    ///
    /// # Errors
    ///
    /// Returns [`BirthDateError::InFuture`] if `value` is strictly after
    /// `today`. `value == today` is accepted.
    pub fn new(value: NaiveDate, today: NaiveDate) -> Result<Self, BirthDateError> {
        if value > today {
            return Err(BirthDateError::InFuture { value });
        }
        Ok(Self(value))
    }

    /// Wrap a date loaded from storage without re-validating.
    ///
    /// Stored values were validated on the way in; a date that was valid
    /// at write time may be "today" long ago and must not be rejected on
    /// read.
    #[must_use]
    pub const fn from_stored(value: NaiveDate) -> Self {
        Self(value)
    }

    /// Returns the underlying date.
    #[must_use]
    pub const fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the `(month, day)` pair used by birthday-window comparisons.
    #[must_use]
    pub fn month_day(&self) -> (u32, u32) {
        (self.0.month(), self.0.day())
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
