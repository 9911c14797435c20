//! Contact phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regex for the accepted phone number shapes.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+\d{1,2}\s)?\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}$").expect("Invalid regex")
});

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input does not match any accepted phone format.
    #[error("invalid contact number: {0:?}")]
    InvalidFormat(String),
}

/// A contact phone number.
///
/// Accepted shapes, optionally prefixed with a 1-2 digit country code:
///
/// - `123-456-7890`
/// - `(123) 456-7890`
/// - `123 456 7890`
/// - `123.456.7890`
/// - `+12 (345) 678-9012`
///
/// Any other shape is rejected at construction, so the store only ever
/// holds numbers in one of these forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::InvalidFormat`] if the input does not match
    /// one of the accepted shapes.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if !PHONE_RE.is_match(s) {
            return Err(PhoneError::InvalidFormat(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
