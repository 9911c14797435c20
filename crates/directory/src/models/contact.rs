//! Contact domain types.
//!
//! These types represent validated domain objects separate from database
//! row types. `ContactInput` is the raw shape a boundary layer
//! deserializes; `ContactDraft` is the validated bundle the store accepts.
//! Validation happens entirely here - the repositories never see an
//! unchecked field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rolodex_core::{
    BirthDate, BirthDateError, ContactId, Email, EmailError, Name, NameError, PhoneError,
    PhoneNumber, UserId,
};

/// A directory entry (domain type).
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    /// Unique contact ID, assigned by the store.
    pub id: ContactId,
    /// First name, at most 15 characters.
    pub first_name: Name,
    /// Last name, at most 15 characters.
    pub last_name: Name,
    /// Email address, unique across the whole directory.
    pub email: Email,
    /// Phone number, unique across the whole directory.
    pub contact_number: PhoneNumber,
    /// Birth date; never in the future at the time it was accepted.
    pub birth_date: BirthDate,
    /// Optional free-form notes.
    pub additional_information: Option<String>,
    /// The user this contact belongs to.
    pub owner: UserId,
}

/// Raw contact fields as a boundary layer receives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub birth_date: NaiveDate,
    pub additional_information: Option<String>,
}

/// A validated contact field bundle, ready for the store.
///
/// Carries every mutable field of a [`Contact`]; id and owner are supplied
/// separately by the store and the caller.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub first_name: Name,
    pub last_name: Name,
    pub email: Email,
    pub contact_number: PhoneNumber,
    pub birth_date: BirthDate,
    pub additional_information: Option<String>,
}

/// Field-level validation failures raised while parsing a [`ContactInput`].
///
/// These are raised before any store interaction and name the offending
/// field.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// First name failed validation.
    #[error("invalid first name: {0}")]
    FirstName(#[source] NameError),

    /// Last name failed validation.
    #[error("invalid last name: {0}")]
    LastName(#[source] NameError),

    /// Email failed the syntactic check.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    /// Phone number does not match an accepted shape.
    #[error(transparent)]
    ContactNumber(#[from] PhoneError),

    /// Birth date lies in the future.
    #[error(transparent)]
    BirthDate(#[from] BirthDateError),
}

impl ContactDraft {
    /// Validate raw input into a draft.
    ///
    /// `today` is the validation-time current date; callers pass the wall
    /// clock, tests pass a fixed date.
    ///
    /// # Errors
    ///
    /// Returns the first failing field as a [`ValidationError`].
    pub fn parse(input: &ContactInput, today: NaiveDate) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: Name::parse(&input.first_name).map_err(ValidationError::FirstName)?,
            last_name: Name::parse(&input.last_name).map_err(ValidationError::LastName)?,
            email: Email::parse(&input.email)?,
            contact_number: PhoneNumber::parse(&input.contact_number)?,
            birth_date: BirthDate::new(input.birth_date, today)?,
            additional_information: input.additional_information.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input() -> ContactInput {
        ContactInput {
            first_name: "Olha".to_string(),
            last_name: "Petrenko".to_string(),
            email: "olha@example.com".to_string(),
            contact_number: "123-456-7890".to_string(),
            birth_date: date(1990, 5, 17),
            additional_information: Some("met at the conference".to_string()),
        }
    }

    #[test]
    fn test_parse_valid_input() {
        let draft = ContactDraft::parse(&input(), date(2024, 6, 1)).unwrap();
        assert_eq!(draft.first_name.as_str(), "Olha");
        assert_eq!(draft.email.as_str(), "olha@example.com");
        assert_eq!(draft.birth_date.as_date(), date(1990, 5, 17));
    }

    #[test]
    fn test_rejects_long_first_name() {
        let mut raw = input();
        raw.first_name = "a".repeat(16);
        let err = ContactDraft::parse(&raw, date(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::FirstName(_)));
    }

    #[test]
    fn test_rejects_bad_phone() {
        let mut raw = input();
        raw.contact_number = "12345".to_string();
        let err = ContactDraft::parse(&raw, date(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::ContactNumber(_)));
    }

    #[test]
    fn test_rejects_future_birth_date() {
        let mut raw = input();
        raw.birth_date = date(2024, 6, 2);
        let err = ContactDraft::parse(&raw, date(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::BirthDate(_)));
    }

    #[test]
    fn test_birth_date_today_accepted() {
        let mut raw = input();
        raw.birth_date = date(2024, 6, 1);
        assert!(ContactDraft::parse(&raw, date(2024, 6, 1)).is_ok());
    }

    #[test]
    fn test_rejects_bad_email() {
        let mut raw = input();
        raw.email = "not-an-email".to_string();
        let err = ContactDraft::parse(&raw, date(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::Email(_)));
    }
}
