//! Core types for Rolodex.
//!
//! This module provides type-safe wrappers for the contact-directory domain.

pub mod birth_date;
pub mod email;
pub mod id;
pub mod name;
pub mod phone;

pub use birth_date::{BirthDate, BirthDateError};
pub use email::{Email, EmailError};
pub use id::*;
pub use name::{Name, NameError};
pub use phone::{PhoneNumber, PhoneError};
