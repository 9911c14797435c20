//! Domain types for the contact directory.

pub mod contact;
pub mod user;

pub use contact::{Contact, ContactDraft, ContactInput, ValidationError};
pub use user::User;
