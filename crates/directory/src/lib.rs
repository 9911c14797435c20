//! Rolodex Directory - the contact record engine.
//!
//! This crate owns everything with actual policy in it: validated contact
//! records scoped to their owning user, the global email/phone uniqueness
//! rules, the rolling birthday-window query, and the bounded streaming
//! upload guard. It deliberately has no HTTP surface; a transport layer
//! maps the outcomes in [`error`] to its own status vocabulary.
//!
//! The engine never constructs its own database pool, acting identity, or
//! wall clock - callers inject all three.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod birthdays;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod upload;
