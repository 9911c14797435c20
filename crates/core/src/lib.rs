//! Rolodex Core - Shared types library.
//!
//! This crate provides the validated domain types used across the Rolodex
//! workspace:
//! - `directory` - The contact record engine (persistence, search, uploads)
//! - `integration-tests` - End-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no
//! clocks. Every value that crosses into the engine is parsed into one of
//! these types first, so the store never sees an unvalidated field.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, phone numbers,
//!   names, and birth dates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
