//! # Lexicon Common
//!
//! Shared error types, path search, and logging setup for Lexicon.
//!
//! This crate provides the foundational pieces used by the other crates in
//! the Lexicon workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod path;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
