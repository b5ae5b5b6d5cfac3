//! # Lexicon Config
//!
//! Serializable settings for the Lexicon translation manager.
//!
//! This crate provides the settings schema, its defaults, loading from TOML or
//! YAML files with environment overrides, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
