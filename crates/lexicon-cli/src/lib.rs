//! # Lexicon CLI
//!
//! Command line front end for the Lexicon translation manager. Translates
//! its arguments, or stdin line by line with `--watch` so hot reload of the
//! translation directory can be observed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
