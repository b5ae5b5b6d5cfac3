//! Settings schema definitions using serde.

use serde::{Deserialize, Serialize};

/// Settings for a translation manager.
///
/// Every field has a default, so a settings file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the translation files. Empty means no source is configured.
    pub path: String,
    /// Language used when a lookup does not name one.
    pub language: String,
    /// Placeholder delimiters.
    pub delimiters: Delimiters,
}

/// Left and right markers around a placeholder name, e.g. `{#name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    /// Opening marker.
    pub left: String,
    /// Closing marker.
    pub right: String,
}

impl Delimiters {
    /// Creates a delimiter pair.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}
