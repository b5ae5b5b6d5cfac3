//! Decoding of translation files into flat key/value maps.

use crate::LanguageMap;
use lexicon_common::{LexiconError, Result};
use serde_json::{Map, Value};

/// Turns the raw bytes of one translation file into a flat mapping.
///
/// `name` is the file's path within its source and may be used to pick a
/// format. Returning an error makes the loader skip the file.
pub trait ContentParser: Send + Sync {
    /// Parses `content` read from `name`.
    fn parse(&self, name: &str, content: &[u8]) -> Result<LanguageMap>;
}

/// Parses JSON, YAML and TOML documents whose top level is a mapping.
///
/// The format is chosen by file extension. Files with any other extension
/// are tried as JSON, then TOML, then YAML. String values are kept as-is,
/// `null` becomes an empty string, and any other value is rendered as
/// compact JSON (`1`, `true`, `["a","b"]`).
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    const SNIFF_ORDER: [Self; 3] = [Self::Json, Self::Toml, Self::Yaml];

    fn from_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    fn decode(self, text: &str) -> std::result::Result<Map<String, Value>, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

impl ContentParser for StructuredParser {
    fn parse(&self, name: &str, content: &[u8]) -> Result<LanguageMap> {
        let text = std::str::from_utf8(content).map_err(|e| LexiconError::parse(name, e))?;
        let text = text.trim_start_matches('\u{feff}');
        if text.trim().is_empty() {
            return Ok(LanguageMap::new());
        }

        let map = match Format::from_name(name) {
            Some(format) => format.decode(text).map_err(|e| LexiconError::parse(name, e))?,
            None => Format::SNIFF_ORDER
                .iter()
                .find_map(|format| format.decode(text).ok())
                .ok_or_else(|| LexiconError::parse(name, "unrecognized content format"))?,
        };

        Ok(map
            .into_iter()
            .map(|(key, value)| (key, stringify(value)))
            .collect())
    }
}

fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
