//! Settings loading from files and the environment.

use crate::schema::Settings;
use lexicon_common::{LexiconError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding [`Settings::path`].
pub const ENV_PATH: &str = "LEXICON_PATH";
/// Environment variable overriding [`Settings::language`].
pub const ENV_LANGUAGE: &str = "LEXICON_LANGUAGE";
/// Environment variable overriding the left delimiter.
pub const ENV_DELIMITER_LEFT: &str = "LEXICON_DELIMITER_LEFT";
/// Environment variable overriding the right delimiter.
pub const ENV_DELIMITER_RIGHT: &str = "LEXICON_DELIMITER_RIGHT";

/// On-disk settings formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// TOML document.
    Toml,
    /// YAML document.
    Yaml,
}

impl SettingsFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Settings loader.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    path: PathBuf,
}

impl SettingsLoader {
    /// Creates a new settings loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings from the file, applies environment overrides, and
    /// validates the result.
    pub fn load(&self) -> Result<Settings> {
        let format = SettingsFormat::from_path(&self.path).ok_or_else(|| {
            LexiconError::config(format!(
                "unsupported settings file extension: {}",
                self.path.display()
            ))
        })?;

        let content = fs::read_to_string(&self.path)?;
        let mut settings = parse_settings(&content, format)?;
        apply_env_overrides(&mut settings);
        settings.validate()?;

        info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }
}

/// Parses a settings document.
pub fn parse_settings(content: &str, format: SettingsFormat) -> Result<Settings> {
    match format {
        SettingsFormat::Toml => {
            toml::from_str(content).map_err(|e| LexiconError::config(e.to_string()))
        }
        SettingsFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| LexiconError::config(e.to_string()))
        }
    }
}

/// Applies `LEXICON_*` environment variables on top of `settings`.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides(settings, |key| std::env::var(key).ok());
}

/// Applies overrides from an arbitrary key lookup. Empty values are ignored.
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(path) = lookup(ENV_PATH) {
        debug!("{} overrides path: {}", ENV_PATH, path);
        settings.path = path;
    }
    if let Some(language) = lookup(ENV_LANGUAGE) {
        debug!("{} overrides language: {}", ENV_LANGUAGE, language);
        settings.language = language;
    }
    if let Some(left) = lookup(ENV_DELIMITER_LEFT) {
        settings.delimiters.left = left;
    }
    if let Some(right) = lookup(ENV_DELIMITER_RIGHT) {
        settings.delimiters.right = right;
    }
}
