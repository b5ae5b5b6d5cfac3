//! # Lexicon
//!
//! Runtime translation lookup backed by language-partitioned data files.
//!
//! The [`Manager`] loads its table lazily on first use from one of three
//! sources: an embedded filesystem, a packed zip archive, or a directory on
//! disk. Disk sources are watched, and any change invalidates the table so
//! the next lookup reloads it.
//!
//! - Exact key lookup with pass-through on a miss
//! - Placeholder substitution (`Hello {#name}!`) with configurable delimiters
//! - printf-style formatting applied after translation
//! - Per-call language override
//!
//! # Example
//!
//! ```rust,no_run
//! use lexicon::{Manager, Options};
//!
//! let manager = Manager::new(Options::new("i18n"));
//! assert_eq!(manager.translate("unknown.key", None), "unknown.key");
//! println!("{}", manager.translate("Hello {#name}!", Some("fr")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod format;
pub mod instance;
mod macros;
pub mod manager;
pub mod options;
pub mod parser;
pub mod pattern;
pub mod source;
mod watcher;

use std::collections::HashMap;

pub use format::sprintf;
pub use manager::Manager;
pub use options::{default_options, embed_fs_option, Options};
pub use parser::{ContentParser, StructuredParser};
pub use pattern::Placeholder;
pub use source::{EmbeddedFs, MemoryFs, ResourceArchive, RustEmbedFs, SourceKind};

pub use lexicon_common::{LexiconError, Result};
pub use lexicon_config::{Delimiters, Settings};

/// Translations for one language, keyed by translation key.
pub type LanguageMap = HashMap<String, String>;

/// All loaded translations, keyed by language identifier.
pub type TranslationTable = HashMap<String, LanguageMap>;
