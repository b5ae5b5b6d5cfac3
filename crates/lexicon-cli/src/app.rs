//! Argument parsing and the translate loop.

use crate::error::CliResult;
use clap::Parser;
use lexicon::{Manager, Options, ResourceArchive};
use lexicon_common::logging::LoggingConfig;
use lexicon_config::{apply_env_overrides, Delimiters, Settings, SettingsLoader};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "lexicon", author, version, about, long_about = None)]
pub struct Args {
    /// Settings file (TOML or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Translation source directory
    #[arg(short, long)]
    pub path: Option<String>,

    /// Default language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Placeholder delimiters
    #[arg(short, long, num_args = 2, value_names = ["LEFT", "RIGHT"])]
    pub delimiters: Option<Vec<String>>,

    /// Zip archive to read translations from before falling back to disk
    #[arg(short, long)]
    pub archive: Option<PathBuf>,

    /// Keep translating lines read from stdin
    #[arg(short, long)]
    pub watch: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Debug logging with thread names
    #[arg(short, long)]
    pub verbose: bool,

    /// Keys or templates to translate
    #[arg(required_unless_present = "watch")]
    pub content: Vec<String>,
}

impl Args {
    /// Resolves settings: the config file (or discovery plus environment),
    /// then command line overrides.
    pub fn settings(&self) -> CliResult<Settings> {
        let mut settings = match &self.config {
            Some(path) => SettingsLoader::new(path).load()?,
            None => {
                let mut settings = Settings::discover();
                apply_env_overrides(&mut settings);
                settings
            }
        };

        if let Some(path) = &self.path {
            settings.path.clone_from(path);
        }
        if let Some(language) = &self.lang {
            settings.language.clone_from(language);
        }
        if let Some([left, right]) = self.delimiters.as_deref() {
            settings.delimiters = Delimiters::new(left, right);
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Manager options: the resolved settings plus the archive, if any.
    pub fn options(&self) -> CliResult<Options> {
        let mut options = Options::from_settings(self.settings()?);
        if let Some(path) = &self.archive {
            let archive = ResourceArchive::open(path)?;
            info!("Opened archive {:?} with {} files", path, archive.len());
            options.archive = Some(Arc::new(archive));
        }
        Ok(options)
    }

    /// Logging setup for these arguments.
    pub fn logging(&self) -> LoggingConfig {
        if self.verbose {
            LoggingConfig::development()
        } else {
            LoggingConfig {
                level: self.log_level.clone(),
                ..LoggingConfig::default()
            }
        }
    }
}

/// A manager plus the output side of the CLI.
#[derive(Debug, Clone)]
pub struct App {
    manager: Manager,
}

impl App {
    /// Builds the manager from validated settings.
    pub fn new(settings: Settings) -> Self {
        Self::from_options(Options::from_settings(settings))
    }

    /// Builds the manager from ready options.
    pub fn from_options(options: Options) -> Self {
        if options.path.is_empty() {
            warn!("No translation directory found, input will be printed unchanged");
        }
        debug!("CLI options: {:?}", options);
        Self {
            manager: Manager::new(options),
        }
    }

    /// Shortcut for [`Args::options`] followed by [`App::from_options`].
    pub fn from_args(args: &Args) -> CliResult<Self> {
        Ok(Self::from_options(args.options()?))
    }

    /// The underlying manager.
    pub const fn manager(&self) -> &Manager {
        &self.manager
    }

    /// Writes the translation of each item on its own line.
    pub fn translate_all<'a, I, W>(&self, contents: I, out: &mut W) -> CliResult<()>
    where
        I: IntoIterator<Item = &'a str>,
        W: Write,
    {
        for content in contents {
            writeln!(out, "{}", self.manager.translate(content, None))?;
        }
        out.flush()?;
        Ok(())
    }

    /// Translates `input` line by line until it ends. Blank lines are
    /// skipped. Each line is looked up against the current table, so edits
    /// on disk show up on the next line.
    pub fn watch<R, W>(&self, input: R, out: &mut W) -> CliResult<()>
    where
        R: BufRead,
        W: Write,
    {
        info!("Translating stdin, source {}", self.manager.source_kind());
        for line in input.lines() {
            let line = line?;
            let content = line.trim_end_matches('\r');
            if content.is_empty() {
                continue;
            }
            writeln!(out, "{}", self.manager.translate(content, None))?;
            out.flush()?;
        }
        Ok(())
    }
}
