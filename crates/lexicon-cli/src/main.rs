//! Main entry point for the Lexicon CLI.

use anyhow::{Context, Result};
use clap::Parser;
use lexicon_cli::{App, Args};
use lexicon_common::logging::init_logging;
use std::io;
use tracing::{debug, error};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.logging()).context("failed to initialize logging")?;

    let app = App::from_args(&args).context("invalid settings")?;
    debug!("Using {:?}", app.manager());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.translate_all(args.content.iter().map(String::as_str), &mut out)?;

    if args.watch {
        if let Err(e) = app.watch(io::stdin().lock(), &mut out) {
            error!("Stopped reading stdin: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
