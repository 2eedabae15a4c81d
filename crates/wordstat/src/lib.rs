//! # wordstat
//!
//! **CLI Binary**
//!
//! This is the entry point for the `wordstat` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration and initialise logging
//! * Run the analysis and print the report
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod config;
mod error_hints;
mod logging;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use wordstat_config::Cli;

pub use config::{resolve_profile, resolve_settings};

/// Entry point used by the `wordstat` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let user_config = config::load_config();
    let profile = resolve_profile(&user_config, cli.profile.as_ref());
    let settings = resolve_settings(&cli, profile);
    debug!(?settings, "resolved settings");

    let receipt = wordstat_core::analyse_receipt(&settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    wordstat_format::write_analysis_to(&mut out, &receipt, settings.format)?;
    Ok(())
}

/// Render an error for stderr, with hints where we have any.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
