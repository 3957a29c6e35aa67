use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Targets, fmt, prelude::*, registry};

use crate::cli::Cli;
use crate::time::LocalTimeOnly;

/// Initialize the logger based on command-line arguments.
///
/// Diagnostics are written to stderr; stdout carries results only.
pub fn init_logger(cli_args: &Cli) -> Result<()> {
    let console_fmt = fmt::layer()
        .with_target(false)
        .with_timer(LocalTimeOnly)
        .with_writer(std::io::stderr);

    // Console log filter
    let console_filter = Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("certwatch", cli_args.log_level.to_level_filter());

    if cli_args.quiet {
        // Quiet mode: suppress all logs except errors
        registry()
            .with(console_fmt.with_filter(LevelFilter::ERROR))
            .init();
        return Ok(());
    }

    registry()
        .with(console_fmt.with_filter(console_filter))
        .init();
    Ok(())
}
