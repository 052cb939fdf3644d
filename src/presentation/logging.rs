//! Logging initialization
//!
//! Sets up the tracing subscriber on stderr from CLI flags, the config
//! file, or `STAMPED_LOG`.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Verbosity;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "STAMPED_LOG";

/// Level for a `-v` count, falling back to the configured verbosity
pub fn level_for(verbose: u8, configured: Verbosity) -> Level {
    match verbose {
        0 => match configured {
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal => Level::WARN,
            Verbosity::Verbose => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize the global subscriber.
///
/// Machine-readable output keeps stderr down to errors unless `-v` was given
/// explicitly.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(verbose: u8, configured: Verbosity, json: bool) -> Result<()> {
    let level = if json && verbose == 0 {
        Level::ERROR
    } else {
        level_for(verbose, configured)
    };

    if let Ok(directive) = std::env::var(LOG_ENV) {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::new(directive))
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        return Ok(());
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
