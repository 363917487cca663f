//! Structured logging on top of `tracing-subscriber`.
//!
//! `RUST_LOG`, when set, overrides the configured level.

use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Structured JSON, one object per line
    Json,
    /// Multi-line human-readable output
    Pretty,
    /// Single-line terminal output
    #[default]
    Compact,
}

fn filter(level: &str) -> EnvFilter {
    match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        // Keep HTTP client internals quiet unless RUST_LOG asks for them.
        Err(_) => EnvFilter::new(format!("{level},hyper=warn,reqwest=warn")),
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(level: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(filter(level));

    let result = match format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logging already initialised");
    }
}
