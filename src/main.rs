use budget_rollup::application::service::DuplicatePolicy;
use budget_rollup::config::Config;
use budget_rollup::logging::{LogFormat, init_logging};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::time::Duration;
use tracing::{error, info};
use url::Url;

/// Command-line spelling of `DuplicatePolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DuplicateBudgets {
    /// Replace the existing budget
    Overwrite,
    /// Refuse with an "already exists" error
    Reject,
}

impl From<DuplicateBudgets> for DuplicatePolicy {
    fn from(value: DuplicateBudgets) -> Self {
        match value {
            DuplicateBudgets::Overwrite => DuplicatePolicy::Overwrite,
            DuplicateBudgets::Reject => DuplicatePolicy::Reject,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the rollup HTTP server
    #[arg(long, env = "ROLLUP_HTTP_SERVER_URL")]
    rollup_url: Url,

    /// Milliseconds to wait after a poll with no pending request
    #[arg(long, env = "POLL_INTERVAL_MS", default_value_t = 0)]
    poll_interval_ms: u64,

    /// What to do when a budget is created for a user that already has one
    #[arg(long, env = "DUPLICATE_BUDGETS", value_enum, default_value_t = DuplicateBudgets::Overwrite)]
    duplicate_budgets: DuplicateBudgets,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    let config = Config {
        rollup_url: cli.rollup_url,
        poll_interval: Duration::from_millis(cli.poll_interval_ms),
        duplicates: cli.duplicate_budgets.into(),
    };
    info!(rollup_url = %config.rollup_url, "HTTP rollup server url configured");

    let result = config.runner().run().await;
    if let Err(e) = &result {
        error!(error = %e, "Poll loop stopped");
    }
    result.into_diagnostic()
}
