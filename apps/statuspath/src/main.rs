//! # statuspath
//!
//! Renders the status path of an approval workflow record.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                apps/statuspath (THE BINARY)               │
//! │                                                          │
//! │  ┌────────────┐   ┌────────────┐   ┌─────────────────┐   │
//! │  │    CLI     │   │   Config   │   │  Record files   │   │
//! │  │   (clap)   │   │   (toml)   │   │  (serde_json)   │   │
//! │  └─────┬──────┘   └─────┬──────┘   └────────┬────────┘   │
//! │        └────────────────┼───────────────────┘            │
//! │                         ▼                                │
//! │                ┌─────────────────┐                       │
//! │                │ statuspath-core │                       │
//! │                │   (THE LOGIC)   │                       │
//! │                └─────────────────┘                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! statuspath show --status "Approved"
//! statuspath record --records records.json --url "/s/request?c__recordId=a0B7"
//! statuspath --config path.toml catalog
//! ```

use clap::Parser;
use statuspath::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // STATUSPATH_LOG_FORMAT=json enables machine-parseable output.
    let log_format =
        std::env::var("STATUSPATH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "statuspath=info,statuspath_core=info".into());

    // Logs go to stderr so rendered output on stdout stays clean.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        println!("statuspath v{}", env!("CARGO_PKG_VERSION"));
        println!();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
