//! # statuspath CLI Module
//!
//! This module implements the CLI interface for statuspath.
//!
//! ## Available Commands
//!
//! - `show` - Project a status and render the path
//! - `record` - Load a record from a record file and render its path
//! - `catalog` - List the configured status catalog
//! - `guidance` - Print the guidance message for a key
//! - `check` - Validate the configuration file

mod commands;

use clap::{Parser, Subcommand};
use statuspath_core::PathError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// statuspath - approval workflow status paths
///
/// Renders the ordered stages of a workflow with the current position
/// highlighted, plus guidance for the current status.
#[derive(Parser, Debug)]
#[command(name = "statuspath")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress the header line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project a status onto the catalog and render the path
    Show {
        /// Current status; omit to render the not-ready state
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Render the path of a record from a record file
    Record {
        /// JSON file mapping record ids to statuses
        #[arg(short, long)]
        records: PathBuf,

        /// Record id
        #[arg(short, long)]
        id: Option<String>,

        /// Page URL to take the record id from when --id is not given
        #[arg(short, long)]
        url: Option<String>,
    },

    /// List the status catalog
    Catalog,

    /// Print the guidance message for a key
    Guidance {
        /// Guidance key (e.g. "approved")
        #[arg(short, long)]
        key: String,
    },

    /// Validate the configuration
    Check,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), PathError> {
    let config = crate::config::AppConfig::load(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Show { status }) => cmd_show(&config, json_mode, status.as_deref()),
        Some(Commands::Record { records, id, url }) => {
            cmd_record(&config, json_mode, &records, id, url.as_deref())
        }
        Some(Commands::Catalog) => cmd_catalog(&config, json_mode),
        Some(Commands::Guidance { key }) => cmd_guidance(&config, json_mode, &key),
        Some(Commands::Check) => cmd_check(&config, json_mode),
        None => {
            // No subcommand - list the catalog by default
            cmd_catalog(&config, json_mode)
        }
    }
}
