//! CLI argument definitions using clap
//!
//! Commands:
//! - formbase serve --config <path>
//! - formbase init --config <path>
//! - formbase schema --config <path>
//! - formbase validate --config <path>
//! - formbase list --config <path> [--page N] [--limit N] [--sort-order asc|desc]
//! - formbase export --config <path> [--output FILE]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formbase - schema-driven form submission backend
#[derive(Parser, Debug)]
#[command(name = "formbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./formbase.json")]
        config: PathBuf,
    },

    /// Write a default config and create the data file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./formbase.json")]
        config: PathBuf,
    },

    /// Print the active form schema
    Schema {
        /// Path to configuration file
        #[arg(long, default_value = "./formbase.json")]
        config: PathBuf,
    },

    /// Validate a JSON payload read from stdin
    Validate {
        /// Path to configuration file
        #[arg(long, default_value = "./formbase.json")]
        config: PathBuf,
    },

    /// Print one page of stored submissions
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./formbase.json")]
        config: PathBuf,

        /// Page number, starting at 1
        #[arg(long)]
        page: Option<String>,

        /// Items per page (capped at 100)
        #[arg(long)]
        limit: Option<String>,

        /// Creation-time order: asc or desc
        #[arg(long)]
        sort_order: Option<String>,
    },

    /// Export one page of submissions as CSV
    Export {
        /// Path to configuration file
        #[arg(long, default_value = "./formbase.json")]
        config: PathBuf,

        /// Page number, starting at 1
        #[arg(long)]
        page: Option<String>,

        /// Items per page (capped at 100)
        #[arg(long)]
        limit: Option<String>,

        /// Creation-time order: asc or desc
        #[arg(long)]
        sort_order: Option<String>,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
