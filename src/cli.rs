use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "source-indexer")]
#[command(
    author,
    version,
    about = "Index the source and test files of project modules"
)]
#[command(long_about = "Indexes the main and test files of each configured module, \
    filtered by Ant-style inclusion/exclusion patterns, and keeps an incremental \
    per-module cache between runs.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index module files and reconcile the cache
    Index(IndexArgs),

    /// Inspect or clear the persisted cache
    Cache(CacheArgs),
}

#[derive(Parser, Debug)]
pub struct IndexArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only index these modules (can be specified multiple times)
    #[arg(short, long = "module")]
    pub modules: Vec<String>,

    /// Start from an empty cache and do not save it
    #[arg(long)]
    pub no_cache: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub action: CacheAction,
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Print cached records
    List {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only list this module
        #[arg(short, long)]
        module: Option<String>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Drop every cached record of a module
    Clear {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Module whose records are dropped
        #[arg(short, long)]
        module: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
