//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod list;

use crate::scope::OWNER_SHORTHAND;

/// List GitHub Actions secrets for a repository or organization
#[derive(Parser, Debug)]
#[command(name = "ghsec")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Select another repository using the [HOST/]OWNER/REPO format
    #[arg(
        long,
        short = 'R',
        global = true,
        value_name = "[HOST/]OWNER/REPO",
        env = "GHSEC_REPO",
        hide_env = true
    )]
    pub repo: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "GHSEC_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHSEC_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List secrets for a repository or organization
    List {
        /// List secrets for an organization; without a value, the
        /// organization owning the current repository
        #[arg(
            long,
            value_name = "ORG",
            num_args = 0..=1,
            default_missing_value = OWNER_SHORTHAND
        )]
        org: Option<String>,
    },

    /// Display version information
    Version,
}
