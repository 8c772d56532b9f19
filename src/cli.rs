//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for the portrait generator.

use clap::{Parser, Subcommand};

/// Coach Portraits - Placeholder portrait generator
///
/// Renders one colored-circle portrait per coach persona and expression and
/// writes them to the assets directory as PNG files. Running without a
/// subcommand generates the full set with default settings.
#[derive(Parser, Debug)]
#[command(name = "coach-portraits")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the generator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate every persona/expression portrait (the default command)
    Generate {
        /// Path to configuration file
        #[arg(short, long, env = "COACH_PORTRAITS_CONFIG")]
        config: Option<String>,

        /// Output directory for the generated PNGs
        #[arg(short, long, env = "COACH_PORTRAITS_OUT_DIR")]
        out_dir: Option<String>,

        /// Canvas size in pixels (portraits are square)
        #[arg(short, long, env = "COACH_PORTRAITS_SIZE")]
        size: Option<u32>,
    },

    /// List the persona and expression tables
    List {
        /// Emit the tables as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the effective configuration as TOML
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Write a commented default configuration file
    Init {
        /// Destination path (default: ./coach-portraits.toml)
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
