//! # KGML CLI Module
//!
//! This module implements the CLI interface for kgml.
//!
//! ## Available Commands
//!
//! - `summary` - Show pathway metadata and element counts
//! - `entries` - List entries, optionally filtered by type
//! - `entry` - Show one entry and the relations touching it
//! - `export` - Write the parsed pathways as JSON
//! - `strip-dtd` - Run the offline DTD rewrite alone

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use kgml_core::KgmlError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// kgml - KEGG pathway (KGML) inspector
///
/// Parses KGML files into a typed pathway graph and reports on it.
#[derive(Parser, Debug)]
#[command(name = "kgml")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Trace parsing progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Strip the external DTD reference before parsing (no network access)
    #[arg(long, global = true)]
    pub offline: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show pathway metadata and element counts
    Summary {
        /// Path to the KGML file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List entries
    Entries {
        /// Path to the KGML file
        #[arg(short, long)]
        file: PathBuf,

        /// Only list entries of this type (gene, compound, map, ...)
        #[arg(short = 't', long)]
        entry_type: Option<String>,
    },

    /// Show one entry and its relations
    Entry {
        /// Path to the KGML file
        #[arg(short, long)]
        file: PathBuf,

        /// Entry id
        #[arg(long)]
        id: i32,
    },

    /// Export parsed pathways as JSON
    Export {
        /// Path to the KGML file
        #[arg(short, long)]
        file: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Remove the external DTD reference from a KGML file
    StripDtd {
        /// Path to the KGML file
        #[arg(short, long)]
        file: PathBuf,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), KgmlError> {
    let config = AppConfig::resolve(cli.config.as_deref())?;
    let options = config.parser_options(cli.verbose, cli.offline);
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Summary { file } => cmd_summary(&file, options, json_mode),
        Commands::Entries { file, entry_type } => {
            cmd_entries(&file, options, json_mode, entry_type.as_deref())
        }
        Commands::Entry { file, id } => cmd_entry(&file, options, json_mode, id),
        Commands::Export { file, output } => cmd_export(&file, options, &output),
        Commands::StripDtd { file, output } => cmd_strip_dtd(&file, output.as_deref()),
    }
}
