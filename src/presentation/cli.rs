//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stamped - signed source regeneration that keeps hand-written sections
#[derive(Parser, Debug)]
#[command(name = "stamped")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./stamped.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign a rendered template and write it, keeping manual sections
    Save {
        /// Rendered template file, or '-' for stdin
        #[arg(short, long, value_name = "FILE")]
        template: PathBuf,

        /// File to write
        #[arg(short, long, value_name = "PATH")]
        out: PathBuf,

        /// Older file consulted for manual sections before the target (repeatable)
        #[arg(long, value_name = "PATH")]
        legacy: Vec<PathBuf>,

        /// Section rename, NEW=OLD1,OLD2 (repeatable)
        #[arg(long, value_name = "NEW=OLD")]
        rekey: Vec<String>,

        /// TOML file with a [rekey] table
        #[arg(long, value_name = "TOML")]
        rekey_file: Option<PathBuf>,

        /// Generator input named in an inserted header
        #[arg(long, value_name = "SOURCE")]
        generated_from: Option<String>,

        /// Skip signature checks on existing content
        #[arg(long, conflicts_with = "create_only")]
        clobber: bool,

        /// Leave the target alone if it already exists
        #[arg(long)]
        create_only: bool,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,

        /// With --dry-run, print a unified diff of the change
        #[arg(long, requires = "dry_run")]
        diff: bool,
    },

    /// Check embedded signatures
    Verify {
        /// Fail on files with no signature
        #[arg(long)]
        require_signed: bool,

        /// Files to verify
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Validate manual-section markers
    Check {
        /// Files to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}
