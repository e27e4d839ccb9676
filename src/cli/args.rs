//! Command line argument parsing for Speller CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Dictionary used when none is given on the command line.
pub const DEFAULT_DICTIONARY: &str = "dictionaries/large";

/// Speller - A batch spell-checker that corrects text in place
#[derive(Parser, Debug, Clone)]
#[command(name = "speller")]
#[command(about = "A batch spell-checker that corrects text in place")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Spell-check a text file and rewrite it with corrections
    Check(CheckArgs),

    /// Print the best dictionary match for a single word
    Suggest(SuggestArgs),

    /// Print the edit distance between two words
    Distance(DistanceArgs),
}

/// Arguments for checking a text file
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text file to correct in place
    #[arg(value_name = "TEXT")]
    pub text: PathBuf,

    /// Dictionary file with one word per line
    #[arg(short, long, value_name = "DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,

    /// Report corrections without rewriting the file
    #[arg(long)]
    pub dry_run: bool,

    /// Scan the dictionary on a single thread
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for suggesting a correction
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Dictionary file with one word per line
    #[arg(short, long, value_name = "DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,
}

/// Arguments for computing an edit distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First word
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Second word
    #[arg(value_name = "TARGET")]
    pub target: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
