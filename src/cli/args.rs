//! Command line argument parsing for the Virtuoso CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::mutation::SolverConfig;

/// Virtuoso - find the words one letter away from other words
#[derive(Parser, Debug, Clone)]
#[command(name = "virtuoso")]
#[command(about = "Find every dictionary word reachable by inserting or deleting one letter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VirtuosoArgs {
    /// Dictionary (of words) to use, one word per line
    #[arg(short, long, value_name = "FILE", default_value = "enable1.txt")]
    pub dictionary: PathBuf,

    /// List of words to test, one word per line
    #[arg(short, long, value_name = "FILE", default_value = "virtuoso.txt")]
    pub words: PathBuf,

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

    /// Process candidate words in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Only print words with at least one mutation
    #[arg(long)]
    pub matched_only: bool,

    /// Strip surrounding whitespace from every input line
    #[arg(long)]
    pub trim: bool,
}

impl VirtuosoArgs {
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

    /// Solver configuration selected on the command line.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            parallel: self.parallel,
            trim_lines: self.trim,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Word on one line, each mutation on a tab-indented line below it
    Human,
    /// JSON array of words and their mutations
    Json,
    /// One CSV row per mutation
    Csv,
}
