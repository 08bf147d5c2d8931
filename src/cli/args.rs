//! Command line argument parsing for Kensaku CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::document::{DEFAULT_THRESHOLD, SearchField};

/// Kensaku - fuzzy match ranking over a document set
#[derive(Parser, Debug, Clone)]
#[command(name = "kensaku")]
#[command(about = "A fuzzy match ranking engine for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KensakuArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KensakuArgs {
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
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank documents against a query
    Search(SearchArgs),

    /// Show the token stream for a piece of text
    Tokenize(TokenizeArgs),

    /// Show the phonetic form of a piece of text
    Phoneticize(PhoneticizeArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Path to a JSON file containing an array of documents
    #[arg(short, long, value_name = "FILE")]
    pub documents: PathBuf,

    /// Field to score (repeatable); all fields when omitted
    #[arg(short = 'F', long = "field", value_enum, value_name = "FIELD")]
    pub fields: Vec<SearchField>,

    /// Minimum score (0-100) a document must reach to be returned
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Maximum number of hits to report (0 = unlimited)
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

/// Arguments for the tokenize command
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for the phoneticize command
#[derive(Parser, Debug, Clone)]
pub struct PhoneticizeArgs {
    /// Text to phoneticize
    #[arg(value_name = "TEXT")]
    pub text: String,
}
