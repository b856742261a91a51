//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Registro: validate civil registry records before they are stored
#[derive(Parser)]
#[command(name = "registro")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate records from a JSON or CSV file
    Validate {
        /// Path to the record file (one JSON object, a JSON array, or CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Section whose rules apply (personal, vehicles, fines, housing, ...)
        #[arg(short, long)]
        section: String,

        /// Input format
        #[arg(short, long, default_value = "auto")]
        format: InputFormat,

        /// Evaluation time for date rules (RFC 3339 or YYYY-MM-DD; default: now)
        #[arg(long)]
        now: Option<String>,

        /// Output error maps as JSON
        #[arg(long)]
        json: bool,

        /// Accept unknown section names instead of failing every record
        #[arg(long)]
        permissive: bool,
    },

    /// Validate records and print the storage payload for each
    Normalize {
        /// Path to the record file (one JSON object, a JSON array, or CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Section whose rules apply
        #[arg(short, long)]
        section: String,

        /// Input format
        #[arg(short, long, default_value = "auto")]
        format: InputFormat,

        /// Evaluation time for date rules (RFC 3339 or YYYY-MM-DD; default: now)
        #[arg(long)]
        now: Option<String>,
    },

    /// List sections and their rules
    Sections {
        /// Only show this section
        #[arg(value_name = "SECTION")]
        section: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Pick by file extension (`.csv`, `.tsv` are delimited; anything else JSON)
    #[default]
    Auto,
    Json,
    Csv,
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(InputFormat::Auto),
            "json" => Ok(InputFormat::Json),
            "csv" | "tsv" => Ok(InputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use auto, json, or csv.", s)),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Auto => write!(f, "auto"),
            InputFormat::Json => write!(f, "json"),
            InputFormat::Csv => write!(f, "csv"),
        }
    }
}
