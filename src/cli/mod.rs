//! Command-line interface definitions and dispatch.
//!
//! ipexpand takes one positional argument, which is either:
//! - a range expression: `192.168.1.1-20` or `192.168.1.1-192.168.1.255`
//! - the path of an existing file with one range per line
//! - a legacy `file:<path>` reference

mod run;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix accepted in front of batch file paths for backward compatibility.
pub const LEGACY_FILE_PREFIX: &str = "file:";

/// ipexpand - expand compact IPv4 range notation.
///
/// Ranges may only vary in the last octet, either as a bare end value
/// (192.168.1.1-20) or as a full end address (192.168.1.1-192.168.1.255).
#[derive(Parser, Debug)]
#[command(name = "ipexpand")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Expand IPv4 address ranges into address lists", long_about = None)]
pub struct Cli {
    /// Range expression, path to a file of ranges, or file:<path>
    #[arg(value_name = "RANGE_OR_FILE")]
    pub input: Option<String>,

    /// Save the result to a file (res.txt by default) instead of printing it
    #[arg(long)]
    pub out: bool,

    /// File written by --out
    #[arg(long, value_name = "PATH", env = "IPEXPAND_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to custom configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One address per line, errors listed first
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// How the positional argument is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// An existing file, detected on disk.
    File(PathBuf),
    /// A path given with the `file:` prefix.
    LegacyFile(PathBuf),
    /// A range expression.
    Range(String),
}

impl Input {
    /// Classify an argument, checking the filesystem for existing files.
    pub fn detect(arg: &str) -> Self {
        Self::detect_with(arg, Path::is_file)
    }

    /// Classify an argument using `is_file` as the existence check.
    ///
    /// An existing file always wins over the `file:` prefix.
    pub fn detect_with(arg: &str, is_file: impl Fn(&Path) -> bool) -> Self {
        if is_file(Path::new(arg)) {
            return Self::File(PathBuf::from(arg));
        }

        let prefix_len = LEGACY_FILE_PREFIX.len();
        match arg.get(..prefix_len) {
            Some(prefix) if prefix.eq_ignore_ascii_case(LEGACY_FILE_PREFIX) => {
                Self::LegacyFile(PathBuf::from(arg[prefix_len..].trim()))
            }
            _ => Self::Range(arg.to_string()),
        }
    }
}

/// Print the usage banner shown when no argument is given.
pub fn print_usage() {
    let bin = env!("CARGO_PKG_NAME");
    println!("ipexpand - IPv4 address range expansion tool");
    println!("Usage:");
    println!("  {} <ip-range-or-file> [--out]", bin);
    println!("Accepted forms:");
    println!("  <a.b.c.start>-<end>             short form");
    println!("  <a.b.c.start>-<a.b.c.end>       full form");
    println!("  <path> | file:<path>            one range per line");
    println!("Examples:");
    println!("  {} 192.168.1.1-20", bin);
    println!("  {} ip.txt", bin);
    println!("  {} 192.168.1.1-20 --out", bin);
}
