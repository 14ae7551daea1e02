//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of expansion
//! results. Every formatter renders to a `String` so the same text can be
//! printed or saved to a file.

mod csv_format;
mod json_format;
mod plain;

pub use plain::{print_failure, print_info, print_success, print_warning};

use crate::batch::BatchReport;
use crate::cli::OutputFormat;
use crate::error::{BatchResult, ErrorKind, ExpandResult, OutputResult};
use std::fs;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

/// The result of one invocation, ready to be rendered.
#[derive(Debug)]
pub enum Report {
    /// A single range expression given on the command line.
    Range {
        input: String,
        outcome: ExpandResult<Vec<Ipv4Addr>>,
    },
    /// A batch file.
    Batch {
        path: PathBuf,
        outcome: BatchResult<BatchReport>,
    },
}

impl Report {
    /// The range text or file path this report was produced from.
    pub fn source(&self) -> String {
        match self {
            Self::Range { input, .. } => input.clone(),
            Self::Batch { path, .. } => path.display().to_string(),
        }
    }

    /// All successfully expanded addresses.
    pub fn addresses(&self) -> &[Ipv4Addr] {
        match self {
            Self::Range {
                outcome: Ok(addresses),
                ..
            } => addresses,
            Self::Batch {
                outcome: Ok(report),
                ..
            } => &report.addresses,
            _ => &[],
        }
    }

    /// Every failure as a flat list, in display order.
    pub fn failures(&self) -> Vec<Failure> {
        match self {
            Self::Range {
                input,
                outcome: Err(e),
            } => vec![Failure {
                line: None,
                input: input.clone(),
                kind: e.kind(),
                message: e.to_string(),
            }],
            Self::Batch {
                path,
                outcome: Err(e),
            } => vec![Failure {
                line: None,
                input: path.display().to_string(),
                kind: e.kind(),
                message: e.to_string(),
            }],
            Self::Batch {
                outcome: Ok(report),
                ..
            } => report
                .errors
                .iter()
                .map(|e| Failure {
                    line: Some(e.line),
                    input: e.input.clone(),
                    kind: e.error.kind(),
                    message: e.error.to_string(),
                })
                .collect(),
            Self::Range { outcome: Ok(_), .. } => Vec::new(),
        }
    }
}

/// One failed input, flattened for structured output.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Failure {
    /// Line number for batch entries; absent for whole-input failures.
    pub line: Option<usize>,
    pub input: String,
    pub kind: ErrorKind,
    pub message: String,
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> OutputResult<String> {
    match format {
        OutputFormat::Plain => Ok(plain::render_plain(report)),
        OutputFormat::Json => json_format::render_json(report),
        OutputFormat::Csv => csv_format::render_csv(report),
    }
}

/// Write rendered text to `path`, replacing any existing file.
pub fn save(path: &Path, content: &str) -> OutputResult<()> {
    fs::write(path, content)?;
    Ok(())
}
