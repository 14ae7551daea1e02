//! Batch expansion of range files.
//!
//! A batch file holds one range expression per line. Blank lines are
//! skipped and there is no comment syntax. A bad line never aborts the
//! batch: it is recorded in the report and processing continues with the
//! next line.

use crate::error::{BatchError, BatchResult, ExpandError};
use crate::expand::{expand, join_addresses};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::net::Ipv4Addr;
use std::path::Path;
use tracing::{debug, info};

/// A line that failed to expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-indexed line number.
    pub line: usize,
    /// The line text with surrounding whitespace removed.
    pub input: String,
    pub error: ExpandError,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ({}): {}", self.line, self.input, self.error)
    }
}

/// Aggregated outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Failed lines, in file order.
    pub errors: Vec<LineError>,
    /// Addresses from every successful line, in file order.
    pub addresses: Vec<Ipv4Addr>,
    /// Non-blank lines handed to the expander.
    pub lines_processed: usize,
    /// Blank lines that were ignored.
    pub lines_skipped: usize,
}

impl BatchReport {
    /// True when no line failed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record the outcome of one line.
    fn record(&mut self, line: usize, input: &str) {
        self.lines_processed += 1;
        match expand(input) {
            Ok(addresses) => self.addresses.extend(addresses),
            Err(error) => {
                debug!(line, input, %error, "line rejected");
                self.errors.push(LineError {
                    line,
                    input: input.to_string(),
                    error,
                });
            }
        }
    }

    /// Render as text: error lines first, a blank separator when both
    /// errors and addresses are present, then the addresses.
    pub fn render(&self) -> String {
        let mut sections = Vec::with_capacity(3);

        if !self.errors.is_empty() {
            let errors: Vec<String> = self.errors.iter().map(LineError::to_string).collect();
            sections.push(errors.join("\n"));
            if !self.addresses.is_empty() {
                sections.push(String::new());
            }
        }
        sections.push(join_addresses(&self.addresses));

        sections.join("\n")
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Expand every range in the file at `path`.
pub fn process_file(path: impl AsRef<Path>) -> BatchResult<BatchReport> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BatchError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let io_error = |source: io::Error| BatchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let report = process_reader(BufReader::new(file)).map_err(io_error)?;

    info!(
        path = %path.display(),
        processed = report.lines_processed,
        skipped = report.lines_skipped,
        failed = report.errors.len(),
        addresses = report.addresses.len(),
        "batch complete"
    );

    Ok(report)
}

/// Expand every range read from `reader`, one per line.
///
/// Fails only when the reader itself fails, including on invalid UTF-8.
pub fn process_reader<R: BufRead>(reader: R) -> io::Result<BatchReport> {
    let mut report = BatchReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            report.lines_skipped += 1;
            continue;
        }
        report.record(index + 1, text);
    }

    Ok(report)
}
