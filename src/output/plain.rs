//! Plain text output formatting.
//!
//! The plain rendering is the tool's primary contract: one address per
//! line, optionally preceded by error lines and a blank separator.

use super::Report;
use crate::expand::join_addresses;
use console::style;

/// Render a report as plain text.
pub fn render_plain(report: &Report) -> String {
    match report {
        Report::Range {
            outcome: Ok(addresses),
            ..
        } => join_addresses(addresses),
        Report::Range { outcome: Err(e), .. } => e.to_string(),
        Report::Batch {
            outcome: Ok(batch), ..
        } => batch.render(),
        Report::Batch { outcome: Err(e), .. } => e.to_string(),
    }
}

/// Print an error message to stdout, for failures that belong with the
/// result they accompany.
pub fn print_failure(msg: &str) {
    println!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
