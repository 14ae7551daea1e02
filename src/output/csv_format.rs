//! CSV output formatting.
//!
//! Columns are `kind,line,input,value`. Error rows come first and carry
//! the error kind and message; address rows use the kind `address`.

use super::Report;
use crate::error::{OutputError, OutputResult};

/// Render a report as CSV.
pub fn render_csv(report: &Report) -> OutputResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Write header
    wtr.write_record(["kind", "line", "input", "value"])?;

    for failure in report.failures() {
        let line = failure.line.map_or(String::new(), |l| l.to_string());
        wtr.write_record([
            failure.kind.to_string().as_str(),
            line.as_str(),
            failure.input.as_str(),
            failure.message.as_str(),
        ])?;
    }

    let source = report.source();
    for address in report.addresses() {
        let value = address.to_string();
        wtr.write_record(["address", "", source.as_str(), value.as_str()])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| OutputError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| OutputError::Io(std::io::Error::other(e)))
}
