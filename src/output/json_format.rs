//! JSON output formatting.

use super::{Failure, Report};
use crate::error::OutputResult;
use serde::Serialize;
use std::net::Ipv4Addr;

#[derive(Serialize)]
struct JsonReport<'a> {
    source: String,
    addresses: &'a [Ipv4Addr],
    errors: Vec<Failure>,
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &Report) -> OutputResult<String> {
    let doc = JsonReport {
        source: report.source(),
        addresses: report.addresses(),
        errors: report.failures(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
