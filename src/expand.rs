//! Range expansion.
//!
//! Turns a single range expression into the ordered list of addresses it
//! covers. Errors are returned as [`ExpandError`] values; nothing here
//! panics on bad input.

use crate::error::ExpandResult;
use crate::types::RangeSpec;
use std::net::Ipv4Addr;
use tracing::debug;

/// Expand a range expression such as `"192.168.1.1-20"` or
/// `"192.168.1.1-192.168.1.255"` into its addresses, ascending.
pub fn expand(range_text: &str) -> ExpandResult<Vec<Ipv4Addr>> {
    let range = RangeSpec::parse(range_text)?.resolve()?;
    debug!(input = range_text, range = %range, count = range.len(), "expanded range");
    Ok(range.iter().collect())
}

/// Expand a range expression and join the addresses with newlines.
pub fn expand_to_string(range_text: &str) -> ExpandResult<String> {
    let addresses = expand(range_text)?;
    Ok(join_addresses(&addresses))
}

/// Join addresses one per line.
pub fn join_addresses(addresses: &[Ipv4Addr]) -> String {
    addresses
        .iter()
        .map(Ipv4Addr::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
