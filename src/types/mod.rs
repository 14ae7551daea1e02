//! Core address and range types.
//!
//! Endpoints are validated as they are parsed, so an [`Ipv4Range`] can only
//! describe addresses that are themselves valid.

mod address;
mod range;

pub use address::{is_valid_ipv4, parse_ipv4, parse_octet, OCTET_MAX, OCTET_MIN};
pub use range::{Ipv4Range, RangeEnd, RangeSpec, RANGE_SEPARATOR};
