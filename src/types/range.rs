//! Range notation parsing.
//!
//! Two notations are accepted, both varying only the last octet:
//! - Short form: "192.168.1.1-20"
//! - Full form: "192.168.1.1-192.168.1.255"
//!
//! Parsing happens in two steps. [`RangeSpec::parse`] splits the text and
//! validates each endpoint on its own; [`RangeSpec::resolve`] checks that
//! the endpoints form a legal range and yields an [`Ipv4Range`].

use super::address::{parse_ipv4, parse_octet, OCTET_MAX};
use crate::error::{ExpandError, ExpandResult};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Separator between the two endpoints of a range.
pub const RANGE_SEPARATOR: char = '-';

/// Right-hand side of a range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    /// A bare last-octet value. Kept wide so out-of-range values can be
    /// reported as range errors rather than parse errors.
    Octet(i64),
    /// A complete dotted quad.
    Address(Ipv4Addr),
}

/// A parsed but not yet range-checked expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: Ipv4Addr,
    pub end: RangeEnd,
}

impl RangeSpec {
    /// Parse a range expression.
    pub fn parse(s: &str) -> ExpandResult<Self> {
        let (left, right) = split_endpoints(s)?;

        if right.contains('.') {
            match (parse_ipv4(left), parse_ipv4(right)) {
                (Some(start), Some(end)) => Ok(Self {
                    start,
                    end: RangeEnd::Address(end),
                }),
                _ => Err(ExpandError::InvalidAddress(
                    "start and end must both be valid IPv4 addresses".to_string(),
                )),
            }
        } else {
            let start = parse_ipv4(left).ok_or_else(|| {
                ExpandError::InvalidAddress(format!("invalid start address '{}'", left))
            })?;
            let end = parse_octet(right).ok_or(ExpandError::Format)?;
            Ok(Self {
                start,
                end: RangeEnd::Octet(end),
            })
        }
    }

    /// Check the endpoints against each other and build the range.
    pub fn resolve(&self) -> ExpandResult<Ipv4Range> {
        let [a, b, c, first] = self.start.octets();

        match self.end {
            RangeEnd::Address(end) => {
                let [x, y, z, last] = end.octets();
                if [a, b, c] != [x, y, z] || first > last {
                    return Err(ExpandError::InvalidRange(
                        "only contiguous ranges within the same /24 subnet are supported"
                            .to_string(),
                    ));
                }
                Ipv4Range::new([a, b, c], first, last)
            }
            RangeEnd::Octet(end) => {
                if end > OCTET_MAX || i64::from(first) > end {
                    return Err(ExpandError::InvalidRange(
                        "start must not exceed end and both must be within 0-255".to_string(),
                    ));
                }
                let last = u8::try_from(end).map_err(|e| ExpandError::Internal(e.to_string()))?;
                Ipv4Range::new([a, b, c], first, last)
            }
        }
    }
}

impl FromStr for RangeSpec {
    type Err = ExpandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split on the separator, requiring exactly one occurrence.
fn split_endpoints(s: &str) -> ExpandResult<(&str, &str)> {
    let mut parts = s.split(RANGE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Ok((left, right)),
        _ => Err(ExpandError::Format),
    }
}

/// An inclusive range of addresses sharing a /24 prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Range {
    prefix: [u8; 3],
    first: u8,
    last: u8,
}

impl Ipv4Range {
    /// Create a new range. Fails if `first > last`.
    pub fn new(prefix: [u8; 3], first: u8, last: u8) -> ExpandResult<Self> {
        if first > last {
            return Err(ExpandError::InvalidRange(format!(
                "start ({}) > end ({})",
                first, last
            )));
        }
        Ok(Self {
            prefix,
            first,
            last,
        })
    }

    /// First address in the range.
    pub fn start(&self) -> Ipv4Addr {
        self.address(self.first)
    }

    /// Last address in the range.
    pub fn end(&self) -> Ipv4Addr {
        self.address(self.last)
    }

    /// Number of addresses in this range. Never zero.
    pub const fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Always false; a valid range holds at least one address.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all addresses in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Ipv4Addr> {
        let [a, b, c] = self.prefix;
        (self.first..=self.last).map(move |d| Ipv4Addr::new(a, b, c, d))
    }

    fn address(&self, last: u8) -> Ipv4Addr {
        let [a, b, c] = self.prefix;
        Ipv4Addr::new(a, b, c, last)
    }
}

impl fmt::Display for Ipv4Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.prefix;
        if self.first == self.last {
            write!(f, "{}.{}.{}.{}", a, b, c, self.first)
        } else {
            write!(f, "{}.{}.{}.{}-{}", a, b, c, self.first, self.last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_form() {
        let spec: RangeSpec = "192.168.1.1-20".parse().unwrap();
        assert_eq!(spec.start, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(spec.end, RangeEnd::Octet(20));
    }

    #[test]
    fn test_parse_full_form() {
        let spec: RangeSpec = "10.0.0.5-10.0.0.9".parse().unwrap();
        assert_eq!(spec.end, RangeEnd::Address(Ipv4Addr::new(10, 0, 0, 9)));
    }

    #[test]
    fn test_separator_count() {
        assert_eq!(RangeSpec::parse("192.168.1.1"), Err(ExpandError::Format));
        assert_eq!(RangeSpec::parse("1.1.1.1-2-3"), Err(ExpandError::Format));
        assert_eq!(RangeSpec::parse("not-an-ip-at-all"), Err(ExpandError::Format));
    }

    #[test]
    fn test_non_integer_short_end() {
        assert_eq!(RangeSpec::parse("192.168.1.1-x"), Err(ExpandError::Format));
        assert_eq!(RangeSpec::parse("192.168.1.1-"), Err(ExpandError::Format));
    }

    #[test]
    fn test_invalid_start_reported_before_end() {
        let err = RangeSpec::parse("bad-range").unwrap_err();
        assert!(matches!(err, ExpandError::InvalidAddress(_)));
    }

    #[test]
    fn test_resolve_subnet_mismatch() {
        let spec = RangeSpec::parse("192.168.1.1-192.168.2.5").unwrap();
        assert!(matches!(spec.resolve(), Err(ExpandError::InvalidRange(_))));
    }

    #[test]
    fn test_resolve_bounds() {
        let spec = RangeSpec::parse("192.168.1.10-256").unwrap();
        assert!(matches!(spec.resolve(), Err(ExpandError::InvalidRange(_))));

        let spec = RangeSpec::parse("192.168.1.10-9").unwrap();
        assert!(matches!(spec.resolve(), Err(ExpandError::InvalidRange(_))));

        let spec = RangeSpec::parse("192.168.1.10--1");
        assert_eq!(spec, Err(ExpandError::Format));
    }

    #[test]
    fn test_range_len_and_endpoints() {
        let range = Ipv4Range::new([10, 0, 0], 0, 255).unwrap();
        assert_eq!(range.len(), 256);
        assert_eq!(range.start(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(range.end(), Ipv4Addr::new(10, 0, 0, 255));
        assert!(Ipv4Range::new([10, 0, 0], 5, 4).is_err());
    }

    #[test]
    fn test_range_display() {
        assert_eq!(Ipv4Range::new([10, 0, 0], 1, 9).unwrap().to_string(), "10.0.0.1-9");
        assert_eq!(Ipv4Range::new([10, 0, 0], 4, 4).unwrap().to_string(), "10.0.0.4");
    }
}
