//! Dotted-quad validation.
//!
//! A candidate is a valid IPv4 address when it has exactly four
//! `.`-separated parts and every part is a base-10 integer in 0-255.
//! Parts are trimmed and may carry a sign or leading zeros, so `"010"`
//! and `"+7"` are accepted as octets.

use std::net::Ipv4Addr;

/// Smallest legal octet value.
pub const OCTET_MIN: i64 = 0;
/// Largest legal octet value.
pub const OCTET_MAX: i64 = 255;

/// Parse a decimal integer the way range endpoints are written.
///
/// Returns `None` for anything that is not an integer. No range check is
/// applied; callers decide what bounds apply.
pub fn parse_octet(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Parse a dotted quad into an address, rejecting anything that is not
/// exactly four octets in 0-255.
pub fn parse_ipv4(candidate: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut count = 0;

    for part in candidate.split('.') {
        if count == octets.len() {
            return None;
        }
        let value = parse_octet(part)?;
        if !(OCTET_MIN..=OCTET_MAX).contains(&value) {
            return None;
        }
        octets[count] = u8::try_from(value).ok()?;
        count += 1;
    }

    if count != octets.len() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

/// Check whether `candidate` is a valid dotted-quad IPv4 address.
#[inline]
pub fn is_valid_ipv4(candidate: &str) -> bool {
    parse_ipv4(candidate).is_some()
}
