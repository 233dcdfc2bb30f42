//! CIDR string parsing and dotted-decimal conversion

use super::error::CidrError;
use serde::{Deserialize, Serialize};

/// Maximum IPv4 prefix length
pub const MAX_PREFIX: u8 = 32;

/// A parsed `ip/prefix` pair
///
/// The address is held as a raw 32-bit value so that arithmetic on it has
/// well-defined wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCidr {
    /// Address as a big-endian 32-bit integer
    pub ip: u32,
    /// Prefix length; must be within 0-32
    ///
    /// [`parse_cidr`] guarantees this. [`calculate`](super::calculate)
    /// asserts it in debug builds and clamps to 32 otherwise.
    pub prefix: u8,
}

/// Parse an `ip/prefix` string
///
/// Checks happen in a fixed order: the `/` separator, then the prefix, then
/// the address. Only the first two `/`-separated fields are used, so
/// `10.0.0.0/24/5` has prefix 24. Address segments are not range-checked:
/// `999.1.1.1/24` and `192.168.-1.1/24` both parse, and their segments
/// combine modulo 2^32.
///
/// # Errors
///
/// * [`CidrError::Format`] - no `/`, empty prefix, or the address is not four
///   dot-separated integers
/// * [`CidrError::Range`] - the prefix is not an integer in 0-32
///
/// # Examples
///
/// ```
/// use netdiag::subnet::parse_cidr;
///
/// let parsed = parse_cidr("192.168.1.1/24").unwrap();
/// assert_eq!(parsed.ip, 3_232_235_777);
/// assert_eq!(parsed.prefix, 24);
/// ```
pub fn parse_cidr(input: &str) -> Result<ParsedCidr, CidrError> {
    let mut fields = input.split('/');
    let ip_str = fields.next().unwrap_or_default();
    let prefix_str = fields
        .next()
        .filter(|prefix| !prefix.is_empty())
        .ok_or_else(|| {
            CidrError::Format("use IP/Prefix (e.g., 192.168.1.1/24)".to_string())
        })?;

    let prefix = parse_prefix(prefix_str)?;

    let ip = ip_to_u32(ip_str)
        .ok_or_else(|| CidrError::Format(format!("invalid IP address {ip_str:?}")))?;

    Ok(ParsedCidr { ip, prefix })
}

fn parse_prefix(prefix_str: &str) -> Result<u8, CidrError> {
    prefix_str
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|p| u8::try_from(p).ok())
        .filter(|p| *p <= MAX_PREFIX)
        .ok_or_else(|| CidrError::Range(prefix_str.to_string()))
}

/// Convert a dotted-decimal string to its 32-bit value
///
/// Requires exactly four dot-separated integers. Segments outside 0-255,
/// negative ones included, are folded in with wrapping arithmetic.
pub fn ip_to_u32(ip: &str) -> Option<u32> {
    let segments: Vec<&str> = ip.split('.').collect();
    if segments.len() != 4 {
        return None;
    }

    segments.iter().try_fold(0u32, |acc, segment| {
        let value = segment.trim().parse::<i64>().ok()?;
        // Truncation reduces the segment modulo 2^32
        Some(acc.wrapping_mul(256).wrapping_add(value as u32))
    })
}

/// Render a 32-bit value as dotted-decimal
pub fn u32_to_ip(value: u32) -> String {
    let [a, b, c, d] = value.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}
