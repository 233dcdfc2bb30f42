//! Subnet arithmetic on 32-bit addresses

use super::cidr::{parse_cidr, ParsedCidr, MAX_PREFIX};
use super::error::CidrError;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Everything derived from a single `ip/prefix`
///
/// Address fields render as dotted-decimal through `Display` and serialize
/// as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetInfo {
    /// The input the calculation was run on
    pub cidr: String,
    /// Prefix length
    pub prefix: u8,
    /// Network address (`ip & mask`)
    pub network: Ipv4Addr,
    /// Broadcast address (`network | !mask`)
    pub broadcast: Ipv4Addr,
    /// Subnet mask
    pub mask: Ipv4Addr,
    /// Wildcard (inverted) mask
    pub wildcard_mask: Ipv4Addr,
    /// `2^(32 - prefix)`, exact even for `/0`
    pub total_hosts: u64,
    /// `total_hosts - 2`, or 0 for `/31` and `/32`
    pub usable_hosts: u64,
    /// First usable host, or the broadcast address when none are usable
    pub first_usable_host: Ipv4Addr,
    /// Last usable host, or the broadcast address when none are usable
    pub last_usable_host: Ipv4Addr,
}

impl SubnetInfo {
    /// Whether the subnet has any usable hosts
    pub fn has_usable_hosts(&self) -> bool {
        self.usable_hosts > 0
    }
}

/// Mask with `prefix` leading one bits
///
/// `/0` yields 0 and `/32` yields all ones.
pub fn prefix_mask(prefix: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_PREFIX - prefix.min(MAX_PREFIX)))
        .unwrap_or(0)
}

/// Derive subnet facts from a parsed CIDR
///
/// `/31` is not treated as a point-to-point link: both addresses count as
/// unusable, and first/last usable both equal the broadcast address.
///
/// `parsed.prefix` must be at most 32. Debug builds panic on a larger
/// prefix; release builds treat it as 32.
pub fn calculate(cidr: &str, parsed: ParsedCidr) -> SubnetInfo {
    debug_assert!(
        parsed.prefix <= MAX_PREFIX,
        "prefix {} exceeds {MAX_PREFIX}",
        parsed.prefix
    );
    let prefix = parsed.prefix.min(MAX_PREFIX);
    let mask = prefix_mask(prefix);
    let network = parsed.ip & mask;
    let broadcast = network | !mask;

    let host_bits = u32::from(MAX_PREFIX - prefix);
    let total_hosts = 1u64 << host_bits;
    let usable_hosts = total_hosts.saturating_sub(2);

    let (first, last) = if usable_hosts > 0 {
        (network.wrapping_add(1), broadcast.wrapping_sub(1))
    } else {
        (broadcast, broadcast)
    };

    SubnetInfo {
        cidr: cidr.to_string(),
        prefix,
        network: Ipv4Addr::from(network),
        broadcast: Ipv4Addr::from(broadcast),
        mask: Ipv4Addr::from(mask),
        wildcard_mask: Ipv4Addr::from(!mask),
        total_hosts,
        usable_hosts,
        first_usable_host: Ipv4Addr::from(first),
        last_usable_host: Ipv4Addr::from(last),
    }
}

/// Parse `cidr` and derive its subnet facts
///
/// # Errors
///
/// Propagates [`CidrError`] from [`parse_cidr`].
///
/// # Examples
///
/// ```
/// use netdiag::subnet::calculate_ip_info;
///
/// let info = calculate_ip_info("192.168.1.1/24").unwrap();
/// assert_eq!(info.network.to_string(), "192.168.1.0");
/// assert_eq!(info.usable_hosts, 254);
/// ```
pub fn calculate_ip_info(cidr: &str) -> Result<SubnetInfo, CidrError> {
    let parsed = parse_cidr(cidr)?;
    Ok(calculate(cidr, parsed))
}
