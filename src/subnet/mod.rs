//! IPv4 subnet calculator
//!
//! Parses `ip/prefix` strings and derives network, broadcast, masks and
//! host counts using explicit 32-bit arithmetic.

pub mod calc;
pub mod cidr;
pub mod error;

pub use calc::{calculate, calculate_ip_info, prefix_mask, SubnetInfo};
pub use cidr::{ip_to_u32, parse_cidr, u32_to_ip, ParsedCidr, MAX_PREFIX};
pub use error::CidrError;
