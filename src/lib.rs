//! netdiag - network diagnostics for pasted command output
//!
//! This library provides an IPv4 subnet calculator and a traceroute
//! visualizer that groups hops by autonomous system using a pluggable,
//! rate-limited IP lookup provider.

pub mod asn;
pub mod config;
pub mod enrichment;
pub mod logging;
pub mod subnet;
pub mod traceroute;

// Re-export core types for library users
pub use asn::{AsnLookup, AsnLookupError, IpInfo, IpLookup, LookupProvider};
pub use config::TimingConfig;
pub use enrichment::{EnrichmentCache, EnrichmentResult, HopEnricher};
pub use subnet::{calculate_ip_info, parse_cidr, CidrError, ParsedCidr, SubnetInfo};
pub use traceroute::{
    group_by_asn, parse_traceroute, visualize, EnrichedHop, Hop, HopGroup, TracerouteError,
};
