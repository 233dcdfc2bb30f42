//! Traceroute visualization
//!
//! Turns pasted traceroute output into ordered hops, and enriched hops into
//! contiguous per-ASN groups.

pub mod api;
pub mod error;
pub mod grouping;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use api::{visualize, visualize_unenriched};
pub use error::TracerouteError;
pub use grouping::group_by_asn;
pub use parser::parse_traceroute;
pub use types::{EnrichedHop, Hop, HopGroup, UNKNOWN_ASN_LABEL};
