//! Core types for traceroute visualization

use serde::{Deserialize, Serialize};

/// Label used when a hop carries no ASN
pub const UNKNOWN_ASN_LABEL: &str = "Private/Unknown ASN";

/// One IPv4-bearing line of traceroute output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// Position among matched lines, starting at 0 with no gaps
    pub sequence_index: usize,
    /// First dotted-quad found on the line
    pub ip: String,
    /// The trimmed source line
    pub original_line: String,
}

/// A hop with its ASN and organization attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedHop {
    /// The parsed hop
    #[serde(flatten)]
    pub hop: Hop,
    /// ASN as reported by the lookup provider (e.g., "AS15169 Google LLC")
    pub asn: Option<String>,
    /// Organization name
    pub org: Option<String>,
}

impl EnrichedHop {
    /// ASN used for grouping and display
    ///
    /// Falls back to [`UNKNOWN_ASN_LABEL`] when the ASN is missing or empty.
    pub fn effective_asn(&self) -> &str {
        self.asn
            .as_deref()
            .filter(|asn| !asn.is_empty())
            .unwrap_or(UNKNOWN_ASN_LABEL)
    }
}

/// A contiguous run of hops sharing one effective ASN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopGroup {
    /// Effective ASN shared by every hop in the run
    pub asn: String,
    /// Organization of the hop that opened the run
    pub org: Option<String>,
    /// Hops in original order
    pub hops: Vec<EnrichedHop>,
}

impl HopGroup {
    /// Number of hops in the run
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Whether the run is empty (never true for groups built by the reducer)
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}
