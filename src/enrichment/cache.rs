//! Per-run enrichment cache

use crate::asn::IpInfo;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// ASN text cached after a failed lookup
pub const LOOKUP_FAILED_ASN: &str = "N/A";
/// Organization text cached after a failed lookup
pub const LOOKUP_FAILED_ORG: &str = "Error fetching info";

/// What enrichment learned about one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    /// Autonomous system, if the provider knew it
    pub asn: Option<String>,
    /// Organization name
    pub org: Option<String>,
}

impl EnrichmentResult {
    /// Sentinel stored in place of a failed lookup
    pub fn lookup_failed() -> Self {
        Self {
            asn: Some(LOOKUP_FAILED_ASN.to_string()),
            org: Some(LOOKUP_FAILED_ORG.to_string()),
        }
    }

    /// Whether this is the failed-lookup sentinel
    pub fn is_lookup_failure(&self) -> bool {
        *self == Self::lookup_failed()
    }
}

impl From<IpInfo> for EnrichmentResult {
    fn from(info: IpInfo) -> Self {
        Self {
            asn: info.asn,
            org: info.org,
        }
    }
}

/// Cache of enrichment results keyed by the hop's IP text
///
/// Lives for a single enrichment run and is owned by it; nothing is shared
/// between runs.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentCache {
    entries: HashMap<String, EnrichmentResult>,
}

impl EnrichmentCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an address in the cache
    pub fn get(&self, ip: &str) -> Option<&EnrichmentResult> {
        self.entries.get(ip)
    }

    /// Store the result for an address
    pub fn insert(&mut self, ip: String, result: EnrichmentResult) {
        self.entries.insert(ip, result);
    }

    /// Check whether an address has a stored result
    pub fn contains(&self, ip: &str) -> bool {
        self.entries.contains_key(ip)
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
