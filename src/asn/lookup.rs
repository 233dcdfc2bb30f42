//! The IP lookup contract shared by every provider

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error type for IP/ASN lookup operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AsnLookupError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// The provider answered but reported a failure (e.g., "private range")
    #[error("{0}")]
    Provider(String),

    /// The provider's response could not be understood
    #[error("Invalid lookup response: {0}")]
    InvalidResponse(String),

    /// The query is not something this provider can look up
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// No ASN data found
    #[error("No ASN data found")]
    NotFound,
}

/// Normalized answer to "what network is this address in?"
///
/// Every provider maps its own response shape onto this one. Empty strings
/// from a provider are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpInfo {
    /// The address the provider resolved the query to
    pub ip: String,
    /// Autonomous system, e.g. "AS15169 Google LLC"
    pub asn: Option<String>,
    /// Organization owning the address
    pub org: Option<String>,
    /// Internet service provider
    pub isp: Option<String>,
    /// City
    pub city: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// Latitude
    pub latitude: Option<f64>,
    /// Longitude
    pub longitude: Option<f64>,
}

impl IpInfo {
    /// "City, Country" when both are known
    pub fn location(&self) -> Option<String> {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            _ => None,
        }
    }

    /// "lat, lon" when both are known
    pub fn coordinates(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(format!("{lat}, {lon}")),
            _ => None,
        }
    }
}

/// Something that can answer IP/ASN lookups
///
/// Traceroute enrichment depends only on this trait, so providers can be
/// swapped freely and tests can substitute a counting fake.
#[async_trait]
pub trait IpLookup: Send + Sync {
    /// Look up an IP address or hostname
    async fn lookup(&self, query: &str) -> Result<IpInfo, AsnLookupError>;
}

#[async_trait]
impl<T: IpLookup + ?Sized> IpLookup for std::sync::Arc<T> {
    async fn lookup(&self, query: &str) -> Result<IpInfo, AsnLookupError> {
        (**self).lookup(query).await
    }
}

/// Map empty or whitespace-only strings to `None`
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
