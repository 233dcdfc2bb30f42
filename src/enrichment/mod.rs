//! Enrichment of parsed traceroute hops
//!
//! This module attaches ASN and organization details to hops through an
//! [`IpLookup`](crate::asn::IpLookup) provider, caching per address for the
//! duration of one run.

pub mod cache;
pub mod service;

pub use cache::{EnrichmentCache, EnrichmentResult};
pub use service::{without_enrichment, HopEnricher};
