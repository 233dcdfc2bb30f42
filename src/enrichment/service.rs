//! Sequential, rate-limited hop enrichment
//!
//! Lookups are issued one at a time, each preceded by a fixed delay, and
//! each distinct address is looked up at most once per run.

use super::cache::{EnrichmentCache, EnrichmentResult};
use crate::asn::IpLookup;
use crate::traceroute::{EnrichedHop, Hop};
use std::time::Duration;

/// Attaches ASN and organization data to parsed hops
///
/// # Examples
///
/// ```no_run
/// use netdiag::asn::{AsnLookup, LookupProvider};
/// use netdiag::enrichment::HopEnricher;
/// use netdiag::traceroute::parse_traceroute;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let enricher = HopEnricher::new(AsnLookup::new(LookupProvider::IpApi)?);
/// let hops = parse_traceroute("1 192.168.1.1\n2 8.8.8.8");
/// let enriched = enricher.enrich(hops).await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HopEnricher<L> {
    lookup: L,
    delay: Duration,
}

impl<L: IpLookup> HopEnricher<L> {
    /// Create an enricher using the configured lookup delay
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            delay: crate::config::timing::lookup_delay(),
        }
    }

    /// Override the wait before each uncached lookup
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The wait before each uncached lookup
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The underlying lookup provider
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Enrich hops using a fresh cache
    ///
    /// Output order and length match the input exactly.
    pub async fn enrich(&self, hops: Vec<Hop>) -> Vec<EnrichedHop> {
        let mut cache = EnrichmentCache::new();
        self.enrich_with_cache(hops, &mut cache).await
    }

    /// Enrich hops, reading and filling the given cache
    ///
    /// A cache hit costs nothing. A miss waits for the configured delay,
    /// performs one lookup and stores the outcome before moving on; failed
    /// lookups store the sentinel so the address is not retried. Dropping
    /// the returned future abandons the run with nothing to clean up.
    pub async fn enrich_with_cache(
        &self,
        hops: Vec<Hop>,
        cache: &mut EnrichmentCache,
    ) -> Vec<EnrichedHop> {
        let mut enriched = Vec::with_capacity(hops.len());

        for hop in hops {
            let result = if let Some(cached) = cache.get(&hop.ip).cloned() {
                tracing::debug!(ip = %hop.ip, "enrichment cache hit");
                cached
            } else {
                let result = self.fetch(&hop.ip).await;
                cache.insert(hop.ip.clone(), result.clone());
                result
            };

            enriched.push(EnrichedHop {
                hop,
                asn: result.asn,
                org: result.org,
            });
        }

        enriched
    }

    async fn fetch(&self, ip: &str) -> EnrichmentResult {
        tokio::time::sleep(self.delay).await;

        match self.lookup.lookup(ip).await {
            Ok(info) => {
                tracing::debug!(ip, asn = ?info.asn, "lookup succeeded");
                EnrichmentResult::from(info)
            }
            Err(e) => {
                tracing::warn!(ip, error = %e, "lookup failed, caching sentinel");
                EnrichmentResult::lookup_failed()
            }
        }
    }
}

/// Attach empty enrichment to every hop without any lookups
pub fn without_enrichment(hops: Vec<Hop>) -> Vec<EnrichedHop> {
    hops.into_iter()
        .map(|hop| EnrichedHop {
            hop,
            asn: None,
            org: None,
        })
        .collect()
}
