//! High-level traceroute visualization API

use crate::asn::IpLookup;
use crate::enrichment::{without_enrichment, HopEnricher};
use crate::traceroute::{group_by_asn, parse_traceroute, HopGroup, TracerouteError};

/// Parse, enrich and group traceroute output
///
/// # Arguments
///
/// * `data` - Raw traceroute text as pasted by the user
/// * `enricher` - Enricher wrapping the lookup provider
///
/// # Errors
///
/// * `TracerouteError::NoHopsFound` - No line contained an IPv4 address;
///   no lookups are made in that case
///
/// # Examples
///
/// ```no_run
/// use netdiag::asn::{AsnLookup, LookupProvider};
/// use netdiag::enrichment::HopEnricher;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let enricher = HopEnricher::new(AsnLookup::new(LookupProvider::IpApi)?);
/// let groups = netdiag::traceroute::visualize("1 10.0.0.1\n2 8.8.8.8", &enricher).await?;
///
/// for group in &groups {
///     println!("{} ({} hops)", group.asn, group.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn visualize<L: IpLookup>(
    data: &str,
    enricher: &HopEnricher<L>,
) -> Result<Vec<HopGroup>, TracerouteError> {
    let hops = parse_traceroute(data);
    if hops.is_empty() {
        return Err(TracerouteError::NoHopsFound);
    }

    tracing::info!(hops = hops.len(), "parsed traceroute");
    let enriched = enricher.enrich(hops).await;
    Ok(group_by_asn(enriched))
}

/// Parse and group traceroute output without any lookups
///
/// Every hop lands in a single unknown-ASN group.
pub fn visualize_unenriched(data: &str) -> Result<Vec<HopGroup>, TracerouteError> {
    let hops = parse_traceroute(data);
    if hops.is_empty() {
        return Err(TracerouteError::NoHopsFound);
    }
    Ok(group_by_asn(without_enrichment(hops)))
}
