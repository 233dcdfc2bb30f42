//! Fold enriched hops into contiguous same-ASN runs

use super::types::{EnrichedHop, HopGroup};

/// Group adjacent hops that share an effective ASN
///
/// Only neighbours are merged: a path that leaves an AS and re-enters it
/// produces two separate groups. Concatenating the groups' hops gives back
/// the input sequence unchanged.
pub fn group_by_asn(hops: Vec<EnrichedHop>) -> Vec<HopGroup> {
    let mut groups: Vec<HopGroup> = Vec::new();

    for hop in hops {
        match groups.last_mut() {
            Some(group) if group.asn == hop.effective_asn() => group.hops.push(hop),
            _ => groups.push(HopGroup {
                asn: hop.effective_asn().to_string(),
                org: hop.org.clone().filter(|org| !org.is_empty()),
                hops: vec![hop],
            }),
        }
    }

    groups
}
