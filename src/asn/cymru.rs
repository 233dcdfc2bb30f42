//! ASN lookup using Team Cymru's DNS whois service

use super::lookup::{AsnLookupError, IpInfo};
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Origin record fields: `ASN | prefix | CC | registry | allocated`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginRecord {
    /// AS number without the "AS" prefix
    pub asn: String,
    /// Announced prefix
    pub prefix: Ipv4Net,
    /// Two-letter country code
    pub country_code: String,
}

/// Form the reversed-octet origin query for an address
pub fn origin_query(ip: &Ipv4Addr) -> String {
    let octets = ip.octets();
    format!(
        "{}.{}.{}.{}.origin.asn.cymru.com",
        octets[3], octets[2], octets[1], octets[0]
    )
}

/// Parse an origin TXT record
///
/// Multi-origin prefixes list several AS numbers separated by spaces; the
/// first one is kept.
pub fn parse_origin_record(txt: &str) -> Option<OriginRecord> {
    let parts: Vec<&str> = txt.split('|').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }

    let asn = parts[0].split_whitespace().next()?.to_string();
    let prefix = parts[1].parse::<Ipv4Net>().ok()?;

    Some(OriginRecord {
        asn,
        prefix,
        country_code: parts[2].to_string(),
    })
}

/// Parse an AS description TXT record: `ASN | CC | registry | allocated | name`
pub fn parse_as_name_record(txt: &str) -> Option<String> {
    let parts: Vec<&str> = txt.split('|').map(str::trim).collect();
    parts
        .get(4)
        .filter(|name| !name.is_empty())
        .map(|name| (*name).to_string())
}

/// Whether Cymru has nothing to say about this address
fn is_special_use(ip: &Ipv4Addr) -> bool {
    let octets = ip.octets();
    let cgnat = octets[0] == 100 && (64..=127).contains(&octets[1]);

    ip.is_private()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_broadcast()
        || ip.is_documentation()
        || ip.is_unspecified()
        || cgnat
}

async fn first_txt(resolver: &TokioResolver, query: String) -> Result<String, AsnLookupError> {
    let lookup = resolver
        .txt_lookup(query)
        .await
        .map_err(|e| AsnLookupError::Dns(e.to_string()))?;

    let record = lookup.iter().next().ok_or(AsnLookupError::NotFound)?;

    Ok(record
        .iter()
        .map(|data| String::from_utf8_lossy(data))
        .collect::<Vec<_>>()
        .join(""))
}

/// Look up an IPv4 literal through Team Cymru
///
/// Private and special-use ranges are rejected without a query, mirroring
/// what the HTTP providers report for them.
pub async fn lookup_cymru(
    resolver: &TokioResolver,
    query: &str,
) -> Result<IpInfo, AsnLookupError> {
    let ip: Ipv4Addr = query
        .trim()
        .parse()
        .map_err(|_| AsnLookupError::InvalidQuery(format!("{query} is not an IPv4 address")))?;

    if is_special_use(&ip) {
        return Err(AsnLookupError::Provider("private range".to_string()));
    }

    let origin_txt = first_txt(resolver, origin_query(&ip)).await?;
    let origin = parse_origin_record(&origin_txt)
        .ok_or_else(|| AsnLookupError::InvalidResponse(origin_txt.clone()))?;

    // The name is a nice-to-have; a failed second query still yields the ASN
    let org = match first_txt(resolver, format!("AS{}.asn.cymru.com", origin.asn)).await {
        Ok(txt) => parse_as_name_record(&txt),
        Err(e) => {
            tracing::debug!(asn = %origin.asn, error = %e, "AS name lookup failed");
            None
        }
    };

    Ok(IpInfo {
        ip: ip.to_string(),
        asn: Some(format!("AS{}", origin.asn)),
        org,
        ..Default::default()
    })
}

/// Create a default DNS resolver for ASN lookups
pub fn create_default_resolver() -> TokioResolver {
    TokioResolver::builder_with_config(
        ResolverConfig::cloudflare(),
        TokioConnectionProvider::default(),
    )
    .build()
}
