//! HTTP lookup providers

use super::lookup::{non_empty, AsnLookupError, IpInfo};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

const IP_API_BASE: &str = "http://ip-api.com/json";
const IP_API_FIELDS: &str = "status,message,country,city,lat,lon,isp,org,as,query";
const IPWHO_BASE: &str = "https://ipwho.is";

/// Lookup provider services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupProvider {
    /// ip-api.com JSON API
    #[default]
    IpApi,
    /// ipwho.is JSON API
    IpWhoIs,
    /// Team Cymru IP-to-ASN DNS service
    Cymru,
}

impl LookupProvider {
    /// Human-readable provider name
    pub fn name(&self) -> &'static str {
        match self {
            LookupProvider::IpApi => "ip-api.com",
            LookupProvider::IpWhoIs => "ipwho.is",
            LookupProvider::Cymru => "Team Cymru",
        }
    }

    /// Get all available providers
    pub fn all() -> &'static [LookupProvider] {
        &[
            LookupProvider::IpApi,
            LookupProvider::IpWhoIs,
            LookupProvider::Cymru,
        ]
    }
}

impl std::fmt::Display for LookupProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    query: Option<String>,
    #[serde(rename = "as")]
    asn: Option<String>,
    org: Option<String>,
    isp: Option<String>,
    city: Option<String>,
    country: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct IpWhoResponse {
    success: bool,
    message: Option<String>,
    ip: Option<String>,
    city: Option<String>,
    country: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    connection: Option<IpWhoConnection>,
}

#[derive(Debug, Deserialize)]
struct IpWhoConnection {
    asn: Option<u64>,
    org: Option<String>,
    isp: Option<String>,
}

/// Build an HTTP client with the given request timeout
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, AsnLookupError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AsnLookupError::Http(e.to_string()))
}

/// Append `query` to `base` as a single percent-encoded path segment
fn query_url(base: &str, query: &str) -> Result<Url, AsnLookupError> {
    let mut url = Url::parse(base).map_err(|e| AsnLookupError::InvalidQuery(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| AsnLookupError::InvalidQuery(query.to_string()))?
        .pop_if_empty()
        .push(query);
    Ok(url)
}

async fn fetch_body(client: &reqwest::Client, url: Url) -> Result<String, AsnLookupError> {
    tracing::debug!(%url, "sending lookup request");

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            AsnLookupError::Timeout
        } else {
            AsnLookupError::Http(e.to_string())
        }
    })?;

    let response = response
        .error_for_status()
        .map_err(|e| AsnLookupError::Http(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| AsnLookupError::Http(e.to_string()))
}

/// Look up `query` with ip-api.com
pub async fn lookup_ip_api(
    client: &reqwest::Client,
    query: &str,
) -> Result<IpInfo, AsnLookupError> {
    let mut url = query_url(IP_API_BASE, query)?;
    url.query_pairs_mut().append_pair("fields", IP_API_FIELDS);
    let body = fetch_body(client, url).await?;
    parse_ip_api_response(&body)
}

/// Look up `query` with ipwho.is
pub async fn lookup_ipwho(
    client: &reqwest::Client,
    query: &str,
) -> Result<IpInfo, AsnLookupError> {
    let url = query_url(IPWHO_BASE, query)?;
    let body = fetch_body(client, url).await?;
    parse_ipwho_response(&body)
}

/// Normalize an ip-api.com JSON body
pub fn parse_ip_api_response(body: &str) -> Result<IpInfo, AsnLookupError> {
    let data: IpApiResponse =
        serde_json::from_str(body).map_err(|e| AsnLookupError::InvalidResponse(e.to_string()))?;

    if data.status == "fail" {
        return Err(AsnLookupError::Provider(
            data.message.unwrap_or_else(|| "lookup failed".to_string()),
        ));
    }

    Ok(IpInfo {
        ip: data.query.unwrap_or_default(),
        asn: non_empty(data.asn),
        org: non_empty(data.org),
        isp: non_empty(data.isp),
        city: non_empty(data.city),
        country: non_empty(data.country),
        latitude: data.lat,
        longitude: data.lon,
    })
}

/// Normalize an ipwho.is JSON body
///
/// ASN and organization live under `connection`; the numeric ASN is
/// rendered as "AS<n>".
pub fn parse_ipwho_response(body: &str) -> Result<IpInfo, AsnLookupError> {
    let data: IpWhoResponse =
        serde_json::from_str(body).map_err(|e| AsnLookupError::InvalidResponse(e.to_string()))?;

    if !data.success {
        return Err(AsnLookupError::Provider(
            data.message.unwrap_or_else(|| "lookup failed".to_string()),
        ));
    }

    let (asn, org, isp) = match data.connection {
        Some(conn) => (
            conn.asn.filter(|n| *n != 0).map(|n| format!("AS{n}")),
            non_empty(conn.org),
            non_empty(conn.isp),
        ),
        None => (None, None, None),
    };

    Ok(IpInfo {
        ip: data.ip.unwrap_or_default(),
        asn,
        org,
        isp,
        city: non_empty(data.city),
        country: non_empty(data.country),
        latitude: data.latitude,
        longitude: data.longitude,
    })
}
