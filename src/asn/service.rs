//! IP/ASN lookup service
//!
//! This module provides a service-oriented API over the individual
//! providers, so callers pick a provider once and then only see
//! [`IpLookup`].

use super::cymru::{create_default_resolver, lookup_cymru};
use super::lookup::{AsnLookupError, IpInfo, IpLookup};
use super::providers::{build_client, lookup_ip_api, lookup_ipwho, LookupProvider};
use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use std::sync::Arc;
use std::time::Duration;

/// IP/ASN lookup service backed by one provider
///
/// # Examples
///
/// ```no_run
/// use netdiag::asn::{AsnLookup, IpLookup, LookupProvider};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let service = AsnLookup::new(LookupProvider::IpApi)?;
///
///     let info = service.lookup("8.8.8.8").await?;
///     println!("{:?}: {:?}", info.asn, info.org);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AsnLookup {
    provider: LookupProvider,
    client: reqwest::Client,
    resolver: Option<Arc<TokioResolver>>,
}

impl AsnLookup {
    /// Create a lookup service using the configured HTTP timeout
    pub fn new(provider: LookupProvider) -> Result<Self, AsnLookupError> {
        Self::with_timeout(provider, crate::config::timing::http_timeout())
    }

    /// Create a lookup service with a specific HTTP timeout
    ///
    /// # Arguments
    ///
    /// * `provider` - Which service answers the lookups
    /// * `timeout` - Per-request timeout for HTTP providers
    pub fn with_timeout(
        provider: LookupProvider,
        timeout: Duration,
    ) -> Result<Self, AsnLookupError> {
        let resolver = match provider {
            LookupProvider::Cymru => Some(Arc::new(create_default_resolver())),
            LookupProvider::IpApi | LookupProvider::IpWhoIs => None,
        };

        Ok(Self {
            provider,
            client: build_client(timeout)?,
            resolver,
        })
    }

    /// Use a specific DNS resolver for the Cymru provider
    pub fn with_resolver(mut self, resolver: Arc<TokioResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// The provider answering lookups
    pub fn provider(&self) -> LookupProvider {
        self.provider
    }
}

#[async_trait]
impl IpLookup for AsnLookup {
    async fn lookup(&self, query: &str) -> Result<IpInfo, AsnLookupError> {
        tracing::debug!(provider = %self.provider, query, "ip lookup");

        match self.provider {
            LookupProvider::IpApi => lookup_ip_api(&self.client, query).await,
            LookupProvider::IpWhoIs => lookup_ipwho(&self.client, query).await,
            LookupProvider::Cymru => {
                let resolver = match &self.resolver {
                    Some(resolver) => Arc::clone(resolver),
                    None => Arc::new(create_default_resolver()),
                };
                lookup_cymru(&resolver, query).await
            }
        }
    }
}
