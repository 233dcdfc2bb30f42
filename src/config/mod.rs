//! Runtime configuration

pub mod timing;

use std::time::Duration;

/// Timing values that can be overridden once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    /// Minimum wait before each uncached enrichment lookup
    pub lookup_delay: Duration,
    /// Per-request timeout for HTTP lookup providers
    pub http_timeout: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            lookup_delay: Duration::from_millis(timing::DEFAULT_LOOKUP_DELAY_MS),
            http_timeout: Duration::from_millis(timing::DEFAULT_HTTP_TIMEOUT_MS),
        }
    }
}
