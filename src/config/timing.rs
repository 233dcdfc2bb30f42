//! Global timing configuration with compile-time defaults and runtime overrides
//!
//! Default values are defined as compile-time constants, but can be overridden
//! once at runtime via CLI arguments or library API.

use super::TimingConfig;
use once_cell::sync::OnceCell;
use std::time::Duration;

/// Default spacing before each uncached lookup, in milliseconds
pub const DEFAULT_LOOKUP_DELAY_MS: u64 = 600;
/// Default HTTP request timeout in milliseconds
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

// Runtime override storage - set once at program startup
static OVERRIDE_CONFIG: OnceCell<TimingConfig> = OnceCell::new();

/// Get the enrichment lookup delay
pub fn lookup_delay() -> Duration {
    OVERRIDE_CONFIG
        .get()
        .map(|c| c.lookup_delay)
        .unwrap_or_else(|| Duration::from_millis(DEFAULT_LOOKUP_DELAY_MS))
}

/// Get the HTTP request timeout
pub fn http_timeout() -> Duration {
    OVERRIDE_CONFIG
        .get()
        .map(|c| c.http_timeout)
        .unwrap_or_else(|| Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS))
}

/// Set the global timing configuration
///
/// This should be called once at program startup if custom timing is needed.
/// Returns the rejected configuration if one has already been set.
pub fn set_config(config: TimingConfig) -> Result<(), TimingConfig> {
    OVERRIDE_CONFIG.set(config)
}

/// Check if custom timing configuration has been set
pub fn is_custom_config_set() -> bool {
    OVERRIDE_CONFIG.get().is_some()
}
