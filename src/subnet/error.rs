//! Error types for CIDR parsing

use thiserror::Error;

/// Errors that can occur while parsing a CIDR string
///
/// Either error aborts the whole subnet calculation; no partial
/// [`SubnetInfo`](super::SubnetInfo) is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    /// The string is not shaped like `ip/prefix`
    ///
    /// Raised when the `/` separator or the prefix is missing, or when the
    /// address part is not four dot-separated integers.
    #[error("Invalid CIDR format: {0}")]
    Format(String),

    /// The prefix is not a number or lies outside 0-32
    #[error("Invalid prefix: must be 0-32 (got {0:?})")]
    Range(String),
}
