//! Error types for traceroute visualization

use thiserror::Error;

/// Errors that can occur while visualizing traceroute output
///
/// Lookup failures never show up here: they are converted to sentinel
/// results during enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TracerouteError {
    /// No line of the input contained an IPv4 address
    #[error("Could not parse any hops. Please paste valid traceroute/tracert output.")]
    NoHopsFound,
}
