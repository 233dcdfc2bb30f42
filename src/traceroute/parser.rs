//! Extract hops from pasted traceroute output
//!
//! The input format is unconstrained: `traceroute`, `tracert`, `mtr --report`
//! and hand-edited variants all work, because each line is only searched
//! for its first dotted quad.

use super::types::Hop;
use once_cell::sync::Lazy;
use regex::Regex;

/// Four groups of 1-3 digits separated by dots; octet values are not checked
static IPV4_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}")
        .expect("IPv4 pattern is valid")
});

/// Parse traceroute text into an ordered list of hops
///
/// Lines without an address (timeouts such as `2 * * *`, headers) are
/// skipped and do not consume a sequence index. An empty result is not an
/// error here; callers decide what "no hops" means.
pub fn parse_traceroute(data: &str) -> Vec<Hop> {
    data.trim()
        .lines()
        .filter_map(|line| {
            IPV4_PATTERN.find(line).map(|m| (m.as_str().to_string(), line))
        })
        .enumerate()
        .map(|(sequence_index, (ip, line))| Hop {
            sequence_index,
            ip,
            original_line: line.trim().to_string(),
        })
        .collect()
}
