//! IP and ASN lookup
//!
//! Everything that answers "which network owns this address" sits behind
//! the [`IpLookup`] trait.

pub mod cymru;
pub mod lookup;
pub mod providers;
pub mod service;

pub use lookup::{AsnLookupError, IpInfo, IpLookup};
pub use providers::LookupProvider;
pub use service::AsnLookup;
