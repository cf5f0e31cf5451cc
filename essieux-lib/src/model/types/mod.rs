//! Typed fleet entities
//!
//! Each entity mirrors one backend table and converts into a dynamic
//! [`Record`](super::Record) for the list-view engine.

mod essieu;
mod panne;
mod stock;
mod travailleur;

pub use essieu::*;
pub use panne::*;
pub use stock::*;
pub use travailleur::*;

use chrono::DateTime;
use chrono::Utc;

use super::Value;

/// Converts an optional timestamp to an RFC 3339 string value.
pub(crate) fn timestamp_value(ts: &Option<DateTime<Utc>>) -> Value {
    ts.map(|t| t.to_rfc3339()).into()
}
