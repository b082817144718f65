//! Serde adapter writing timestamps as RFC 3339 UTC with milliseconds.
//!
//! `2024-03-01T12:00:00.000Z` rather than chrono's default, which drops a
//! zero fractional part. Any RFC 3339 string is accepted on read.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize with exactly three fractional digits and a `Z` suffix.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Deserialize any RFC 3339 timestamp into UTC.
///
/// # Errors
///
/// Fails on strings chrono cannot parse as RFC 3339.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    DateTime::<Utc>::deserialize(deserializer)
}
