//! Wire codec for API timestamps.
//!
//! The service emits ISO-8601 timestamps with a literal `Z` suffix and
//! expects the same shape back on write, at millisecond precision:
//!
//! ```text
//! "2021-04-26T04:14:10.584Z"
//! ```
//!
//! Parsing accepts any RFC 3339 input and normalizes to UTC. Serialization
//! always produces the millisecond `Z` form above; the service rejects other
//! offsets in PATCH/POST bodies, so the format must round-trip exactly.
//!
//! Use with serde field attributes:
//!
//! ```ignore
//! #[serde(with = "timestamps")]
//! created_at: DateTime<Utc>,
//! #[serde(default, with = "timestamps::option")]
//! updated_at: Option<DateTime<Utc>>,
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// The exact format the service expects on write.
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Formats a timestamp in the service's wire form.
pub fn to_wire(value: &DateTime<Utc>) -> String {
    value.format(WIRE_FORMAT).to_string()
}

/// Parses an RFC 3339 timestamp into a UTC datetime.
///
/// # Errors
///
/// Returns the underlying chrono parse error for malformed input.
pub fn from_wire(raw: &str) -> chrono::ParseResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}

/// Serializes a required timestamp field.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_wire(value))
}

/// Deserializes a required timestamp field.
///
/// # Errors
///
/// Fails on non-string input or a timestamp that is not valid RFC 3339.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    from_wire(&raw).map_err(serde::de::Error::custom)
}

/// Codec for `Option<DateTime<Utc>>` fields.
///
/// Missing fields and explicit `null` both deserialize to `None`; `None`
/// serializes back to `null` (never omitted).
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes an optional timestamp field.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&super::to_wire(dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional timestamp field.
    ///
    /// # Errors
    ///
    /// Fails on a present, non-null value that is not valid RFC 3339.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.as_deref()
            .map(super::from_wire)
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}
