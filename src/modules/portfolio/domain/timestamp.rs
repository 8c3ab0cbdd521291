use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RFC 3339 timestamp as the backend wrote it.
///
/// Keeps the original text next to the parsed value: the offset stays the one
/// on the wire, and writing it back out yields the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    parsed: DateTime<FixedOffset>,
}

impl Timestamp {
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        let parsed = DateTime::parse_from_rfc3339(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            parsed,
        })
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.parsed
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(parsed: DateTime<FixedOffset>) -> Self {
        Self {
            raw: parsed.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            parsed,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::from(ts.fixed_offset())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}
