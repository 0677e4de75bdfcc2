//! Custom serde helpers for Canvas wire formats.

use chrono::{DateTime, NaiveDateTime, Utc};

/// The only timestamp shape Canvas emits: `YYYY-MM-DDTHH:MM:SSZ`.
const CANVAS_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses a string that matches the Canvas timestamp pattern exactly.
///
/// Anything else (offsets, fractional seconds, surrounding text, out of
/// range fields) yields `None` rather than a best-effort parse.
pub fn parse_canvas_date(value: &str) -> Option<DateTime<Utc>> {
    if !matches_date_pattern(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, CANVAS_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn matches_date_pattern(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 20 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T',
        13 | 16 => *b == b':',
        19 => *b == b'Z',
        _ => b.is_ascii_digit(),
    })
}

/// Deserializes an optional Canvas timestamp.
///
/// `null`, a missing field, or a string outside the strict pattern all map
/// to `None`; Canvas uses empty strings for unset dates on some endpoints.
pub mod canvas_date_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_canvas_date))
    }
}

/// Deserializes a Canvas id sent either as a number or as a numeric string.
///
/// Most endpoints send numbers; some older ones, and ids requested with
/// `Accept: application/json+canvas-string-ids`, send strings.
pub mod flexible_id {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = u64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer id or numeric string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
                Ok(v)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
                u64::try_from(v).map_err(|_| E::custom(format!("negative id: {}", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
                v.parse()
                    .map_err(|_| E::custom(format!("invalid id: {:?}", v)))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
