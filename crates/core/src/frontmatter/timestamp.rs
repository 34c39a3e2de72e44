//! Front matter timestamps (`date`, `lastmod`).

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Naive layouts accepted in addition to RFC 3339. They are read as UTC.
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A point in time as written in front matter.
///
/// Absent dates take the zero value `0001-01-01T00:00:00Z`. There is no
/// separate "unset" state, so an author-written zero date and a missing one
/// are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// The zero timestamp used for absent dates.
    pub fn zero() -> Self {
        let naive = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("0001-01-01T00:00:00 is a valid date");
        Self::from_naive_utc(naive)
    }

    /// Parse a timestamp from its front matter form.
    ///
    /// Accepts RFC 3339 (offset preserved), `YYYY-MM-DD`, and
    /// `YYYY-MM-DD[T ]HH:MM:SS` without offset.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt));
        }

        for layout in NAIVE_LAYOUTS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
                return Some(Self::from_naive_utc(naive));
            }
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self::from_naive_utc)
    }

    fn from_naive_utc(naive: NaiveDateTime) -> Self {
        Self(Utc.fix().from_utc_datetime(&naive))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Format with a strftime layout. Fails on a layout that does not pass
    /// [`is_valid_layout`].
    pub fn format(&self, layout: &str) -> Result<String, fmt::Error> {
        let mut out = String::new();
        write!(out, "{}", self.0.format(layout))?;
        Ok(out)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// Whether a strftime layout can be rendered without a formatting error.
pub fn is_valid_layout(layout: &str) -> bool {
    !StrftimeItems::new(layout).any(|item| matches!(item, Item::Error))
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 timestamp or a YYYY-MM-DD date")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
        Timestamp::parse(v).ok_or_else(|| E::custom(format!("invalid timestamp '{v}'")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Timestamp, E> {
        Ok(Timestamp::zero())
    }

    fn visit_none<E: de::Error>(self) -> Result<Timestamp, E> {
        Ok(Timestamp::zero())
    }
}
