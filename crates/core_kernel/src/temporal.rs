//! Display time handling
//!
//! Timestamps are stored in UTC and rendered in the reviewer's timezone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::CoreError;

/// Timezone wrapper used for rendering timestamps
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| CoreError::Configuration(format!("Invalid timezone: {}", s)))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Converts a UTC datetime to the local timezone
    pub fn to_local(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.0)
    }

    /// Long form used in the claim drawer: `January 16, 2024 at 08:05 PM`
    pub fn format_long(&self, utc: DateTime<Utc>) -> String {
        self.to_local(utc).format("%B %-d, %Y at %I:%M %p").to_string()
    }

    /// Short form used on pipeline cards: `Jan 16, 08:05 PM`
    pub fn format_short(&self, utc: DateTime<Utc>) -> String {
        self.to_local(utc).format("%b %-d, %I:%M %p").to_string()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Kathmandu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kathmandu_offset_applied() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 16, 14, 20, 0).unwrap();
        let tz = Timezone::default();
        assert_eq!(tz.format_long(utc), "January 16, 2024 at 08:05 PM");
        assert_eq!(tz.format_short(utc), "Jan 16, 08:05 PM");
    }

    #[test]
    fn test_parse_timezone() {
        let tz: Timezone = "UTC".parse().unwrap();
        assert_eq!(tz, Timezone::new(chrono_tz::UTC));
        assert!("Mars/Olympus".parse::<Timezone>().is_err());
    }
}
