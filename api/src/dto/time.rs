//! Timestamp parsing for request bodies.
//!
//! Accepts RFC 3339 (`2025-03-01T10:00:00Z`) and, for older clients,
//! zone-less local timestamps (`2025-03-01T10:00:00`) read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rfc3339_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();

        assert_eq!(parse_utc("2025-03-01T10:00:00Z"), Some(expected));
        assert_eq!(parse_utc("2025-03-01T12:00:00+02:00"), Some(expected));
        assert_eq!(parse_utc("2025-03-01T10:00:00"), Some(expected));
        assert_eq!(parse_utc("yesterday"), None);
    }
}
