use chrono::{DateTime, Utc};

use crate::error::DataError;

/// Wall-clock format used everywhere: in the CSV sources, in filter bounds
/// and in resampled bucket keys.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const OFFSET_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Parses a canonical timestring as a UTC instant. The sources carry no
/// offset, so a fixed +00:00 is appended before parsing.
pub fn parse_utc_timestring(s: &str) -> Result<DateTime<Utc>, DataError> {
    DateTime::parse_from_str(&format!("{}+00:00", s), OFFSET_FORMAT)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| DataError::InvalidTimestamp {
            value: s.to_string(),
            source,
        })
}

pub fn epoch_millis(s: &str) -> Result<i64, DataError> {
    parse_utc_timestring(s).map(|t| t.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_timestring_as_utc() {
        let t = parse_utc_timestring("2023-01-01 00:30:00").unwrap();
        assert_eq!(t.to_rfc3339(), "2023-01-01T00:30:00+00:00");
    }

    #[test]
    fn rejects_date_only_string() {
        assert!(parse_utc_timestring("2023-01-01").is_err());
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse_utc_timestring("2023-01-01 00:30:00 oops").is_err());
    }

    #[test]
    fn epoch_millis_of_epoch_is_zero() {
        assert_eq!(epoch_millis("1970-01-01 00:00:00").unwrap(), 0);
    }
}
