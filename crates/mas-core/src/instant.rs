//! Strict parsing of ISO-8601 instants.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Byte offset of the date/time separator in an RFC 3339 timestamp.
const SEPARATOR_INDEX: usize = 10;

/// Byte offset just past `YYYY-MM-DDTHH:MM:SS`, where a fraction may begin.
const SECONDS_END: usize = 19;

/// Instants resolve to nanoseconds.
const MAX_FRACTION_DIGITS: usize = 9;

/// Errors produced when a timestamp string is not a valid instant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstantParseError {
    /// The value was empty or whitespace-only.
    #[error("timestamp is blank")]
    Blank,

    /// The date and time were not separated by an upper-case `T`.
    #[error("expected 'T' between date and time in {value:?}")]
    MissingSeparator { value: String },

    /// The UTC designator was written as a lower-case `z`.
    #[error("expected upper-case 'Z' offset in {value:?}")]
    LowercaseZulu { value: String },

    /// The fractional seconds carried more precision than nanoseconds.
    #[error("fraction of {digits} digits exceeds nanosecond precision in {value:?}")]
    FractionTooLong { value: String, digits: usize },

    /// chrono rejected the value.
    #[error("invalid timestamp {value:?}: {source}")]
    Invalid {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parses an ISO-8601 instant such as `2024-01-01T00:00:00Z`.
///
/// Surrounding whitespace is trimmed; anything else that deviates from the
/// `YYYY-MM-DDTHH:MM:SS[.f…](Z|±HH:MM)` shape is rejected, including a
/// lower-case `z` and fractions of more than nine digits. Offsets are
/// normalized to UTC.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, InstantParseError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(InstantParseError::Blank);
    }

    // chrono's RFC 3339 parser also accepts a space or lower-case `t` here.
    if value.as_bytes().get(SEPARATOR_INDEX) != Some(&b'T') {
        return Err(InstantParseError::MissingSeparator {
            value: value.to_string(),
        });
    }

    // The remaining leniencies: chrono takes `z` and truncates long fractions.
    if value.ends_with('z') {
        return Err(InstantParseError::LowercaseZulu {
            value: value.to_string(),
        });
    }
    let bytes = value.as_bytes();
    if bytes.get(SECONDS_END) == Some(&b'.') {
        let digits = bytes[SECONDS_END + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits > MAX_FRACTION_DIGITS {
            return Err(InstantParseError::FractionTooLong {
                value: value.to_string(),
                digits,
            });
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| InstantParseError::Invalid {
            value: value.to_string(),
            source,
        })
}

/// Parses an optional timestamp, treating anything unusable as absent.
///
/// Missing and blank values are silently `None`; malformed values are logged.
pub fn parse_optional_instant(raw: Option<&str>) -> Option<DateTime<Utc>> {
    match parse_instant(raw?) {
        Ok(instant) => Some(instant),
        Err(InstantParseError::Blank) => None,
        Err(err) => {
            tracing::warn!(error = %err, "invalid time format");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn parses_utc_instant() {
        let parsed = parse_instant("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let parsed = parse_instant("  2024-01-01T06:30:00Z\n").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 6, 30, 0).unwrap());
    }

    #[test]
    fn accepts_fractional_seconds() {
        let parsed = parse_instant("2024-01-01T00:00:00.250Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let parsed = parse_instant("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(parse_instant(""), Err(InstantParseError::Blank));
        assert_eq!(parse_instant("   "), Err(InstantParseError::Blank));
    }

    #[test]
    fn rejects_space_separator() {
        let err = parse_instant("2024-01-01 00:00:00Z").unwrap_err();
        assert!(matches!(err, InstantParseError::MissingSeparator { .. }));
    }

    #[test]
    fn rejects_lowercase_separator() {
        assert!(parse_instant("2024-01-01t00:00:00Z").is_err());
    }

    #[test]
    fn rejects_lowercase_zulu() {
        let err = parse_instant("2024-01-01T00:00:00z").unwrap_err();
        assert!(matches!(err, InstantParseError::LowercaseZulu { .. }));
        assert!(parse_instant("2024-01-01T00:00:00.5z").is_err());
    }

    #[test]
    fn rejects_overlong_fraction() {
        let err = parse_instant("2024-01-01T00:00:00.1234567890Z").unwrap_err();
        assert_eq!(
            err,
            InstantParseError::FractionTooLong {
                value: "2024-01-01T00:00:00.1234567890Z".into(),
                digits: 10,
            }
        );
        assert!(parse_instant("2024-01-01T00:00:00.1234567890+02:00").is_err());
    }

    #[test]
    fn accepts_nanosecond_fraction() {
        let parsed = parse_instant("2024-01-01T00:00:00.123456789Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_nanos(), 123_456_789);
    }

    #[test]
    fn rejects_short_or_unseparated_offsets() {
        assert!(parse_instant("2024-01-01T00:00Z").is_err());
        assert!(parse_instant("2024-01-01T00:00:00+0200").is_err());
        assert!(parse_instant("2024-01-01T00:00:00+02").is_err());
    }

    #[test]
    fn rejects_missing_offset() {
        let err = parse_instant("2024-01-01T00:00:00").unwrap_err();
        assert!(matches!(err, InstantParseError::Invalid { .. }));
    }

    #[test]
    fn rejects_date_only_and_garbage() {
        assert!(parse_instant("2024-01-01").is_err());
        assert!(parse_instant("not-a-timestamp").is_err());
        assert!(parse_instant("2024-13-01T00:00:00Z").is_err());
    }

    #[test]
    fn optional_instant_treats_unusable_values_as_absent() {
        assert_eq!(parse_optional_instant(None), None);
        assert_eq!(parse_optional_instant(Some(" ")), None);
        assert_eq!(parse_optional_instant(Some("yesterday")), None);
        assert!(parse_optional_instant(Some("2024-01-01T00:00:00Z")).is_some());
    }
}
