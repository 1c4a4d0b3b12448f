//! `xsd:dateTime` lexical mapping for transfer timestamps.
//!
//! Timestamps are carried as RFC 3339 strings with an explicit UTC offset so
//! ordering comparisons survive the round trip at full precision.

use chrono::{DateTime, FixedOffset, ParseError, SecondsFormat};

/// Formats a timestamp as an `xsd:dateTime` lexical value.
///
/// Fractional seconds are emitted only when non-zero; a zero offset is
/// rendered as `Z`.
pub fn format_xsd_datetime(value: DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses an `xsd:dateTime` lexical value with an explicit offset.
///
/// Offset-less forms denote local time with no defined ordering, so they are
/// rejected.
pub fn parse_xsd_datetime(lexical: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_rfc3339(lexical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse_roundtrip() {
        for lexical in [
            "2017-05-22T09:30:00Z",
            "2017-05-22T09:30:00.123456+05:30",
            "1969-12-31T23:59:59.999-08:00",
        ] {
            let parsed = parse_xsd_datetime(lexical).unwrap();
            assert_eq!(format_xsd_datetime(parsed), lexical);
        }
    }

    #[test]
    fn test_zero_offset_formats_as_z() {
        let parsed = parse_xsd_datetime("2017-05-22T09:30:00+00:00").unwrap();
        assert_eq!(format_xsd_datetime(parsed), "2017-05-22T09:30:00Z");
    }

    #[test]
    fn test_offset_preserved() {
        let parsed = parse_xsd_datetime("2017-05-22T09:30:00+02:00").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_ordering_across_offsets() {
        // Same instant expressed in two zones compares equal.
        let utc = parse_xsd_datetime("2017-05-22T07:30:00Z").unwrap();
        let cest = parse_xsd_datetime("2017-05-22T09:30:00+02:00").unwrap();
        assert_eq!(utc, cest);

        let earlier = parse_xsd_datetime("2017-05-22T07:29:59.999999Z").unwrap();
        assert!(earlier < cest);
    }

    #[test]
    fn test_offsetless_rejected() {
        assert!(parse_xsd_datetime("2017-05-22T09:30:00").is_err());
        assert!(parse_xsd_datetime("not a timestamp").is_err());
    }
}
