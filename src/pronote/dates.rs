use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a date the way the portal's query parameters are written.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM[:SS]` (taken as UTC) and
/// plain `YYYY-MM-DD` (UTC midnight). Returns `None` for anything else.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_plain_date_is_utc_midnight() {
        let dt = parse_date("2024-01-01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 1));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339_converts_offset() {
        let dt = parse_date("2024-03-10T09:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 7);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert_eq!(parse_date("2024-03-10T08:15").unwrap().hour(), 8);
        assert_eq!(parse_date("2024-03-10T08:15:42.120").unwrap().second(), 42);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("not-a-date").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("   ").is_none());
        assert!(parse_date("2024-13-45").is_none());
    }
}
