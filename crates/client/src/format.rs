//! Display formatting for dates coming from the services.

use chrono::{DateTime, Local, NaiveDate};

/// `1990-01-01` becomes `January 1, 1990`. Anything else is shown as-is.
pub fn format_birth_date(raw: &str) -> String {
    let date = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// RFC 3339 timestamps in local time. Anything else is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_dates() {
        assert_eq!(format_birth_date("1990-01-01"), "January 1, 1990");
        assert_eq!(format_birth_date("1995-05-15T00:00:00.000Z"), "May 15, 1995");
        assert_eq!(format_birth_date("someday"), "someday");
    }

    #[test]
    fn timestamps() {
        assert!(format_timestamp("2024-06-15T12:00:00Z").starts_with("2024-06-1"));
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
