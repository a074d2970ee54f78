//! Date helper functions

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};

/// Format a date for display, leaving out the year when it is `current_year`
///
/// # Examples
/// ```ignore
/// format_date(date(2024, 3, 5), 2024) // -> "Mar 5"
/// format_date(date(2023, 3, 5), 2024) // -> "Mar 5, 2023"
/// ```
pub fn format_date(date: NaiveDate, current_year: i32) -> String {
    if date.year() == current_year {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// Parse a front-matter date string and format it with [`format_date`]
pub fn format_date_str(s: &str, current_year: i32) -> Option<String> {
    parse_date_string(s).map(|dt| format_date(dt.date(), current_year))
}

/// The current year in `timezone` (an IANA name), or local time when empty
pub fn current_year(timezone: &str) -> i32 {
    if timezone.is_empty() {
        return Local::now().year();
    }

    match timezone.parse::<chrono_tz::Tz>() {
        Ok(tz) => Utc::now().with_timezone(&tz).year(),
        Err(_) => {
            tracing::warn!("Unknown timezone {:?}, using local time", timezone);
            Local::now().year()
        }
    }
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 keeps the wall-clock date it was written with
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local())
}
