//! Date formatting for info windows.

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime};

/// Soft-failure placeholder for unparseable date strings. Rendered verbatim
/// instead of raising — stale or sloppy producers must not break the batch.
pub const INVALID_DATE: &str = "Invalid date";

/// Verbose date pattern: weekday, date and time (moment.js "llll" style).
const VERBOSE: &str = "%a, %b %-d, %Y %-I:%M %p";

/// Formats a date attribute for display.
///
/// A plain ISO-ish value becomes a verbose localized string. A compound
/// `"<from>/<to>"` value becomes `"From <from> to <to>"` — ISO 8601 dates
/// never contain a slash, so splitting is unambiguous. Anything else
/// (including three or more segments) yields [`INVALID_DATE`].
#[must_use]
pub fn format_date(raw: &str, locale: Locale) -> String {
    let parts: Vec<&str> = raw.split('/').collect();
    match parts.as_slice() {
        [single] => format_single(single, locale),
        [from, to] => format!(
            "From {} to {}",
            format_single(from, locale),
            format_single(to, locale)
        ),
        _ => INVALID_DATE.to_string(),
    }
}

fn format_single(raw: &str, locale: Locale) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format_localized(VERBOSE, locale).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc().format_localized(VERBOSE, locale).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(VERBOSE, locale)
            .to_string();
    }
    INVALID_DATE.to_string()
}
