//! Date utilities
//!
//! The single home for every date conversion the pipeline needs: parsing the
//! loose formats front matter carries, the ISO-8601 "now" substitute, RFC 2822
//! rendering for feed elements, and `YYYY-MM-DD` rendering for sitemap
//! `lastmod` values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::time::SystemTime;

/// Parse a front matter date string.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, and bare `YYYY-MM-DD`; anything
/// else is not a date. Naive forms are taken as UTC.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Current UTC time as full ISO-8601 with seconds, e.g. `2024-06-15T14:30:45Z`
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render a date string as RFC 2822 for RSS `pubDate`/`lastBuildDate`
pub fn to_rfc2822(s: &str) -> Option<String> {
    parse_date(s).map(|dt| dt.to_rfc2822())
}

/// Current UTC time as RFC 2822
pub fn now_rfc2822() -> String {
    Utc::now().to_rfc2822()
}

/// Render a filesystem timestamp as `YYYY-MM-DD`
pub fn format_ymd(t: SystemTime) -> String {
    let dt: DateTime<Utc> = t.into();
    dt.format("%Y-%m-%d").to_string()
}
