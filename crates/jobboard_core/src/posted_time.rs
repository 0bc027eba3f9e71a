use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Text shown when a posting has no usable timestamp.
pub const RECENTLY_POSTED: &str = "Recently posted";

// `%.f` also accepts a missing fraction.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a backend timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Formats a raw timestamp relative to `now`, e.g. `"3 days ago"`.
pub fn format_posted_time(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(posted_at) => format_elapsed(posted_at, now),
        None => RECENTLY_POSTED.to_string(),
    }
}

/// Formats an already parsed timestamp relative to `now`.
pub fn format_elapsed(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(posted_at);
    let hours = elapsed.num_hours();
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = elapsed.num_days();
    if days < 7 {
        return plural(days, "day");
    }
    let weeks = days / 7;
    if weeks < 4 {
        return plural(weeks, "week");
    }
    // Days 28 and 29 floor to zero months; they read as one month.
    plural((days / 30).max(1), "month")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
