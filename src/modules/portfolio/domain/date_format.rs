use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// Token shown in place of an end date for ongoing engagements.
pub const PRESENT: &str = "Present";

/// `"2025-07-01T00:00:00Z"` -> `"07/2025"`, `None` -> `"Present"`.
///
/// Month and year are taken in the offset written in the string itself; no
/// conversion to local time happens. Plain `YYYY-MM-DD` dates are accepted too.
/// Anything else is echoed back trimmed.
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.map(str::trim).filter(|s| !s.is_empty()) else {
        return PRESENT.to_string();
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return month_year(&ts);
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return format!("{:02}/{}", day.month(), day.year());
    }

    tracing::warn!(value = raw, "unparseable date, showing it verbatim");
    raw.to_string()
}

/// Typed counterpart of [`format_date`].
pub fn format_month_year<Tz: TimeZone>(date: Option<&DateTime<Tz>>) -> String {
    match date {
        Some(ts) => month_year(ts),
        None => PRESENT.to_string(),
    }
}

/// `"MM/YYYY – MM/YYYY"`, with `Present` for an open end.
pub fn format_duration<Tz: TimeZone>(start: &DateTime<Tz>, end: Option<&DateTime<Tz>>) -> String {
    format!("{} – {}", month_year(start), format_month_year(end))
}

fn month_year<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    format!("{:02}/{}", ts.month(), ts.year())
}
