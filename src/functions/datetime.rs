//! Date and time formatting and parsing.
//!
//! Two input families exist: native date-like values, and strings in a
//! fixed ISO-8601 profile. There is no fallback parsing of ambiguous
//! formats; a string either matches the profile or is a typed error.

use std::fmt;
use std::fmt::Write as _;

use chrono::{DateTime, Datelike, FixedOffset, Locale, NaiveDate, NaiveDateTime};

use crate::locale::{month_genitive, BASE_LOCALE};
use crate::value::{RenderError, RenderResult, Value};

/// The placeholder date legacy data sources emit for "no date",
/// rendered in the day-first form reports use.
const DEFAULT_DATE: &str = "01.01.1990";

const DASH: &str = "-";

/// Render a chrono delayed format, turning an invalid pattern or a
/// pattern the value cannot satisfy into a typed error.
fn render_pattern(formatted: impl fmt::Display, pattern: &str) -> RenderResult<String> {
    let mut out = String::new();
    if write!(out, "{}", formatted).is_err() {
        return Err(RenderError::date(format!(
            "cannot format with pattern `{}`",
            pattern
        )));
    }
    Ok(out)
}

/// Format an instant with a pattern in the base locale.
pub fn date_custom_format(date: &DateTime<FixedOffset>, pattern: &str) -> RenderResult<String> {
    render_pattern(date.format_localized(pattern, BASE_LOCALE), pattern)
}

/// Format a local date-time with a pattern in the base locale.
pub fn local_date_time_custom_format(date: &NaiveDateTime, pattern: &str) -> RenderResult<String> {
    render_pattern(date.and_utc().format_localized(pattern, BASE_LOCALE), pattern)
}

/// Parse an ISO calendar date (`2024-03-05`) and reformat it.
pub fn local_date_custom_format(date: &str, pattern: &str) -> RenderResult<String> {
    let parsed = parse_iso_date(date)?;
    render_pattern(parsed.format_localized(pattern, BASE_LOCALE), pattern)
}

/// Parse an ISO local date-time (`2024-03-05T10:15:30`) and reformat
/// it, optionally in an explicit locale.
pub fn format_date_from_local_date_time(
    date: &str,
    pattern: &str,
    locale: Locale,
) -> RenderResult<String> {
    let parsed = parse_iso_date_time(date)?;
    render_pattern(parsed.and_utc().format_localized(pattern, locale), pattern)
}

/// Parse an ISO offset date-time (`2024-03-05T10:15:30+03:00`) into an
/// instant value.
pub fn format_date(date: &str) -> RenderResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(date)
        .map_err(|_| RenderError::date(format!("not an ISO offset date-time: `{}`", date)))
}

/// Render the fixed Russian dated phrase: `«5» января 2024г.`.
pub fn date_full_format(date: &NaiveDate) -> String {
    format!(
        "«{}» {} {}г.",
        date.day(),
        month_genitive(date.month()),
        date.year()
    )
}

/// Replace the default-date placeholder with a dash.
pub fn replace_default_date_with_a_dash(input: &str) -> String {
    if input == DEFAULT_DATE {
        DASH.to_string()
    } else {
        input.to_string()
    }
}

fn parse_iso_date(text: &str) -> RenderResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| RenderError::date(format!("not an ISO calendar date: `{}`", text)))
}

fn parse_iso_date_time(text: &str) -> RenderResult<NaiveDateTime> {
    // Seconds are optional in the ISO local date-time profile.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .map_err(|_| RenderError::date(format!("not an ISO local date-time: `{}`", text)))
}

/// Normalize any date-like value to a calendar date, dropping
/// time-of-day and zone. Unsupported shapes are a hard error.
pub fn to_calendar_date(value: &Value) -> RenderResult<NaiveDate> {
    match value {
        Value::Date(d) => Ok(*d),
        Value::DateTime(dt) => Ok(dt.date()),
        Value::Instant(i) => Ok(i.naive_local().date()),
        Value::Str(s) => parse_iso_date(s).or_else(|_| Ok(format_date(s)?.naive_local().date())),
        v => Err(RenderError::type_mismatch("date-like value", v.type_name())),
    }
}

/// Compare two date-like values of heterogeneous representation by
/// calendar date.
pub fn equals_date(first: &Value, second: &Value) -> RenderResult<bool> {
    Ok(to_calendar_date(first)? == to_calendar_date(second)?)
}
