//! Date/time filters: `timectime` and `filter_datetime`.

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};
use minijinja::value::{Kwargs, Value};
use minijinja::Error;
use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

use super::param;
use crate::error::filter_error;
use crate::value::{coerce_int, display_string};

/// Default output format of `filter_datetime`
pub(crate) const DEFAULT_DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// C `ctime()` layout, English names
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Formats tried, in order, for strings carrying a UTC offset
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y/%m/%d %H:%M:%S%.f %z",
    "%a %b %e %H:%M:%S %z %Y",
];

/// Formats tried, in order, for naive date-times
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%B %d %Y %H:%M:%S",
    "%b %d %Y %H:%M:%S",
    "%a %b %e %H:%M:%S %Y",
    "%A, %B %d, %Y %H:%M:%S",
    "%Y%m%dT%H%M%S",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%m/%d/%Y %I:%M %p",
    "%B %d %Y %I:%M:%S %p",
    "%B %d %Y %I:%M %p",
    "%B %d %Y %H:%M",
    "%d %B %Y %I:%M:%S %p",
    "%d %B %Y %I:%M %p",
    "%d %B %Y %H:%M",
    "%A %B %d %Y %I:%M %p",
    "%A %B %d %Y %H:%M:%S",
    "%A %B %d %Y %H:%M",
];

/// Formats tried, in order, for bare dates (midnight is assumed)
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%A, %B %d, %Y",
    "%A %B %d %Y",
    "%A %d %B %Y",
    "%Y%m%d",
];

/// Day-of-month ordinal suffix: `1st`, `22nd`, `5th`
static ORDINAL_RE: OnceLock<Regex> = OnceLock::new();

fn ordinal_regex() -> &'static Regex {
    ORDINAL_RE.get_or_init(|| Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").expect("valid regex"))
}

/// Loosen human-written dates: drop ordinal suffixes and commas and
/// collapse runs of whitespace.
fn normalize(input: &str) -> String {
    let stripped = ordinal_regex().replace_all(input, "$1");
    stripped
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// A parsed instant, with or without a known offset
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParsedDate {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl ParsedDate {
    /// Local time for a Unix timestamp
    fn from_timestamp(secs: i64, nanos: u32) -> Option<Self> {
        Local
            .timestamp_opt(secs, nanos)
            .single()
            .map(|dt| ParsedDate::Zoned(dt.fixed_offset()))
    }

    /// strftime-style formatting; bad directives are reported, not panicked on
    pub(crate) fn format(&self, fmt: &str) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        match self {
            ParsedDate::Zoned(dt) => write!(out, "{}", dt.format(fmt))?,
            ParsedDate::Naive(dt) => write!(out, "{}", dt.format(fmt))?,
        }
        Ok(out)
    }
}

/// Best-effort parse of a free-form date string
pub(crate) fn parse_fuzzy(input: &str) -> Option<ParsedDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(ParsedDate::Zoned(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(ParsedDate::Zoned(dt));
    }
    if let Some(dt) = ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(ParsedDate::Zoned(dt));
    }

    // A trailing "Z" or "UTC" marks UTC on otherwise naive input
    let (naive_part, utc) = match s
        .strip_suffix('Z')
        .or_else(|| s.strip_suffix(" UTC"))
        .or_else(|| s.strip_suffix(" GMT"))
    {
        Some(rest) => (rest.trim_end(), true),
        None => (s, false),
    };

    let naive = parse_naive(naive_part).or_else(|| parse_naive(&normalize(naive_part)))?;

    Some(if utc {
        ParsedDate::Zoned(naive.and_utc().fixed_offset())
    } else {
        ParsedDate::Naive(naive)
    })
}

/// Resolve a date value: 13-digit integers are epoch milliseconds, 9- and
/// 10-digit integers are epoch seconds, everything else is parsed as text.
pub(crate) fn resolve_date(date: &Value) -> Result<ParsedDate, Error> {
    if let Some(int) = coerce_int(date) {
        let digits = int.to_string().len();
        let parsed = match digits {
            13 => Some(ParsedDate::from_timestamp(
                int.div_euclid(1000),
                (int.rem_euclid(1000) * 1_000_000) as u32,
            )),
            9 | 10 => Some(ParsedDate::from_timestamp(int, 0)),
            _ => None,
        };
        if let Some(parsed) = parsed {
            return parsed
                .ok_or_else(|| filter_error(format!("filter_datetime: timestamp {int} is out of range")));
        }
    }

    let text = display_string(date);
    parse_fuzzy(&text)
        .ok_or_else(|| filter_error(format!("filter_datetime: unable to parse date '{text}'")))
}

/// Parse a date and re-format it.
///
/// Usage: `{{ event.start_time | filter_datetime }}` or
/// `{{ event.start_time | filter_datetime('%d %b %Y') }}`
pub fn filter_datetime(date: Value, fmt: Option<&str>, kwargs: Kwargs) -> Result<String, Error> {
    let fmt = param(fmt, &kwargs, "fmt")?.unwrap_or(DEFAULT_DATETIME_FORMAT);
    kwargs.assert_all_used()?;

    resolve_date(&date)?
        .format(fmt)
        .map_err(|_| filter_error(format!("filter_datetime: invalid format string '{fmt}'")))
}

/// Seconds since the epoch as local time in `ctime()` layout.
///
/// Usage: `{{ alert.created | timectime }}` renders e.g. `Thu Jan  1 00:00:00 1970`
pub fn timectime(seconds: f64) -> Result<String, Error> {
    if !seconds.is_finite() {
        return Err(filter_error("timectime: timestamp must be a finite number"));
    }
    ParsedDate::from_timestamp(seconds.trunc() as i64, 0)
        .ok_or_else(|| filter_error(format!("timectime: timestamp {seconds} is out of range")))?
        .format(CTIME_FORMAT)
        .map_err(|_| filter_error("timectime: failed to format timestamp"))
}

#[cfg(test)]
#[path = "datetime_test.rs"]
mod tests;
