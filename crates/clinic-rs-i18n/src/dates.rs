//! Locale-aware date formatting.
//!
//! [`LocaleDateFormatter`] accepts date values in a handful of fixed textual
//! encodings, dispatched purely on input length, and renders them with a
//! pattern obtained through the translation registry. The pattern strings
//! themselves (`"Y-m-d"`, `"Y-m-d H:i:s"`) go through the catalog lookup so
//! a locale can reorder components and change separators, e.g. by mapping
//! `"Y-m-d"` to `"d/m/Y"`.

use std::fmt::Write as _;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::registry::TranslationRegistry;

/// Pattern for date-only values, overridable per locale.
const DATE_PATTERN: &str = "Y-m-d";
/// Pattern for date-and-time values, overridable per locale.
const DATETIME_PATTERN: &str = "Y-m-d H:i:s";

/// Formats stored date values for display in the active locale.
///
/// # Examples
///
/// ```
/// use clinic_rs_i18n::{LocaleDateFormatter, TranslationRegistry};
///
/// let registry = TranslationRegistry::new("en");
/// let dates = LocaleDateFormatter::new(&registry);
///
/// assert_eq!(dates.format_local_date("20240131"), "2024-01-31");
/// assert_eq!(dates.format_local_date("00000000"), "");
/// assert_eq!(dates.format_local_date("bogus"), "bogus");
/// ```
pub struct LocaleDateFormatter<'a> {
    registry: &'a TranslationRegistry,
}

impl<'a> LocaleDateFormatter<'a> {
    /// Creates a formatter resolving patterns through `registry`.
    pub const fn new(registry: &'a TranslationRegistry) -> Self {
        Self { registry }
    }

    /// Formats `raw` according to its shape:
    ///
    /// | Input | Meaning | Output |
    /// |---|---|---|
    /// | empty | now | current local date/time, datetime pattern |
    /// | 8 chars `YYYYMMDD` | compact date | date pattern, `""` for all zeros |
    /// | 10 chars `YYYY-MM-DD` | ISO date | date pattern, `""` for `0000-00-00` |
    /// | 14 chars `YYYYMMDDhhmmss` | compact datetime | datetime pattern, `""` for all zeros |
    /// | 19 chars `YYYY-MM-DD hh:mm:ss` | ISO datetime | datetime pattern, `""` for the zero sentinel |
    /// | anything else | unrecognized | input unchanged |
    ///
    /// Out-of-range components roll over the way a standard calendar
    /// normalization would (day 32 lands in the next month); inputs that
    /// cannot be read as numbers at all pass through unchanged.
    pub fn format_local_date(&self, raw: &str) -> String {
        match raw.len() {
            0 => self.render(DATETIME_PATTERN, &Local::now().naive_local()),
            8 => {
                if raw == "00000000" {
                    return String::new();
                }
                parse_compact_date(raw).map_or_else(
                    || raw.to_string(),
                    |dt| self.render(DATE_PATTERN, &dt),
                )
            }
            10 => {
                if raw == "0000-00-00" {
                    return String::new();
                }
                parse_iso_date(raw).map_or_else(
                    || raw.to_string(),
                    |dt| self.render(DATE_PATTERN, &dt),
                )
            }
            14 => {
                if raw.bytes().all(|b| b == b'0') {
                    return String::new();
                }
                parse_compact_datetime(raw).map_or_else(
                    || raw.to_string(),
                    |dt| self.render(DATETIME_PATTERN, &dt),
                )
            }
            19 => {
                if raw == "0000-00-00 00:00:00" {
                    return String::new();
                }
                parse_iso_datetime(raw).map_or_else(
                    || raw.to_string(),
                    |dt| self.render(DATETIME_PATTERN, &dt),
                )
            }
            _ => raw.to_string(),
        }
    }

    fn render(&self, pattern: &str, dt: &NaiveDateTime) -> String {
        render_pattern(&self.registry.translate(pattern), dt)
    }
}

/// Renders `dt` according to a date pattern.
///
/// Supported tokens: `Y` `y` (year), `m` `n` (month), `d` `j` (day),
/// `H` `G` (hour), `i` (minute), `s` (second). A backslash escapes the next
/// character; everything else is copied verbatim.
fn render_pattern(pattern: &str, dt: &NaiveDateTime) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            'Y' => {
                let _ = write!(out, "{:04}", dt.year());
            }
            'y' => {
                let _ = write!(out, "{:02}", dt.year().rem_euclid(100));
            }
            'm' => {
                let _ = write!(out, "{:02}", dt.month());
            }
            'n' => {
                let _ = write!(out, "{}", dt.month());
            }
            'd' => {
                let _ = write!(out, "{:02}", dt.day());
            }
            'j' => {
                let _ = write!(out, "{}", dt.day());
            }
            'H' => {
                let _ = write!(out, "{:02}", dt.hour());
            }
            'G' => {
                let _ = write!(out, "{}", dt.hour());
            }
            'i' => {
                let _ = write!(out, "{:02}", dt.minute());
            }
            's' => {
                let _ = write!(out, "{:02}", dt.second());
            }
            other => out.push(other),
        }
    }
    out
}

/// Builds a datetime from components with permissive calendar rollover:
/// month 13 carries into the next year, day 32 into the next month, and
/// hour/minute/second overflow carries into the day.
fn assemble(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Option<NaiveDateTime> {
    let year = year + (month - 1).div_euclid(12);
    let month = (month - 1).rem_euclid(12) + 1;

    let first = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        1,
    )?;
    let date = first.checked_add_signed(Duration::days(day - 1))?;
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::seconds(hour * 3600 + minute * 60 + second))
}

/// Parses a run of ASCII digits; rejects signs, whitespace, and anything
/// non-numeric.
fn digits(s: Option<&str>) -> Option<i64> {
    let s = s?;
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_compact_date(raw: &str) -> Option<NaiveDateTime> {
    let year = digits(raw.get(0..4))?;
    let month = digits(raw.get(4..6))?;
    let day = digits(raw.get(6..8))?;
    assemble(year, month, day, 0, 0, 0)
}

fn parse_iso_date(raw: &str) -> Option<NaiveDateTime> {
    let mut parts = raw.split('-');
    let year = digits(parts.next())?;
    let month = digits(parts.next())?;
    let day = digits(parts.next())?;
    assemble(year, month, day, 0, 0, 0)
}

fn parse_compact_datetime(raw: &str) -> Option<NaiveDateTime> {
    let year = digits(raw.get(0..4))?;
    let month = digits(raw.get(4..6))?;
    let day = digits(raw.get(6..8))?;
    let hour = digits(raw.get(8..10))?;
    let minute = digits(raw.get(10..12))?;
    let second = digits(raw.get(12..14))?;
    assemble(year, month, day, hour, minute, second)
}

fn parse_iso_datetime(raw: &str) -> Option<NaiveDateTime> {
    let (date, time) = raw.split_once(' ')?;
    let mut date_parts = date.split('-');
    let year = digits(date_parts.next())?;
    let month = digits(date_parts.next())?;
    let day = digits(date_parts.next())?;
    let mut time_parts = time.split(':');
    let hour = digits(time_parts.next())?;
    let minute = digits(time_parts.next())?;
    let second = digits(time_parts.next())?;
    assemble(year, month, day, hour, minute, second)
}
