//! Locale capability: field rendering and free-form parsing.
//!
//! Formatting code talks to a [`LocaleFormatter`] rather than to a locale
//! library directly, so any internationalization backend can be plugged in.
//! [`ChronoLocale`] is the default backend, built on chrono's POSIX locale
//! tables.

use std::convert::TryFrom;

use chrono::{DateTime, Datelike, Locale, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, warn};

use crate::consts::DEFAULT_LOCALE;
use crate::types::{MonthStyle, WeekdayStyle};
use crate::{CalendarDate, DateError};

/// Renders single date fields and parses date strings for one locale.
pub trait LocaleFormatter {
    /// Numeric year, unpadded (`2025`).
    fn year(&self, date: CalendarDate) -> String {
        date.year().to_string()
    }

    /// Month in the given style.
    fn month(&self, date: CalendarDate, style: MonthStyle) -> String;

    /// Two-digit day of month.
    fn day(&self, date: CalendarDate) -> String {
        format!("{:02}", date.day())
    }

    /// Weekday name in the given style.
    fn weekday(&self, date: CalendarDate, style: WeekdayStyle) -> String;

    /// The locale's default numeric date, used when a pattern selects no field.
    fn short_date(&self, date: CalendarDate) -> String;

    /// Two-digit hour and minute, optionally seconds, in the locale's hour cycle.
    fn time(&self, date: CalendarDate, include_seconds: bool) -> String;

    /// Parses a free-form date string; `None` when nothing matches.
    fn parse(&self, input: &str) -> Option<CalendarDate> {
        parse_free_form(input)
    }
}

/// [`LocaleFormatter`] backed by chrono's `unstable-locales` data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChronoLocale {
    locale: Locale,
}

impl Default for ChronoLocale {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
        }
    }
}

impl ChronoLocale {
    /// Looks up locale data for a tag such as `en-US` or `fr_FR`.
    ///
    /// # Errors
    /// Returns `DateError::UnknownLocale` if no locale data exists for the tag.
    pub fn new(tag: &str) -> Result<Self, DateError> {
        let posix = tag.trim().replace('-', "_");
        Locale::try_from(posix.as_str())
            .map(|locale| Self { locale })
            .map_err(|_| DateError::UnknownLocale(tag.to_owned()))
    }

    /// Like [`ChronoLocale::new`], but falls back to `en-US` for unknown tags.
    pub fn for_tag(tag: &str) -> Self {
        Self::new(tag).unwrap_or_else(|err| {
            warn!(%err, fallback = DEFAULT_LOCALE, "locale not available");
            Self::default()
        })
    }

    /// Returns the underlying chrono locale
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    fn render(&self, date: CalendarDate, fmt: &str) -> String {
        date.and_utc().format_localized(fmt, self.locale).to_string()
    }

    /// Whether the locale's own time layout carries an AM/PM marker.
    fn uses_twelve_hour_clock(&self, date: CalendarDate) -> bool {
        let marker = self.render(date, "%p");
        let marker = marker.trim();
        !marker.is_empty() && self.render(date, "%X").contains(marker)
    }
}

impl LocaleFormatter for ChronoLocale {
    fn month(&self, date: CalendarDate, style: MonthStyle) -> String {
        match style {
            MonthStyle::TwoDigit => format!("{:02}", date.month()),
            MonthStyle::Short => self.render(date, "%b"),
        }
    }

    fn weekday(&self, date: CalendarDate, style: WeekdayStyle) -> String {
        match style {
            WeekdayStyle::Short => self.render(date, "%a"),
            WeekdayStyle::Long => self.render(date, "%A"),
            WeekdayStyle::Narrow => self
                .render(date, "%A")
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
        }
    }

    fn short_date(&self, date: CalendarDate) -> String {
        self.render(date, "%x")
    }

    fn time(&self, date: CalendarDate, include_seconds: bool) -> String {
        let fmt = match (self.uses_twelve_hour_clock(date), include_seconds) {
            (true, true) => "%I:%M:%S %p",
            (true, false) => "%I:%M %p",
            (false, true) => "%H:%M:%S",
            (false, false) => "%H:%M",
        };
        self.render(date, fmt)
    }
}

/// Date-time layouts without an offset, tried in order.
const DATE_TIME_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, tried in order.
const DATE_LAYOUTS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%A, %B %d, %Y",
];

/// Locale-independent parser for the common layouts.
///
/// Offsets (`Z`, `+02:00`, `GMT`) are normalized to UTC wall time.
pub(crate) fn parse_free_form(input: &str) -> Option<CalendarDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_utc());
    }

    let parsed = DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        .or_else(|| {
            DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(s, layout).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        });

    if parsed.is_none() {
        debug!(input = s, "no free-form layout matched");
    }
    parsed
}
