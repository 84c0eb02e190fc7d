//! Snapshot of the current date and time in several representations.

use chrono::{Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::consts::{DEFAULT_LOCALE, UTC_STRING_FORMAT};
use crate::locale::{ChronoLocale, LocaleFormatter};
use crate::types::WeekdayStyle;

/// Options for [`get_current_timing`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimingOptions {
    /// Locale for the weekday name and time string
    pub locale: String,
    /// Whether the time string carries seconds
    pub include_seconds: bool,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            include_seconds: true,
        }
    }
}

impl TimingOptions {
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub const fn with_seconds(mut self, include_seconds: bool) -> Self {
        self.include_seconds = include_seconds;
        self
    }
}

/// Current date and time, broken down and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrentTiming {
    /// Local year
    pub year: i32,
    /// Local month, 1-based
    pub month: u32,
    /// Local day of month
    pub date: u32,
    /// Long weekday name in the requested locale
    pub day: String,
    /// Local time of day in the requested locale
    pub time: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// `2025-08-18T12:30:15.000Z`
    pub iso: String,
    /// `Mon, 18 Aug 2025 12:30:15 GMT`
    pub utc: String,
}

/// Takes a snapshot of the system clock.
pub fn get_current_timing(options: &TimingOptions) -> CurrentTiming {
    get_current_timing_with(&SystemClock, options)
}

/// Takes a snapshot of the given clock.
pub fn get_current_timing_with<C>(clock: &C, options: &TimingOptions) -> CurrentTiming
where
    C: Clock + ?Sized,
{
    let now = clock.now();
    let local = now.naive_local();
    let utc = now.with_timezone(&Utc);
    let formatter = ChronoLocale::for_tag(&options.locale);

    CurrentTiming {
        year: local.year(),
        month: local.month(),
        date: local.day(),
        day: formatter.weekday(local, WeekdayStyle::Long),
        time: formatter.time(local, options.include_seconds),
        timestamp: now.timestamp_millis(),
        iso: utc.to_rfc3339_opts(SecondsFormat::Millis, true),
        utc: utc.format(UTC_STRING_FORMAT).to_string(),
    }
}
