use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arithmetic::from_components;
use crate::consts::{DAY_MONTH_YEAR, ISO_SEPARATOR, SLASH_SEPARATOR, YEAR_MONTH_DAY};
use crate::locale::{ChronoLocale, LocaleFormatter};
use crate::{CalendarDate, DateError};
use chrono::NaiveTime;

/// Input layouts understood by [`parse_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
    /// `DD/MM/YYYY`
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    /// Anything the locale parser recognizes
    #[serde(other)]
    FreeForm,
}

impl DateFormat {
    /// Maps a format string to a layout; unknown strings are free-form.
    pub fn from_pattern(pattern: &str) -> Self {
        match pattern {
            YEAR_MONTH_DAY => Self::YearMonthDay,
            DAY_MONTH_YEAR => Self::DayMonthYear,
            _ => Self::FreeForm,
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearMonthDay => f.write_str(YEAR_MONTH_DAY),
            Self::DayMonthYear => f.write_str(DAY_MONTH_YEAR),
            Self::FreeForm => f.write_str("free-form"),
        }
    }
}

impl From<&str> for DateFormat {
    fn from(pattern: &str) -> Self {
        Self::from_pattern(pattern)
    }
}

/// Parses `input` according to `format`, returning `None` on any failure.
///
/// `YYYY-MM-DD` and `DD/MM/YYYY` are split on their separator; every other
/// format string hands the input to the free-form parser. Numeric components
/// roll over (`2025-02-30` is March 2).
///
/// ```
/// use datekit::{calendar_date, parse_date};
///
/// assert_eq!(parse_date("18/08/2025", "DD/MM/YYYY"), calendar_date(2025, 8, 18));
/// assert_eq!(parse_date("2025-xx-18", "YYYY-MM-DD"), None);
/// ```
pub fn parse_date(input: &str, format: &str) -> Option<CalendarDate> {
    try_parse_date(input, format)
        .inspect_err(|err| debug!(input, format, %err, "date parse failed"))
        .ok()
}

/// Parses `input` according to `format` with the default locale parser.
///
/// # Errors
/// Returns a `DateError` describing why the input could not be read.
pub fn try_parse_date(input: &str, format: &str) -> Result<CalendarDate, DateError> {
    try_parse_date_with(&ChronoLocale::default(), input, DateFormat::from_pattern(format))
}

/// Parses `input` in the given layout, using `formatter` for free-form input.
///
/// # Errors
/// Returns `DateError::EmptyInput`, `MissingComponent`, `InvalidComponent`,
/// `Unrecognized` or `OutOfRange`.
pub fn try_parse_date_with<F>(
    formatter: &F,
    input: &str,
    format: DateFormat,
) -> Result<CalendarDate, DateError>
where
    F: LocaleFormatter + ?Sized,
{
    if input.trim().is_empty() {
        return Err(DateError::EmptyInput);
    }

    match format {
        DateFormat::YearMonthDay => {
            let [year, month, day] = split_components(input, ISO_SEPARATOR, ["year", "month", "day"])?;
            build(year, month, day)
        }
        DateFormat::DayMonthYear => {
            let [day, month, year] = split_components(input, SLASH_SEPARATOR, ["day", "month", "year"])?;
            build(year, month, day)
        }
        DateFormat::FreeForm => formatter
            .parse(input)
            .ok_or_else(|| DateError::Unrecognized(input.to_owned())),
    }
}

/// Splits into the first three parts and reads each as an integer; extra parts are ignored.
fn split_components(
    input: &str,
    separator: char,
    names: [&'static str; 3],
) -> Result<[i64; 3], DateError> {
    let mut parts = input.split(separator);
    let mut values = [0_i64; 3];
    for (slot, component) in values.iter_mut().zip(names) {
        let raw = parts.next().ok_or_else(|| DateError::MissingComponent {
            component,
            input: input.to_owned(),
        })?;
        *slot = raw.trim().parse().map_err(|_| DateError::InvalidComponent {
            component,
            value: raw.to_owned(),
        })?;
    }
    Ok(values)
}

fn build(year: i64, month: i64, day: i64) -> Result<CalendarDate, DateError> {
    let month_index = month.saturating_sub(1);
    from_components(year, month_index, day)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or(DateError::OutOfRange {
            year,
            month_index,
            day,
        })
}
