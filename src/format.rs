//! Token-pattern date formatting.
//!
//! A pattern is first reduced to a set of [`FormatOptions`] by substring
//! checks, then rendered by replacing each token with its field in the
//! resolved style. Because the checks are substring based, `MM` also fires
//! for `MMM` and wins, and `dddd` overrides `ddd`.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_LOCALE, RENDER_TOKENS, TOKEN_DAY, TOKEN_MONTH, TOKEN_MONTH_SHORT, TOKEN_WEEKDAY_LONG,
    TOKEN_WEEKDAY_SHORT, TOKEN_YEAR,
};
use crate::locale::{ChronoLocale, LocaleFormatter};
use crate::types::{MonthStyle, WeekdayStyle};
use crate::CalendarDate;

/// Fields selected by a pattern and the style of each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub year:    bool,
    pub month:   Option<MonthStyle>,
    pub day:     bool,
    pub weekday: Option<WeekdayStyle>,
}

impl FormatOptions {
    /// Resolves the options a pattern asks for.
    pub fn from_pattern(pattern: &str) -> Self {
        let mut options = Self::default();

        if pattern.contains(TOKEN_YEAR) {
            options.year = true;
        }
        if pattern.contains(TOKEN_MONTH) {
            options.month = Some(MonthStyle::TwoDigit);
        } else if pattern.contains(TOKEN_MONTH_SHORT) {
            options.month = Some(MonthStyle::Short);
        }
        if pattern.contains(TOKEN_DAY) {
            options.day = true;
        }
        if pattern.contains(TOKEN_WEEKDAY_SHORT) {
            options.weekday = Some(WeekdayStyle::Short);
        }
        if pattern.contains(TOKEN_WEEKDAY_LONG) {
            options.weekday = Some(WeekdayStyle::Long);
        }

        options
    }

    /// Returns `true` when no field is selected
    pub const fn is_empty(&self) -> bool {
        !self.year && self.month.is_none() && !self.day && self.weekday.is_none()
    }

    /// Renders the field a token stands for, if that field is selected.
    fn render_token<F>(&self, formatter: &F, date: CalendarDate, token: &str) -> Option<String>
    where
        F: LocaleFormatter + ?Sized,
    {
        match token {
            TOKEN_YEAR if self.year => Some(formatter.year(date)),
            TOKEN_MONTH | TOKEN_MONTH_SHORT => self.month.map(|style| formatter.month(date, style)),
            TOKEN_DAY if self.day => Some(formatter.day(date)),
            TOKEN_WEEKDAY_SHORT | TOKEN_WEEKDAY_LONG => {
                self.weekday.map(|style| formatter.weekday(date, style))
            }
            _ => None,
        }
    }
}

/// Formats `date` with a token pattern in the default `en-US` locale.
///
/// ```
/// use datekit::{calendar_date, format_date};
///
/// let d = calendar_date(2025, 8, 18).unwrap();
/// assert_eq!(format_date(d, "YYYY-MM-DD"), "2025-08-18");
/// ```
pub fn format_date(date: CalendarDate, pattern: &str) -> String {
    format_date_in(date, pattern, DEFAULT_LOCALE)
}

/// Formats `date` with a token pattern in the given locale.
///
/// Unknown locales fall back to `en-US`.
pub fn format_date_in(date: CalendarDate, pattern: &str, locale: &str) -> String {
    format_date_with(&ChronoLocale::for_tag(locale), date, pattern)
}

/// Formats `date` with a token pattern through any [`LocaleFormatter`].
///
/// Tokens are matched longest first; text between tokens is kept as is.
/// A pattern that selects no field renders the locale's default date.
pub fn format_date_with<F>(formatter: &F, date: CalendarDate, pattern: &str) -> String
where
    F: LocaleFormatter + ?Sized,
{
    let options = FormatOptions::from_pattern(pattern);
    if options.is_empty() {
        return formatter.short_date(date);
    }

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        let token = RENDER_TOKENS.iter().find(|t| rest.starts_with(**t));
        match token.and_then(|t| options.render_token(formatter, date, t).map(|s| (t, s))) {
            Some((t, rendered)) => {
                out.push_str(&rendered);
                rest = &rest[t.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar_date;

    fn ymd(y: i32, m: i32, d: i32) -> CalendarDate {
        calendar_date(y, m, d).unwrap()
    }

    #[test]
    fn test_options_iso_pattern() {
        let options = FormatOptions::from_pattern("YYYY-MM-DD");
        assert_eq!(
            options,
            FormatOptions {
                year:    true,
                month:   Some(MonthStyle::TwoDigit),
                day:     true,
                weekday: None,
            }
        );
    }

    #[test]
    fn test_options_mm_beats_mmm() {
        // "MMM" contains "MM", so the 2-digit branch always fires first
        let options = FormatOptions::from_pattern("MMM");
        assert_eq!(options.month, Some(MonthStyle::TwoDigit));
    }

    #[test]
    fn test_options_long_weekday_overrides_short() {
        assert_eq!(
            FormatOptions::from_pattern("ddd").weekday,
            Some(WeekdayStyle::Short)
        );
        assert_eq!(
            FormatOptions::from_pattern("dddd").weekday,
            Some(WeekdayStyle::Long)
        );
    }

    #[test]
    fn test_options_empty() {
        assert!(FormatOptions::from_pattern("").is_empty());
        assert!(FormatOptions::from_pattern("hh:mm").is_empty());
        assert!(!FormatOptions::from_pattern("YYYY").is_empty());
    }

    #[test]
    fn test_format_iso() {
        assert_eq!(format_date(ymd(2025, 8, 18), "YYYY-MM-DD"), "2025-08-18");
        assert_eq!(format_date(ymd(2025, 1, 5), "DD/MM/YYYY"), "05/01/2025");
    }

    #[test]
    fn test_format_weekdays() {
        let d = ymd(2025, 8, 18);
        assert_eq!(format_date(d, "ddd DD"), "Mon 18");
        assert_eq!(format_date(d, "dddd, DD"), "Monday, 18");
    }

    #[test]
    fn test_format_mmm_renders_two_digit() {
        assert_eq!(format_date(ymd(2025, 8, 18), "ddd, MMM DD"), "Mon, 08 18");
        // The longest token wins and the leftover "M" stays literal
        assert_eq!(format_date(ymd(2025, 8, 18), "MMMM"), "08M");
    }

    #[test]
    fn test_format_keeps_literals() {
        assert_eq!(
            format_date(ymd(2025, 8, 18), "Year YYYY, day DD!"),
            "Year 2025, day 18!"
        );
        assert_eq!(format_date(ymd(2025, 8, 18), "YYYY年MM月DD日"), "2025年08月18日");
    }

    #[test]
    fn test_format_without_tokens_uses_locale_default() {
        let d = ymd(2025, 8, 18);
        let formatter = ChronoLocale::default();
        assert_eq!(format_date(d, ""), formatter.short_date(d));
        assert_eq!(format_date(d, "hh:mm"), formatter.short_date(d));
    }

    #[test]
    fn test_format_in_locale() {
        let d = ymd(2025, 8, 18);
        assert_eq!(format_date_in(d, "dddd DD", "de-DE"), "Montag 18");
        assert_eq!(format_date_in(d, "dddd DD", "fr-FR"), "lundi 18");
        assert_eq!(format_date_in(d, "dddd DD", "zz-ZZ"), "Monday 18");
    }

    struct Upper;

    impl LocaleFormatter for Upper {
        fn month(&self, _date: CalendarDate, _style: MonthStyle) -> String {
            "MONTH".to_owned()
        }

        fn weekday(&self, _date: CalendarDate, _style: WeekdayStyle) -> String {
            "WEEKDAY".to_owned()
        }

        fn short_date(&self, _date: CalendarDate) -> String {
            "SHORT".to_owned()
        }

        fn time(&self, _date: CalendarDate, _include_seconds: bool) -> String {
            "TIME".to_owned()
        }
    }

    #[test]
    fn test_format_with_custom_formatter() {
        let d = ymd(2025, 8, 18);
        assert_eq!(format_date_with(&Upper, d, "dddd MM YYYY"), "WEEKDAY MONTH 2025");
        assert_eq!(format_date_with(&Upper, d, "x"), "SHORT");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: FormatOptions = serde_json::from_str(r#"{"month":"short"}"#).unwrap();
        assert_eq!(
            options,
            FormatOptions {
                month: Some(MonthStyle::Short),
                ..FormatOptions::default()
            }
        );
    }
}
