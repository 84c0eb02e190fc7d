use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::consts::ISO_THURSDAY;

/// Predicate marking individual dates as unavailable.
pub type ExcludeFn<'a> = Box<dyn Fn(CalendarDate) -> bool + Send + Sync + 'a>;

/// Bounds and an exclusion predicate for date pickers.
///
/// Any one matching rule disables a date; a missing rule never does.
/// The bounds can be loaded from configuration, the predicate cannot.
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisabledDateRules<'a> {
    /// Dates before this instant are disabled
    pub min: Option<CalendarDate>,
    /// Dates after this instant are disabled
    pub max: Option<CalendarDate>,
    #[serde(skip)]
    pub exclude: Option<ExcludeFn<'a>>,
}

impl<'a> DisabledDateRules<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn min(mut self, min: CalendarDate) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: CalendarDate) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn exclude<P>(mut self, predicate: P) -> Self
    where
        P: Fn(CalendarDate) -> bool + Send + Sync + 'a,
    {
        self.exclude = Some(Box::new(predicate));
        self
    }
}

impl fmt::Debug for DisabledDateRules<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisabledDateRules")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("exclude", &self.exclude.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Checks whether two dates fall on the same calendar day, ignoring time.
pub fn is_same_date(a: CalendarDate, b: CalendarDate) -> bool {
    a.date() == b.date()
}

/// Checks `date` against `rules`: before `min`, after `max`, or excluded.
///
/// Bounds compare full instants, so a `min` of 09:00 disables 08:00 the same day.
pub fn is_date_disabled(date: CalendarDate, rules: &DisabledDateRules<'_>) -> bool {
    if rules.min.is_some_and(|min| date < min) {
        return true;
    }
    if rules.max.is_some_and(|max| date > max) {
        return true;
    }
    rules.exclude.as_ref().is_some_and(|exclude| exclude(date))
}

/// ISO-8601 week number (1..=53) of the day `date` falls on.
///
/// Week 1 is the week holding the year's first Thursday; days early in
/// January may belong to the last week of the previous year and days late
/// in December to week 1 of the next.
pub fn get_week_number(date: CalendarDate) -> u32 {
    let day = date.date();
    let weekday = i64::from(day.weekday().number_from_monday());
    // Move to the Thursday of the same ISO week; its year owns the week
    let thursday = day
        .checked_add_signed(chrono::TimeDelta::days(ISO_THURSDAY - weekday))
        .unwrap_or(day);
    let Some(year_start) = NaiveDate::from_ymd_opt(thursday.year(), 1, 1) else {
        return day.iso_week().week();
    };
    let days = (thursday - year_start).num_days();
    u32::try_from(days / 7 + 1).unwrap_or_else(|_| day.iso_week().week())
}
