use std::iter::FusedIterator;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::{CalendarDate, prelude::*};

/// Inclusive daily range between two dates.
///
/// Iterating yields `start`, `start + 1 day`, ... for as long as the value
/// is not after `end`. A range whose start is after its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

impl DateRange {
    /// Creates a range; `start > end` is allowed and yields nothing.
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns `true` when the range yields no dates
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of dates the range yields
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let days = (self.end - self.start).num_days();
        usize::try_from(days).map_or(usize::MAX, |d| d.saturating_add(1))
    }

    /// Checks whether `date` lies between the bounds (inclusive).
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Returns an iterator over the days of the range
    pub const fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.start),
            end:  self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = CalendarDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = CalendarDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<CalendarDate>,
    end:  CalendarDate,
}

impl Iterator for DateRangeIter {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end)?;
        // Stops at the edge of the representable range
        self.next = current.checked_add_signed(TimeDelta::days(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |next| DateRange::new(next, self.end).len());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl FusedIterator for DateRangeIter {}

/// Every day from `start` to `end`, both inclusive, one day apart.
///
/// Returns an empty vector when `start` is after `end`.
pub fn get_date_range(start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
    DateRange::new(start, end).into_iter().collect()
}
