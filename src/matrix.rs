//! Month-view grid generation.
//!
//! A grid is always 6 weeks (42 cells): the tail of the previous month up
//! to the first day's weekday, the whole target month, then the head of the
//! next month until the grid is full.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::arithmetic::from_components;
use crate::consts::{DAYS_PER_WEEK, MATRIX_CELLS};
use crate::locale::{ChronoLocale, LocaleFormatter};
use crate::types::{CalendarDay, MonthInput, WeekStart};
use crate::{DateError, prelude::*};

/// The 42 cells of one month view, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthMatrix(Vec<CalendarDay>);

impl MonthMatrix {
    /// The six rows of seven days
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.0.chunks(DAYS_PER_WEEK)
    }

    /// Only the cells belonging to the displayed month
    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.0.iter().filter(|cell| cell.is_current_month)
    }

    fn first_current(&self) -> Option<&CalendarDay> {
        self.current_month_days().next()
    }

    /// Year of the displayed month
    pub fn year(&self) -> Option<i32> {
        self.first_current().map(|cell| cell.date.year())
    }

    /// Displayed month, 1-based
    pub fn month(&self) -> Option<u32> {
        self.first_current().map(|cell| cell.date.month())
    }
}

/// Builds the Sunday-first month view for `month` of `year`.
///
/// `month` is a 1-based number (rolling over outside 1..=12) or a month name.
///
/// # Errors
/// Returns `DateError::UnknownMonthName` for unresolvable names and
/// `DateError::OutOfRange` when the grid leaves the representable range.
///
/// ```
/// use datekit::get_month_matrix;
///
/// let grid = get_month_matrix(2025, 8).unwrap();
/// assert_eq!(grid.len(), 42);
/// assert_eq!(grid.current_month_days().count(), 31);
/// ```
pub fn get_month_matrix(year: i32, month: impl Into<MonthInput>) -> Result<MonthMatrix, DateError> {
    get_month_matrix_with(&ChronoLocale::default(), year, month.into(), WeekStart::Sunday)
}

/// Builds the month view with the first column on `week_start`.
///
/// # Errors
/// Same as [`get_month_matrix`].
pub fn get_month_matrix_starting(
    year: i32,
    month: impl Into<MonthInput>,
    week_start: WeekStart,
) -> Result<MonthMatrix, DateError> {
    get_month_matrix_with(&ChronoLocale::default(), year, month.into(), week_start)
}

/// Builds the month view, resolving month names through `formatter`.
///
/// # Errors
/// Same as [`get_month_matrix`].
pub fn get_month_matrix_with<F>(
    formatter: &F,
    year: i32,
    month: MonthInput,
    week_start: WeekStart,
) -> Result<MonthMatrix, DateError>
where
    F: LocaleFormatter + ?Sized,
{
    let month_index = resolve_month_index(formatter, &month)?;
    let out_of_range = || DateError::OutOfRange {
        year: i64::from(year),
        month_index,
        day: 1,
    };

    let first = from_components(i64::from(year), month_index, 1).ok_or_else(out_of_range)?;
    let next_first = from_components(i64::from(year), month_index + 1, 1).ok_or_else(out_of_range)?;
    let total_days = usize::try_from((next_first - first).num_days()).map_err(|_| out_of_range())?;

    let leading = week_start.offset_of(first.weekday().num_days_from_sunday()) as usize;
    let grid_start = first
        .checked_sub_signed(TimeDelta::days(leading as i64))
        .ok_or_else(out_of_range)?;

    let mut cells = Vec::with_capacity(MATRIX_CELLS);
    for (position, date) in grid_start.iter_days().take(MATRIX_CELLS).enumerate() {
        let is_current_month = position >= leading && position < leading + total_days;
        cells.push(CalendarDay::new(date.and_time(NaiveTime::MIN), is_current_month));
    }
    if cells.len() != MATRIX_CELLS {
        return Err(out_of_range());
    }

    trace!(year, month_index, leading, total_days, "month matrix built");
    Ok(MonthMatrix(cells))
}

/// Resolves a month argument to a 0-based month index, which may lie outside 0..12.
///
/// Names are read back through the formatter's parser against a fixed
/// four-digit year; the caller's year may be outside what the parser accepts.
fn resolve_month_index<F>(formatter: &F, month: &MonthInput) -> Result<i64, DateError>
where
    F: LocaleFormatter + ?Sized,
{
    match month {
        MonthInput::Number(n) => Ok(i64::from(*n) - 1),
        MonthInput::Name(name) => {
            let sample = format!("{} 1, {MONTH_NAME_YEAR}", name.trim());
            let resolved = formatter.parse(&sample).map(|date| i64::from(date.month0()));
            debug!(name = %name, ?resolved, "resolving month name");
            resolved.ok_or_else(|| DateError::UnknownMonthName(name.clone()))
        }
    }
}

/// Any year the free-form parser accepts
const MONTH_NAME_YEAR: i32 = 2000;

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = from_components(i64::from(year), i64::from(month), 1)?;
    u32::try_from((next - first).num_days()).ok()
}
