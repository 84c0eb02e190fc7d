//! Day, month and time-of-day arithmetic with rollover semantics.
//!
//! Every operation returns a new value; inputs are `Copy` and never touched.
//! Components outside their natural range carry into the next unit
//! (day 32 of January is February 1) instead of failing or clamping.

use crate::CalendarDate;
use crate::consts::MONTHS_PER_YEAR;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Builds a date at midnight from a year, a 1-based month and a day of month.
///
/// All components roll over: month 13 is January of the next year, month 0
/// is December of the previous year, day 0 is the last day of the previous
/// month. Returns `None` only when the result is not representable.
///
/// ```
/// use datekit::calendar_date;
/// use chrono::Datelike;
///
/// let d = calendar_date(2025, 2, 30).unwrap();
/// assert_eq!((d.month(), d.day()), (3, 2));
/// ```
pub fn calendar_date(year: i32, month: i32, day: i32) -> Option<CalendarDate> {
    from_components(
        i64::from(year),
        i64::from(month) - 1,
        i64::from(day),
    )
    .map(|date| date.and_time(NaiveTime::MIN))
}

/// Rollover constructor over a 0-based month index.
pub(crate) fn from_components(year: i64, month_index: i64, day: i64) -> Option<NaiveDate> {
    let year = year.checked_add(month_index.div_euclid(MONTHS_PER_YEAR))?;
    let month = month_index.rem_euclid(MONTHS_PER_YEAR);
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month + 1).ok()?,
        1,
    )?;
    first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Clamps an overflowing shift to the edge it ran into.
const fn saturate(forward: bool) -> CalendarDate {
    if forward {
        NaiveDateTime::MAX
    } else {
        NaiveDateTime::MIN
    }
}

/// Shifts `date` by `amount` calendar days, keeping the time of day.
///
/// Saturates at the representable range.
pub fn add_days(date: CalendarDate, amount: i64) -> CalendarDate {
    TimeDelta::try_days(amount)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or_else(|| saturate(amount > 0))
}

/// Shifts `date` by `amount` months.
///
/// The day of month is kept when the target month is long enough; otherwise
/// the surplus days roll into the following month
/// (January 31 + 1 month is March 3, or March 2 in a leap year).
pub fn add_months(date: CalendarDate, amount: i32) -> CalendarDate {
    let month_index = i64::from(date.month0()) + i64::from(amount);
    from_components(
        i64::from(date.year()),
        month_index,
        i64::from(date.day()),
    )
    .map_or_else(|| saturate(amount > 0), |day| day.and_time(date.time()))
}

/// Returns `date` with its time of day set to `hours:minutes:00.000`.
///
/// Out-of-range values roll over: 25 hours is 01:00 on the next day,
/// -1 hours is 23:00 on the previous day.
pub fn merge_date_and_time(date: CalendarDate, hours: i64, minutes: i64) -> CalendarDate {
    let midnight = date.date().and_time(NaiveTime::MIN);
    let offset = TimeDelta::try_hours(hours)
        .zip(TimeDelta::try_minutes(minutes))
        .and_then(|(h, m)| h.checked_add(&m));
    match offset {
        Some(offset) => midnight
            .checked_add_signed(offset)
            .unwrap_or_else(|| saturate(offset > TimeDelta::zero())),
        None => saturate(hours > 0 || (hours == 0 && minutes > 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn ymd(y: i32, m: i32, d: i32) -> CalendarDate {
        calendar_date(y, m, d).unwrap()
    }

    fn ymd_hm(y: i32, m: i32, d: i32, h: u32, min: u32) -> CalendarDate {
        ymd(y, m, d).with_hour(h).unwrap().with_minute(min).unwrap()
    }

    #[test]
    fn test_calendar_date_plain() {
        let d = ymd(2025, 8, 18);
        assert_eq!((d.year(), d.month(), d.day()), (2025, 8, 18));
        assert_eq!(d.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_calendar_date_rollover() {
        assert_eq!(ymd(2025, 13, 1), ymd(2026, 1, 1));
        assert_eq!(ymd(2025, 0, 1), ymd(2024, 12, 1));
        assert_eq!(ymd(2025, 3, 0), ymd(2025, 2, 28));
        assert_eq!(ymd(2024, 3, 0), ymd(2024, 2, 29));
        assert_eq!(ymd(2025, 1, 32), ymd(2025, 2, 1));
        assert_eq!(ymd(2025, -11, 1), ymd(2024, 1, 1));
    }

    #[test]
    fn test_calendar_date_out_of_range() {
        assert!(calendar_date(i32::MAX, 12, 31).is_none());
        assert!(calendar_date(i32::MIN, 1, 1).is_none());
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(ymd(2025, 8, 18), 7), ymd(2025, 8, 25));
        assert_eq!(add_days(ymd(2025, 1, 31), 1), ymd(2025, 2, 1));
        assert_eq!(add_days(ymd(2024, 12, 31), 1), ymd(2025, 1, 1));
        assert_eq!(add_days(ymd(2025, 3, 1), -1), ymd(2025, 2, 28));
        assert_eq!(add_days(ymd(2025, 3, 1), 0), ymd(2025, 3, 1));
    }

    #[test]
    fn test_add_days_keeps_time_and_input() {
        let base = ymd_hm(2025, 8, 18, 14, 30);
        let shifted = add_days(base, 1);
        assert_eq!(shifted, ymd_hm(2025, 8, 19, 14, 30));
        assert_eq!(base, ymd_hm(2025, 8, 18, 14, 30));
    }

    #[test]
    fn test_add_days_saturates() {
        assert_eq!(add_days(ymd(2025, 1, 1), i64::MAX), NaiveDateTime::MAX);
        assert_eq!(add_days(ymd(2025, 1, 1), i64::MIN), NaiveDateTime::MIN);
    }

    #[test]
    fn test_add_months_preserves_day() {
        assert_eq!(add_months(ymd(2025, 1, 15), 1), ymd(2025, 2, 15));
        assert_eq!(add_months(ymd(2025, 11, 30), 2), ymd(2026, 1, 30));
        assert_eq!(add_months(ymd(2025, 3, 31), -12), ymd(2024, 3, 31));
    }

    #[test]
    fn test_add_months_rolls_over() {
        assert_eq!(add_months(ymd(2025, 1, 31), 1), ymd(2025, 3, 3));
        assert_eq!(add_months(ymd(2024, 1, 31), 1), ymd(2024, 3, 2));
        assert_eq!(add_months(ymd(2025, 5, 31), 1), ymd(2025, 7, 1));
        assert_eq!(add_months(ymd(2025, 3, 31), -1), ymd(2025, 3, 3));
    }

    #[test]
    fn test_add_months_keeps_time() {
        assert_eq!(
            add_months(ymd_hm(2025, 8, 18, 9, 5), -8),
            ymd_hm(2024, 12, 18, 9, 5)
        );
    }

    #[test]
    fn test_merge_date_and_time() {
        let base = ymd_hm(2025, 1, 1, 8, 45);
        assert_eq!(merge_date_and_time(base, 14, 30), ymd_hm(2025, 1, 1, 14, 30));
        assert_eq!(merge_date_and_time(base, 0, 0), ymd(2025, 1, 1));
    }

    #[test]
    fn test_merge_date_and_time_clears_seconds() {
        let base = ymd(2025, 1, 1)
            .with_second(42)
            .unwrap()
            .with_nanosecond(123_000_000)
            .unwrap();
        let merged = merge_date_and_time(base, 10, 0);
        assert_eq!(merged.second(), 0);
        assert_eq!(merged.nanosecond(), 0);
    }

    #[test]
    fn test_merge_date_and_time_rollover() {
        let base = ymd(2025, 1, 31);
        assert_eq!(merge_date_and_time(base, 25, 0), ymd_hm(2025, 2, 1, 1, 0));
        assert_eq!(merge_date_and_time(base, 10, 75), ymd_hm(2025, 1, 31, 11, 15));
        assert_eq!(merge_date_and_time(base, -1, 0), ymd_hm(2025, 1, 30, 23, 0));
    }
}
