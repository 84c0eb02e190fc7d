use chrono::{NaiveDate, NaiveTime};

use crate::consts::{DAYS_PER_WEEK, REFERENCE_SUNDAY};
use crate::locale::{ChronoLocale, LocaleFormatter};
use crate::types::{WeekStart, WeekdayStyle};
use crate::arithmetic::add_days;

/// The seven weekday names of `locale`, Sunday first unless `week_start` is Monday.
///
/// ```
/// use datekit::{get_weekday_names, WeekStart, WeekdayStyle};
///
/// let names = get_weekday_names("en-US", WeekdayStyle::Short, WeekStart::Monday);
/// assert_eq!(names[0], "Mon");
/// assert_eq!(names[6], "Sun");
/// ```
pub fn get_weekday_names(locale: &str, style: WeekdayStyle, week_start: WeekStart) -> Vec<String> {
    get_weekday_names_with(&ChronoLocale::for_tag(locale), style, week_start)
}

/// The seven weekday names rendered by `formatter`.
pub fn get_weekday_names_with<F>(formatter: &F, style: WeekdayStyle, week_start: WeekStart) -> Vec<String>
where
    F: LocaleFormatter + ?Sized,
{
    let (year, month, day) = REFERENCE_SUNDAY;
    let Some(sunday) = NaiveDate::from_ymd_opt(year, month, day) else {
        return Vec::new();
    };
    let sunday = sunday.and_time(NaiveTime::MIN);

    let mut names: Vec<String> = (0..DAYS_PER_WEEK as i64)
        .map(|offset| formatter.weekday(add_days(sunday, offset), style))
        .collect();

    if week_start == WeekStart::Monday {
        names.rotate_left(1);
    }
    names
}
