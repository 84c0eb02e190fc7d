//! # datekit
//!
//! Small, pure date helpers for calendar user interfaces: day and month
//! arithmetic with rollover, token-pattern formatting, parsing, daily
//! ranges, 6-week month grids, ISO week numbers, weekday names, and
//! date-picker rules.
//!
//! Dates are [`CalendarDate`] values (chrono's zone-less
//! [`NaiveDateTime`](chrono::NaiveDateTime)). Locale-dependent rendering goes
//! through the [`LocaleFormatter`] trait and reading the clock goes through
//! the [`Clock`] trait, so both can be swapped out.
//!
//! ```
//! use datekit::{add_months, calendar_date, format_date, get_month_matrix, get_week_number};
//!
//! let d = calendar_date(2025, 1, 31).unwrap();
//! assert_eq!(format_date(add_months(d, 1), "YYYY-MM-DD"), "2025-03-03");
//! assert_eq!(get_week_number(d), 5);
//!
//! let grid = get_month_matrix(2025, "August").unwrap();
//! assert_eq!(grid.len(), 42);
//! ```

mod arithmetic;
mod clock;
mod compare;
mod consts;
mod error;
mod format;
mod locale;
mod matrix;
mod parse;
mod prelude;
mod range;
mod timing;
mod types;
mod weekday;

pub use arithmetic::{add_days, add_months, calendar_date, merge_date_and_time};
pub use clock::{Clock, FixedClock, SystemClock};
pub use compare::{DisabledDateRules, ExcludeFn, get_week_number, is_date_disabled, is_same_date};
pub use consts::*;
pub use error::DateError;
pub use format::{FormatOptions, format_date, format_date_in, format_date_with};
pub use locale::{ChronoLocale, LocaleFormatter};
pub use matrix::{
    MonthMatrix, days_in_month, get_month_matrix, get_month_matrix_starting,
    get_month_matrix_with,
};
pub use parse::{DateFormat, parse_date, try_parse_date, try_parse_date_with};
pub use range::{DateRange, DateRangeIter, get_date_range};
pub use timing::{CurrentTiming, TimingOptions, get_current_timing, get_current_timing_with};
pub use types::{CalendarDay, MonthInput, MonthStyle, WeekStart, WeekdayStyle};
pub use weekday::{get_weekday_names, get_weekday_names_with};

/// A calendar date with optional time of day, in local wall-clock terms.
pub type CalendarDate = chrono::NaiveDateTime;
