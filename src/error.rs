/// Error type for the fallible operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input string was empty or whitespace only.
    #[error("Empty date string")]
    EmptyInput,

    /// A `YYYY-MM-DD` / `DD/MM/YYYY` input had fewer than three parts.
    #[error("Missing {component} in {input:?}")]
    MissingComponent {
        component: &'static str,
        input: String,
    },

    /// A date component was not a number.
    #[error("Invalid {component} {value:?}: not a number")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },

    /// Free-form input matched none of the known layouts.
    #[error("Unrecognized date string: {0:?}")]
    Unrecognized(String),

    /// Month name could not be resolved to a month.
    #[error("Unknown month name: {0:?}")]
    UnknownMonthName(String),

    /// Locale tag has no locale data.
    #[error("Unknown locale: {0:?}")]
    UnknownLocale(String),

    /// Week start other than 0 (Sunday) or 1 (Monday).
    #[error("Invalid week start: {0} (must be 0 or 1)")]
    InvalidWeekStart(u8),

    /// Result lies outside the representable date range.
    #[error("Date out of range: year {year}, month index {month_index}, day {day}")]
    OutOfRange {
        year: i64,
        month_index: i64,
        day: i64,
    },
}
