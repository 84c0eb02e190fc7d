/// Locale used when none is given (BCP-47 form)
pub const DEFAULT_LOCALE: &str = "en-US";

/// Days in one week
pub const DAYS_PER_WEEK: usize = 7;

/// Rows in a month view
pub const WEEKS_PER_MATRIX: usize = 6;

/// Cells in a month view (6 full weeks)
pub const MATRIX_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_MATRIX;

/// Months in one year
pub const MONTHS_PER_YEAR: i64 = 12;

/// A known Sunday (2025-01-05) used as the anchor for weekday names
pub const REFERENCE_SUNDAY: (i32, u32, u32) = (2025, 1, 5);

/// ISO weekday number of Thursday (Monday = 1)
pub(crate) const ISO_THURSDAY: i64 = 4;

/// Explicit parse format: year first, hyphen separated
pub const YEAR_MONTH_DAY: &str = "YYYY-MM-DD";
/// Explicit parse format: day first, slash separated
pub const DAY_MONTH_YEAR: &str = "DD/MM/YYYY";

/// Separator of the `YYYY-MM-DD` format
pub const ISO_SEPARATOR: char = '-';
/// Separator of the `DD/MM/YYYY` format
pub const SLASH_SEPARATOR: char = '/';

/// Pattern token: numeric year
pub const TOKEN_YEAR: &str = "YYYY";
/// Pattern token: 2-digit month
pub const TOKEN_MONTH: &str = "MM";
/// Pattern token: short month name
pub const TOKEN_MONTH_SHORT: &str = "MMM";
/// Pattern token: 2-digit day of month
pub const TOKEN_DAY: &str = "DD";
/// Pattern token: short weekday name
pub const TOKEN_WEEKDAY_SHORT: &str = "ddd";
/// Pattern token: long weekday name
pub const TOKEN_WEEKDAY_LONG: &str = "dddd";

/// Rendering order for pattern tokens (longest first, so `dddd` is never split into `ddd` + `d`)
pub(crate) const RENDER_TOKENS: [&str; 6] = [
    TOKEN_YEAR,
    TOKEN_WEEKDAY_LONG,
    TOKEN_WEEKDAY_SHORT,
    TOKEN_MONTH_SHORT,
    TOKEN_MONTH,
    TOKEN_DAY,
];

/// `toUTCString`-style layout
pub(crate) const UTC_STRING_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
