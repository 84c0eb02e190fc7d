use crate::{CalendarDate, DateError, prelude::*};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// One cell of a month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: CalendarDate,
    /// `false` for filler days from the adjacent months
    pub is_current_month: bool,
}

impl CalendarDay {
    pub const fn new(date: CalendarDate, is_current_month: bool) -> Self {
        Self {
            date,
            is_current_month,
        }
    }
}

/// Month argument of the month-matrix generator: a 1-based number or a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub enum MonthInput {
    Number(i32),
    Name(String),
}

impl From<&str> for MonthInput {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<u32> for MonthInput {
    fn from(month: u32) -> Self {
        Self::Number(i32::try_from(month).unwrap_or(i32::MAX))
    }
}

/// How a month is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonthStyle {
    /// `08`
    #[display(fmt = "2-digit")]
    #[serde(rename = "2-digit")]
    TwoDigit,
    /// `Aug`
    #[display(fmt = "short")]
    Short,
}

/// How a weekday is written.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayStyle {
    /// `Mon`
    #[default]
    #[display(fmt = "short")]
    Short,
    /// `Monday`
    #[display(fmt = "long")]
    Long,
    /// `M`
    #[display(fmt = "narrow")]
    Narrow,
}

/// First column of a week.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum WeekStart {
    #[default]
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
}

impl WeekStart {
    /// Number of leading cells to skip before a day with the given
    /// Sunday-based weekday index (0 = Sunday).
    pub const fn offset_of(self, days_from_sunday: u32) -> u32 {
        match self {
            Self::Sunday => days_from_sunday,
            Self::Monday => (days_from_sunday + 6) % 7,
        }
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            other => Err(DateError::InvalidWeekStart(other)),
        }
    }
}

impl From<WeekStart> for u8 {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}
