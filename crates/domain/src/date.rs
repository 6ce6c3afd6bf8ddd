use chrono::prelude::*;
use std::fmt::Display;

/// Parses an ISO-8601 calendar date, tolerating a trailing time component.
/// The previous system stored dates as free text, so values like
/// "2023-03-15T10:30:00" show up in date columns.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_datetime(value).map(|datetime| datetime.date())
}

pub fn parse_datetime(value: &str) -> anyhow::Result<NaiveDateTime> {
    for format in &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime);
        }
    }
    Err(anyhow::Error::msg(value.to_string()))
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month - 1 {
        0 => 31,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        2 => 31,
        3 => 30,
        4 => 31,
        5 => 30,
        6 => 31,
        7 => 31,
        8 => 30,
        9 => 31,
        10 => 30,
        11 => 31,
        _ => panic!("Invalid month"),
    }
}

/// A year-agnostic calendar day used for matching annually recurring
/// events. Ordering is the plain `(month, day)` tuple order, which matches
/// comparing zero-padded "MM-DD" strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> anyhow::Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(anyhow::Error::msg(format!("Invalid month: {}", month)));
        }
        // Feb 29 is a valid year-agnostic day, so the upper bound comes
        // from a leap year
        if day < 1 || day > get_month_length(2000, month) {
            return Err(anyhow::Error::msg(format!("Invalid day: {}", day)));
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl From<NaiveDate> for MonthDay {
    fn from(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
