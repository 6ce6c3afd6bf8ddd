use crate::date::{get_month_length, MonthDay};
use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvalidWindowError {
    #[error("Lookahead days: {0} is negative")]
    NegativeLookahead(i64),
}

/// The inclusive date window `[start, start + lookahead_days]` bounding
/// which reminder events are considered due.
#[derive(Debug, Clone)]
pub struct ReminderWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub start_md: MonthDay,
    pub end_md: MonthDay,
    /// Whether the window crosses a December to January year boundary.
    /// When true the month-day membership test is OR-based instead of
    /// AND-based.
    pub wraps: bool,
}

impl ReminderWindow {
    pub fn new(today: NaiveDate, lookahead_days: i64) -> Result<Self, InvalidWindowError> {
        if lookahead_days < 0 {
            return Err(InvalidWindowError::NegativeLookahead(lookahead_days));
        }
        let end = today + Duration::days(lookahead_days);
        let start_md = MonthDay::from(today);
        let end_md = MonthDay::from(end);
        Ok(Self {
            start: today,
            end,
            start_md,
            end_md,
            wraps: start_md > end_md,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether an annually recurring event on `md` has an occurrence inside
    /// the window.
    pub fn contains_month_day(&self, md: MonthDay) -> bool {
        if self.wraps {
            md >= self.start_md || md <= self.end_md
        } else {
            self.start_md <= md && md <= self.end_md
        }
    }

    /// The concrete date of the next occurrence of `md` on or after the
    /// window start. A `md` earlier than the window start belongs to the
    /// next calendar year. Feb 29 rolls back to Feb 28 when the selected
    /// year is not a leap year.
    pub fn next_occurrence(&self, md: MonthDay) -> Option<NaiveDate> {
        let year = if md >= self.start_md {
            self.start.year()
        } else {
            self.start.year() + 1
        };
        let day = md.day().min(get_month_length(year, md.month()));
        NaiveDate::from_ymd_opt(year, md.month(), day)
    }
}
