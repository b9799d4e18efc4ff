//! Working-day and holiday queries.
//!
//! The aggregators only talk to the `HolidayCalendar` trait so a deployment
//! can plug in whatever regional calendar applies. Implementations must be
//! deterministic: the same date always yields the same answer.

pub mod germany;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

pub trait HolidayCalendar {
    /// A recognized public holiday (weekends excluded).
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Display name of the holiday falling on `date`, if any.
    fn holiday_label(&self, date: NaiveDate) -> Option<String>;

    /// Neither weekend nor holiday.
    fn is_working_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    fn next_working_day_on_or_after(&self, date: NaiveDate) -> NaiveDate {
        let mut d = date;
        while !self.is_working_day(d) {
            d += TimeDelta::days(1);
        }
        d
    }

    /// Count of working days in the inclusive range [start, end].
    fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let mut count = 0;
        let mut d = start;
        while d <= end {
            if self.is_working_day(d) {
                count += 1;
            }
            d += TimeDelta::days(1);
        }
        count
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
