use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

/// Synthetic start of day for whole-day absence entries (08:00 local).
pub fn absence_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}

/// A closed break within one working day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pause {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Pause {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// How a day is accounted for.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DayCategory {
    Normal,
    Sick,
    Vacation,
    /// Day taken against accrued surplus hours: expected but credited zero.
    TimeOff,
}

impl DayCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DayCategory::Normal => "work",
            DayCategory::Sick => "sick",
            DayCategory::Vacation => "vacation",
            DayCategory::TimeOff => "time off",
        }
    }
}

/// One reconstructed calendar day. A pure view over the ledger, never stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkDay {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub pauses: Vec<Pause>,
    pub category: DayCategory,
    /// The day end was open and has been substituted with the as-of instant.
    pub open: bool,
}

impl WorkDay {
    /// Synthetic day for an absence category: fixed 08:00 start, one nominal
    /// day length, no pauses.
    pub fn absence(date: NaiveDate, category: DayCategory, daily_minutes: i64) -> Self {
        let start = date.and_time(absence_start());
        Self {
            date,
            start,
            end: start + TimeDelta::minutes(daily_minutes),
            pauses: Vec::new(),
            category,
            open: false,
        }
    }

    /// Placeholder for a required working day without any ledger entries.
    pub fn empty(date: NaiveDate) -> Self {
        let start = date.and_time(absence_start());
        Self {
            date,
            start,
            end: start,
            pauses: Vec::new(),
            category: DayCategory::Normal,
            open: false,
        }
    }

    /// Credited worked time, truncated down to whole minutes.
    ///
    /// Sick and vacation days count in full; a time-off day is expected but
    /// credited zero, producing a one-day deficit against the month.
    pub fn worked_minutes(&self) -> i64 {
        match self.category {
            DayCategory::TimeOff => 0,
            DayCategory::Sick | DayCategory::Vacation => {
                (self.end - self.start).num_minutes()
            }
            DayCategory::Normal => {
                let pause: i64 = self
                    .pauses
                    .iter()
                    .map(|p| p.duration().num_seconds())
                    .sum();
                let present = (self.end - self.start).num_seconds() - pause;
                present / 60
            }
        }
    }
}
