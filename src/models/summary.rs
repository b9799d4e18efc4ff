//! Aggregated views over reconstructed days. Like `WorkDay` these are pure
//! views recomputed on demand; only the ledger is durable.

use super::workday::WorkDay;
use chrono::NaiveDate;
use serde::Serialize;

/// One month of expected vs. actual working time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkMonth {
    pub year: i32,
    pub month: u32,
    pub expected_days: i64,
    pub expected_minutes: i64,
    pub actual_minutes: i64,
    pub days: Vec<WorkDay>,
}

impl WorkMonth {
    pub fn delta_minutes(&self) -> i64 {
        self.actual_minutes - self.expected_minutes
    }
}

/// One calendar week, cut off at the as-of date for running weeks.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkWeek {
    pub start: NaiveDate,
    pub expected_days: i64,
    pub expected_minutes: i64,
    pub actual_minutes: i64,
    pub days: Vec<WorkDay>,
}

impl WorkWeek {
    pub fn delta_minutes(&self) -> i64 {
        self.actual_minutes - self.expected_minutes
    }
}

/// An inclusive month range within one year.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkYear {
    pub year: i32,
    pub from_month: u32,
    pub to_month: u32,
    pub expected_minutes: i64,
    pub actual_minutes: i64,
    pub months: Vec<WorkMonth>,
}

impl WorkYear {
    pub fn delta_minutes(&self) -> i64 {
        self.actual_minutes - self.expected_minutes
    }
}

/// Cumulative totals over consecutive years starting at the epoch year.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkTotals {
    pub expected_minutes: i64,
    pub actual_minutes: i64,
    pub years: Vec<WorkYear>,
}

impl WorkTotals {
    pub fn delta_minutes(&self) -> i64 {
        self.actual_minutes - self.expected_minutes
    }
}
