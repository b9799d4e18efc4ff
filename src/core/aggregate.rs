//! Expected vs. actual roll-ups: week, month, year range and cumulative
//! totals. All of them enumerate required working days through the calendar
//! provider and reconstruct each day from the ledger.
//!
//! The epoch and the as-of instant are explicit parameters so reports are
//! reproducible; callers pass `Local::now()` in production.

use crate::calendar::HolidayCalendar;
use crate::core::reconstruct::reconstruct_day;
use crate::db::ledger;
use crate::errors::{AppError, AppResult};
use crate::models::summary::{WorkMonth, WorkTotals, WorkWeek, WorkYear};
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use rusqlite::Connection;

/// Aggregate one month. The expected window runs from the first working day
/// of the month to its last one, clamped so it never starts before the epoch.
pub fn work_month(
    conn: &Connection,
    cal: &dyn HolidayCalendar,
    year: i32,
    month: u32,
    daily_minutes: i64,
    epoch: NaiveDate,
    as_of: NaiveDateTime,
) -> AppResult<WorkMonth> {
    let month_start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(format!("{}-{:02}", year, month)))?;
    let month_end = last_day_of_month(year, month);

    if month_end < epoch {
        return Err(AppError::BeforeEpoch(epoch.to_string()));
    }

    let window_start = month_start.max(epoch);
    let first = cal.next_working_day_on_or_after(window_start);
    let last = last_working_day_on_or_before(cal, month_end, first);

    let mut out = WorkMonth {
        year,
        month,
        expected_days: 0,
        expected_minutes: 0,
        actual_minutes: 0,
        days: Vec::new(),
    };

    let Some(last) = last else {
        // No working day falls inside the clamped window.
        return Ok(out);
    };
    if first > month_end {
        return Ok(out);
    }

    out.expected_days = cal.working_days_between(first, last);
    out.expected_minutes = out.expected_days * daily_minutes;

    let mut day = first;
    while day <= last {
        if cal.is_working_day(day) {
            let entries = ledger::entries_for_day(conn, day)?;
            let workday = reconstruct_day(day, &entries, daily_minutes, as_of)?;
            out.actual_minutes += workday.worked_minutes();
            out.days.push(workday);
        }
        day += TimeDelta::days(1);
    }

    Ok(out)
}

/// Aggregate an inclusive month range of one year. The range is clamped up to
/// the epoch's month when `year` is the epoch year.
pub fn work_year(
    conn: &Connection,
    cal: &dyn HolidayCalendar,
    year: i32,
    from_month: u32,
    to_month: u32,
    daily_minutes: i64,
    epoch: NaiveDate,
    as_of: NaiveDateTime,
) -> AppResult<WorkYear> {
    if !(1..=12).contains(&from_month) || !(1..=12).contains(&to_month) || from_month > to_month {
        return Err(AppError::InvalidMonth(format!(
            "{:02}..{:02}",
            from_month, to_month
        )));
    }
    if year < epoch.year() {
        return Err(AppError::BeforeEpoch(epoch.to_string()));
    }

    let from_month = if year == epoch.year() {
        from_month.max(epoch.month())
    } else {
        from_month
    };
    if from_month > to_month {
        return Err(AppError::BeforeEpoch(epoch.to_string()));
    }

    let mut out = WorkYear {
        year,
        from_month,
        to_month,
        expected_minutes: 0,
        actual_minutes: 0,
        months: Vec::new(),
    };

    for month in from_month..=to_month {
        let wm = work_month(conn, cal, year, month, daily_minutes, epoch, as_of)?;
        out.expected_minutes += wm.expected_minutes;
        out.actual_minutes += wm.actual_minutes;
        out.months.push(wm);
    }

    Ok(out)
}

/// Cumulative totals from the epoch year through `target_year`. Past years
/// are capped at month 12, the as-of year at its last completed month.
pub fn work_totals(
    conn: &Connection,
    cal: &dyn HolidayCalendar,
    target_year: i32,
    daily_minutes: i64,
    epoch: NaiveDate,
    as_of: NaiveDateTime,
) -> AppResult<WorkTotals> {
    if target_year < epoch.year() {
        return Err(AppError::BeforeEpoch(epoch.to_string()));
    }

    let mut out = WorkTotals {
        expected_minutes: 0,
        actual_minutes: 0,
        years: Vec::new(),
    };

    for year in epoch.year()..=target_year {
        let to_month = if year == as_of.date().year() {
            // Only completed months count towards the running total.
            match as_of.date().month() {
                1 => continue,
                m => m - 1,
            }
        } else {
            12
        };
        if year == epoch.year() && epoch.month() > to_month {
            continue;
        }

        let wy = work_year(conn, cal, year, 1, to_month, daily_minutes, epoch, as_of)?;
        out.expected_minutes += wy.expected_minutes;
        out.actual_minutes += wy.actual_minutes;
        out.years.push(wy);
    }

    Ok(out)
}

/// One calendar week starting at `week_start` (a Monday), cut off at the
/// as-of date for running weeks.
pub fn work_week(
    conn: &Connection,
    cal: &dyn HolidayCalendar,
    week_start: NaiveDate,
    daily_minutes: i64,
    as_of: NaiveDateTime,
) -> AppResult<WorkWeek> {
    let week_end = week_start + TimeDelta::days(6);
    let cutoff = week_end.min(as_of.date());

    let mut out = WorkWeek {
        start: week_start,
        expected_days: 0,
        expected_minutes: 0,
        actual_minutes: 0,
        days: Vec::new(),
    };

    if cutoff < week_start {
        return Ok(out);
    }

    let mut day = week_start;
    while day <= cutoff {
        let entries = ledger::entries_for_day(conn, day)?;
        let has_entries = !entries.is_empty();
        if cal.is_working_day(day) {
            out.expected_days += 1;
        }
        // Weekend work still counts towards the actual total.
        if has_entries || cal.is_working_day(day) {
            let workday = reconstruct_day(day, &entries, daily_minutes, as_of)?;
            out.actual_minutes += workday.worked_minutes();
            out.days.push(workday);
        }
        day += TimeDelta::days(1);
    }

    out.expected_minutes = out.expected_days * daily_minutes;
    Ok(out)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.unwrap() - TimeDelta::days(1)
}

/// Latest working day ≤ `end`, searching no further back than `floor`.
fn last_working_day_on_or_before(
    cal: &dyn HolidayCalendar,
    end: NaiveDate,
    floor: NaiveDate,
) -> Option<NaiveDate> {
    let mut d = end;
    while d >= floor {
        if cal.is_working_day(d) {
            return Some(d);
        }
        d -= TimeDelta::days(1);
    }
    None
}
