//! Day reconstruction: turn one calendar day's ledger entries into a
//! `WorkDay`. This is the single day-level algorithm; every view (day, week,
//! month, year) is built on top of it.

use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::entry::Entry;
use crate::models::workday::{DayCategory, Pause, WorkDay};
use chrono::{NaiveDate, NaiveDateTime};

/// Rebuild one day from its entries (ascending timestamp order expected).
///
/// `daily_minutes` sizes the synthetic span of absence days; `as_of` closes a
/// still-open day for this computation only, nothing is written back.
pub fn reconstruct_day(
    date: NaiveDate,
    entries: &[Entry],
    daily_minutes: i64,
    as_of: NaiveDateTime,
) -> AppResult<WorkDay> {
    let Some(first) = entries.first() else {
        return Ok(WorkDay::empty(date));
    };

    // A whole-day absence marker replaces any event walk.
    if let Some(category) = absence_category(first.kind) {
        return Ok(WorkDay::absence(date, category, daily_minutes));
    }

    let mut start: Option<NaiveDateTime> = None;
    let mut end: Option<NaiveDateTime> = None;
    let mut open_pause: Option<NaiveDateTime> = None;
    let mut pauses: Vec<Pause> = Vec::new();

    for entry in entries {
        if end.is_some() {
            // Nothing may follow the Leave; the guard never writes this.
            return Err(malformed(date, entry));
        }

        match entry.kind {
            Activity::Arrive => {
                if start.is_some() {
                    return Err(malformed(date, entry));
                }
                start = Some(entry.ts);
            }
            Activity::Break => {
                if start.is_none() {
                    return Err(malformed(date, entry));
                }
                if open_pause.is_some() {
                    return Err(AppError::OverlappingBreak(date.to_string()));
                }
                open_pause = Some(entry.ts);
            }
            Activity::Resume => {
                if let Some(pause_start) = open_pause.take() {
                    pauses.push(Pause {
                        start: pause_start,
                        end: entry.ts,
                    });
                } else if start.is_none() {
                    // Day opened by a Resume: the re-arrival flow after a
                    // corrected same-day Leave.
                    start = Some(entry.ts);
                } else {
                    return Err(AppError::ResumeWithoutBreak(date.to_string()));
                }
            }
            Activity::Leave => {
                if start.is_none() || open_pause.is_some() {
                    return Err(malformed(date, entry));
                }
                end = Some(entry.ts);
            }
            Activity::Sick | Activity::Vacation | Activity::TimeOff => {
                return Err(malformed(date, entry));
            }
        }
    }

    let start = start.ok_or_else(|| malformed(date, first))?;

    // Open day: close it at the as-of instant. An open pause contributes
    // nothing yet, so the effective end is where the pause began.
    let (end, open) = match end {
        Some(e) => (e, false),
        None => match open_pause {
            Some(pause_start) => (pause_start, true),
            None => (as_of.max(start), true),
        },
    };

    Ok(WorkDay {
        date,
        start,
        end,
        pauses,
        category: DayCategory::Normal,
        open,
    })
}

fn absence_category(kind: Activity) -> Option<DayCategory> {
    match kind {
        Activity::Sick => Some(DayCategory::Sick),
        Activity::Vacation => Some(DayCategory::Vacation),
        Activity::TimeOff => Some(DayCategory::TimeOff),
        _ => None,
    }
}

fn malformed(date: NaiveDate, entry: &Entry) -> AppError {
    AppError::MalformedDay(date.to_string(), entry.kind.to_db_str().to_string())
}
