//! Transition guard over the ledger.
//!
//! The tracker state is never stored; it is derived from the most recent
//! ledger entry on every call, so independent invocations always agree with
//! the durable history. All writes to the ledger go through this module.
//!
//! Entries dated after the decision instant (planned absences) are ignored
//! when deriving the state, and an absence entry only closes its own day:
//! the morning after a sick day the tracker is Idle again.

use crate::db::ledger;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::entry::Entry;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

/// State derived from the most recent entry at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// No relevant entries, or the latest one closed a day in the past.
    Idle,
    /// Latest entry is Arrive or Resume.
    Working,
    /// Latest entry is Break.
    OnBreak,
    /// Latest entry is a whole-day absence marker for the current day.
    Absent,
}

pub fn current_state(conn: &Connection, now: NaiveDateTime) -> AppResult<TrackerState> {
    let state = match ledger::latest_entry_at(conn, now)? {
        None => TrackerState::Idle,
        Some(last) => match last.kind {
            Activity::Arrive | Activity::Resume => TrackerState::Working,
            Activity::Break => TrackerState::OnBreak,
            Activity::Leave => TrackerState::Idle,
            Activity::Sick | Activity::Vacation | Activity::TimeOff => {
                if last.ts.date() == now.date() {
                    TrackerState::Absent
                } else {
                    TrackerState::Idle
                }
            }
        },
    };
    Ok(state)
}

/// Outcome of `start_day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartDay {
    /// A fresh Arrive was appended at the given instant.
    Started(NaiveDateTime),
    /// The most recent entry is a Leave dated today; nothing was written.
    /// The caller must ask for confirmation and then call `confirm_restart`.
    NeedsConfirmation(NaiveDateTime),
}

/// Start the day: legal from Idle only.
///
/// A same-day Leave is ambiguous (closing was premature?) and is bounced back
/// to the caller instead of being resolved here.
pub fn start_day(conn: &Connection, now: NaiveDateTime) -> AppResult<StartDay> {
    match ledger::latest_entry_at(conn, now)? {
        Some(last) if last.kind == Activity::Leave && last.ts.date() == now.date() => {
            Ok(StartDay::NeedsConfirmation(last.ts))
        }
        Some(last) if !is_closed(&last, now) => Err(not_idle(&last)),
        _ => {
            ledger::append(conn, &Entry::new(Activity::Arrive, now))?;
            Ok(StartDay::Started(now))
        }
    }
}

/// Confirmed re-arrival after a same-day Leave: rewrite that Leave to Break
/// and append a Resume, both inside one transaction.
pub fn confirm_restart(conn: &mut Connection, now: NaiveDateTime) -> AppResult<()> {
    let tx = conn.transaction()?;

    // Re-check under the transaction; another invocation may have moved on.
    match ledger::latest_entry_at(&tx, now)? {
        Some(last) if last.kind == Activity::Leave && last.ts.date() == now.date() => {
            ledger::correct_leave_to_break(&tx, now.date())?;
            ledger::append(&tx, &Entry::new(Activity::Resume, now))?;
        }
        Some(last) => return Err(not_idle(&last)),
        None => {
            return Err(AppError::NotIdle("there is no day to re-open".to_string()));
        }
    }

    tx.commit()?;
    Ok(())
}

/// Take a break: legal from Working only.
pub fn start_break(conn: &Connection, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    if current_state(conn, now)? != TrackerState::Working {
        return Err(AppError::NotWorking(describe_last(conn, now)?));
    }
    ledger::append(conn, &Entry::new(Activity::Break, now))?;
    Ok(now)
}

/// Resume after a break: legal from OnBreak only.
pub fn resume_work(conn: &Connection, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    if current_state(conn, now)? != TrackerState::OnBreak {
        return Err(AppError::NotBreaking(describe_last(conn, now)?));
    }
    ledger::append(conn, &Entry::new(Activity::Resume, now))?;
    Ok(now)
}

/// End the day: legal from Working only.
pub fn end_day(conn: &Connection, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    if current_state(conn, now)? != TrackerState::Working {
        return Err(AppError::NotWorking(describe_last(conn, now)?));
    }
    ledger::append(conn, &Entry::new(Activity::Leave, now))?;
    Ok(now)
}

/// Record a whole-day absence (sick / vacation / time off) for `date`.
///
/// Legal while no day is running and the date holds no entries yet. The
/// marker is stored at midnight; the reconstructor applies the synthetic
/// 08:00 span when the day is read back.
pub fn record_absence(
    conn: &Connection,
    kind: Activity,
    date: NaiveDate,
    now: NaiveDateTime,
) -> AppResult<()> {
    if !kind.is_absence() {
        return Err(AppError::InvalidActivity(kind.to_db_str().to_string()));
    }

    match current_state(conn, now)? {
        TrackerState::Working | TrackerState::OnBreak => {
            return Err(AppError::DayAlreadyTracked(format!(
                "close the running day first ({})",
                describe_last(conn, now)?
            )));
        }
        TrackerState::Idle | TrackerState::Absent => {}
    }

    if !ledger::entries_for_day(conn, date)?.is_empty() {
        return Err(AppError::DayAlreadyTracked(format!(
            "{} already has tracked entries",
            date
        )));
    }

    let (ts, _) = ledger::day_window(date);
    ledger::append(conn, &Entry::new(kind, ts))?;
    Ok(())
}

/// A Leave or absence entry from an earlier day no longer blocks a fresh
/// arrival.
fn is_closed(last: &Entry, now: NaiveDateTime) -> bool {
    match last.kind {
        Activity::Leave => last.ts.date() < now.date(),
        Activity::Sick | Activity::Vacation | Activity::TimeOff => last.ts.date() < now.date(),
        _ => false,
    }
}

fn not_idle(last: &Entry) -> AppError {
    match last.kind {
        Activity::Arrive | Activity::Resume => AppError::NotIdle(format!(
            "you are already working (since {})",
            last.time_str()
        )),
        Activity::Break => AppError::NotIdle(format!(
            "you are on a break (since {})",
            last.time_str()
        )),
        _ => AppError::NotIdle(format!(
            "the day {} is closed with a '{}' entry",
            last.date_str(),
            last.kind.to_db_str()
        )),
    }
}

fn describe_last(conn: &Connection, now: NaiveDateTime) -> AppResult<String> {
    Ok(match ledger::latest_entry_at(conn, now)? {
        None => "the ledger is empty".to_string(),
        Some(e) => format!("last entry is '{}'", e.kind.to_db_str()),
    })
}
