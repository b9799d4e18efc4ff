//! The event ledger: a timestamp-ordered, append-only table of
//! (activity kind, timestamp) rows. The single source of durable truth.
//!
//! Every query here re-reads the table; nothing is cached between calls.

use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::entry::{Entry, TS_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rusqlite::{Connection, ErrorCode, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Entry> {
    let kind_str: String = row.get("kind")?;
    let ts_str: String = row.get("ts")?;

    let kind = Activity::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidActivity(kind_str.clone())),
        )
    })?;

    let ts = NaiveDateTime::parse_from_str(&ts_str, TS_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    Ok(Entry { kind, ts })
}

/// Append one entry. Commits immediately; a duplicate (kind, ts) pair is
/// rejected by the primary key and surfaced as `DuplicateEntry`.
pub fn append(conn: &Connection, entry: &Entry) -> AppResult<()> {
    let res = conn.execute(
        "INSERT INTO times (kind, ts) VALUES (?1, ?2)",
        params![entry.kind.to_db_str(), entry.ts_str()],
    );

    match res {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == ErrorCode::ConstraintViolation =>
        {
            Err(AppError::DuplicateEntry(format!(
                "{} at {}",
                entry.kind.to_db_str(),
                entry.ts_str()
            )))
        }
        Err(e) => Err(e.into()),
    }
}

/// Kind of the most recent entry, optionally restricted to one calendar day.
pub fn most_recent_kind(
    conn: &Connection,
    scope_date: Option<NaiveDate>,
) -> AppResult<Option<Activity>> {
    let entry = match scope_date {
        Some(date) => {
            let (start, end) = day_window(date);
            let mut stmt = conn.prepare(
                "SELECT kind, ts FROM times
                 WHERE ts >= ?1 AND ts < ?2
                 ORDER BY ts DESC LIMIT 1",
            )?;
            let mut rows = stmt.query_map(
                params![start.format(TS_FORMAT).to_string(), end.format(TS_FORMAT).to_string()],
                map_row,
            )?;
            rows.next().transpose()?
        }
        None => most_recent_entry(conn)?,
    };

    Ok(entry.map(|e| e.kind))
}

/// The most recent entry of the whole ledger, or None when empty.
pub fn most_recent_entry(conn: &Connection) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare("SELECT kind, ts FROM times ORDER BY ts DESC LIMIT 1")?;
    let mut rows = stmt.query_map([], map_row)?;
    Ok(rows.next().transpose()?)
}

/// The most recent entry dated at or before `now`. Future-dated rows (e.g.
/// planned vacation days) do not influence the current tracker state.
pub fn latest_entry_at(conn: &Connection, now: NaiveDateTime) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT kind, ts FROM times WHERE ts <= ?1 ORDER BY ts DESC LIMIT 1",
    )?;
    let mut rows = stmt.query_map(params![now.format(TS_FORMAT).to_string()], map_row)?;
    Ok(rows.next().transpose()?)
}

pub fn most_recent_timestamp(conn: &Connection) -> AppResult<Option<NaiveDateTime>> {
    Ok(most_recent_entry(conn)?.map(|e| e.ts))
}

/// All entries with start ≤ ts < end, in ascending timestamp order.
pub fn entries_in_range(
    conn: &Connection,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT kind, ts FROM times
         WHERE ts >= ?1 AND ts < ?2
         ORDER BY ts ASC",
    )?;

    let rows = stmt.query_map(
        params![start.format(TS_FORMAT).to_string(), end.format(TS_FORMAT).to_string()],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All entries of one calendar day (local midnight to midnight).
pub fn entries_for_day(conn: &Connection, date: NaiveDate) -> AppResult<Vec<Entry>> {
    let (start, end) = day_window(date);
    entries_in_range(conn, start, end)
}

/// Rewrite the sole Leave entry of `date` to Break.
///
/// The one sanctioned historical mutation, used only by the confirmed
/// re-arrival flow. Fails if the day does not hold exactly one Leave.
pub fn correct_leave_to_break(conn: &Connection, date: NaiveDate) -> AppResult<()> {
    let (start, end) = day_window(date);

    let updated = conn.execute(
        "UPDATE times SET kind = 'break'
         WHERE kind = 'leave' AND ts >= ?1 AND ts < ?2",
        params![start.format(TS_FORMAT).to_string(), end.format(TS_FORMAT).to_string()],
    )?;

    if updated != 1 {
        return Err(AppError::Other(format!(
            "expected exactly one leave entry on {}, found {}",
            date, updated
        )));
    }
    Ok(())
}

/// Half-open [midnight, next midnight) window of one calendar day.
pub fn day_window(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_hms_opt(0, 0, 0).unwrap();
    (start, start + TimeDelta::days(1))
}
