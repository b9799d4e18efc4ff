//! Schema migrations keyed on `PRAGMA user_version`.
//! Version 0 means an uninitialized database.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Current schema version.
pub const SCHEMA_VERSION: i64 = 1;

/// Create the `times` table with the current schema.
///
/// One immutable row per tracked event; the composite primary key rejects
/// duplicate (kind, ts) pairs at the storage level.
fn create_times_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        BEGIN EXCLUSIVE;

        CREATE TABLE times (
            kind TEXT NOT NULL CHECK(kind IN
                ('arrive','break','resume','leave','sick','vacation','timeoff')),
            ts   TEXT NOT NULL,
            PRIMARY KEY (kind, ts)
        );

        CREATE INDEX idx_times_ts ON times(ts);

        PRAGMA user_version = 1;

        COMMIT;
        "#,
    )?;
    Ok(())
}

fn schema_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Bring the database up to `SCHEMA_VERSION`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let version = schema_version(conn)?;

    match version {
        0 => create_times_table(conn),
        SCHEMA_VERSION => Ok(()),
        v => Err(AppError::Migration(format!(
            "unsupported schema version {} (expected at most {})",
            v, SCHEMA_VERSION
        ))),
    }
}
