//! Unified application error type.
//! All modules (db, core, calendar, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("An identical entry already exists: {0}")]
    DuplicateEntry(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid activity kind: {0}")]
    InvalidActivity(String),

    // ---------------------------
    // Guard violations (illegal transitions)
    // ---------------------------
    #[error("You cannot start your day: {0}")]
    NotIdle(String),

    #[error("You are not working: {0}")]
    NotWorking(String),

    #[error("You are not taking a break: {0}")]
    NotBreaking(String),

    #[error("Cannot record an absence: {0}")]
    DayAlreadyTracked(String),

    // ---------------------------
    // Ledger integrity (corrupted history detected on read)
    // ---------------------------
    #[error("Overlapping break detected on {0}")]
    OverlappingBreak(String),

    #[error("Resume without an open break on {0}")]
    ResumeWithoutBreak(String),

    #[error("Malformed day {0}: unexpected {1} entry")]
    MalformedDay(String, String),

    #[error("No entries found for date {0}")]
    NoEntries(String),

    // ---------------------------
    // Range errors
    // ---------------------------
    #[error("Requested period ends before the tracking epoch {0}")]
    BeforeEpoch(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
