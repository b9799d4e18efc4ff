//! State-machine tests against an in-memory ledger. All timestamps are
//! explicit so the results are deterministic.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use worktrack::core::guard::{self, StartDay, TrackerState};
use worktrack::db::initialize::init_db;
use worktrack::db::ledger;
use worktrack::db::pool::DbPool;
use worktrack::errors::AppError;
use worktrack::models::activity::Activity;
use worktrack::models::entry::Entry;

fn mem_db() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init schema");
    pool
}

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn ledger_len(conn: &Connection) -> usize {
    ledger::entries_in_range(conn, dt(2000, 1, 1, 0, 0), dt(2100, 1, 1, 0, 0))
        .unwrap()
        .len()
}

#[test]
fn empty_ledger_is_idle() {
    let pool = mem_db();
    assert_eq!(
        guard::current_state(&pool.conn, dt(2025, 9, 8, 8, 0)).unwrap(),
        TrackerState::Idle
    );
}

#[test]
fn from_idle_only_start_day_succeeds() {
    let pool = mem_db();
    let now = dt(2025, 9, 8, 9, 0);

    assert!(matches!(
        guard::start_break(&pool.conn, now),
        Err(AppError::NotWorking(_))
    ));
    assert!(matches!(
        guard::resume_work(&pool.conn, now),
        Err(AppError::NotBreaking(_))
    ));
    assert!(matches!(
        guard::end_day(&pool.conn, now),
        Err(AppError::NotWorking(_))
    ));
    assert_eq!(ledger_len(&pool.conn), 0);

    let outcome = guard::start_day(&pool.conn, now).unwrap();
    assert_eq!(outcome, StartDay::Started(now));
    assert_eq!(ledger_len(&pool.conn), 1);
}

#[test]
fn full_day_round_trip() {
    let pool = mem_db();

    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();
    assert_eq!(
        guard::current_state(&pool.conn, dt(2025, 9, 8, 9, 30)).unwrap(),
        TrackerState::Working
    );

    guard::start_break(&pool.conn, dt(2025, 9, 8, 12, 0)).unwrap();
    assert_eq!(
        guard::current_state(&pool.conn, dt(2025, 9, 8, 12, 10)).unwrap(),
        TrackerState::OnBreak
    );

    guard::resume_work(&pool.conn, dt(2025, 9, 8, 12, 30)).unwrap();
    assert_eq!(
        guard::current_state(&pool.conn, dt(2025, 9, 8, 13, 0)).unwrap(),
        TrackerState::Working
    );

    guard::end_day(&pool.conn, dt(2025, 9, 8, 17, 0)).unwrap();
    assert_eq!(
        guard::current_state(&pool.conn, dt(2025, 9, 8, 17, 30)).unwrap(),
        TrackerState::Idle
    );

    assert_eq!(ledger_len(&pool.conn), 4);
}

#[test]
fn start_day_twice_is_not_idle() {
    let pool = mem_db();
    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();

    let err = guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 5)).unwrap_err();
    match err {
        AppError::NotIdle(msg) => assert!(msg.contains("already working")),
        other => panic!("expected NotIdle, got {:?}", other),
    }
    assert_eq!(ledger_len(&pool.conn), 1);
}

#[test]
fn start_day_on_break_is_not_idle() {
    let pool = mem_db();
    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();
    guard::start_break(&pool.conn, dt(2025, 9, 8, 12, 0)).unwrap();

    let err = guard::start_day(&pool.conn, dt(2025, 9, 8, 12, 5)).unwrap_err();
    match err {
        AppError::NotIdle(msg) => assert!(msg.contains("break")),
        other => panic!("expected NotIdle, got {:?}", other),
    }
}

#[test]
fn prior_day_leave_appends_fresh_arrive() {
    let pool = mem_db();
    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();
    guard::end_day(&pool.conn, dt(2025, 9, 8, 17, 0)).unwrap();

    let outcome = guard::start_day(&pool.conn, dt(2025, 9, 9, 8, 45)).unwrap();
    assert_eq!(outcome, StartDay::Started(dt(2025, 9, 9, 8, 45)));

    let entries = ledger::entries_for_day(&pool.conn, NaiveDate::from_ymd_opt(2025, 9, 9).unwrap())
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, Activity::Arrive);
}

#[test]
fn same_day_leave_requires_confirmation_and_rewrites() {
    let mut pool = mem_db();
    let day = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();

    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();
    guard::end_day(&pool.conn, dt(2025, 9, 8, 15, 0)).unwrap();

    // Asking again the same day must not write anything by itself.
    let outcome = guard::start_day(&pool.conn, dt(2025, 9, 8, 16, 0)).unwrap();
    assert_eq!(outcome, StartDay::NeedsConfirmation(dt(2025, 9, 8, 15, 0)));
    assert_eq!(ledger_len(&pool.conn), 2);

    // Confirmed: Leave becomes Break, one Resume is appended.
    guard::confirm_restart(&mut pool.conn, dt(2025, 9, 8, 16, 0)).unwrap();

    let entries = ledger::entries_for_day(&pool.conn, day).unwrap();
    let kinds: Vec<Activity> = entries.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![Activity::Arrive, Activity::Break, Activity::Resume]
    );
    assert_eq!(entries[1].ts, dt(2025, 9, 8, 15, 0));
    assert_eq!(entries[2].ts, dt(2025, 9, 8, 16, 0));
}

#[test]
fn declined_confirmation_is_a_no_op() {
    let pool = mem_db();
    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();
    guard::end_day(&pool.conn, dt(2025, 9, 8, 15, 0)).unwrap();

    // The caller declines by simply not calling confirm_restart.
    let outcome = guard::start_day(&pool.conn, dt(2025, 9, 8, 16, 0)).unwrap();
    assert!(matches!(outcome, StartDay::NeedsConfirmation(_)));
    assert_eq!(ledger_len(&pool.conn), 2);
    assert_eq!(
        ledger::most_recent_kind(&pool.conn, None).unwrap(),
        Some(Activity::Leave)
    );
}

#[test]
fn confirm_restart_rechecks_state() {
    let mut pool = mem_db();
    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();

    // No same-day Leave: the correction must be rejected.
    let err = guard::confirm_restart(&mut pool.conn, dt(2025, 9, 8, 16, 0)).unwrap_err();
    assert!(matches!(err, AppError::NotIdle(_)));
    assert_eq!(ledger_len(&pool.conn), 1);
}

#[test]
fn no_transition_from_absent() {
    let pool = mem_db();
    let day = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
    guard::record_absence(&pool.conn, Activity::Sick, day, dt(2025, 9, 8, 7, 0)).unwrap();

    assert_eq!(
        guard::current_state(&pool.conn, dt(2025, 9, 8, 10, 0)).unwrap(),
        TrackerState::Absent
    );
    assert!(matches!(
        guard::start_day(&pool.conn, dt(2025, 9, 8, 10, 0)),
        Err(AppError::NotIdle(_))
    ));
    assert!(matches!(
        guard::start_break(&pool.conn, dt(2025, 9, 8, 10, 0)),
        Err(AppError::NotWorking(_))
    ));
    assert!(matches!(
        guard::end_day(&pool.conn, dt(2025, 9, 8, 10, 0)),
        Err(AppError::NotWorking(_))
    ));
}

#[test]
fn absence_rejected_on_tracked_day() {
    let pool = mem_db();
    let day = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();

    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();
    guard::end_day(&pool.conn, dt(2025, 9, 8, 17, 0)).unwrap();

    let err =
        guard::record_absence(&pool.conn, Activity::Vacation, day, dt(2025, 9, 8, 18, 0))
            .unwrap_err();
    assert!(matches!(err, AppError::DayAlreadyTracked(_)));
}

#[test]
fn absence_rejected_while_working() {
    let pool = mem_db();
    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();

    let tomorrow = NaiveDate::from_ymd_opt(2025, 9, 9).unwrap();
    let err =
        guard::record_absence(&pool.conn, Activity::TimeOff, tomorrow, dt(2025, 9, 8, 10, 0))
            .unwrap_err();
    assert!(matches!(err, AppError::DayAlreadyTracked(_)));
}

#[test]
fn day_after_an_absence_is_idle_again() {
    let pool = mem_db();
    let monday = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
    guard::record_absence(&pool.conn, Activity::Sick, monday, dt(2025, 9, 8, 7, 0)).unwrap();

    assert_eq!(
        guard::current_state(&pool.conn, dt(2025, 9, 9, 8, 0)).unwrap(),
        TrackerState::Idle
    );
    let outcome = guard::start_day(&pool.conn, dt(2025, 9, 9, 8, 45)).unwrap();
    assert_eq!(outcome, StartDay::Started(dt(2025, 9, 9, 8, 45)));
}

#[test]
fn planned_absence_does_not_block_today() {
    let pool = mem_db();
    let next_monday = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
    guard::record_absence(&pool.conn, Activity::Vacation, next_monday, dt(2025, 9, 8, 7, 0))
        .unwrap();

    // The planned vacation sits in the future; today still works normally.
    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();
    guard::end_day(&pool.conn, dt(2025, 9, 8, 17, 0)).unwrap();
    assert_eq!(ledger_len(&pool.conn), 3);
}

#[test]
fn duplicate_entry_is_rejected() {
    let pool = mem_db();
    let entry = Entry::new(Activity::Arrive, dt(2025, 9, 8, 9, 0));

    ledger::append(&pool.conn, &entry).unwrap();
    let err = ledger::append(&pool.conn, &entry).unwrap_err();
    assert!(matches!(err, AppError::DuplicateEntry(_)));
    assert_eq!(ledger_len(&pool.conn), 1);
}

#[test]
fn most_recent_kind_scoped_to_day() {
    let pool = mem_db();
    guard::start_day(&pool.conn, dt(2025, 9, 8, 9, 0)).unwrap();
    guard::end_day(&pool.conn, dt(2025, 9, 8, 17, 0)).unwrap();

    let monday = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2025, 9, 9).unwrap();

    assert_eq!(
        ledger::most_recent_kind(&pool.conn, Some(monday)).unwrap(),
        Some(Activity::Leave)
    );
    assert_eq!(ledger::most_recent_kind(&pool.conn, Some(tuesday)).unwrap(), None);
    assert_eq!(
        ledger::most_recent_timestamp(&pool.conn).unwrap(),
        Some(dt(2025, 9, 8, 17, 0))
    );
}
