// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use tempfile::tempdir;

use spendlog::backup::maybe_auto_backup;
use spendlog::models::Expense;
use spendlog::state::{AppState, K_LAST_BACKUP};
use spendlog::store;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 20, 10, 0, 0).unwrap()
}

fn state_with_data(conn: &rusqlite::Connection, auto_backup: bool) -> AppState {
    let mut state = AppState::load(conn).unwrap();
    state.auto_backup = auto_backup;
    state.expenses.push(Expense {
        id: 1,
        amount: Decimal::from(42),
        category: "food".to_string(),
        date: Utc.with_ymd_and_hms(2025, 8, 2, 12, 0, 0).unwrap(),
        notes: None,
        is_recurring: false,
    });
    state
}

#[test]
fn disabled_auto_backup_writes_nothing() {
    let conn = store::open_in_memory().unwrap();
    let state = state_with_data(&conn, false);
    let dir = tempdir().unwrap();

    let written = maybe_auto_backup(&conn, &state, now(), dir.path()).unwrap();
    assert!(written.is_none());
    let last: Option<DateTime<Utc>> = store::get(&conn, K_LAST_BACKUP, None).unwrap();
    assert!(last.is_none());
}

#[test]
fn first_backup_writes_and_records_the_time() {
    let conn = store::open_in_memory().unwrap();
    let state = state_with_data(&conn, true);
    let dir = tempdir().unwrap();

    let written = maybe_auto_backup(&conn, &state, now(), dir.path()).unwrap();
    let path = written.expect("first run should back up");
    assert_eq!(path, dir.path().join("expenses_2025-08-20.csv"));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("\"Date\",\"Type\",\"Category\",\"Amount\",\"Notes\""));
    assert!(contents.contains("\"Food\""));

    let last: Option<DateTime<Utc>> = store::get(&conn, K_LAST_BACKUP, None).unwrap();
    assert_eq!(last, Some(now()));
}

#[test]
fn recent_backup_suppresses_the_next_run() {
    let conn = store::open_in_memory().unwrap();
    let state = state_with_data(&conn, true);
    let dir = tempdir().unwrap();

    maybe_auto_backup(&conn, &state, now(), dir.path()).unwrap();
    let two_days = now() + Duration::days(2);
    let written = maybe_auto_backup(&conn, &state, two_days, dir.path()).unwrap();
    assert!(written.is_none());
    // The recorded time is untouched by a suppressed run.
    let last: Option<DateTime<Utc>> = store::get(&conn, K_LAST_BACKUP, None).unwrap();
    assert_eq!(last, Some(now()));
}

#[test]
fn stale_backup_triggers_again_and_advances_the_time() {
    let conn = store::open_in_memory().unwrap();
    let state = state_with_data(&conn, true);
    let dir = tempdir().unwrap();

    maybe_auto_backup(&conn, &state, now(), dir.path()).unwrap();
    let four_days = now() + Duration::days(4);
    let written = maybe_auto_backup(&conn, &state, four_days, dir.path()).unwrap();
    assert_eq!(
        written,
        Some(dir.path().join("expenses_2025-08-24.csv"))
    );
    let last: Option<DateTime<Utc>> = store::get(&conn, K_LAST_BACKUP, None).unwrap();
    assert_eq!(last, Some(four_days));
}
