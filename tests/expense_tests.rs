// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use spendlog::cli;
use spendlog::commands::{expense, income};
use spendlog::state::AppState;
use spendlog::store;

fn dispatch(conn: &rusqlite::Connection, state: &mut AppState, argv: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("expense", sub)) => expense::handle(conn, state, sub),
        Some(("income", sub)) => income::handle(conn, state, sub),
        _ => panic!("unexpected subcommand"),
    }
}

#[test]
fn expense_add_persists_and_round_trips() {
    let conn = store::open_in_memory().unwrap();
    let mut state = AppState::load(&conn).unwrap();

    dispatch(
        &conn,
        &mut state,
        &[
            "spendlog", "expense", "add", "--amount", "12.50", "--category", "food", "--date",
            "2025-08-02", "--notes", "lunch",
        ],
    )
    .unwrap();

    assert_eq!(state.expenses.len(), 1);
    assert_eq!(state.expenses[0].amount, Decimal::new(1250, 2));
    assert_eq!(state.expenses[0].category, "food");

    let reloaded = AppState::load(&conn).unwrap();
    assert_eq!(reloaded.expenses.len(), 1);
    assert_eq!(reloaded.expenses[0].notes.as_deref(), Some("lunch"));
}

#[test]
fn expense_add_rejects_non_positive_amount() {
    let conn = store::open_in_memory().unwrap();
    let mut state = AppState::load(&conn).unwrap();

    let err = dispatch(
        &conn,
        &mut state,
        &["spendlog", "expense", "add", "--amount", "0", "--category", "food"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("must be positive"));
    assert!(state.expenses.is_empty());
}

#[test]
fn expense_add_rejects_unknown_category() {
    let conn = store::open_in_memory().unwrap();
    let mut state = AppState::load(&conn).unwrap();

    let err = dispatch(
        &conn,
        &mut state,
        &["spendlog", "expense", "add", "--amount", "5", "--category", "crypto"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("unknown category"));
}

#[test]
fn recurring_flag_creates_a_template_covering_this_month() {
    let conn = store::open_in_memory().unwrap();
    let mut state = AppState::load(&conn).unwrap();

    dispatch(
        &conn,
        &mut state,
        &[
            "spendlog", "expense", "add", "--amount", "500", "--category", "rent", "--date",
            "2025-08-01", "--recurring",
        ],
    )
    .unwrap();

    assert_eq!(state.expenses.len(), 1);
    assert!(state.expenses[0].is_recurring);
    assert_eq!(state.recurring.len(), 1);
    // Covered month equals the originating expense's month, so the next
    // materialization pass in the same month skips it.
    assert_eq!(
        state.recurring[0].last_processed,
        Some(state.expenses[0].date)
    );
}

#[test]
fn expense_edit_replaces_in_place_by_id() {
    let conn = store::open_in_memory().unwrap();
    let mut state = AppState::load(&conn).unwrap();

    dispatch(
        &conn,
        &mut state,
        &["spendlog", "expense", "add", "--amount", "10", "--category", "food"],
    )
    .unwrap();
    let id = state.expenses[0].id.to_string();

    dispatch(
        &conn,
        &mut state,
        &["spendlog", "expense", "edit", "--id", &id, "--amount", "15"],
    )
    .unwrap();

    assert_eq!(state.expenses.len(), 1);
    assert_eq!(state.expenses[0].amount, Decimal::from(15));
    assert_eq!(state.expenses[0].id.to_string(), id);
}

#[test]
fn expense_rm_removes_by_id_and_errors_on_missing() {
    let conn = store::open_in_memory().unwrap();
    let mut state = AppState::load(&conn).unwrap();

    dispatch(
        &conn,
        &mut state,
        &["spendlog", "expense", "add", "--amount", "10", "--category", "food"],
    )
    .unwrap();
    let id = state.expenses[0].id.to_string();

    dispatch(&conn, &mut state, &["spendlog", "expense", "rm", "--id", &id]).unwrap();
    assert!(state.expenses.is_empty());

    let err = dispatch(&conn, &mut state, &["spendlog", "expense", "rm", "--id", "99"]).unwrap_err();
    assert!(err.to_string().contains("No expense"));
}

#[test]
fn month_filter_normalizes_unpadded_input() {
    use spendlog::utils::parse_month;

    // Unpadded months must normalize to the %Y-%m form the list
    // filters compare against, not pass through verbatim.
    assert_eq!(parse_month("2025-8").unwrap(), "2025-08");
    assert_eq!(parse_month("2025-08").unwrap(), "2025-08");
    assert_eq!(parse_month("2025-12").unwrap(), "2025-12");
    assert!(parse_month("2025-13").is_err());
    assert!(parse_month("August").is_err());
}

#[test]
fn income_add_rejects_empty_source() {
    let conn = store::open_in_memory().unwrap();
    let mut state = AppState::load(&conn).unwrap();

    let err = dispatch(
        &conn,
        &mut state,
        &["spendlog", "income", "add", "--amount", "100", "--source", "  "],
    )
    .unwrap_err();
    assert!(err.to_string().contains("source"));
    assert!(state.income.is_empty());
}
