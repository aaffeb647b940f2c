// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use tempfile::tempdir;

use spendlog::cli;
use spendlog::commands::exporter::{self, write_summary_csv, write_transactions_csv};
use spendlog::metrics::compute_metrics;
use spendlog::models::{Expense, Income};
use spendlog::state::AppState;
use spendlog::store;

fn sample_expense(id: i64, amount: i64, category: &str) -> Expense {
    Expense {
        id,
        amount: Decimal::from(amount),
        category: category.to_string(),
        date: Utc.with_ymd_and_hms(2025, 8, 2, 12, 0, 0).unwrap(),
        notes: Some("weekly run".to_string()),
        is_recurring: false,
    }
}

#[test]
fn transactions_csv_quotes_every_cell_and_resolves_names() {
    let expenses = vec![sample_expense(1, 42, "food")];
    let income = vec![Income {
        id: 2,
        amount: Decimal::from(1200),
        source: "Salary".to_string(),
        date: Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap(),
        notes: None,
    }];

    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");
    write_transactions_csv(&out, &expenses, &income).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "\"Date\",\"Type\",\"Category\",\"Amount\",\"Notes\"");
    assert_eq!(
        lines[1],
        "\"2025-08-02\",\"Expense\",\"Food\",\"42\",\"weekly run\""
    );
    assert_eq!(lines[2], "\"2025-08-01\",\"Income\",\"Salary\",\"1200\",\"\"");
    assert_eq!(lines.len(), 3);
}

#[test]
fn unknown_category_exports_its_raw_id() {
    let expenses = vec![sample_expense(1, 5, "crypto")];

    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");
    write_transactions_csv(&out, &expenses, &[]).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("\"crypto\""));
}

#[test]
fn expense_rows_come_before_income_rows() {
    let expenses = vec![sample_expense(1, 10, "misc"), sample_expense(2, 20, "fun")];
    let income = vec![Income {
        id: 3,
        amount: Decimal::from(50),
        source: "Gift".to_string(),
        date: Utc.with_ymd_and_hms(2025, 8, 10, 0, 0, 0).unwrap(),
        notes: None,
    }];

    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");
    write_transactions_csv(&out, &expenses, &income).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let types: Vec<&str> = contents
        .lines()
        .skip(1)
        .map(|l| l.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(types, ["\"Expense\"", "\"Expense\"", "\"Income\""]);
}

#[test]
fn summary_csv_contains_metric_value_rows() {
    let today = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
    let expenses = vec![sample_expense(1, 750, "rent")];
    let income = vec![Income {
        id: 2,
        amount: Decimal::from(1000),
        source: "Salary".to_string(),
        date: Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap(),
        notes: None,
    }];
    let snapshot = compute_metrics(&expenses, &income, Decimal::from(800), today);

    let dir = tempdir().unwrap();
    let out = dir.path().join("summary.csv");
    write_summary_csv(&out, &snapshot, today).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "\"Metric\",\"Value\"");
    assert_eq!(lines[1], "\"Monthly Budget\",\"800\"");
    assert_eq!(lines[2], "\"Total Income\",\"1000\"");
    assert_eq!(lines[3], "\"Total Expenses\",\"750\"");
    assert_eq!(lines[4], "\"Net Income\",\"250\"");
    assert_eq!(lines[5], "\"Remaining Budget\",\"50\"");
    assert_eq!(lines[6], "\"Report Date\",\"2025-08-20\"");
}

#[test]
fn export_subcommand_writes_through_the_cli_surface() {
    let conn = store::open_in_memory().unwrap();
    let mut state = AppState::load(&conn).unwrap();
    state.expenses.push(sample_expense(1, 42, "food"));

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("from_cli.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "spendlog",
        "export",
        "transactions",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&state, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }
    assert!(out_path.exists());
    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.contains("\"Food\""));
}
