// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;

use crate::categories;
use crate::metrics::compute_metrics;
use crate::models::{Expense, Income, MetricsSnapshot};
use crate::state::AppState;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let out = sub.get_one::<String>("out").unwrap();
            write_transactions_csv(out, &state.expenses, &state.income)?;
            println!("Exported transactions to {}", out);
        }
        Some(("summary", sub)) => {
            let out = sub.get_one::<String>("out").unwrap();
            let today = Utc::now().date_naive();
            let snapshot = compute_metrics(
                &state.expenses,
                &state.income,
                state.monthly_budget,
                today,
            );
            write_summary_csv(out, &snapshot, today)?;
            println!("Exported summary report to {}", out);
        }
        _ => {}
    }
    Ok(())
}

/// One row per expense followed by one row per income entry. Every cell
/// is quoted, matching the format consumers of the original export expect.
pub fn write_transactions_csv(
    out: impl AsRef<Path>,
    expenses: &[Expense],
    income: &[Income],
) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(out.as_ref())?;
    wtr.write_record(["Date", "Type", "Category", "Amount", "Notes"])?;
    for e in expenses {
        wtr.write_record([
            e.date.date_naive().to_string(),
            "Expense".to_string(),
            categories::display_name(&e.category).to_string(),
            e.amount.to_string(),
            e.notes.clone().unwrap_or_default(),
        ])?;
    }
    for i in income {
        wtr.write_record([
            i.date.date_naive().to_string(),
            "Income".to_string(),
            i.source.clone(),
            i.amount.to_string(),
            i.notes.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_summary_csv(
    out: impl AsRef<Path>,
    snapshot: &MetricsSnapshot,
    report_date: NaiveDate,
) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(out.as_ref())?;
    let net = snapshot.total_month_income - snapshot.total_month_expenses;
    wtr.write_record(["Metric", "Value"])?;
    wtr.write_record(["Monthly Budget", &snapshot.monthly_budget.to_string()])?;
    wtr.write_record(["Total Income", &snapshot.total_month_income.to_string()])?;
    wtr.write_record(["Total Expenses", &snapshot.total_month_expenses.to_string()])?;
    wtr.write_record(["Net Income", &net.to_string()])?;
    wtr.write_record(["Remaining Budget", &snapshot.remaining_budget.to_string()])?;
    wtr.write_record(["Report Date", &report_date.to_string()])?;
    wtr.flush()?;
    Ok(())
}
