// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::metrics::compute_metrics;
use crate::models::MetricsSnapshot;
use crate::state::AppState;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    let snapshot = compute_metrics(
        &state.expenses,
        &state.income,
        state.monthly_budget,
        Utc::now().date_naive(),
    );
    match m.subcommand() {
        Some(("summary", sub)) => summary(&snapshot, sub)?,
        Some(("categories", sub)) => categories(&snapshot, sub)?,
        Some(("trend", sub)) => trend(&snapshot, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(snapshot: &MetricsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, snapshot)? {
        let rows = vec![
            vec!["Monthly budget".into(), fmt_amount(&snapshot.monthly_budget)],
            vec![
                "Expenses (month)".into(),
                fmt_amount(&snapshot.total_month_expenses),
            ],
            vec![
                "Expenses (week)".into(),
                fmt_amount(&snapshot.total_week_expenses),
            ],
            vec![
                "Income (month)".into(),
                fmt_amount(&snapshot.total_month_income),
            ],
            vec![
                "Remaining budget".into(),
                fmt_amount(&snapshot.remaining_budget),
            ],
            vec![
                "Budget used".into(),
                format!("{}%", snapshot.budget_percentage.round_dp(2)),
            ],
            vec![
                "Over budget".into(),
                if snapshot.is_over_budget { "yes".into() } else { "no".into() },
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

fn categories(snapshot: &MetricsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &snapshot.category_totals)? {
        let rows: Vec<Vec<String>> = snapshot
            .category_totals
            .iter()
            .map(|c| vec![c.name.clone(), fmt_amount(&c.value)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn trend(snapshot: &MetricsSnapshot, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &snapshot.trend)? {
        let rows: Vec<Vec<String>> = snapshot
            .trend
            .iter()
            .map(|p| vec![p.label.clone(), fmt_amount(&p.amount)])
            .collect();
        println!("{}", pretty_table(&["Day", "Spent"], rows));
    }
    Ok(())
}
