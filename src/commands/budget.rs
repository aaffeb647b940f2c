// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use anyhow::anyhow;
use rust_decimal::Decimal;

use crate::metrics::compute_metrics;
use crate::state::AppState;
use crate::utils::{fmt_amount, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            // Zero is legal here; the metrics engine has a defined
            // sentinel for a zero budget.
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            if amount < Decimal::ZERO {
                return Err(anyhow!("budget must not be negative"));
            }
            state.monthly_budget = amount;
            state.persist_budget(conn)?;
            println!("Monthly budget set to {}", fmt_amount(&amount));
        }
        Some(("show", sub)) => show(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = compute_metrics(
        &state.expenses,
        &state.income,
        state.monthly_budget,
        Utc::now().date_naive(),
    );

    if !maybe_print_json(json_flag, jsonl_flag, &snapshot)? {
        let rows = vec![
            vec!["Monthly budget".into(), fmt_amount(&snapshot.monthly_budget)],
            vec![
                "Spent this month".into(),
                fmt_amount(&snapshot.total_month_expenses),
            ],
            vec!["Remaining".into(), fmt_amount(&snapshot.remaining_budget)],
            vec![
                "Used".into(),
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
