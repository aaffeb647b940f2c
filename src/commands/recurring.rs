// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use rusqlite::Connection;
use serde::Serialize;

use crate::categories;
use crate::state::AppState;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(state, sub)?,
        Some(("rm", sub)) => rm(conn, state, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TemplateRow {
    pub id: i64,
    pub category: String,
    pub amount: String,
    pub notes: String,
    pub last_processed: String,
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let data: Vec<TemplateRow> = state
        .recurring
        .iter()
        .map(|t| TemplateRow {
            id: t.id,
            category: categories::display_name(&t.category).to_string(),
            amount: fmt_amount(&t.amount),
            notes: t.notes.clone().unwrap_or_default(),
            last_processed: t
                .last_processed
                .map(|d| d.date_naive().to_string())
                .unwrap_or_else(|| "never".into()),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.notes.clone(),
                    r.last_processed.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Category", "Amount", "Notes", "Last processed"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(conn: &Connection, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let before = state.recurring.len();
    // Expenses already materialized from this template are kept.
    state.recurring.retain(|t| t.id != id);
    if state.recurring.len() == before {
        return Err(anyhow!("No recurring template with id {}", id));
    }
    state.persist_recurring(conn)?;
    println!("Removed recurring template {}", id);
    Ok(())
}
