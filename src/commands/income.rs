// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use chrono::Utc;
use rusqlite::Connection;
use serde::Serialize;

use crate::models::Income;
use crate::state::AppState;
use crate::utils::{
    date_to_instant, fmt_amount, maybe_print_json, parse_amount, parse_date, parse_month,
    pretty_table, ValidationError,
};

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("edit", sub)) => edit(conn, state, sub)?,
        Some(("rm", sub)) => rm(conn, state, sub)?,
        _ => {}
    }
    Ok(())
}

fn non_empty_source(s: &str) -> Result<String> {
    if s.trim().is_empty() {
        return Err(ValidationError::EmptySource.into());
    }
    Ok(s.to_string())
}

fn add(conn: &Connection, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let source = non_empty_source(sub.get_one::<String>("source").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => date_to_instant(parse_date(s)?),
        None => Utc::now(),
    };
    let notes = sub.get_one::<String>("notes").cloned();

    let id = state.next_id();
    state.income.push(Income {
        id,
        amount,
        source: source.clone(),
        date,
        notes,
    });
    state.persist_income(conn)?;
    println!("Recorded {} from '{}' (id {})", fmt_amount(&amount), source, id);
    Ok(())
}

#[derive(Serialize)]
pub struct IncomeRow {
    pub id: i64,
    pub date: String,
    pub source: String,
    pub amount: String,
    pub notes: String,
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let limit = sub.get_one::<usize>("limit").copied();

    let mut rows: Vec<&Income> = state
        .income
        .iter()
        .filter(|i| match &month {
            Some(m) => i.date.format("%Y-%m").to_string() == *m,
            None => true,
        })
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(n) = limit {
        rows.truncate(n);
    }

    let data: Vec<IncomeRow> = rows
        .iter()
        .map(|i| IncomeRow {
            id: i.id,
            date: i.date.date_naive().to_string(),
            source: i.source.clone(),
            amount: fmt_amount(&i.amount),
            notes: i.notes.clone().unwrap_or_default(),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let table_rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.source.clone(),
                    r.amount.clone(),
                    r.notes.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Source", "Amount", "Notes"], table_rows)
        );
    }
    Ok(())
}

fn edit(conn: &Connection, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let entry = state
        .income
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| anyhow!("No income entry with id {}", id))?;

    if let Some(s) = sub.get_one::<String>("amount") {
        entry.amount = parse_amount(s)?;
    }
    if let Some(s) = sub.get_one::<String>("source") {
        entry.source = non_empty_source(s)?;
    }
    if let Some(s) = sub.get_one::<String>("date") {
        entry.date = date_to_instant(parse_date(s)?);
    }
    if let Some(notes) = sub.get_one::<String>("notes") {
        entry.notes = Some(notes.clone());
    }
    state.persist_income(conn)?;
    println!("Updated income entry {}", id);
    Ok(())
}

fn rm(conn: &Connection, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let before = state.income.len();
    state.income.retain(|i| i.id != id);
    if state.income.len() == before {
        return Err(anyhow!("No income entry with id {}", id));
    }
    state.persist_income(conn)?;
    println!("Removed income entry {}", id);
    Ok(())
}
