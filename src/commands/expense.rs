// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use chrono::Utc;
use rusqlite::Connection;
use serde::Serialize;

use crate::categories;
use crate::models::{Expense, RecurringExpense};
use crate::state::AppState;
use crate::utils::{
    date_to_instant, fmt_amount, maybe_print_json, parse_amount, parse_date, parse_month,
    pretty_table, validate_category,
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

fn add(conn: &Connection, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().clone();
    validate_category(&category)?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => date_to_instant(parse_date(s)?),
        None => Utc::now(),
    };
    let notes = sub.get_one::<String>("notes").cloned();
    let recurring = sub.get_flag("recurring");

    let id = state.next_id();
    let expense = Expense {
        id,
        amount,
        category: category.clone(),
        date,
        notes: notes.clone(),
        is_recurring: recurring,
    };
    state.expenses.push(expense);
    state.persist_expenses(conn)?;

    if recurring {
        // The template starts out covering the month of the expense that
        // originated it, so materialization skips it until next month.
        state.recurring.push(RecurringExpense {
            id: state.next_id(),
            amount,
            category: category.clone(),
            date,
            notes,
            last_processed: Some(date),
        });
        state.persist_recurring(conn)?;
    }

    println!(
        "Recorded {} under {} (id {}){}",
        fmt_amount(&amount),
        categories::display_name(&category),
        id,
        if recurring { ", recurring monthly" } else { "" }
    );
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub amount: String,
    pub notes: String,
    pub recurring: bool,
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let limit = sub.get_one::<usize>("limit").copied();

    let mut rows: Vec<&Expense> = state
        .expenses
        .iter()
        .filter(|e| match &month {
            Some(m) => e.date.format("%Y-%m").to_string() == *m,
            None => true,
        })
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(n) = limit {
        rows.truncate(n);
    }

    let data: Vec<ExpenseRow> = rows
        .iter()
        .map(|e| ExpenseRow {
            id: e.id,
            date: e.date.date_naive().to_string(),
            category: categories::display_name(&e.category).to_string(),
            amount: fmt_amount(&e.amount),
            notes: e.notes.clone().unwrap_or_default(),
            recurring: e.is_recurring,
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let table_rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.notes.clone(),
                    if r.recurring { "yes".into() } else { String::new() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Category", "Amount", "Notes", "Recurring"],
                table_rows,
            )
        );
    }
    Ok(())
}

fn edit(conn: &Connection, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let expense = state
        .expenses
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| anyhow!("No expense with id {}", id))?;

    if let Some(s) = sub.get_one::<String>("amount") {
        expense.amount = parse_amount(s)?;
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        validate_category(cat)?;
        expense.category = cat.clone();
    }
    if let Some(s) = sub.get_one::<String>("date") {
        expense.date = date_to_instant(parse_date(s)?);
    }
    if let Some(notes) = sub.get_one::<String>("notes") {
        expense.notes = Some(notes.clone());
    }
    state.persist_expenses(conn)?;
    println!("Updated expense {}", id);
    Ok(())
}

fn rm(conn: &Connection, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let before = state.expenses.len();
    state.expenses.retain(|e| e.id != id);
    if state.expenses.len() == before {
        return Err(anyhow!("No expense with id {}", id));
    }
    state.persist_expenses(conn)?;
    println!("Removed expense {}", id);
    Ok(())
}
