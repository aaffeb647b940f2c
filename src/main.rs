// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use spendlog::state::AppState;
use spendlog::{backup, cli, commands, recurring, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = store::open_or_init()?;
    let mut state = AppState::load(&conn)?;
    session_start(&conn, &mut state)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", store::store_path()?.display());
        }
        Some(("expense", sub)) => commands::expense::handle(&conn, &mut state, sub)?,
        Some(("income", sub)) => commands::income::handle(&conn, &mut state, sub)?,
        Some(("recurring", sub)) => commands::recurring::handle(&conn, &mut state, sub)?,
        Some(("budget", sub)) => commands::budget::handle(&conn, &mut state, sub)?,
        Some(("category", sub)) => commands::category::handle(sub)?,
        Some(("report", sub)) => commands::report::handle(&state, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&state, sub)?,
        Some(("config", sub)) => commands::config::handle(&conn, &mut state, sub)?,
        Some(("reset", sub)) => commands::reset::handle(&conn, &mut state, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&state)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

/// Session-start work the browser build did on mount: materialize due
/// recurring templates, then run the auto-backup check. Notices go to
/// stderr so machine-readable stdout (`--json`) stays clean; failures in
/// the backup path are logged and never abort the command.
fn session_start(conn: &Connection, state: &mut AppState) -> Result<()> {
    let now = Utc::now();
    let outcome = recurring::process_recurring(&state.recurring, now, state.next_id());
    if !outcome.new_expenses.is_empty() {
        eprintln!(
            "Materialized {} recurring expense(s) for this month",
            outcome.new_expenses.len()
        );
        state.expenses.extend(outcome.new_expenses);
        state.recurring = outcome.templates;
        state.persist_expenses(conn)?;
        state.persist_recurring(conn)?;
    }

    let backed_up = store::data_dir()
        .and_then(|dir| backup::maybe_auto_backup(conn, state, now, &dir));
    match backed_up {
        Ok(Some(path)) => eprintln!("Auto-backup written to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("warning: auto-backup failed: {}", e),
    }
    Ok(())
}
