// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::state::{AppState, Theme};
use crate::utils::{fmt_amount, pretty_table};

pub fn handle(conn: &Connection, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let rows = vec![
                vec!["theme".into(), state.theme.to_string()],
                vec![
                    "auto-backup".into(),
                    if state.auto_backup { "on".into() } else { "off".into() },
                ],
                vec!["monthly budget".into(), fmt_amount(&state.monthly_budget)],
            ];
            println!("{}", pretty_table(&["Preference", "Value"], rows));
        }
        Some(("theme", sub)) => {
            let value = sub.get_one::<String>("value").unwrap();
            state.theme = if value == "dark" { Theme::Dark } else { Theme::Light };
            state.persist_theme(conn)?;
            println!("Theme set to {}", state.theme);
        }
        Some(("auto-backup", sub)) => {
            let value = sub.get_one::<String>("value").unwrap();
            state.auto_backup = value == "on";
            state.persist_auto_backup(conn)?;
            println!(
                "Auto-backup {}",
                if state.auto_backup { "enabled" } else { "disabled" }
            );
        }
        _ => {}
    }
    Ok(())
}
