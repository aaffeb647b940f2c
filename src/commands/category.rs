// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::categories::CATEGORIES;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Serialize)]
struct CategoryRow {
    id: &'static str,
    name: &'static str,
    emoji: &'static str,
    color: &'static str,
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let json_flag = sub.get_flag("json");
        let jsonl_flag = sub.get_flag("jsonl");
        let data: Vec<CategoryRow> = CATEGORIES
            .iter()
            .map(|c| CategoryRow {
                id: c.id,
                name: c.name,
                emoji: c.emoji,
                color: c.color,
            })
            .collect();
        if !maybe_print_json(json_flag, jsonl_flag, &data)? {
            let rows: Vec<Vec<String>> = data
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        format!("{} {}", c.emoji, c.name),
                        c.color.to_string(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Id", "Name", "Color"], rows));
        }
    }
    Ok(())
}
