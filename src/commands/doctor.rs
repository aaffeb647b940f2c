// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::categories;
use crate::state::AppState;
use crate::utils::pretty_table;

/// Stored data is only validated at the input boundary, so edits made
/// out-of-band can drift. Aggregation deliberately keeps the original
/// semantics (unknown categories count toward totals but fall out of the
/// category breakdown); this report is where that drift becomes visible.
pub fn handle(state: &AppState) -> Result<()> {
    let mut rows = Vec::new();

    for e in &state.expenses {
        if categories::category_by_id(&e.category).is_none() {
            rows.push(vec![
                "unknown_category".to_string(),
                format!("expense {} ('{}')", e.id, e.category),
            ]);
        }
        if e.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".to_string(),
                format!("expense {} ({})", e.id, e.amount),
            ]);
        }
    }
    for t in &state.recurring {
        if categories::category_by_id(&t.category).is_none() {
            rows.push(vec![
                "unknown_category".to_string(),
                format!("recurring template {} ('{}')", t.id, t.category),
            ]);
        }
    }
    for i in &state.income {
        if i.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".to_string(),
                format!("income {} ({})", i.id, i.amount),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
