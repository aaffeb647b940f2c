// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Datelike, Utc};

use crate::models::{Expense, RecurringExpense};

/// Marker prepended to the notes of every materialized expense.
pub const RECURRING_MARKER: &str = "[Recurring] ";

/// Result of one materialization pass: the expenses to append and the
/// full template list with `last_processed` advanced where due.
#[derive(Debug, Clone)]
pub struct Materialized {
    pub new_expenses: Vec<Expense>,
    pub templates: Vec<RecurringExpense>,
}

fn is_due(template: &RecurringExpense, now: DateTime<Utc>) -> bool {
    match template.last_processed {
        Some(last) => last.year() != now.year() || last.month() != now.month(),
        None => true,
    }
}

/// Materialize one expense per template that has not yet produced an
/// instance for `now`'s calendar month. Templates already covering the
/// current month pass through untouched, so a second run within the same
/// month emits nothing. New expenses take sequential ids from `next_id`.
pub fn process_recurring(
    templates: &[RecurringExpense],
    now: DateTime<Utc>,
    mut next_id: i64,
) -> Materialized {
    let mut new_expenses = Vec::new();
    let mut updated = Vec::with_capacity(templates.len());

    for template in templates {
        if is_due(template, now) {
            let notes = format!(
                "{}{}",
                RECURRING_MARKER,
                template.notes.as_deref().unwrap_or("")
            );
            new_expenses.push(Expense {
                id: next_id,
                amount: template.amount,
                category: template.category.clone(),
                date: now,
                notes: Some(notes),
                is_recurring: true,
            });
            next_id += 1;

            let mut advanced = template.clone();
            advanced.last_processed = Some(now);
            updated.push(advanced);
        } else {
            updated.push(template.clone());
        }
    }

    Materialized {
        new_expenses,
        templates: updated,
    }
}
