// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Field names serialize as camelCase so stored documents stay compatible
// with the original localStorage export format (isRecurring, lastProcessed).

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: i64,
    pub amount: Decimal,
    pub source: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// An expense template that regenerates a concrete expense once per
/// calendar month. `last_processed` is the instant of the most recent
/// materialization check that covered it; absent means never processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub last_processed: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub amount: Decimal,
}

/// Derived statistics over the current calendar month and week.
/// Recomputed from the full record lists on demand, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_month_expenses: Decimal,
    pub total_week_expenses: Decimal,
    pub total_month_income: Decimal,
    pub remaining_budget: Decimal,
    pub budget_percentage: Decimal,
    pub category_totals: Vec<CategoryTotal>,
    pub trend: Vec<TrendPoint>,
    pub is_over_budget: bool,
    pub monthly_budget: Decimal,
}
