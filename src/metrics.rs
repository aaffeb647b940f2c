// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;

use crate::categories::CATEGORIES;
use crate::models::{CategoryTotal, Expense, Income, MetricsSnapshot, TrendPoint};

const OVER_BUDGET_THRESHOLD: u32 = 90;

/// Zero-indexed, month-relative week bucket: days 1-7 are week 0, 8-14
/// week 1, and so on. Resets at the start of every calendar month; this
/// is deliberately not an ISO week.
pub fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7
}

fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Compute the full metrics snapshot for the given reference day.
///
/// Pure and total: empty inputs yield zero-valued aggregates, and a zero
/// monthly budget reports 100% consumption as soon as any spend exists
/// in the month (0% otherwise) rather than dividing by zero.
pub fn compute_metrics(
    expenses: &[Expense],
    income: &[Income],
    monthly_budget: Decimal,
    today: NaiveDate,
) -> MetricsSnapshot {
    let current_week = week_of_month(today);

    let month_expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|e| same_month(e.date.date_naive(), today))
        .collect();
    let total_month_expenses: Decimal = month_expenses.iter().map(|e| e.amount).sum();
    // The week filter is a strict refinement of the month filter.
    let total_week_expenses: Decimal = month_expenses
        .iter()
        .filter(|e| week_of_month(e.date.date_naive()) == current_week)
        .map(|e| e.amount)
        .sum();
    let total_month_income: Decimal = income
        .iter()
        .filter(|i| same_month(i.date.date_naive(), today))
        .map(|i| i.amount)
        .sum();

    let remaining_budget = monthly_budget - total_month_expenses;
    let budget_percentage = if monthly_budget.is_zero() {
        if total_month_expenses > Decimal::ZERO {
            Decimal::from(100)
        } else {
            Decimal::ZERO
        }
    } else {
        total_month_expenses / monthly_budget * Decimal::from(100)
    };

    MetricsSnapshot {
        total_month_expenses,
        total_week_expenses,
        total_month_income,
        remaining_budget,
        budget_percentage,
        category_totals: category_totals(&month_expenses),
        trend: trend_data(expenses, today),
        is_over_budget: budget_percentage > Decimal::from(OVER_BUDGET_THRESHOLD),
        monthly_budget,
    }
}

/// Per-category spend for the month, zero buckets dropped, sorted
/// descending by value. Only the six known category ids are bucketed:
/// an expense with an unrecognized category id still counts toward
/// `total_month_expenses` but appears in no bucket here.
fn category_totals(month_expenses: &[&Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = CATEGORIES
        .iter()
        .map(|cat| CategoryTotal {
            name: cat.name.to_string(),
            value: month_expenses
                .iter()
                .filter(|e| e.category == cat.id)
                .map(|e| e.amount)
                .sum(),
            color: cat.color.to_string(),
        })
        .filter(|c| c.value > Decimal::ZERO)
        .collect();
    // Stable sort keeps declaration order on ties.
    totals.sort_by(|a, b| b.value.cmp(&a.value));
    totals
}

/// Daily spend over the 7 calendar days ending on `today`, oldest first.
/// Sums all expenses matching each day exactly, with no month filter, so
/// a trailing window near a month boundary still shows the prior month.
fn trend_data(expenses: &[Expense], today: NaiveDate) -> Vec<TrendPoint> {
    (0..7u64)
        .rev()
        .map(|back| {
            let day = today
                .checked_sub_days(Days::new(back))
                .unwrap_or(today);
            TrendPoint {
                label: day.format("%a").to_string(),
                amount: expenses
                    .iter()
                    .filter(|e| e.date.date_naive() == day)
                    .map(|e| e.amount)
                    .sum(),
            }
        })
        .collect()
}
