// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Expense, Income, RecurringExpense};
use crate::store;

// Keys match the original browser build so an imported dump round-trips.
pub const K_EXPENSES: &str = "expenses";
pub const K_INCOME: &str = "income";
pub const K_RECURRING: &str = "recurringExpenses";
pub const K_BUDGET: &str = "monthlyBudget";
pub const K_THEME: &str = "theme";
pub const K_AUTO_BACKUP: &str = "autoBackup";
pub const K_LAST_BACKUP: &str = "lastBackupTime";

pub const DEFAULT_BUDGET: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// The canonical in-memory state. The orchestrating layer owns one of
/// these and hands slices into the pure metrics/recurring components;
/// neither core component ever touches the store directly.
#[derive(Debug, Clone)]
pub struct AppState {
    pub expenses: Vec<Expense>,
    pub income: Vec<Income>,
    pub recurring: Vec<RecurringExpense>,
    pub monthly_budget: Decimal,
    pub theme: Theme,
    pub auto_backup: bool,
}

impl AppState {
    pub fn load(conn: &Connection) -> Result<Self> {
        Ok(AppState {
            expenses: store::get(conn, K_EXPENSES, Vec::new())?,
            income: store::get(conn, K_INCOME, Vec::new())?,
            recurring: store::get(conn, K_RECURRING, Vec::new())?,
            monthly_budget: store::get(conn, K_BUDGET, Decimal::from(DEFAULT_BUDGET))?,
            theme: store::get(conn, K_THEME, Theme::default())?,
            auto_backup: store::get(conn, K_AUTO_BACKUP, false)?,
        })
    }

    pub fn persist_expenses(&self, conn: &Connection) -> Result<()> {
        store::set(conn, K_EXPENSES, &self.expenses)
    }

    pub fn persist_income(&self, conn: &Connection) -> Result<()> {
        store::set(conn, K_INCOME, &self.income)
    }

    pub fn persist_recurring(&self, conn: &Connection) -> Result<()> {
        store::set(conn, K_RECURRING, &self.recurring)
    }

    pub fn persist_budget(&self, conn: &Connection) -> Result<()> {
        store::set(conn, K_BUDGET, &self.monthly_budget)
    }

    pub fn persist_theme(&self, conn: &Connection) -> Result<()> {
        store::set(conn, K_THEME, &self.theme)
    }

    pub fn persist_auto_backup(&self, conn: &Connection) -> Result<()> {
        store::set(conn, K_AUTO_BACKUP, &self.auto_backup)
    }

    /// Next free record id across every id-bearing collection. A plain
    /// monotonic counter; ids are unique but not dense.
    pub fn next_id(&self) -> i64 {
        self.expenses
            .iter()
            .map(|e| e.id)
            .chain(self.income.iter().map(|i| i.id))
            .chain(self.recurring.iter().map(|r| r.id))
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Clear all user data and restore defaults. Preferences other than
    /// the budget survive a reset.
    pub fn reset(&mut self, conn: &Connection) -> Result<()> {
        self.expenses.clear();
        self.income.clear();
        self.recurring.clear();
        self.monthly_budget = Decimal::from(DEFAULT_BUDGET);
        self.persist_expenses(conn)?;
        self.persist_income(conn)?;
        self.persist_recurring(conn)?;
        self.persist_budget(conn)?;
        store::remove(conn, K_LAST_BACKUP)?;
        Ok(())
    }
}
