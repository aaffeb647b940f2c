// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use crate::commands::exporter::write_transactions_csv;
use crate::state::{AppState, K_LAST_BACKUP};
use crate::store;

const BACKUP_INTERVAL_DAYS: i64 = 3;

/// Write a transactions CSV into `out_dir` when auto-backup is on and
/// the last backup is absent or older than the interval. Returns the
/// path written, if any. The caller picks the directory; the session
/// path uses the platform data dir.
pub fn maybe_auto_backup(
    conn: &Connection,
    state: &AppState,
    now: DateTime<Utc>,
    out_dir: &Path,
) -> Result<Option<PathBuf>> {
    if !state.auto_backup {
        return Ok(None);
    }
    let last: Option<DateTime<Utc>> = store::get(conn, K_LAST_BACKUP, None)?;
    let due = match last {
        Some(t) => now - t > Duration::days(BACKUP_INTERVAL_DAYS),
        None => true,
    };
    if !due {
        return Ok(None);
    }

    let path = out_dir.join(format!("expenses_{}.csv", now.date_naive()));
    write_transactions_csv(&path, &state.expenses, &state.income)?;
    store::set(conn, K_LAST_BACKUP, &now)?;
    Ok(Some(path))
}
