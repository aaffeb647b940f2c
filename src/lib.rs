// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod backup;
pub mod categories;
pub mod cli;
pub mod commands;
pub mod metrics;
pub mod models;
pub mod recurring;
pub mod state;
pub mod store;
pub mod utils;
