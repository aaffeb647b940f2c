// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budget;
pub mod category;
pub mod config;
pub mod doctor;
pub mod expense;
pub mod exporter;
pub mod income;
pub mod recurring;
pub mod report;
pub mod reset;
