// Copyright (c) 2025 Spendlog contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// One of the six fixed spending buckets. The set is static configuration,
/// never user data; aggregation only ever buckets these ids.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

pub const CATEGORIES: [Category; 6] = [
    Category { id: "food", name: "Food", emoji: "🍕", color: "#EF4444" },
    Category { id: "rent", name: "Rent", emoji: "🏠", color: "#8B5CF6" },
    Category { id: "travel", name: "Travel", emoji: "🚗", color: "#3B82F6" },
    Category { id: "books", name: "Education", emoji: "📚", color: "#10B981" },
    Category { id: "fun", name: "Entertainment", emoji: "🎮", color: "#F59E0B" },
    Category { id: "misc", name: "Other", emoji: "📦", color: "#6B7280" },
];

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Display name for a category id, falling back to the raw id when the
/// id is not one of the six known buckets.
pub fn display_name(id: &str) -> &str {
    category_by_id(id).map(|c| c.name).unwrap_or(id)
}
