// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::Expense;

#[derive(Debug, Clone, Serialize)]
pub struct DayTotal {
    pub day: NaiveDate,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

pub fn total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount_thb).sum()
}

/// Sum per calendar day (start-of-day bucketing of created_at), ascending.
pub fn by_day(expenses: &[Expense]) -> Vec<DayTotal> {
    let mut map: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for e in expenses {
        *map.entry(e.created_at.date()).or_insert(Decimal::ZERO) += e.amount_thb;
    }
    map.into_iter()
        .map(|(day, total)| DayTotal { day, total })
        .collect()
}

/// Sum per category, largest first. Ties break on category name so output
/// order is deterministic.
pub fn by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut map: HashMap<String, Decimal> = HashMap::new();
    for e in expenses {
        *map.entry(e.category.clone()).or_insert(Decimal::ZERO) += e.amount_thb;
    }
    let mut items: Vec<CategoryTotal> = map
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    items.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    items
}
