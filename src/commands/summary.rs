// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::store::expenses::{ExpenseRepository, SqliteExpenseRepository};
use crate::summary::{by_category, by_day, total, CategoryTotal, DayTotal};
use crate::utils::{fmt_baht, id_for_trip, maybe_print_json, pretty_table};

#[derive(Serialize)]
struct SummaryOut {
    total: Decimal,
    by_day: Vec<DayTotal>,
    by_category: Vec<CategoryTotal>,
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let trip_name = m.get_one::<String>("trip").unwrap();
    let trip_id = id_for_trip(conn, trip_name)?;
    let expenses = SqliteExpenseRepository.for_trip(conn, trip_id)?;

    let out = SummaryOut {
        total: total(&expenses),
        by_day: by_day(&expenses),
        by_category: by_category(&expenses),
    };
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &out)? {
        return Ok(());
    }

    println!("Total: {}", fmt_baht(&out.total));
    let day_rows: Vec<Vec<String>> = out
        .by_day
        .iter()
        .map(|d| vec![d.day.to_string(), fmt_baht(&d.total)])
        .collect();
    println!("{}", pretty_table(&["Day", "Spent"], day_rows));
    let cat_rows: Vec<Vec<String>> = out
        .by_category
        .iter()
        .map(|c| vec![c.category.clone(), fmt_baht(&c.total)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], cat_rows));
    Ok(())
}
