// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::attachments;
use crate::fx::convert_to_thb;
use crate::store::expenses::{ExpenseRepository, NewExpense, SqliteExpenseRepository};
use crate::utils::{
    fmt_baht, id_for_trip, maybe_print_json, parse_datetime, parse_decimal, pretty_table,
};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let trip_name = sub.get_one::<String>("trip").unwrap();
    let trip_id = id_for_trip(conn, trip_name)?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    if category.is_empty() {
        bail!("Category must not be empty");
    }

    let original = sub.get_one::<String>("original");
    let currency = sub.get_one::<String>("currency");
    let rate = sub.get_one::<String>("rate");
    let (amount_thb, original_amount, original_currency, fx_rate_used) =
        if let Some(a) = sub.get_one::<String>("amount") {
            (parse_decimal(a)?, None, None, None)
        } else if let (Some(o), Some(c), Some(r)) = (original, currency, rate) {
            let o = parse_decimal(o)?;
            let r = parse_decimal(r)?;
            (
                convert_to_thb(o, r),
                Some(o),
                Some(c.to_uppercase()),
                Some(r),
            )
        } else {
            bail!("Provide --amount, or --original together with --currency and --rate");
        };
    if amount_thb <= Decimal::ZERO {
        bail!("Amount must be positive");
    }

    let created_at = match sub.get_one::<String>("date") {
        Some(s) => parse_datetime(s)?,
        None => chrono::Local::now().naive_local(),
    };

    let attachment_path = match sub.get_one::<String>("attachment") {
        Some(file) => {
            let bytes =
                std::fs::read(file).with_context(|| format!("Read attachment '{}'", file))?;
            let name = std::path::Path::new(file)
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_string());
            let path = attachments::save(&bytes, name.as_deref())?;
            Some(path.to_string_lossy().to_string())
        }
        None => None,
    };

    let expense = SqliteExpenseRepository.create(
        conn,
        NewExpense {
            trip_id,
            amount_thb,
            category: &category,
            note: sub.get_one::<String>("note").map(|s| s.as_str()),
            created_at,
            original_amount,
            original_currency: original_currency.as_deref(),
            fx_rate_used,
            attachment_path: attachment_path.as_deref(),
        },
    )?;
    println!(
        "Recorded {} for '{}' on trip '{}'",
        fmt_baht(&expense.amount_thb),
        expense.category,
        trip_name
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let trip_name = sub.get_one::<String>("trip").unwrap();
    let trip_id = id_for_trip(conn, trip_name)?;
    let search = sub.get_one::<String>("search").map(|s| s.as_str());
    let expenses = SqliteExpenseRepository.fetch_for_trip(conn, trip_id, search)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &expenses)? {
        let rows: Vec<Vec<String>> = expenses
            .iter()
            .map(|e| {
                let original = match (&e.original_amount, &e.original_currency, &e.fx_rate_used) {
                    (Some(a), Some(c), Some(r)) => format!("{} {} @ {}", a, c, r),
                    _ => String::new(),
                };
                vec![
                    e.id.to_string(),
                    e.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    e.category.clone(),
                    fmt_baht(&e.amount_thb),
                    original,
                    e.note.clone().unwrap_or_default(),
                    e.attachment_path.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "When", "Category", "Amount", "Original", "Note", "Attachment"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let repo = SqliteExpenseRepository;
    let Some(expense) = repo.fetch(conn, id)? else {
        bail!("Expense {} not found", id);
    };
    attachments::delete(expense.attachment_path.as_deref());
    repo.delete(conn, id)?;
    println!("Removed expense {}", id);
    Ok(())
}
