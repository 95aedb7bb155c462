// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;
use std::path::Path;

use crate::store::expenses::{ExpenseRepository, SqliteExpenseRepository};
use crate::utils::id_for_trip;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => {
            let trip_name = sub.get_one::<String>("trip").unwrap();
            let trip_id = id_for_trip(conn, trip_name)?;
            let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
            let out = sub.get_one::<String>("out").unwrap();
            export_expenses(conn, trip_id, &fmt, Path::new(out))?;
            println!("Exported expenses to {}", out);
            Ok(())
        }
        _ => Ok(()),
    }
}

pub fn export_expenses(conn: &Connection, trip_id: i64, format: &str, out: &Path) -> Result<()> {
    let expenses = SqliteExpenseRepository.for_trip(conn, trip_id)?;

    match format {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "created_at",
                "category",
                "amount_thb",
                "note",
                "original_amount",
                "original_currency",
                "fx_rate_used",
                "attachment_path",
            ])?;
            for e in &expenses {
                wtr.write_record([
                    e.created_at.to_string(),
                    e.category.clone(),
                    e.amount_thb.to_string(),
                    e.note.clone().unwrap_or_default(),
                    e.original_amount
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                    e.original_currency.clone().unwrap_or_default(),
                    e.fx_rate_used.map(|d| d.to_string()).unwrap_or_default(),
                    e.attachment_path.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&expenses)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", format);
        }
    }
    Ok(())
}
