// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::Expense;

pub struct NewExpense<'a> {
    pub trip_id: i64,
    pub amount_thb: Decimal,
    pub category: &'a str,
    pub note: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub original_amount: Option<Decimal>,
    pub original_currency: Option<&'a str>,
    pub fx_rate_used: Option<Decimal>,
    pub attachment_path: Option<&'a str>,
}

pub trait ExpenseRepository {
    fn create(&self, conn: &mut Connection, new: NewExpense<'_>) -> Result<Expense, StoreError>;
    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<Expense>, StoreError>;
    /// Expenses of one trip, searched over category and note, newest first.
    fn fetch_for_trip(
        &self,
        conn: &Connection,
        trip_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Expense>, StoreError>;
    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError>;

    fn for_trip(&self, conn: &Connection, trip_id: i64) -> Result<Vec<Expense>, StoreError> {
        self.fetch_for_trip(conn, trip_id, None)
    }
}

pub struct SqliteExpenseRepository;

impl ExpenseRepository for SqliteExpenseRepository {
    fn create(&self, conn: &mut Connection, new: NewExpense<'_>) -> Result<Expense, StoreError> {
        let tx = conn.transaction()?;
        let trip_exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM trips WHERE id=?1)",
            params![new.trip_id],
            |r| r.get(0),
        )?;
        if !trip_exists {
            return Err(StoreError::NotFound {
                what: "trip",
                id: new.trip_id,
            });
        }
        tx.execute(
            "INSERT INTO expenses(trip_id, amount_thb, category, note, created_at,
                                  original_amount, original_currency, fx_rate_used, attachment_path)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                new.trip_id,
                new.amount_thb.to_string(),
                new.category,
                new.note,
                new.created_at,
                new.original_amount.map(|d| d.to_string()),
                new.original_currency,
                new.fx_rate_used.map(|d| d.to_string()),
                new.attachment_path
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        self.fetch(conn, id)?
            .ok_or(StoreError::NotFound { what: "expense", id })
    }

    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<Expense>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, trip_id, amount_thb, category, note, created_at,
                    original_amount, original_currency, fx_rate_used, attachment_path
             FROM expenses WHERE id=?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(expense_from_row(r)?)),
            None => Ok(None),
        }
    }

    fn fetch_for_trip(
        &self,
        conn: &Connection,
        trip_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Expense>, StoreError> {
        let q = search.map(str::trim).filter(|s| !s.is_empty());
        let mut sql = String::from(
            "SELECT id, trip_id, amount_thb, category, note, created_at,
                    original_amount, original_currency, fx_rate_used, attachment_path
             FROM expenses WHERE trip_id = ?1",
        );
        if q.is_some() {
            sql.push_str(
                " AND (instr(lower(category), lower(?2)) > 0
                   OR instr(lower(ifnull(note,'')), lower(?2)) > 0)",
            );
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = match q {
            Some(q) => stmt.query(params![trip_id, q])?,
            None => stmt.query(params![trip_id])?,
        };
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(expense_from_row(r)?);
        }
        Ok(out)
    }

    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError> {
        let tx = conn.transaction()?;
        let n = tx.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(StoreError::NotFound { what: "expense", id });
        }
        tx.commit()?;
        Ok(())
    }
}

fn expense_from_row(r: &Row<'_>) -> Result<Expense, StoreError> {
    let amount_thb = parse_dec("amount_thb", r.get(2)?)?;
    let original_amount = match r.get::<_, Option<String>>(6)? {
        Some(s) => Some(parse_dec("original_amount", s)?),
        None => None,
    };
    let fx_rate_used = match r.get::<_, Option<String>>(8)? {
        Some(s) => Some(parse_dec("fx_rate_used", s)?),
        None => None,
    };
    Ok(Expense {
        id: r.get(0)?,
        trip_id: r.get(1)?,
        amount_thb,
        category: r.get(3)?,
        note: r.get(4)?,
        created_at: r.get(5)?,
        original_amount,
        original_currency: r.get(7)?,
        fx_rate_used,
        attachment_path: r.get(9)?,
    })
}

fn parse_dec(column: &'static str, s: String) -> Result<Decimal, StoreError> {
    match s.parse::<Decimal>() {
        Ok(d) => Ok(d),
        Err(_) => Err(StoreError::BadColumn { column, value: s }),
    }
}
