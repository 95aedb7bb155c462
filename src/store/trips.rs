// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use crate::error::StoreError;
use crate::models::Trip;

pub struct NewTrip<'a> {
    pub name: &'a str,
    pub destination: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<&'a str>,
}

/// Trip CRUD. Writes take the connection handle mutably and run inside a
/// transaction: either the whole mutation commits or nothing is persisted.
pub trait TripRepository {
    fn create(&self, conn: &mut Connection, new: NewTrip<'_>) -> Result<Trip, StoreError>;
    fn update(&self, conn: &mut Connection, trip: &Trip) -> Result<Trip, StoreError>;
    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<Trip>, StoreError>;
    /// Case-insensitive substring search over name, destination and notes.
    /// An empty or whitespace-only query means no filter. Sorted by start
    /// date ascending.
    fn fetch_all(&self, conn: &Connection, search: Option<&str>) -> Result<Vec<Trip>, StoreError>;
    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError>;

    fn all(&self, conn: &Connection) -> Result<Vec<Trip>, StoreError> {
        self.fetch_all(conn, None)
    }
}

pub struct SqliteTripRepository;

impl TripRepository for SqliteTripRepository {
    fn create(&self, conn: &mut Connection, new: NewTrip<'_>) -> Result<Trip, StoreError> {
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO trips(name, destination, start_date, end_date, notes)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                new.name,
                new.destination,
                new.start_date,
                new.end_date,
                new.notes
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        self.fetch(conn, id)?
            .ok_or(StoreError::NotFound { what: "trip", id })
    }

    fn update(&self, conn: &mut Connection, trip: &Trip) -> Result<Trip, StoreError> {
        let tx = conn.transaction()?;
        let n = tx.execute(
            "UPDATE trips SET name=?2, destination=?3, start_date=?4, end_date=?5, notes=?6
             WHERE id=?1",
            params![
                trip.id,
                trip.name,
                trip.destination,
                trip.start_date,
                trip.end_date,
                trip.notes
            ],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound {
                what: "trip",
                id: trip.id,
            });
        }
        tx.commit()?;
        self.fetch(conn, trip.id)?.ok_or(StoreError::NotFound {
            what: "trip",
            id: trip.id,
        })
    }

    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<Trip>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, name, destination, start_date, end_date, notes FROM trips WHERE id=?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(trip_from_row(r)?)),
            None => Ok(None),
        }
    }

    fn fetch_all(&self, conn: &Connection, search: Option<&str>) -> Result<Vec<Trip>, StoreError> {
        let q = search.map(str::trim).filter(|s| !s.is_empty());
        let mut sql = String::from(
            "SELECT id, name, destination, start_date, end_date, notes FROM trips",
        );
        if q.is_some() {
            // instr keeps '%' and '_' literal, unlike LIKE
            sql.push_str(
                " WHERE instr(lower(name), lower(?1)) > 0
                   OR instr(lower(destination), lower(?1)) > 0
                   OR instr(lower(ifnull(notes,'')), lower(?1)) > 0",
            );
        }
        sql.push_str(" ORDER BY start_date ASC, id ASC");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = match q {
            Some(q) => stmt.query(params![q])?,
            None => stmt.query([])?,
        };
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(trip_from_row(r)?);
        }
        Ok(out)
    }

    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError> {
        let tx = conn.transaction()?;
        let n = tx.execute("DELETE FROM trips WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(StoreError::NotFound { what: "trip", id });
        }
        tx.commit()?;
        Ok(())
    }
}

fn trip_from_row(r: &Row<'_>) -> Result<Trip, StoreError> {
    Ok(Trip {
        id: r.get(0)?,
        name: r.get(1)?,
        destination: r.get(2)?,
        start_date: r.get(3)?,
        end_date: r.get(4)?,
        notes: r.get(5)?,
    })
}
