// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveTime;
use rusqlite::{params, Connection, Row};

use crate::error::StoreError;
use crate::models::Place;

pub struct NewPlace<'a> {
    pub trip_id: i64,
    pub name: &'a str,
    pub day_index: i64,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub latitude: f64,
    pub longitude: f64,
    pub notes: Option<&'a str>,
}

pub trait PlaceRepository {
    fn create(&self, conn: &mut Connection, new: NewPlace<'_>) -> Result<Place, StoreError>;
    fn update(&self, conn: &mut Connection, place: &Place) -> Result<Place, StoreError>;
    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<Place>, StoreError>;
    /// Places of one trip, searched over name and notes. Sorted by day index,
    /// then start time with missing starts last.
    fn fetch_for_trip(
        &self,
        conn: &Connection,
        trip_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Place>, StoreError>;
    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError>;

    fn for_trip(&self, conn: &Connection, trip_id: i64) -> Result<Vec<Place>, StoreError> {
        self.fetch_for_trip(conn, trip_id, None)
    }
}

/// Scheduling conflict test over half-open [start, end) intervals: two
/// places on the same day conflict iff each starts before the other ends.
/// Touching boundaries (one ends exactly when the next starts) do not
/// conflict. Places missing either time never conflict, and `exclude_id`
/// keeps a record being edited from colliding with itself.
pub fn overlap_conflict<'a>(
    existing: &'a [Place],
    day_index: i64,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    exclude_id: Option<i64>,
) -> Option<&'a Place> {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => return None,
    };
    existing.iter().find(|p| {
        p.day_index == day_index
            && Some(p.id) != exclude_id
            && match (p.start_time, p.end_time) {
                (Some(ps), Some(pe)) => ps < end && start < pe,
                _ => false,
            }
    })
}

pub struct SqlitePlaceRepository;

impl PlaceRepository for SqlitePlaceRepository {
    fn create(&self, conn: &mut Connection, new: NewPlace<'_>) -> Result<Place, StoreError> {
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
            "INSERT INTO places(trip_id, name, day_index, start_time, end_time, latitude, longitude, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                new.trip_id,
                new.name,
                new.day_index,
                new.start_time,
                new.end_time,
                new.latitude,
                new.longitude,
                new.notes
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        self.fetch(conn, id)?
            .ok_or(StoreError::NotFound { what: "place", id })
    }

    fn update(&self, conn: &mut Connection, place: &Place) -> Result<Place, StoreError> {
        let tx = conn.transaction()?;
        let n = tx.execute(
            "UPDATE places SET name=?2, day_index=?3, start_time=?4, end_time=?5,
                    latitude=?6, longitude=?7, notes=?8
             WHERE id=?1",
            params![
                place.id,
                place.name,
                place.day_index,
                place.start_time,
                place.end_time,
                place.latitude,
                place.longitude,
                place.notes
            ],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound {
                what: "place",
                id: place.id,
            });
        }
        tx.commit()?;
        self.fetch(conn, place.id)?.ok_or(StoreError::NotFound {
            what: "place",
            id: place.id,
        })
    }

    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<Place>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, trip_id, name, day_index, start_time, end_time, latitude, longitude, notes
             FROM places WHERE id=?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(place_from_row(r)?)),
            None => Ok(None),
        }
    }

    fn fetch_for_trip(
        &self,
        conn: &Connection,
        trip_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Place>, StoreError> {
        let q = search.map(str::trim).filter(|s| !s.is_empty());
        let mut sql = String::from(
            "SELECT id, trip_id, name, day_index, start_time, end_time, latitude, longitude, notes
             FROM places WHERE trip_id = ?1",
        );
        if q.is_some() {
            sql.push_str(
                " AND (instr(lower(name), lower(?2)) > 0
                   OR instr(lower(ifnull(notes,'')), lower(?2)) > 0)",
            );
        }
        sql.push_str(" ORDER BY day_index ASC, (start_time IS NULL) ASC, start_time ASC, id ASC");
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = match q {
            Some(q) => stmt.query(params![trip_id, q])?,
            None => stmt.query(params![trip_id])?,
        };
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(place_from_row(r)?);
        }
        Ok(out)
    }

    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError> {
        let tx = conn.transaction()?;
        let n = tx.execute("DELETE FROM places WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(StoreError::NotFound { what: "place", id });
        }
        tx.commit()?;
        Ok(())
    }
}

fn place_from_row(r: &Row<'_>) -> Result<Place, StoreError> {
    Ok(Place {
        id: r.get(0)?,
        trip_id: r.get(1)?,
        name: r.get(2)?,
        day_index: r.get(3)?,
        start_time: r.get(4)?,
        end_time: r.get(5)?,
        latitude: r.get(6)?,
        longitude: r.get(7)?,
        notes: r.get(8)?,
    })
}
