// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};

use crate::error::StoreError;
use crate::models::{DataPack, PackType};

pub struct NewDataPack<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub r#type: PackType,
    pub file_path: &'a str,
    pub installed_at: NaiveDateTime,
}

pub trait DataPackRepository {
    fn create(&self, conn: &mut Connection, new: NewDataPack<'_>) -> Result<DataPack, StoreError>;
    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<DataPack>, StoreError>;
    /// All installed packs, most recently installed first.
    fn fetch_all(&self, conn: &Connection) -> Result<Vec<DataPack>, StoreError>;
    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError>;
}

pub struct SqliteDataPackRepository;

impl DataPackRepository for SqliteDataPackRepository {
    fn create(&self, conn: &mut Connection, new: NewDataPack<'_>) -> Result<DataPack, StoreError> {
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO data_packs(name, version, type, file_path, installed_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                new.name,
                new.version,
                new.r#type.as_str(),
                new.file_path,
                new.installed_at
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        self.fetch(conn, id)?
            .ok_or(StoreError::NotFound { what: "pack", id })
    }

    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<DataPack>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, name, version, type, file_path, installed_at FROM data_packs WHERE id=?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(pack_from_row(r)?)),
            None => Ok(None),
        }
    }

    fn fetch_all(&self, conn: &Connection) -> Result<Vec<DataPack>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, name, version, type, file_path, installed_at
             FROM data_packs ORDER BY installed_at DESC, id DESC",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(pack_from_row(r)?);
        }
        Ok(out)
    }

    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError> {
        let tx = conn.transaction()?;
        let n = tx.execute("DELETE FROM data_packs WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(StoreError::NotFound { what: "pack", id });
        }
        tx.commit()?;
        Ok(())
    }
}

fn pack_from_row(r: &Row<'_>) -> Result<DataPack, StoreError> {
    let kind: String = r.get(3)?;
    Ok(DataPack {
        id: r.get(0)?,
        name: r.get(1)?,
        version: r.get(2)?,
        r#type: kind.parse()?,
        file_path: r.get(4)?,
        installed_at: r.get(5)?,
    })
}
