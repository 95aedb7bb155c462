// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};

use crate::error::StoreError;
use crate::models::{VoiceNote, VoiceNoteStatus};

pub struct NewVoiceNote<'a> {
    pub trip_id: i64,
    pub place_id: Option<i64>,
    pub audio_path: &'a str,
    pub transcript: Option<&'a str>,
    pub language: &'a str,
    pub created_at: NaiveDateTime,
    pub status: VoiceNoteStatus,
}

pub trait VoiceNoteRepository {
    fn create(&self, conn: &mut Connection, new: NewVoiceNote<'_>) -> Result<VoiceNote, StoreError>;
    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<VoiceNote>, StoreError>;
    /// Voice notes of one trip, newest first.
    fn fetch_for_trip(&self, conn: &Connection, trip_id: i64) -> Result<Vec<VoiceNote>, StoreError>;
    /// Attach a transcript and flip status recorded -> transcribed.
    fn mark_transcribed(
        &self,
        conn: &mut Connection,
        id: i64,
        transcript: &str,
    ) -> Result<VoiceNote, StoreError>;
    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError>;
}

pub struct SqliteVoiceNoteRepository;

impl VoiceNoteRepository for SqliteVoiceNoteRepository {
    fn create(&self, conn: &mut Connection, new: NewVoiceNote<'_>) -> Result<VoiceNote, StoreError> {
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
        if let Some(place_id) = new.place_id {
            let place_exists: bool = tx.query_row(
                "SELECT EXISTS(SELECT 1 FROM places WHERE id=?1)",
                params![place_id],
                |r| r.get(0),
            )?;
            if !place_exists {
                return Err(StoreError::NotFound {
                    what: "place",
                    id: place_id,
                });
            }
        }
        tx.execute(
            "INSERT INTO voice_notes(trip_id, place_id, audio_path, transcript, language, created_at, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                new.trip_id,
                new.place_id,
                new.audio_path,
                new.transcript,
                new.language,
                new.created_at,
                new.status.as_str()
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        self.fetch(conn, id)?.ok_or(StoreError::NotFound {
            what: "voice note",
            id,
        })
    }

    fn fetch(&self, conn: &Connection, id: i64) -> Result<Option<VoiceNote>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, trip_id, place_id, audio_path, transcript, language, created_at, status
             FROM voice_notes WHERE id=?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(r) => Ok(Some(voice_note_from_row(r)?)),
            None => Ok(None),
        }
    }

    fn fetch_for_trip(&self, conn: &Connection, trip_id: i64) -> Result<Vec<VoiceNote>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, trip_id, place_id, audio_path, transcript, language, created_at, status
             FROM voice_notes WHERE trip_id=?1 ORDER BY created_at DESC, id DESC",
        )?;
        let mut rows = stmt.query(params![trip_id])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(voice_note_from_row(r)?);
        }
        Ok(out)
    }

    fn mark_transcribed(
        &self,
        conn: &mut Connection,
        id: i64,
        transcript: &str,
    ) -> Result<VoiceNote, StoreError> {
        let tx = conn.transaction()?;
        let n = tx.execute(
            "UPDATE voice_notes SET transcript=?2, status='transcribed' WHERE id=?1",
            params![id, transcript],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound {
                what: "voice note",
                id,
            });
        }
        tx.commit()?;
        self.fetch(conn, id)?.ok_or(StoreError::NotFound {
            what: "voice note",
            id,
        })
    }

    fn delete(&self, conn: &mut Connection, id: i64) -> Result<(), StoreError> {
        let tx = conn.transaction()?;
        let n = tx.execute("DELETE FROM voice_notes WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(StoreError::NotFound {
                what: "voice note",
                id,
            });
        }
        tx.commit()?;
        Ok(())
    }
}

fn voice_note_from_row(r: &Row<'_>) -> Result<VoiceNote, StoreError> {
    let status: String = r.get(7)?;
    Ok(VoiceNote {
        id: r.get(0)?,
        trip_id: r.get(1)?,
        place_id: r.get(2)?,
        audio_path: r.get(3)?,
        transcript: r.get(4)?,
        language: r.get(5)?,
        created_at: r.get(6)?,
        status: status.parse()?,
    })
}
