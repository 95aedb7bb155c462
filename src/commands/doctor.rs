// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::utils::pretty_table;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Places whose time range is inverted
    let mut stmt = conn.prepare(
        "SELECT p.name, t.name FROM places p JOIN trips t ON p.trip_id=t.id
         WHERE p.start_time IS NOT NULL AND p.end_time IS NOT NULL AND p.end_time < p.start_time",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let place: String = r.get(0)?;
        let trip: String = r.get(1)?;
        rows.push(vec![
            "place_end_before_start".into(),
            format!("'{}' in trip '{}'", place, trip),
        ]);
    }

    // 2) Expense attachments whose file is gone
    let mut stmt2 =
        conn.prepare("SELECT id, attachment_path FROM expenses WHERE attachment_path IS NOT NULL")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        let path: String = r.get(1)?;
        if !std::path::Path::new(&path).exists() {
            rows.push(vec![
                "missing_attachment".into(),
                format!("expense {} -> {}", id, path),
            ]);
        }
    }

    // 3) Voice notes whose audio file is gone
    let mut stmt3 = conn.prepare("SELECT id, audio_path FROM voice_notes")?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let path: String = r.get(1)?;
        if !std::path::Path::new(&path).exists() {
            rows.push(vec![
                "missing_audio".into(),
                format!("voice note {} -> {}", id, path),
            ]);
        }
    }

    // 4) Data packs whose payload is gone
    let mut stmt4 = conn.prepare("SELECT id, name, file_path FROM data_packs")?;
    let mut cur4 = stmt4.query([])?;
    while let Some(r) = cur4.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let path: String = r.get(2)?;
        if !std::path::Path::new(&path).exists() {
            rows.push(vec![
                "missing_pack_file".into(),
                format!("pack {} '{}' -> {}", id, name, path),
            ]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
