// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;

use crate::models::VoiceNoteStatus;
use crate::store::voice_notes::{NewVoiceNote, SqliteVoiceNoteRepository, VoiceNoteRepository};
use crate::utils::{id_for_trip, maybe_print_json, pretty_table};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("transcribe", sub)) => transcribe(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let trip_name = sub.get_one::<String>("trip").unwrap();
    let trip_id = id_for_trip(conn, trip_name)?;
    let audio = sub.get_one::<String>("audio").unwrap();
    if audio.trim().is_empty() {
        bail!("Audio path must not be empty");
    }
    let transcript = sub.get_one::<String>("transcript").map(|s| s.as_str());
    let status = if transcript.is_some() {
        VoiceNoteStatus::Transcribed
    } else {
        VoiceNoteStatus::Recorded
    };
    let note = SqliteVoiceNoteRepository.create(
        conn,
        NewVoiceNote {
            trip_id,
            place_id: sub.get_one::<i64>("place").copied(),
            audio_path: audio,
            transcript,
            language: sub.get_one::<String>("language").unwrap(),
            created_at: chrono::Local::now().naive_local(),
            status,
        },
    )?;
    println!(
        "Added voice note {} ({}) to trip '{}'",
        note.id,
        note.status.as_str(),
        trip_name
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let trip_name = sub.get_one::<String>("trip").unwrap();
    let trip_id = id_for_trip(conn, trip_name)?;
    let notes = SqliteVoiceNoteRepository.fetch_for_trip(conn, trip_id)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &notes)? {
        let rows: Vec<Vec<String>> = notes
            .iter()
            .map(|n| {
                vec![
                    n.id.to_string(),
                    n.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    n.language.clone(),
                    n.status.as_str().to_string(),
                    n.place_id.map(|p| p.to_string()).unwrap_or_default(),
                    n.transcript.clone().unwrap_or_default(),
                    n.audio_path.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "When", "Lang", "Status", "Place", "Transcript", "Audio"],
                rows,
            )
        );
    }
    Ok(())
}

fn transcribe(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let text = sub.get_one::<String>("text").unwrap();
    let note = SqliteVoiceNoteRepository.mark_transcribed(conn, id, text)?;
    println!("Voice note {} is now {}", note.id, note.status.as_str());
    Ok(())
}

fn rm(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    SqliteVoiceNoteRepository.delete(conn, id)?;
    println!("Removed voice note {}", id);
    Ok(())
}
