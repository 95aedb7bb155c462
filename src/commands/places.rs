// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use chrono::NaiveTime;
use rusqlite::Connection;

use crate::store::places::{
    overlap_conflict, NewPlace, PlaceRepository, SqlitePlaceRepository,
};
use crate::utils::{id_for_trip, maybe_print_json, parse_time, pretty_table};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_range(
    start: Option<&String>,
    end: Option<&String>,
) -> Result<(Option<NaiveTime>, Option<NaiveTime>)> {
    let start = start.map(|s| parse_time(s)).transpose()?;
    let end = end.map(|s| parse_time(s)).transpose()?;
    if let (Some(s), Some(e)) = (start, end) {
        if e < s {
            bail!("End time {} is before start time {}", e.format("%H:%M"), s.format("%H:%M"));
        }
    }
    Ok((start, end))
}

fn add(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let trip_name = sub.get_one::<String>("trip").unwrap();
    let trip_id = id_for_trip(conn, trip_name)?;
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    if name.is_empty() {
        bail!("Place name must not be empty");
    }
    let day_index = *sub.get_one::<i64>("day").unwrap();
    if day_index < 0 {
        bail!("Day index must not be negative");
    }
    let (start, end) = parse_range(
        sub.get_one::<String>("start"),
        sub.get_one::<String>("end"),
    )?;

    let repo = SqlitePlaceRepository;
    let existing = repo.for_trip(conn, trip_id)?;
    if let Some(conflict) = overlap_conflict(&existing, day_index, start, end, None) {
        bail!("Time overlap with '{}'", conflict.name);
    }

    let place = repo.create(
        conn,
        NewPlace {
            trip_id,
            name: &name,
            day_index,
            start_time: start,
            end_time: end,
            latitude: sub.get_one::<f64>("lat").copied().unwrap_or(0.0),
            longitude: sub.get_one::<f64>("lng").copied().unwrap_or(0.0),
            notes: sub.get_one::<String>("notes").map(|s| s.as_str()),
        },
    )?;
    println!(
        "Added place '{}' on day {} of trip '{}'",
        place.name, place.day_index, trip_name
    );
    Ok(())
}

fn fmt_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let trip_name = sub.get_one::<String>("trip").unwrap();
    let trip_id = id_for_trip(conn, trip_name)?;
    let search = sub.get_one::<String>("search").map(|s| s.as_str());
    let places = SqlitePlaceRepository.fetch_for_trip(conn, trip_id, search)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &places)? {
        let rows: Vec<Vec<String>> = places
            .iter()
            .map(|p| {
                vec![
                    p.id.to_string(),
                    p.day_index.to_string(),
                    p.name.clone(),
                    fmt_time(p.start_time),
                    fmt_time(p.end_time),
                    format!("{:.5}, {:.5}", p.latitude, p.longitude),
                    p.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Day", "Name", "Start", "End", "Coordinates", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}

fn edit(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let repo = SqlitePlaceRepository;
    let Some(mut place) = repo.fetch(conn, id)? else {
        bail!("Place {} not found", id);
    };
    if let Some(name) = sub.get_one::<String>("name") {
        let name = name.trim();
        if name.is_empty() {
            bail!("Place name must not be empty");
        }
        place.name = name.to_string();
    }
    if let Some(day) = sub.get_one::<i64>("day") {
        if *day < 0 {
            bail!("Day index must not be negative");
        }
        place.day_index = *day;
    }
    if let Some(s) = sub.get_one::<String>("start") {
        place.start_time = Some(parse_time(s)?);
    }
    if let Some(s) = sub.get_one::<String>("end") {
        place.end_time = Some(parse_time(s)?);
    }
    if let (Some(s), Some(e)) = (place.start_time, place.end_time) {
        if e < s {
            bail!("End time {} is before start time {}", e.format("%H:%M"), s.format("%H:%M"));
        }
    }
    if let Some(lat) = sub.get_one::<f64>("lat") {
        place.latitude = *lat;
    }
    if let Some(lng) = sub.get_one::<f64>("lng") {
        place.longitude = *lng;
    }
    if let Some(s) = sub.get_one::<String>("notes") {
        place.notes = Some(s.to_string());
    }

    // A place never conflicts with its own previous time range.
    let existing = repo.for_trip(conn, place.trip_id)?;
    if let Some(conflict) = overlap_conflict(
        &existing,
        place.day_index,
        place.start_time,
        place.end_time,
        Some(place.id),
    ) {
        bail!("Time overlap with '{}'", conflict.name);
    }

    let place = repo.update(conn, &place)?;
    println!("Updated place '{}'", place.name);
    Ok(())
}

fn rm(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    SqlitePlaceRepository.delete(conn, id)?;
    println!("Removed place {}", id);
    Ok(())
}
