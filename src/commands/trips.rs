// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;

use crate::store::trips::{NewTrip, SqliteTripRepository, TripRepository};
use crate::utils::{id_for_trip, maybe_print_json, parse_date, pretty_table};

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

fn add(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let destination = sub
        .get_one::<String>("destination")
        .unwrap()
        .trim()
        .to_string();
    if name.is_empty() {
        bail!("Trip name must not be empty");
    }
    if destination.is_empty() {
        bail!("Destination must not be empty");
    }
    let start = parse_date(sub.get_one::<String>("start").unwrap())?;
    let end = parse_date(sub.get_one::<String>("end").unwrap())?;
    if end < start {
        bail!("End date {} is before start date {}", end, start);
    }
    let notes = sub.get_one::<String>("notes").map(|s| s.as_str());

    let trip = SqliteTripRepository.create(
        conn,
        NewTrip {
            name: &name,
            destination: &destination,
            start_date: start,
            end_date: end,
            notes,
        },
    )?;
    println!(
        "Added trip '{}' to {} ({} - {})",
        trip.name, trip.destination, trip.start_date, trip.end_date
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let search = sub.get_one::<String>("search").map(|s| s.as_str());
    let trips = SqliteTripRepository.fetch_all(conn, search)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &trips)? {
        let rows: Vec<Vec<String>> = trips
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.name.clone(),
                    t.destination.clone(),
                    t.start_date.to_string(),
                    t.end_date.to_string(),
                    t.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Destination", "Start", "End", "Notes"], rows)
        );
    }
    Ok(())
}

fn edit(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let repo = SqliteTripRepository;
    let Some(mut trip) = repo.fetch(conn, id)? else {
        bail!("Trip {} not found", id);
    };
    if let Some(name) = sub.get_one::<String>("name") {
        let name = name.trim();
        if name.is_empty() {
            bail!("Trip name must not be empty");
        }
        trip.name = name.to_string();
    }
    if let Some(dest) = sub.get_one::<String>("destination") {
        let dest = dest.trim();
        if dest.is_empty() {
            bail!("Destination must not be empty");
        }
        trip.destination = dest.to_string();
    }
    if let Some(s) = sub.get_one::<String>("start") {
        trip.start_date = parse_date(s)?;
    }
    if let Some(s) = sub.get_one::<String>("end") {
        trip.end_date = parse_date(s)?;
    }
    if let Some(s) = sub.get_one::<String>("notes") {
        trip.notes = Some(s.to_string());
    }
    if trip.end_date < trip.start_date {
        bail!(
            "End date {} is before start date {}",
            trip.end_date,
            trip.start_date
        );
    }
    let trip = repo.update(conn, &trip)?;
    println!("Updated trip '{}'", trip.name);
    Ok(())
}

fn rm(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let id = id_for_trip(conn, name)?;
    SqliteTripRepository.delete(conn, id)?;
    println!("Removed trip '{}' and its places, expenses and voice notes", name);
    Ok(())
}
