// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;

use crate::models::PackType;
use crate::store::data_packs::{DataPackRepository, NewDataPack, SqliteDataPackRepository};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    if name.is_empty() {
        bail!("Pack name must not be empty");
    }
    let r#type: PackType = sub.get_one::<String>("type").unwrap().parse()?;
    let pack = SqliteDataPackRepository.create(
        conn,
        NewDataPack {
            name: &name,
            version: sub.get_one::<String>("version").unwrap(),
            r#type,
            file_path: sub.get_one::<String>("file").unwrap(),
            installed_at: chrono::Local::now().naive_local(),
        },
    )?;
    println!(
        "Installed pack '{}' v{} ({})",
        pack.name,
        pack.version,
        pack.r#type.as_str()
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let packs = SqliteDataPackRepository.fetch_all(conn)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &packs)? {
        let rows: Vec<Vec<String>> = packs
            .iter()
            .map(|p| {
                vec![
                    p.id.to_string(),
                    p.name.clone(),
                    p.version.clone(),
                    p.r#type.as_str().to_string(),
                    p.installed_at.format("%Y-%m-%d %H:%M").to_string(),
                    p.file_path.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Version", "Type", "Installed", "File"], rows)
        );
    }
    Ok(())
}

fn rm(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    SqliteDataPackRepository.delete(conn, id)?;
    println!("Removed pack {}", id);
    Ok(())
}
