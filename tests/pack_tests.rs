// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rusqlite::Connection;

use tripclip::db;
use tripclip::models::PackType;
use tripclip::store::data_packs::{DataPackRepository, NewDataPack, SqliteDataPackRepository};

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn add_pack(conn: &mut Connection, name: &str, r#type: PackType, at: &str) -> i64 {
    SqliteDataPackRepository
        .create(
            conn,
            NewDataPack {
                name,
                version: "1.0",
                r#type,
                file_path: "/tmp/pack.bin",
                installed_at: dt(at),
            },
        )
        .unwrap()
        .id
}

#[test]
fn listed_newest_install_first() {
    let mut conn = db::open_in_memory().unwrap();
    add_pack(&mut conn, "bangkok-poi", PackType::Poi, "2025-10-01 10:00:00");
    add_pack(&mut conn, "thai-asr", PackType::Asr, "2025-10-03 10:00:00");
    add_pack(&mut conn, "fx-rates", PackType::Fx, "2025-10-02 10:00:00");

    let names: Vec<String> = SqliteDataPackRepository
        .fetch_all(&conn)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["thai-asr", "fx-rates", "bangkok-poi"]);
}

#[test]
fn pack_type_roundtrips_through_storage() {
    let mut conn = db::open_in_memory().unwrap();
    let id = add_pack(&mut conn, "north-map", PackType::Map, "2025-10-01 10:00:00");

    let pack = SqliteDataPackRepository.fetch(&conn, id).unwrap().unwrap();
    assert_eq!(pack.r#type, PackType::Map);
    assert_eq!(pack.version, "1.0");
}

#[test]
fn unknown_pack_type_is_rejected() {
    assert!("tiles".parse::<PackType>().is_err());
}

#[test]
fn delete_removes_record() {
    let mut conn = db::open_in_memory().unwrap();
    let id = add_pack(&mut conn, "bangkok-poi", PackType::Poi, "2025-10-01 10:00:00");
    SqliteDataPackRepository.delete(&mut conn, id).unwrap();
    assert!(SqliteDataPackRepository.fetch(&conn, id).unwrap().is_none());
    assert!(SqliteDataPackRepository.delete(&mut conn, id).is_err());
}
