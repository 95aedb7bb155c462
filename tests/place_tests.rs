// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;

use tripclip::db;
use tripclip::store::places::{
    overlap_conflict, NewPlace, PlaceRepository, SqlitePlaceRepository,
};
use tripclip::store::trips::{NewTrip, SqliteTripRepository, TripRepository};

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn setup_trip(conn: &mut Connection) -> i64 {
    SqliteTripRepository
        .create(
            conn,
            NewTrip {
                name: "Bangkok",
                destination: "Bangkok",
                start_date: NaiveDate::parse_from_str("2025-11-01", "%Y-%m-%d").unwrap(),
                end_date: NaiveDate::parse_from_str("2025-11-05", "%Y-%m-%d").unwrap(),
                notes: None,
            },
        )
        .unwrap()
        .id
}

fn add_place(
    conn: &mut Connection,
    trip_id: i64,
    name: &str,
    day: i64,
    start: Option<&str>,
    end: Option<&str>,
) -> i64 {
    SqlitePlaceRepository
        .create(
            conn,
            NewPlace {
                trip_id,
                name,
                day_index: day,
                start_time: start.map(t),
                end_time: end.map(t),
                latitude: 0.0,
                longitude: 0.0,
                notes: None,
            },
        )
        .unwrap()
        .id
}

#[test]
fn overlapping_range_same_day_is_rejected() {
    let mut conn = db::open_in_memory().unwrap();
    let trip_id = setup_trip(&mut conn);
    add_place(&mut conn, trip_id, "Grand Palace", 0, Some("09:00"), Some("10:00"));

    let existing = SqlitePlaceRepository.for_trip(&conn, trip_id).unwrap();
    let conflict = overlap_conflict(&existing, 0, Some(t("09:30")), Some(t("10:30")), None);
    assert_eq!(conflict.unwrap().name, "Grand Palace");
}

#[test]
fn touching_boundary_is_not_an_overlap() {
    let mut conn = db::open_in_memory().unwrap();
    let trip_id = setup_trip(&mut conn);
    add_place(&mut conn, trip_id, "Grand Palace", 0, Some("09:00"), Some("10:00"));

    let existing = SqlitePlaceRepository.for_trip(&conn, trip_id).unwrap();
    // [09:00,10:00) then [10:00,11:00): back to back is fine
    assert!(overlap_conflict(&existing, 0, Some(t("10:00")), Some(t("11:00")), None).is_none());
}

#[test]
fn other_day_and_missing_times_never_conflict() {
    let mut conn = db::open_in_memory().unwrap();
    let trip_id = setup_trip(&mut conn);
    add_place(&mut conn, trip_id, "Grand Palace", 0, Some("09:00"), Some("10:00"));
    add_place(&mut conn, trip_id, "Untimed", 0, None, None);

    let existing = SqlitePlaceRepository.for_trip(&conn, trip_id).unwrap();
    // same range, different day
    assert!(overlap_conflict(&existing, 1, Some(t("09:00")), Some(t("10:00")), None).is_none());
    // candidate without times
    assert!(overlap_conflict(&existing, 0, None, None, None).is_none());
}

#[test]
fn edited_place_does_not_conflict_with_itself() {
    let mut conn = db::open_in_memory().unwrap();
    let trip_id = setup_trip(&mut conn);
    let id = add_place(&mut conn, trip_id, "Grand Palace", 0, Some("09:00"), Some("10:00"));

    let existing = SqlitePlaceRepository.for_trip(&conn, trip_id).unwrap();
    // shrinking its own slot would collide with the stored row unless excluded
    assert!(
        overlap_conflict(&existing, 0, Some(t("09:15")), Some(t("09:45")), Some(id)).is_none()
    );
}

#[test]
fn sorted_by_day_then_start_with_missing_start_last() {
    let mut conn = db::open_in_memory().unwrap();
    let trip_id = setup_trip(&mut conn);
    add_place(&mut conn, trip_id, "NoTime", 0, None, None);
    add_place(&mut conn, trip_id, "NextDay", 1, Some("08:00"), Some("09:00"));
    add_place(&mut conn, trip_id, "Morning", 0, Some("09:00"), Some("10:00"));
    add_place(&mut conn, trip_id, "Noon", 0, Some("12:00"), Some("13:00"));

    let names: Vec<String> = SqlitePlaceRepository
        .for_trip(&conn, trip_id)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Morning", "Noon", "NoTime", "NextDay"]);
}

#[test]
fn search_matches_name_and_notes() {
    let mut conn = db::open_in_memory().unwrap();
    let trip_id = setup_trip(&mut conn);
    add_place(&mut conn, trip_id, "Grand Palace", 0, None, None);
    SqlitePlaceRepository
        .create(
            &mut conn,
            NewPlace {
                trip_id,
                name: "Market",
                day_index: 1,
                start_time: None,
                end_time: None,
                latitude: 0.0,
                longitude: 0.0,
                notes: Some("night bazaar"),
            },
        )
        .unwrap();

    let repo = SqlitePlaceRepository;
    let hits = repo.fetch_for_trip(&conn, trip_id, Some("palace")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Grand Palace");

    let hits = repo.fetch_for_trip(&conn, trip_id, Some("BAZAAR")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Market");

    assert_eq!(repo.fetch_for_trip(&conn, trip_id, Some("")).unwrap().len(), 2);
}

#[test]
fn create_for_missing_trip_errors_and_persists_nothing() {
    let mut conn = db::open_in_memory().unwrap();
    let res = SqlitePlaceRepository.create(
        &mut conn,
        NewPlace {
            trip_id: 42,
            name: "Nowhere",
            day_index: 0,
            start_time: None,
            end_time: None,
            latitude: 0.0,
            longitude: 0.0,
            notes: None,
        },
    );
    assert!(res.is_err());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM places", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
