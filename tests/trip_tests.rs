// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use rust_decimal::Decimal;

use tripclip::db;
use tripclip::models::{Trip, VoiceNoteStatus};
use tripclip::store::expenses::{ExpenseRepository, NewExpense, SqliteExpenseRepository};
use tripclip::store::places::{NewPlace, PlaceRepository, SqlitePlaceRepository};
use tripclip::store::trips::{NewTrip, SqliteTripRepository, TripRepository};
use tripclip::store::voice_notes::{NewVoiceNote, SqliteVoiceNoteRepository, VoiceNoteRepository};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn make_trip(conn: &mut Connection, name: &str, start: &str, end: &str) -> Trip {
    SqliteTripRepository
        .create(
            conn,
            NewTrip {
                name,
                destination: "Thailand",
                start_date: d(start),
                end_date: d(end),
                notes: None,
            },
        )
        .unwrap()
}

#[test]
fn create_then_fetch_roundtrip() {
    let mut conn = db::open_in_memory().unwrap();
    let trip = SqliteTripRepository
        .create(
            &mut conn,
            NewTrip {
                name: "Chiang Mai Loop",
                destination: "Chiang Mai",
                start_date: d("2025-11-01"),
                end_date: d("2025-11-08"),
                notes: Some("Bring rain jacket"),
            },
        )
        .unwrap();

    let all = SqliteTripRepository.all(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, trip.id);
    assert_eq!(all[0].name, "Chiang Mai Loop");
    assert_eq!(all[0].destination, "Chiang Mai");
    assert_eq!(all[0].start_date, d("2025-11-01"));
    assert_eq!(all[0].end_date, d("2025-11-08"));
    assert_eq!(all[0].notes.as_deref(), Some("Bring rain jacket"));

    let by_id = SqliteTripRepository.fetch(&conn, trip.id).unwrap().unwrap();
    assert_eq!(by_id.name, trip.name);
}

#[test]
fn search_is_case_insensitive_substring() {
    let mut conn = db::open_in_memory().unwrap();
    make_trip(&mut conn, "Chiang Mai Loop", "2025-11-01", "2025-11-08");
    make_trip(&mut conn, "Island Hopping", "2025-12-01", "2025-12-10");

    let repo = SqliteTripRepository;
    let hits = repo.fetch_all(&conn, Some("CHIANG")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Chiang Mai Loop");

    // destination matches too
    let hits = repo.fetch_all(&conn, Some("thai")).unwrap();
    assert_eq!(hits.len(), 2);

    assert!(repo.fetch_all(&conn, Some("zzz")).unwrap().is_empty());

    // empty and whitespace-only queries mean no filter
    assert_eq!(repo.fetch_all(&conn, Some("")).unwrap().len(), 2);
    assert_eq!(repo.fetch_all(&conn, Some("   ")).unwrap().len(), 2);
}

#[test]
fn sorted_by_start_date_ascending() {
    let mut conn = db::open_in_memory().unwrap();
    make_trip(&mut conn, "Later", "2026-01-05", "2026-01-10");
    make_trip(&mut conn, "Sooner", "2025-10-01", "2025-10-05");

    let all = SqliteTripRepository.all(&conn).unwrap();
    assert_eq!(all[0].name, "Sooner");
    assert_eq!(all[1].name, "Later");
}

#[test]
fn update_persists_changes() {
    let mut conn = db::open_in_memory().unwrap();
    let mut trip = make_trip(&mut conn, "Draft", "2025-11-01", "2025-11-08");
    trip.name = "Final".into();
    trip.notes = Some("booked".into());
    SqliteTripRepository.update(&mut conn, &trip).unwrap();

    let got = SqliteTripRepository.fetch(&conn, trip.id).unwrap().unwrap();
    assert_eq!(got.name, "Final");
    assert_eq!(got.notes.as_deref(), Some("booked"));
}

#[test]
fn delete_cascades_to_children() {
    let mut conn = db::open_in_memory().unwrap();
    let trip = make_trip(&mut conn, "Cascade", "2025-11-01", "2025-11-08");

    let place = SqlitePlaceRepository
        .create(
            &mut conn,
            NewPlace {
                trip_id: trip.id,
                name: "Wat Pho",
                day_index: 0,
                start_time: None,
                end_time: None,
                latitude: 13.7465,
                longitude: 100.493,
                notes: None,
            },
        )
        .unwrap();
    SqliteExpenseRepository
        .create(
            &mut conn,
            NewExpense {
                trip_id: trip.id,
                amount_thb: Decimal::new(20000, 2),
                category: "Food",
                note: None,
                created_at: dt("2025-11-02 12:00:00"),
                original_amount: None,
                original_currency: None,
                fx_rate_used: None,
                attachment_path: None,
            },
        )
        .unwrap();
    SqliteVoiceNoteRepository
        .create(
            &mut conn,
            NewVoiceNote {
                trip_id: trip.id,
                place_id: Some(place.id),
                audio_path: "/tmp/a.m4a",
                transcript: None,
                language: "th",
                created_at: dt("2025-11-02 13:00:00"),
                status: VoiceNoteStatus::Recorded,
            },
        )
        .unwrap();

    SqliteTripRepository.delete(&mut conn, trip.id).unwrap();

    assert!(SqliteTripRepository.fetch(&conn, trip.id).unwrap().is_none());
    assert!(SqlitePlaceRepository.for_trip(&conn, trip.id).unwrap().is_empty());
    assert!(SqliteExpenseRepository.for_trip(&conn, trip.id).unwrap().is_empty());
    assert!(SqliteVoiceNoteRepository
        .fetch_for_trip(&conn, trip.id)
        .unwrap()
        .is_empty());

    let orphans: i64 = conn
        .query_row("SELECT COUNT(*) FROM places", [], |r| r.get(0))
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn delete_missing_trip_errors() {
    let mut conn = db::open_in_memory().unwrap();
    assert!(SqliteTripRepository.delete(&mut conn, 99).is_err());
}
