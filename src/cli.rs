// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn trip_scope() -> Arg {
    Arg::new("trip")
        .long("trip")
        .required(true)
        .help("Trip name")
}

pub fn build_cli() -> Command {
    Command::new("tripclip")
        .about("Offline travel journal: trips, itinerary, Thai-baht expenses, voice notes, data packs")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("trip")
                .about("Manage trips")
                .subcommand(
                    Command::new("add")
                        .about("Add a trip")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("destination").long("destination").required(true))
                        .arg(Arg::new("start").long("start").required(true).help("Start date YYYY-MM-DD"))
                        .arg(Arg::new("end").long("end").required(true).help("End date YYYY-MM-DD"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List trips, soonest start first")
                        .arg(Arg::new("search").long("search").help("Substring match on name/destination/notes")),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit a trip")
                        .arg(Arg::new("id").long("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("destination").long("destination"))
                        .arg(Arg::new("start").long("start"))
                        .arg(Arg::new("end").long("end"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a trip and everything in it")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("place")
                .about("Manage itinerary places")
                .subcommand(
                    Command::new("add")
                        .about("Add a place to a trip day")
                        .arg(trip_scope())
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("day").long("day").required(true).value_parser(value_parser!(i64)).help("Zero-based day index"))
                        .arg(Arg::new("start").long("start").help("Start time HH:MM"))
                        .arg(Arg::new("end").long("end").help("End time HH:MM"))
                        .arg(Arg::new("lat").long("lat").value_parser(value_parser!(f64)))
                        .arg(Arg::new("lng").long("lng").value_parser(value_parser!(f64)))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List a trip's places by day and start time")
                        .arg(trip_scope())
                        .arg(Arg::new("search").long("search").help("Substring match on name/notes")),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit a place")
                        .arg(Arg::new("id").long("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("day").long("day").value_parser(value_parser!(i64)))
                        .arg(Arg::new("start").long("start"))
                        .arg(Arg::new("end").long("end"))
                        .arg(Arg::new("lat").long("lat").value_parser(value_parser!(f64)))
                        .arg(Arg::new("lng").long("lng").value_parser(value_parser!(f64)))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a place")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Manage expenses (Thai baht)")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(trip_scope())
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").help("Amount in THB"))
                        .arg(Arg::new("original").long("original").help("Amount in a foreign currency"))
                        .arg(Arg::new("currency").long("currency").help("Foreign currency code, e.g. USD"))
                        .arg(Arg::new("rate").long("rate").help("Rate to THB for --original"))
                        .arg(Arg::new("note").long("note"))
                        .arg(Arg::new("date").long("date").help("Spent at, YYYY-MM-DD [HH:MM]; defaults to now"))
                        .arg(Arg::new("attachment").long("attachment").help("Image file to keep with the expense")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List a trip's expenses, newest first")
                        .arg(trip_scope())
                        .arg(Arg::new("search").long("search").help("Substring match on category/note")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove an expense (and its attachment file)")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("voice")
                .about("Manage voice notes")
                .subcommand(
                    Command::new("add")
                        .about("Register a recording")
                        .arg(trip_scope())
                        .arg(Arg::new("audio").long("audio").required(true).help("Path to the audio file"))
                        .arg(Arg::new("language").long("language").required(true).help("Language code, e.g. th"))
                        .arg(Arg::new("place").long("place").value_parser(value_parser!(i64)).help("Place id to link"))
                        .arg(Arg::new("transcript").long("transcript")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List a trip's voice notes, newest first")
                        .arg(trip_scope()),
                ))
                .subcommand(
                    Command::new("transcribe")
                        .about("Attach a transcript and mark the note transcribed")
                        .arg(Arg::new("id").long("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("text").long("text").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a voice note")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("pack")
                .about("Manage offline data packs")
                .subcommand(
                    Command::new("add")
                        .about("Register an installed pack")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("version").long("version").required(true))
                        .arg(Arg::new("type").long("type").required(true).help("poi|map|asr|fx"))
                        .arg(Arg::new("file").long("file").required(true).help("Path to the pack payload")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List installed packs, newest first"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a pack record")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Expense totals for a trip, by day and by category")
                .arg(trip_scope()),
        ))
        .subcommand(
            Command::new("convert")
                .about("Convert an amount to THB with a given rate")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("rate").long("rate").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("expenses")
                        .about("Export a trip's expenses")
                        .arg(trip_scope())
                        .arg(Arg::new("format").long("format").required(true).help("csv|json"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the store for inconsistencies"))
}
