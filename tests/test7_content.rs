use chrono::NaiveDate;

use fairway_site::model::content::{next_tournament_on, recognitions, schedule, trophies};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn embedded_content_parses() {
    assert!(!trophies().is_empty());
    assert!(!recognitions().is_empty());
    assert!(!schedule().is_empty());
}

#[test]
fn next_tournament_is_the_first_confirmed_one_ahead() {
    let next = next_tournament_on(day(2025, 4, 1)).expect("season ongoing");
    assert_eq!(next.entry.name, "Lalla Meryem Cup");
    assert!(!next.is_current);
}

#[test]
fn a_tournament_underway_still_counts() {
    // Mid-event: started the 13th, ends the 16th.
    let next = next_tournament_on(day(2025, 3, 14)).expect("event underway");
    assert_eq!(next.entry.name, "Investec South African Women's Open");
    assert!(next.is_current);
}

#[test]
fn unconfirmed_entries_are_skipped() {
    // Early July only has the unconfirmed qualifier before Antrim.
    let next = next_tournament_on(day(2025, 7, 1)).expect("more events ahead");
    assert_eq!(next.entry.name, "ISPS Handa World Invitational");
}

#[test]
fn past_the_season_there_is_nothing_next() {
    assert!(next_tournament_on(day(2025, 12, 15)).is_none());
}
