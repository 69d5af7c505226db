use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const TROPHIES_JSON: &str = include_str!("data/trophies.json");
const RECOGNITIONS_JSON: &str = include_str!("data/recognitions.json");
const TOURNAMENTS_JSON: &str = include_str!("data/tournaments.json");

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Trophy {
    pub id: u32,
    pub name: String,
    pub year: Option<u32>,
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Recognition {
    pub id: u32,
    pub title: String,
    pub year: Option<u32>,
}

/// One row of the published tournament schedule. Dates are `dd/mm/yy`,
/// the format the schedule is maintained in.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScheduleEntry {
    pub name: String,
    pub location: String,
    pub date: String,
    pub date_end: Option<String>,
    pub confirmed: bool,
}

#[derive(Clone, Debug)]
pub struct NextTournament {
    pub entry: ScheduleEntry,
    /// True when the tournament has already teed off.
    pub is_current: bool,
}

#[derive(Deserialize)]
struct TrophyFile {
    trophies: Vec<Trophy>,
}

#[derive(Deserialize)]
struct RecognitionFile {
    recognitions: Vec<Recognition>,
}

#[derive(Deserialize)]
struct TournamentFile {
    tournaments: Vec<ScheduleEntry>,
}

pub fn trophies() -> Vec<Trophy> {
    match serde_json::from_str::<TrophyFile>(TROPHIES_JSON) {
        Ok(file) => file.trophies,
        Err(e) => {
            eprintln!("Error parsing embedded trophies: {e}");
            vec![]
        }
    }
}

pub fn recognitions() -> Vec<Recognition> {
    match serde_json::from_str::<RecognitionFile>(RECOGNITIONS_JSON) {
        Ok(file) => file.recognitions,
        Err(e) => {
            eprintln!("Error parsing embedded recognitions: {e}");
            vec![]
        }
    }
}

pub fn schedule() -> Vec<ScheduleEntry> {
    match serde_json::from_str::<TournamentFile>(TOURNAMENTS_JSON) {
        Ok(file) => file.tournaments,
        Err(e) => {
            eprintln!("Error parsing embedded schedule: {e}");
            vec![]
        }
    }
}

fn parse_schedule_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%y").ok()
}

/// The next confirmed tournament whose final day has not passed yet,
/// relative to `today`. A multi-day event already underway still counts.
pub fn next_tournament_on(today: NaiveDate) -> Option<NextTournament> {
    let mut upcoming: Vec<(NaiveDate, NaiveDate, ScheduleEntry)> = schedule()
        .into_iter()
        .filter(|t| t.confirmed)
        .filter_map(|t| {
            let start = parse_schedule_date(&t.date)?;
            let end = t
                .date_end
                .as_deref()
                .and_then(parse_schedule_date)
                .unwrap_or(start);
            Some((start, end, t))
        })
        .filter(|(_, end, _)| *end >= today)
        .collect();

    upcoming.sort_by_key(|(start, _, _)| *start);
    upcoming.into_iter().next().map(|(start, _, entry)| NextTournament {
        entry,
        is_current: start <= today,
    })
}

pub fn next_tournament() -> Option<NextTournament> {
    next_tournament_on(Utc::now().date_naive())
}
