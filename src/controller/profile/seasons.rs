use regex::Regex;
use serde_json::Value;

use crate::model::nav::{find_field, to_list};
use crate::model::profile::{HighlightTournament, SeasonStatsData};
use crate::model::scalar::text_of;

const CAREER_KEYS: [&str; 3] = ["CAREER_HIGHLIGHTS", "Career_Highlights", "career_highlights"];
const THIS_SEASON_KEYS: [&str; 3] = ["THIS_SEASON_RECORD", "This_Season_Record", "this_season_record"];
const LAST_SEASON_KEYS: [&str; 3] = ["LAST_SEASON_HIGHLIGHTS", "Last_Season_Highlights", "last_season_highlights"];
const TOURNAMENT_KEYS: [&str; 3] = ["TOURNAMENT", "Tournament", "tournament"];

/// Label for results whose season cannot be determined at all.
pub const UNKNOWN_SEASON: &str = "Desconocido";

/// Pull a season year out of a feed date string. Dates come as
/// day/month/year with a trailing year segment; the last run of digits is
/// taken as the year, 4 digits verbatim and 2 digits prefixed with "20".
/// This is a fixed feed convention, not a general date parser.
pub fn extract_year_from_date(date: Option<&str>) -> Option<String> {
    let date = date?;
    let re = Regex::new(r"[0-9]+").unwrap();
    let last = re.find_iter(date).last()?.as_str();
    match last.len() {
        4 => Some(last.to_string()),
        2 => Some(format!("20{last}")),
        _ => None,
    }
}

/// Grouping key for bucketing results by season: the year off the date,
/// else the record's own season label, else the unknown bucket.
pub fn season_key(t: &HighlightTournament) -> String {
    extract_year_from_date(t.date.as_deref())
        .or_else(|| t.season.clone())
        .unwrap_or_else(|| UNKNOWN_SEASON.to_string())
}

/// Extract the three season-history sections of a profile document.
/// A malformed or missing section yields an empty list for that section
/// only; this function never fails.
pub fn extract_season_history(doc: &Value) -> SeasonStatsData {
    let career = career_highlights(doc);
    let (current_season, current_items) = this_season_record(doc);
    let (_, last_season_items) = last_season_latest(doc);

    let mut highlights = career;
    highlights.extend(last_season_items);

    SeasonStatsData {
        highlights,
        current_season,
        current_items,
    }
}

fn tournament_rows<'a>(doc: &'a Value, section_keys: &[&str]) -> Vec<&'a Value> {
    match find_field(doc, section_keys) {
        Some(section) => to_list(find_field(section, &TOURNAMENT_KEYS)),
        None => Vec::new(),
    }
}

/// Build one result row. When `imposed_season` is set (the this-season
/// section carries a single label for all of its children) it overrides
/// whatever the record itself says; otherwise the record's own season
/// field wins, with the date-derived year as backup.
fn highlight_from(item: &Value, imposed_season: Option<&str>) -> Option<HighlightTournament> {
    if !item.is_object() {
        return None;
    }
    let date = text_of(item.get("DATE"));
    let season_field = text_of(item.get("SEASON"));
    let season = match imposed_season {
        Some(label) => Some(label.to_string()).or(season_field),
        None => season_field.or_else(|| extract_year_from_date(date.as_deref())),
    };
    Some(HighlightTournament {
        date,
        name: text_of(item.get("NAME")),
        season,
        position: text_of(item.get("POSITION")),
        rounds: text_of(item.get("ROUNDS")),
        score: text_of(item.get("SCORE")),
        vspar: text_of(item.get("VSPAR")),
    })
}

fn career_highlights(doc: &Value) -> Vec<HighlightTournament> {
    tournament_rows(doc, &CAREER_KEYS)
        .into_iter()
        .filter_map(|item| highlight_from(item, None))
        .collect()
}

fn this_season_record(doc: &Value) -> (Option<String>, Vec<HighlightTournament>) {
    let Some(section) = find_field(doc, &THIS_SEASON_KEYS) else {
        return (None, Vec::new());
    };
    if !section.is_object() {
        return (None, Vec::new());
    }
    let season = text_of(section.get("SEASON"));
    let tournaments = to_list(find_field(section, &TOURNAMENT_KEYS))
        .into_iter()
        .filter_map(|item| highlight_from(item, season.as_deref()))
        .collect();
    (season, tournaments)
}

/// Year used to decide which past season a record belongs to.
fn derived_year(t: &HighlightTournament) -> Option<String> {
    extract_year_from_date(t.date.as_deref()).or_else(|| t.season.clone())
}

/// The last-season section can span several past seasons; keep only the
/// records from the most recent one (every record tied on the maximum
/// year stays in).
fn last_season_latest(doc: &Value) -> (Option<String>, Vec<HighlightTournament>) {
    let parsed: Vec<HighlightTournament> = tournament_rows(doc, &LAST_SEASON_KEYS)
        .into_iter()
        .filter_map(|item| highlight_from(item, None))
        .collect();

    let latest = parsed
        .iter()
        .filter_map(|t| derived_year(t))
        .filter_map(|y| y.parse::<i64>().ok())
        .max()
        .map(|y| y.to_string());

    let Some(latest) = latest else {
        return (None, Vec::new());
    };
    let kept = parsed
        .into_iter()
        .filter(|t| derived_year(t).as_deref() == Some(latest.as_str()))
        .collect();
    (Some(latest), kept)
}

/// Group the historical highlights by season for the stats page tabs:
/// newest season first, non-numeric buckets last, the in-progress season
/// excluded (it gets its own tab), and each bucket's rows newest first.
pub fn season_buckets(data: &SeasonStatsData) -> Vec<(String, Vec<HighlightTournament>)> {
    let mut buckets: Vec<(String, Vec<HighlightTournament>)> = Vec::new();
    for item in &data.highlights {
        let key = season_key(item);
        if data.current_season.as_deref() == Some(key.as_str()) {
            continue;
        }
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, items)) => items.push(item.clone()),
            None => buckets.push((key, vec![item.clone()])),
        }
    }
    buckets.sort_by_key(|(key, _)| std::cmp::Reverse(key.parse::<i64>().unwrap_or(i64::MIN)));
    for (_, items) in &mut buckets {
        sort_newest_first(items);
    }
    buckets
}

/// Order results newest first: by numeric season year when both sides
/// have one, else by raw date string.
pub fn sort_newest_first(items: &mut [HighlightTournament]) {
    items.sort_by(|a, b| {
        let ya = derived_year(a).and_then(|y| y.parse::<i64>().ok());
        let yb = derived_year(b).and_then(|y| y.parse::<i64>().ok());
        match (ya, yb) {
            (Some(na), Some(nb)) if na != nb => nb.cmp(&na),
            _ => b
                .date
                .clone()
                .unwrap_or_default()
                .cmp(&a.date.clone().unwrap_or_default()),
        }
    });
}
