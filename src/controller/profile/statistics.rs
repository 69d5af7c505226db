use serde_json::Value;
use std::collections::VecDeque;

use crate::TARGET_TOUR;
use crate::model::nav::{child_containers, find_field, to_list};
use crate::model::profile::{LetStatistics, ProfileStatistics, StatEntry};
use crate::model::scalar::{Scalar, normalize_value};

/// Statistic code the tour uses for driving distance; some seasons the
/// feed ships the row with this code but a blank or renamed description.
const DRIVING_DISTANCE_CODE: &str = "S155";

const STATISTICS_KEYS: [&str; 3] = ["STATISTICS", "Statistics", "statistics"];
const STATISTIC_KEYS: [&str; 3] = ["STATISTIC", "Statistic", "statistic"];

const WINS_LABEL: &str = "tournament wins";
const TOP_TEN_LABEL: &str = "tournament top ten finishes";
const BIRDIES_LABEL: &str = "total number of birdies";
const DRIVING_LABEL: &str = "driving distance";
const COMEBACK_LABEL: &str = "biggest comeback margin";

/// Pull the headline summary and the full entry list out of a profile
/// document. Returns an empty result (not an error) when the document has
/// nothing recognizable; callers must keep that distinct from a failed
/// fetch.
pub fn extract_statistics(doc: &Value) -> ProfileStatistics {
    let (mut summary, entries) = match statistic_rows(doc) {
        Some(rows) => (summary_from_rows(&rows), entries_from_rows(&rows)),
        None => (legacy_summary(doc), deep_scan_entries(doc)),
    };

    // Driving distance fallback by code. The entry list is already
    // tour-filtered, so a cross-tour S155 row can never leak in here.
    let missing_driving = summary
        .as_ref()
        .map_or(true, |s| s.driving_distance.is_none());
    if missing_driving {
        let by_code = entries
            .iter()
            .find(|e| e.code.as_deref() == Some(DRIVING_DISTANCE_CODE))
            .and_then(|e| e.value.as_ref())
            .and_then(Scalar::as_number);
        if let Some(distance) = by_code {
            let mut filled = summary.take().unwrap_or_default();
            filled.driving_distance = Some(distance);
            summary = Some(filled);
        }
    }

    ProfileStatistics { summary, entries }
}

/// Locate the statistics collection, tolerating both the flat shape
/// (`STATISTICS: [...]`) and the wrapped one
/// (`STATISTICS: { STATISTIC: [...] | {...} }`). None means the document
/// carries no usable container at all.
fn statistic_rows(doc: &Value) -> Option<Vec<&Value>> {
    let statistics = find_field(doc, &STATISTICS_KEYS)?;
    if statistics.is_array() {
        return Some(to_list(Some(statistics)));
    }
    let inner = find_field(statistics, &STATISTIC_KEYS)?;
    if inner.is_array() || inner.is_object() {
        Some(to_list(Some(inner)))
    } else {
        None
    }
}

/// True when the row is tagged for a different tour. Untagged rows count
/// as ours.
fn other_tour(row: &Value) -> bool {
    match row.get("TOUR").and_then(Value::as_str) {
        Some(tour) => tour != TARGET_TOUR,
        None => false,
    }
}

fn entries_from_rows(rows: &[&Value]) -> Vec<StatEntry> {
    let mut entries = Vec::new();
    for row in rows {
        if !row.is_object() || other_tour(row) {
            continue;
        }
        let description = row
            .get("DESCRIPTION")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let value = normalize_value(row.get("VALUE"));
        let code = row.get("CODE").and_then(Value::as_str).map(String::from);
        let tour = row.get("TOUR").and_then(Value::as_str).map(String::from);
        let played = normalize_value(row.get("PLAYED")).and_then(|s| s.as_number());
        let tournaments = normalize_value(row.get("TOURNAMENTS")).and_then(|s| s.as_number());

        // A row with no description or no usable figure is noise.
        if !description.is_empty()
            && (value.is_some() || played.is_some() || tournaments.is_some())
        {
            entries.push(StatEntry {
                description,
                value,
                code,
                tour,
                played,
                tournaments,
            });
        }
    }
    entries
}

/// Scan the rows for the five headline labels. The summary exists as soon
/// as any label matched, even if its value normalized away, which lets
/// the caller distinguish "the feed had the row but no number" from "the
/// feed had nothing".
fn summary_from_rows(rows: &[&Value]) -> Option<LetStatistics> {
    let mut result = LetStatistics::default();
    let mut matched = false;

    for row in rows {
        if !row.is_object() || other_tour(row) {
            continue;
        }
        let description = row.get("DESCRIPTION").and_then(Value::as_str).unwrap_or("");
        let normalized = || normalize_value(row.get("VALUE"));
        match description.to_lowercase().as_str() {
            WINS_LABEL => {
                result.tournament_wins = normalized().and_then(|s| s.as_number());
                matched = true;
            }
            TOP_TEN_LABEL => {
                result.tournament_top_ten_finishes = normalized().and_then(|s| s.as_number());
                matched = true;
            }
            BIRDIES_LABEL => {
                result.total_number_of_birdies = normalized().and_then(|s| s.as_number());
                matched = true;
            }
            DRIVING_LABEL => {
                result.driving_distance = normalized().and_then(|s| s.as_number());
                matched = true;
            }
            COMEBACK_LABEL => {
                result.biggest_comeback_margin = normalized();
                matched = true;
            }
            _ => {}
        }
    }

    matched.then_some(result)
}

/// Degraded legacy shape: the statistic labels sit directly on the
/// document root as title-cased keys.
fn legacy_summary(doc: &Value) -> Option<LetStatistics> {
    let number = |key: &str| {
        normalize_value(doc.get(key)).and_then(|s| s.as_number())
    };
    let result = LetStatistics {
        tournament_wins: number("Tournament Wins"),
        tournament_top_ten_finishes: number("Tournament Top Ten Finishes"),
        total_number_of_birdies: number("Total Number of Birdies"),
        driving_distance: number("Driving Distance"),
        biggest_comeback_margin: normalize_value(doc.get("Biggest Comeback Margin")),
    };
    result.any_present().then_some(result)
}

/// Last resort for the entry list: walk the whole document breadth-first
/// and harvest recognizable rows from any nested array.
fn deep_scan_entries(doc: &Value) -> Vec<StatEntry> {
    let mut entries = Vec::new();
    let mut queue: VecDeque<&Value> = VecDeque::new();
    queue.push_back(doc);
    while let Some(node) = queue.pop_front() {
        if let Value::Array(items) = node {
            let rows: Vec<&Value> = items.iter().collect();
            entries.extend(entries_from_rows(&rows));
        }
        for child in child_containers(node) {
            queue.push_back(child);
        }
    }
    entries
}
