use serde::{Deserialize, Serialize};

use crate::model::scalar::Scalar;

/// One normalized statistic row from the tour profile. Description casing
/// is kept exactly as the feed sent it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatEntry {
    pub description: String,
    pub value: Option<Scalar>,
    pub code: Option<String>,
    pub tour: Option<String>,
    pub played: Option<f64>,
    pub tournaments: Option<f64>,
}

/// The five headline figures picked out of the statistics collection.
/// Every field is either a normalized scalar or None; the comeback margin
/// is the only one that may stay textual (e.g. "Won by 3").
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LetStatistics {
    pub tournament_wins: Option<f64>,
    pub tournament_top_ten_finishes: Option<f64>,
    pub total_number_of_birdies: Option<f64>,
    pub driving_distance: Option<f64>,
    pub biggest_comeback_margin: Option<Scalar>,
}

impl LetStatistics {
    pub fn any_present(&self) -> bool {
        self.tournament_wins.is_some()
            || self.tournament_top_ten_finishes.is_some()
            || self.total_number_of_birdies.is_some()
            || self.driving_distance.is_some()
            || self.biggest_comeback_margin.is_some()
    }
}

/// Output of the statistics extractor: the headline summary (None when the
/// document carried no recognizable statistics at all, which is "no data",
/// not an error) plus every recognized row for the full listing.
#[derive(Serialize, Clone, Debug, Default)]
pub struct ProfileStatistics {
    pub summary: Option<LetStatistics>,
    pub entries: Vec<StatEntry>,
}

/// One tournament result row. All fields are display strings straight
/// from the feed; missing pieces stay None rather than dropping the row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HighlightTournament {
    pub date: Option<String>,
    pub name: Option<String>,
    pub season: Option<String>,
    pub position: Option<String>,
    pub rounds: Option<String>,
    pub score: Option<String>,
    pub vspar: Option<String>,
}

/// Season history as consumed by the stats page: career and last-season
/// highlights merged into `highlights`, with the in-progress season kept
/// apart so it can be shown as its own tab.
#[derive(Serialize, Clone, Debug, Default)]
pub struct SeasonStatsData {
    pub highlights: Vec<HighlightTournament>,
    pub current_season: Option<String>,
    pub current_items: Vec<HighlightTournament>,
}

impl SeasonStatsData {
    pub fn has_data(&self) -> bool {
        !self.highlights.is_empty() || !self.current_items.is_empty()
    }
}

/// Everything the statistics page needs from one profile fetch.
#[derive(Serialize, Clone, Debug, Default)]
pub struct StatsPageData {
    pub summary: Option<LetStatistics>,
    pub entries: Vec<StatEntry>,
    pub member_age: Option<i64>,
}

impl StatsPageData {
    pub fn has_data(&self) -> bool {
        self.summary.as_ref().is_some_and(LetStatistics::any_present) || !self.entries.is_empty()
    }

    /// Tournament wins for the home page counters: the summary figure,
    /// else a direct entry lookup.
    pub fn wins(&self) -> Option<i64> {
        if let Some(w) = self.summary.as_ref().and_then(|s| s.tournament_wins) {
            return Some(w.round() as i64);
        }
        self.entries
            .iter()
            .find(|e| e.description.eq_ignore_ascii_case("tournament wins"))
            .and_then(|e| e.value.as_ref())
            .and_then(Scalar::as_number)
            .map(|n| n.round() as i64)
    }

    /// Career tournaments played, from the B010 row or any row describing
    /// a tournaments count; prefers the tournaments column, then played,
    /// then the plain value.
    pub fn tournaments_played(&self) -> Option<i64> {
        let candidate = self
            .entries
            .iter()
            .find(|e| e.code.as_deref() == Some("B010"))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.description.to_lowercase().contains("tournaments"))
            })?;
        candidate
            .tournaments
            .or(candidate.played)
            .or_else(|| candidate.value.as_ref().and_then(Scalar::as_number))
            .map(|n| n.round() as i64)
    }
}

/// What a data-backed page section ended up with. Loading collapses into
/// request latency server-side; the remaining states must render
/// distinctly: content, a "no data yet" notice, or an error banner.
#[derive(Clone, Debug)]
pub enum FetchState<T> {
    Ready(T),
    Empty,
    Failed(String),
}
