use maud::{Markup, html};
use std::collections::HashSet;

use crate::SITE_NAME;
use crate::controller::profile::seasons::{season_buckets, sort_newest_first};
use crate::model::profile::{
    FetchState, HighlightTournament, LetStatistics, SeasonStatsData, StatEntry, StatsPageData,
};
use crate::model::scalar::display_number;
use crate::view::layout;

/// Labels shown as featured cards; their rows are filtered out of the
/// full grid so they never appear twice.
const FEATURED_LABELS: [&str; 3] = [
    "tournament wins",
    "tournament top ten finishes",
    "driving distance",
];

/// Query value selecting the in-progress season tab.
const CURRENT_TAB: &str = "current";

pub fn render_stats_page(
    stats: &FetchState<StatsPageData>,
    seasons: &FetchState<SeasonStatsData>,
    selected_season: Option<&str>,
) -> Markup {
    layout::page(
        &format!("Estadísticas · {SITE_NAME}"),
        "/stats",
        html! {
            section class="stats" {
                h2 { "Estadísticas" }
                @match stats {
                    FetchState::Ready(data) => {
                        (render_statistics(data))
                    }
                    FetchState::Empty => {
                        (layout::empty_notice("No hay estadísticas disponibles por ahora."))
                    }
                    FetchState::Failed(msg) => {
                        (layout::error_banner(msg))
                    }
                }
            }
            section class="season-results" {
                h2 { "Resultados por temporada" }
                @match seasons {
                    FetchState::Ready(data) => {
                        (render_seasons(data, selected_season))
                    }
                    FetchState::Empty => {
                        (layout::empty_notice("No hay datos de torneos destacados por ahora."))
                    }
                    FetchState::Failed(msg) => {
                        (layout::error_banner(msg))
                    }
                }
            }
        },
    )
}

fn render_statistics(data: &StatsPageData) -> Markup {
    let featured = [
        ("Tournament Wins", data.summary.as_ref().and_then(|s| s.tournament_wins)),
        (
            "Tournament Top Ten Finishes",
            data.summary.as_ref().and_then(|s| s.tournament_top_ten_finishes),
        ),
        ("Driving Distance", data.summary.as_ref().and_then(|s| s.driving_distance)),
    ];
    let comeback = data
        .summary
        .as_ref()
        .and_then(|s: &LetStatistics| s.biggest_comeback_margin.as_ref());
    let rest = filtered_entries(&data.entries);

    html! {
        div class="stat-cards" {
            @for (label, value) in featured {
                div class="stat-card" {
                    span class="stat-label" { (label) }
                    @match value {
                        Some(n) => span class="stat-value" { (display_number(n)) },
                        None => span class="stat-value" { "—" },
                    }
                }
            }
            @if let Some(margin) = comeback {
                div class="stat-card" {
                    span class="stat-label" { "Biggest Comeback Margin" }
                    span class="stat-value" { (margin) }
                }
            }
        }
        @if !rest.is_empty() {
            details class="all-stats" {
                summary { "Ver estadísticas completas" }
                div class="stat-grid" {
                    @for entry in &rest {
                        div class="stat-cell" {
                            span class="stat-label" { (entry.description) }
                            span class="stat-value" {
                                @if let Some(value) = &entry.value {
                                    (value)
                                } @else if let Some(played) = entry.played {
                                    (display_number(played))
                                } @else {
                                    "—"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The "other statistics" grid: drop money-list rows, the featured
/// labels, and any row sharing a code with a featured one.
fn filtered_entries(entries: &[StatEntry]) -> Vec<&StatEntry> {
    let mut featured_codes: HashSet<&str> = HashSet::from(["S155"]);
    for entry in entries {
        let desc = entry.description.to_lowercase();
        if FEATURED_LABELS.contains(&desc.as_str()) {
            if let Some(code) = entry.code.as_deref() {
                featured_codes.insert(code);
            }
        }
    }
    entries
        .iter()
        .filter(|entry| {
            let desc = entry.description.to_lowercase();
            if desc.contains("overall money") {
                return false;
            }
            if FEATURED_LABELS.contains(&desc.as_str()) {
                return false;
            }
            !entry
                .code
                .as_deref()
                .is_some_and(|code| featured_codes.contains(code))
        })
        .collect()
}

fn render_seasons(data: &SeasonStatsData, selected_season: Option<&str>) -> Markup {
    let buckets = season_buckets(data);
    let has_current = data.current_season.is_some() && !data.current_items.is_empty();

    // Default tab: the in-progress season when it has results, else the
    // newest historical one.
    let selected = match selected_season {
        Some(s) => s.to_string(),
        None if has_current => CURRENT_TAB.to_string(),
        None => buckets.first().map(|(k, _)| k.clone()).unwrap_or_default(),
    };

    let items: Vec<HighlightTournament> = if selected == CURRENT_TAB {
        let mut current = data.current_items.clone();
        sort_newest_first(&mut current);
        current
    } else {
        buckets
            .iter()
            .find(|(key, _)| *key == selected)
            .map(|(_, items)| items.clone())
            .unwrap_or_default()
    };

    html! {
        div class="season-tabs" {
            @if has_current {
                a href={ "/stats?season=" (CURRENT_TAB) }
                    class=[(selected == CURRENT_TAB).then_some("active")] {
                    "Temporada actual"
                }
            }
            @for (key, _) in &buckets {
                a href={ "/stats?season=" (key) }
                    class=[(selected == *key).then_some("active")] {
                    (key)
                }
            }
        }
        (render_tournament_list(&items))
    }
}

fn render_tournament_list(items: &[HighlightTournament]) -> Markup {
    html! {
        @if items.is_empty() {
            (layout::empty_notice("Sin torneos en esta temporada."))
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "Fecha" }
                        th { "Torneo" }
                        th { "Posición" }
                        th { "Rondas" }
                        th { "Score" }
                        th { "Vs Par" }
                    }
                }
                tbody {
                    @for t in items {
                        tr {
                            td { (t.date.as_deref().unwrap_or("—")) }
                            td { (t.name.as_deref().unwrap_or("—")) }
                            td { (t.position.as_deref().unwrap_or("—")) }
                            td { (t.rounds.as_deref().unwrap_or("—")) }
                            td { (t.score.as_deref().unwrap_or("—")) }
                            td { (t.vspar.as_deref().unwrap_or("—")) }
                        }
                    }
                }
            }
        }
    }
}
