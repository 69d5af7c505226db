use maud::{Markup, html};

use crate::SITE_NAME;
use crate::model::content::{NextTournament, Trophy};
use crate::model::profile::{FetchState, StatsPageData};
use crate::view::layout;

const VISITED_COUNTRIES: i64 = 50;

pub fn render_index(
    stats: &FetchState<StatsPageData>,
    next: Option<&NextTournament>,
    trophies: &[Trophy],
) -> Markup {
    layout::page(
        SITE_NAME,
        "/",
        html! {
            (render_hero())
            @if let Some(next) = next {
                (render_next_tournament(next))
            }
            (render_numbers(stats))
            (render_trophy_strip(trophies))
        },
    )
}

fn render_hero() -> Markup {
    html! {
        section class="hero" {
            h1 { (SITE_NAME) }
            p class="tagline" { "Golfista profesional · Ladies European Tour" }
        }
    }
}

fn render_next_tournament(next: &NextTournament) -> Markup {
    html! {
        section class="next-tournament" {
            @if next.is_current {
                span class="badge badge-live" { "Jugando ahora" }
            } @else {
                span class="badge" { "Próximo torneo" }
            }
            strong { (next.entry.name) }
            span { (next.entry.location) " · " (next.entry.date) }
        }
    }
}

fn render_numbers(stats: &FetchState<StatsPageData>) -> Markup {
    html! {
        section class="numbers" {
            @match stats {
                FetchState::Ready(data) => {
                    div class="number-grid" {
                        (number_card(data.member_age, "Edad"))
                        (number_card(data.wins(), "Victorias"))
                        (number_card(data.tournaments_played(), "Torneos jugados"))
                        (number_card(Some(VISITED_COUNTRIES), "Países visitados"))
                    }
                }
                FetchState::Empty => {
                    (layout::empty_notice("No hay estadísticas disponibles por ahora."))
                }
                FetchState::Failed(msg) => {
                    (layout::error_banner(msg))
                }
            }
        }
    }
}

fn number_card(value: Option<i64>, label: &str) -> Markup {
    html! {
        div class="number-card" {
            @match value {
                Some(n) => span class="number" { (n) },
                None => span class="number" { "—" },
            }
            span class="number-label" { (label) }
        }
    }
}

fn render_trophy_strip(trophies: &[Trophy]) -> Markup {
    html! {
        @if !trophies.is_empty() {
            section class="trophies" {
                h2 { "Palmarés" }
                div class="trophy-grid" {
                    @for trophy in trophies.iter().take(4) {
                        div class="trophy-card" {
                            img src=(trophy.image) alt=(trophy.name);
                            span { (trophy.name) }
                            @if let Some(year) = trophy.year {
                                span class="trophy-year" { (year) }
                            }
                        }
                    }
                }
                a class="more-link" href="/career" { "Ver carrera completa" }
            }
        }
    }
}
