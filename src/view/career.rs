use maud::{Markup, html};

use crate::SITE_NAME;
use crate::controller::photos::Photo;
use crate::model::content::{Recognition, ScheduleEntry, Trophy};
use crate::model::profile::FetchState;
use crate::view::layout;

pub fn render_career_page(
    trophies: &[Trophy],
    recognitions: &[Recognition],
    schedule: &[ScheduleEntry],
    gallery: &FetchState<Vec<Photo>>,
) -> Markup {
    layout::page(
        &format!("Carrera · {SITE_NAME}"),
        "/career",
        html! {
            (render_trophies(trophies))
            (render_recognitions(recognitions))
            (render_schedule(schedule))
            (render_gallery(gallery))
        },
    )
}

fn render_trophies(trophies: &[Trophy]) -> Markup {
    html! {
        section class="trophies" {
            h2 { "Palmarés" }
            @if trophies.is_empty() {
                (layout::empty_notice("Sin títulos registrados."))
            } @else {
                div class="trophy-grid" {
                    @for trophy in trophies {
                        div class="trophy-card" {
                            img src=(trophy.image) alt=(trophy.name);
                            span { (trophy.name) }
                            @if let Some(year) = trophy.year {
                                span class="trophy-year" { (year) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_recognitions(recognitions: &[Recognition]) -> Markup {
    html! {
        @if !recognitions.is_empty() {
            section class="recognitions" {
                h2 { "Reconocimientos" }
                ul {
                    @for r in recognitions {
                        li {
                            (r.title)
                            @if let Some(year) = r.year {
                                " (" (year) ")"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_schedule(schedule: &[ScheduleEntry]) -> Markup {
    html! {
        section class="schedule" {
            h2 { "Calendario" }
            @if schedule.is_empty() {
                (layout::empty_notice("Calendario pendiente de confirmar."))
            } @else {
                table class="styled-table" {
                    thead {
                        tr {
                            th { "Torneo" }
                            th { "Lugar" }
                            th { "Fecha" }
                            th { "Estado" }
                        }
                    }
                    tbody {
                        @for entry in schedule {
                            tr {
                                td { (entry.name) }
                                td { (entry.location) }
                                td {
                                    (entry.date)
                                    @if let Some(end) = &entry.date_end {
                                        " – " (end)
                                    }
                                }
                                td {
                                    @if entry.confirmed {
                                        span class="badge" { "Confirmado" }
                                    } @else {
                                        span class="badge badge-muted" { "Por confirmar" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_gallery(gallery: &FetchState<Vec<Photo>>) -> Markup {
    html! {
        section class="gallery" {
            h2 { "Galería" }
            @match gallery {
                FetchState::Ready(photos) => {
                    div class="photo-grid" {
                        @for photo in photos {
                            img src=(photo.image_url()) alt=(photo.title) loading="lazy";
                        }
                    }
                }
                FetchState::Empty => {
                    (layout::empty_notice("No hay fotos disponibles por ahora."))
                }
                FetchState::Failed(msg) => {
                    (layout::error_banner(msg))
                }
            }
        }
    }
}
