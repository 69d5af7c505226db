use maud::{Markup, html};

use crate::SITE_NAME;
use crate::controller::news::NewsItem;
use crate::model::profile::FetchState;
use crate::view::layout;

pub fn render_news_page(items: &FetchState<Vec<NewsItem>>) -> Markup {
    layout::page(
        &format!("Noticias · {SITE_NAME}"),
        "/news",
        html! {
            section class="news" {
                h2 { "Noticias" }
                @match items {
                    FetchState::Ready(items) => {
                        div class="news-grid" {
                            @for item in items {
                                (render_news_card(item))
                            }
                        }
                    }
                    FetchState::Empty => {
                        (layout::empty_notice("No hay noticias por ahora."))
                    }
                    FetchState::Failed(msg) => {
                        (layout::error_banner(msg))
                    }
                }
            }
        },
    )
}

fn render_news_card(item: &NewsItem) -> Markup {
    html! {
        article class="news-card" {
            a href=(item.link) target="_blank" rel="noopener" {
                img src=(item.thumbnail) alt=(item.title);
                h3 { (item.title) }
            }
            p class="news-meta" {
                (item.pub_date)
                @if !item.author.is_empty() {
                    " · " (item.author)
                }
            }
            p class="news-excerpt" { (item.description) }
        }
    }
}
