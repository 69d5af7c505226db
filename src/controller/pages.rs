use actix_web::{HttpResponse, Responder, web};
use futures::join;
use std::collections::HashMap;

use crate::args::Args;
use crate::controller::profile::client::ProfileClient;
use crate::controller::{news, photos, profile};
use crate::model::content;
use crate::model::profile::{FetchState, SeasonStatsData, StatsPageData};
use crate::view;

/// Turn a fetch result into what the page should show: content, a
/// "no data" notice for a clean-but-empty payload, or an error banner.
fn fold<T>(
    result: Result<T, Box<dyn std::error::Error>>,
    has_data: impl FnOnce(&T) -> bool,
    what: &str,
) -> FetchState<T> {
    match result {
        Ok(data) if has_data(&data) => FetchState::Ready(data),
        Ok(_) => FetchState::Empty,
        Err(e) => {
            eprintln!("Error fetching {what}: {e}");
            FetchState::Failed(e.to_string())
        }
    }
}

fn html(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn index_page(client: web::Data<ProfileClient>) -> impl Responder {
    let stats = fold(
        profile::get_statistics(client.get_ref()).await,
        StatsPageData::has_data,
        "statistics",
    );
    html(view::index::render_index(
        &stats,
        content::next_tournament().as_ref(),
        &content::trophies(),
    ))
}

pub async fn stats_page(
    query: web::Query<HashMap<String, String>>,
    client: web::Data<ProfileClient>,
) -> impl Responder {
    // Two independent requests on purpose: statistics and season history
    // are separate consumers of the same endpoint, fetched concurrently.
    let (stats_result, seasons_result) = join!(
        profile::get_statistics(client.get_ref()),
        profile::get_season_stats(client.get_ref())
    );
    let stats = fold(stats_result, StatsPageData::has_data, "statistics");
    let seasons = fold(seasons_result, SeasonStatsData::has_data, "season history");
    let selected_season = query.get("season").map(String::as_str);
    html(view::stats::render_stats_page(&stats, &seasons, selected_season))
}

pub async fn news_page(args: web::Data<Args>) -> impl Responder {
    let client = reqwest::Client::new();
    let items = fold(
        news::fetch_news(&client, &args.news_url).await,
        |items| !items.is_empty(),
        "news",
    );
    html(view::news::render_news_page(&items))
}

pub async fn career_page(args: web::Data<Args>) -> impl Responder {
    let client = reqwest::Client::new();
    let gallery = fold(
        photos::fetch_photos(&client, &args.photos_url).await,
        |photos| !photos.is_empty(),
        "photos",
    );
    html(view::career::render_career_page(
        &content::trophies(),
        &content::recognitions(),
        &content::schedule(),
        &gallery,
    ))
}

pub async fn contact_page() -> impl Responder {
    html(view::contact::render_contact_page())
}
