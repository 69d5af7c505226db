pub mod age;
pub mod client;
pub mod seasons;
pub mod statistics;

use crate::model::profile::{ProfileStatistics, SeasonStatsData, StatsPageData};
use client::ProfileClient;

/// Fetch the profile document and pull out everything the statistics
/// views need. An empty document is a successful, empty result; only the
/// network call itself can fail.
pub async fn get_statistics(
    client: &ProfileClient,
) -> Result<StatsPageData, Box<dyn std::error::Error>> {
    let doc = client.fetch_document().await?;
    let ProfileStatistics { summary, entries } = statistics::extract_statistics(&doc);
    let member_age = age::resolve_age(&doc);
    Ok(StatsPageData {
        summary,
        entries,
        member_age,
    })
}

/// Fetch the profile document and extract the season history. Each
/// consumer performs its own fetch; there is deliberately no shared cache
/// or in-flight deduplication between them.
pub async fn get_season_stats(
    client: &ProfileClient,
) -> Result<SeasonStatsData, Box<dyn std::error::Error>> {
    let doc = client.fetch_document().await?;
    Ok(seasons::extract_season_history(&doc))
}
