use reqwest::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Shown when an article has no thumbnail and no image in its body.
pub const FALLBACK_THUMBNAIL: &str = "/static/img/logo.svg";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub thumbnail: String,
    pub description: String,
    pub author: String,
}

#[derive(Deserialize)]
struct RawFeed {
    status: String,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default, rename = "pubDate")]
    pub_date: String,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    author: String,
}

/// # Errors
///
/// Will return `Err` if the bridge is unreachable, answers with a
/// non-success status, or reports anything but `status: "ok"`.
pub async fn fetch_news(
    client: &Client,
    url: &str,
) -> Result<Vec<NewsItem>, Box<dyn std::error::Error>> {
    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(format!("HTTP {}", resp.status().as_u16()).into());
    }
    let body = resp.text().await?;
    parse_news_feed(&body)
}

pub fn parse_news_feed(body: &str) -> Result<Vec<NewsItem>, Box<dyn std::error::Error>> {
    let feed: RawFeed = serde_json::from_str(body)?;
    if feed.status != "ok" {
        return Err(format!("news feed returned status '{}'", feed.status).into());
    }
    Ok(feed.items.into_iter().map(map_item).collect())
}

fn map_item(item: RawItem) -> NewsItem {
    let thumbnail = if item.thumbnail.is_empty() {
        extract_image_from_description(&item.description)
            .unwrap_or_else(|| FALLBACK_THUMBNAIL.to_string())
    } else {
        item.thumbnail
    };
    NewsItem {
        title: item.title,
        link: item.link,
        pub_date: item.pub_date,
        thumbnail,
        description: clean_description(&item.description),
        author: item.author,
    }
}

/// Reduce the article's HTML description to plain text for the card.
fn clean_description(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Some feed items ship their lead image inline instead of in the
/// thumbnail field.
fn extract_image_from_description(html: &str) -> Option<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("img").ok()?;
    fragment
        .select(&selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(String::from)
}
