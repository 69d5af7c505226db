use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub farm: i64,
    #[serde(default)]
    pub title: String,
    pub url_z: Option<String>,
    pub url_l: Option<String>,
    pub url_o: Option<String>,
}

impl Photo {
    /// Best available image URL: the medium render, then large, then
    /// original, then the static-photo URL composed from the record
    /// itself (not every API key is allowed the sized extras).
    pub fn image_url(&self) -> String {
        self.url_z
            .clone()
            .or_else(|| self.url_l.clone())
            .or_else(|| self.url_o.clone())
            .unwrap_or_else(|| {
                format!(
                    "https://live.staticflickr.com/{}/{}_{}_z.jpg",
                    self.server, self.id, self.secret
                )
            })
    }
}

#[derive(Deserialize)]
struct RawPhotoPage {
    #[serde(default)]
    photo: Vec<Photo>,
}

#[derive(Deserialize)]
struct RawPhotoFeed {
    stat: String,
    photos: Option<RawPhotoPage>,
}

/// # Errors
///
/// Will return `Err` if the photo service is unreachable, answers with a
/// non-success status, or reports anything but `stat: "ok"`.
pub async fn fetch_photos(
    client: &Client,
    url: &str,
) -> Result<Vec<Photo>, Box<dyn std::error::Error>> {
    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(format!("HTTP {}", resp.status().as_u16()).into());
    }
    let body = resp.text().await?;
    parse_photo_feed(&body)
}

pub fn parse_photo_feed(body: &str) -> Result<Vec<Photo>, Box<dyn std::error::Error>> {
    let feed: RawPhotoFeed = serde_json::from_str(body)?;
    if feed.stat != "ok" {
        return Err(format!("photo feed returned stat '{}'", feed.stat).into());
    }
    Ok(feed.photos.map(|p| p.photo).unwrap_or_default())
}
