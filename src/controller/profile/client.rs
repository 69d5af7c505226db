use reqwest::Client;
use serde_json::Value;

/// HTTP client for the tour profile endpoint. The URL is injected so
/// tests can point it at a local server instead of the live API.
#[derive(Clone, Debug)]
pub struct ProfileClient {
    client: Client,
    url: String,
}

impl ProfileClient {
    pub fn new(url: impl Into<String>) -> Self {
        ProfileClient {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the request fails, the response status is not
    /// successful (reported as `HTTP <status>`), or the body is not JSON.
    pub async fn fetch_document(&self) -> Result<Value, Box<dyn std::error::Error>> {
        // The upstream cache sits behind a CDN; a throwaway query value
        // forces a fresh copy, same trick the tour's own site uses.
        let stamp = chrono::Utc::now().timestamp_millis();
        let separator = if self.url.contains('?') { '&' } else { '?' };
        let url = format!("{}{}randomadd={}", self.url, separator, stamp);

        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status().as_u16()).into());
        }
        let json: Value = resp.json().await?;
        Ok(json)
    }
}
