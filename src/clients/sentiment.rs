use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: String,
}

/// HTTP client for the sentiment analyzer microservice.
///
/// The analyzer answers `GET {base}?text=...` with `{"sentiment": "positive"}`.
#[derive(Clone)]
pub struct SentimentClient {
    client: Client,
    base_url: Url,
}

impl SentimentClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid sentiment analyzer URL: {base_url}"))?;

        let client = Client::builder()
            .user_agent("Dealership/1.0")
            .timeout(timeout)
            .build()
            .context("Failed to build sentiment HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Builds the request URL for `text`. The text is percent-encoded as a
    /// query parameter so arbitrary review bodies survive the trip.
    #[must_use]
    pub fn request_url(&self, text: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("text", text);
        url
    }

    pub async fn analyze(&self, text: &str) -> Result<String> {
        let url = self.request_url(text);

        debug!(url = %self.base_url, "Requesting sentiment analysis");

        let response: SentimentResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.sentiment)
    }
}
