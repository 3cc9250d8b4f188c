use crate::cli::ResultLimit;
use anyhow::Context;
use log::debug;
use reqwest::Client;
use schema::Asset;
use schema::AssetsResponse;
use std::time::Duration;

const USER_AGENT: &str = concat!("coinmon/", env!("CARGO_PKG_VERSION"));

pub struct CoinCapClient {
    api_url: String,
    timeout: Duration,
}

#[mockall::automock]
impl CoinCapClient {
    pub fn new(api_url: String, timeout: Duration) -> Self {
        Self { api_url, timeout }
    }

    /// Fetches the top `limit` assets ranked by market cap.
    pub async fn assets(&self, limit: ResultLimit) -> anyhow::Result<Vec<Asset>> {
        let endpoint = assets_url(&self.api_url, limit);
        debug!("Requesting {}", endpoint);
        let response: AssetsResponse = Client::builder()
            .timeout(self.timeout)
            .build()?
            .get(&endpoint)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .with_context(|| format!("Failed to request {}", endpoint))?
            .error_for_status()?
            .json()
            .await
            .context("Failed to decode the asset list")?;
        debug!("Received {} assets", response.data.len());
        Ok(response.data)
    }
}

pub fn assets_url(api_url: &str, limit: ResultLimit) -> String {
    format!("{}/assets?limit={}", api_url.trim_end_matches('/'), limit)
}
