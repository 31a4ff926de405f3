use crate::pipeline::traits::PageFetcher;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Deadline for fetching the social page itself. Image downloads and the
/// other outbound calls have no caller-visible deadline.
pub const SOCIAL_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct WebPageFetcher {
    client: Client,
}

impl WebPageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for WebPageFetcher {
    async fn fetch_html(&self, url: &Url) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url.clone())
            .timeout(SOCIAL_FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    async fn fetch_bytes(&self, url: &Url) -> anyhow::Result<Vec<u8>> {
        let response = self.client.get(url.clone()).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
