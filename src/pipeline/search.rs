use crate::models::SearchResult;
use crate::pipeline::traits::SearchProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Google Custom Search client. One outbound GET per query; an absent `items`
/// array is an empty result set, not an error.
pub struct GoogleSearchClient {
    client: Client,
    api_key: String,
    cx: String,
}

impl GoogleSearchClient {
    pub fn new(client: Client, api_key: &str, cx: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            cx: cx.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[async_trait]
impl SearchProvider for GoogleSearchClient {
    async fn search(&self, query: &str, limit: u32) -> anyhow::Result<Vec<SearchResult>> {
        let num = limit.to_string();
        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;
        let parsed: SearchResponse = response.json().await?;
        tracing::debug!(query, hits = parsed.items.len(), "search completed");
        Ok(parsed.items)
    }
}
