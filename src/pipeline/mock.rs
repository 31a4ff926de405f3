use crate::models::SearchResult;
use crate::pipeline::traits::{ModelClient, ModelPart, PageFetcher, SearchProvider};
use async_trait::async_trait;
use std::sync::Mutex;
use url::Url;

/// Search double that returns a fixed result list and records queries.
pub struct FixedSearch {
    pub results: Vec<SearchResult>,
    pub queries: Mutex<Vec<String>>,
}

impl FixedSearch {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl SearchProvider for FixedSearch {
    async fn search(&self, query: &str, _limit: u32) -> anyhow::Result<Vec<SearchResult>> {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.to_string());
        Ok(self.results.clone())
    }
}

/// Model double that replies with a canned string and records the parts of
/// every invocation.
pub struct ScriptedModel {
    pub reply: String,
    pub received: Mutex<Vec<Vec<ModelPart>>>,
}

impl ScriptedModel {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            received: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ModelClient for ScriptedModel {
    async fn generate(&self, parts: &[ModelPart]) -> anyhow::Result<String> {
        self.received
            .lock()
            .expect("received lock")
            .push(parts.to_vec());
        Ok(self.reply.clone())
    }
}

/// Page double serving one HTML document and one image body.
#[derive(Default)]
pub struct StaticPageFetcher {
    pub html: String,
    pub image_bytes: Vec<u8>,
    pub fetched: Mutex<Vec<String>>,
}

impl StaticPageFetcher {
    pub fn new(html: &str, image_bytes: &[u8]) -> Self {
        Self {
            html: html.to_string(),
            image_bytes: image_bytes.to_vec(),
            fetched: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PageFetcher for StaticPageFetcher {
    async fn fetch_html(&self, url: &Url) -> anyhow::Result<String> {
        self.fetched
            .lock()
            .expect("fetched lock")
            .push(url.to_string());
        Ok(self.html.clone())
    }

    async fn fetch_bytes(&self, url: &Url) -> anyhow::Result<Vec<u8>> {
        self.fetched
            .lock()
            .expect("fetched lock")
            .push(url.to_string());
        Ok(self.image_bytes.clone())
    }
}
