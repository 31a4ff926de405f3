use crate::models::SearchResult;
use async_trait::async_trait;
use url::Url;

/// One piece of a model invocation. Image parts carry the MIME type derived
/// at the call site.
#[derive(Clone, Debug)]
pub enum ModelPart {
    Text(String),
    Image { bytes: Vec<u8>, mime: String },
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, limit: u32) -> anyhow::Result<Vec<SearchResult>>;
}

/// Opaque generative-model capability. No retry, no streaming.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, parts: &[ModelPart]) -> anyhow::Result<String>;
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &Url) -> anyhow::Result<String>;
    async fn fetch_bytes(&self, url: &Url) -> anyhow::Result<Vec<u8>>;
}
