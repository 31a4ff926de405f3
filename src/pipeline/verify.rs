use crate::models::{ClaimRequest, Extraction};
use crate::pipeline::traits::{ModelClient, ModelPart, PageFetcher, SearchProvider};
use crate::pipeline::{extract, prompt, social, social::PagePreview};
use anyhow::Context;
use url::Url;

pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// Claim text used when an image arrives without a query.
pub const DEFAULT_IMAGE_CLAIM: &str = "check if this incident fake or real?";

/// Stateless per-request orchestrator: gather context, build the prompt, call
/// the model, extract the verdict JSON. Upstream failures propagate; only
/// malformed model output is captured (inside `Extraction`).
pub struct VerificationPipeline<S, M, F>
where
    S: SearchProvider,
    M: ModelClient,
    F: PageFetcher,
{
    pub search: S,
    pub model: M,
    pub pages: F,
}

impl<S, M, F> VerificationPipeline<S, M, F>
where
    S: SearchProvider,
    M: ModelClient,
    F: PageFetcher,
{
    pub async fn verify(&self, request: ClaimRequest) -> anyhow::Result<Extraction> {
        match request {
            ClaimRequest::Text { claim } => self.verify_text(&claim).await,
            ClaimRequest::Image {
                bytes,
                extension,
                query,
            } => self.verify_image(bytes, &extension, query.as_deref()).await,
            ClaimRequest::Social { url, claim_hint } => {
                self.verify_social(&url, &claim_hint).await
            }
        }
    }

    pub async fn verify_text(&self, claim: &str) -> anyhow::Result<Extraction> {
        let results = self.search.search(claim, DEFAULT_RESULT_LIMIT).await?;
        let prompt = prompt::text_prompt(claim, &results);
        let raw = self.model.generate(&[ModelPart::Text(prompt)]).await?;
        Ok(extract::extract_json(&raw))
    }

    /// Image mode skips the search call entirely when no query accompanies
    /// the upload.
    pub async fn verify_image(
        &self,
        bytes: Vec<u8>,
        extension: &str,
        query: Option<&str>,
    ) -> anyhow::Result<Extraction> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let results = match query {
            Some(q) => self.search.search(q, DEFAULT_RESULT_LIMIT).await?,
            None => Vec::new(),
        };
        let claim = query.unwrap_or(DEFAULT_IMAGE_CLAIM);
        let prompt = prompt::image_prompt(claim, &results);
        let mime = social::upload_mime(extension);
        let raw = self
            .model
            .generate(&[ModelPart::Image { bytes, mime }, ModelPart::Text(prompt)])
            .await?;
        Ok(extract::extract_json(&raw))
    }

    pub async fn verify_social(&self, url: &Url, claim_hint: &str) -> anyhow::Result<Extraction> {
        let html = self.pages.fetch_html(url).await?;
        let preview = PagePreview::parse(&html);
        let claim = preview.effective_claim(claim_hint);

        let results = if claim.is_empty() {
            Vec::new()
        } else {
            self.search.search(&claim, DEFAULT_RESULT_LIMIT).await?
        };

        let image_url = preview
            .image_url
            .context("social page has no representative image")?;
        let mime = social::social_mime(&image_url);
        let target = Url::parse(&image_url).context("invalid social image URL")?;
        let bytes = self.pages.fetch_bytes(&target).await?;

        let prompt = prompt::social_prompt(&claim, &results);
        let raw = self
            .model
            .generate(&[ModelPart::Text(prompt), ModelPart::Image { bytes, mime }])
            .await?;
        Ok(extract::extract_json(&raw))
    }
}
