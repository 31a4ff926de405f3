mod error;

pub use error::AppError;

use crate::models::{ClaimRequest, Extraction, Verdict};
use crate::pipeline::{ModelClient, PageFetcher, SearchProvider, VerificationPipeline};
use axum::extract::{Multipart, State};
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct NewsInput {
    pub content: String,
}

fn default_social_claim() -> String {
    "verify the claim and check if it is true?".to_string()
}

#[derive(Deserialize)]
pub struct SocialNewsInput {
    pub url: String,
    #[serde(default = "default_social_claim")]
    pub claim: String,
}

pub fn router<S, M, F>(pipeline: Arc<VerificationPipeline<S, M, F>>) -> Router
where
    S: SearchProvider + 'static,
    M: ModelClient + 'static,
    F: PageFetcher + 'static,
{
    Router::new()
        .route("/verify_text_news", post(verify_text_news::<S, M, F>))
        .route("/verify_image_news", post(verify_image_news::<S, M, F>))
        .route("/verify_social_news", post(verify_social_news::<S, M, F>))
        .with_state(pipeline)
}

async fn verify_text_news<S, M, F>(
    State(pipeline): State<Arc<VerificationPipeline<S, M, F>>>,
    Json(input): Json<NewsInput>,
) -> Result<Json<Value>, AppError>
where
    S: SearchProvider,
    M: ModelClient,
    F: PageFetcher,
{
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, "text verification request");
    let extraction = pipeline
        .verify(ClaimRequest::Text {
            claim: input.content,
        })
        .await?;
    log_outcome(request_id, &extraction);
    Ok(Json(extraction.into_payload()))
}

async fn verify_image_news<S, M, F>(
    State(pipeline): State<Arc<VerificationPipeline<S, M, F>>>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError>
where
    S: SearchProvider,
    M: ModelClient,
    F: PageFetcher,
{
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, "image verification request");

    let mut bytes: Option<Vec<u8>> = None;
    let mut extension = String::new();
    let mut query: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                if let Some(filename) = field.file_name() {
                    extension = file_extension(filename);
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::BadRequest(err.to_string()))?;
                bytes = Some(data.to_vec());
            }
            Some("query") => {
                let text = field
                    .text()
                    .await
                    .map_err(|err| AppError::BadRequest(err.to_string()))?;
                if !text.trim().is_empty() {
                    query = Some(text);
                }
            }
            _ => {}
        }
    }

    let bytes = bytes.ok_or_else(|| AppError::BadRequest("missing file field".to_string()))?;
    let extraction = pipeline
        .verify(ClaimRequest::Image {
            bytes,
            extension,
            query,
        })
        .await?;
    log_outcome(request_id, &extraction);
    Ok(Json(extraction.into_payload()))
}

async fn verify_social_news<S, M, F>(
    State(pipeline): State<Arc<VerificationPipeline<S, M, F>>>,
    Json(input): Json<SocialNewsInput>,
) -> Result<Json<Value>, AppError>
where
    S: SearchProvider,
    M: ModelClient,
    F: PageFetcher,
{
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, url = %input.url, "social verification request");
    let url = Url::parse(&input.url)
        .map_err(|err| AppError::BadRequest(format!("invalid url: {err}")))?;
    let extraction = pipeline
        .verify(ClaimRequest::Social {
            url,
            claim_hint: input.claim,
        })
        .await?;
    log_outcome(request_id, &extraction);
    Ok(Json(extraction.into_payload()))
}

/// Filename extension without the dot; empty when there is none.
fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => String::new(),
    }
}

fn log_outcome(request_id: Uuid, extraction: &Extraction) {
    match extraction {
        Extraction::Json(value) => match Verdict::from_value(value) {
            Some(verdict) => tracing::info!(
                %request_id,
                truth_score = verdict.truth_score,
                verdict = ?verdict.verdict,
                "verdict returned"
            ),
            None => tracing::info!(%request_id, "model returned JSON outside the verdict schema"),
        },
        Extraction::Empty => {
            tracing::warn!(%request_id, "model output contained no JSON object")
        }
        Extraction::ParseError(message) => {
            tracing::warn!(%request_id, %message, "model output failed to parse")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{FixedSearch, ScriptedModel, StaticPageFetcher};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const VERDICT_REPLY: &str = "{\"truth_score\": 80, \"verdict\": \"Likely True\", \
                                 \"reason\": \"ok\", \"evidence_links\": []}";

    fn test_pipeline(
        reply: &str,
    ) -> Arc<VerificationPipeline<FixedSearch, ScriptedModel, StaticPageFetcher>> {
        Arc::new(VerificationPipeline {
            search: FixedSearch::empty(),
            model: ScriptedModel::new(reply),
            pages: StaticPageFetcher::default(),
        })
    }

    #[test]
    fn social_claim_defaults_when_absent() {
        let input: SocialNewsInput =
            serde_json::from_str(r#"{ "url": "https://social.example/p" }"#).expect("parses");
        assert_eq!(input.claim, "verify the claim and check if it is true?");
    }

    #[test]
    fn file_extension_keeps_the_last_segment() {
        assert_eq!(file_extension("photo.JPG"), "JPG");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("noext"), "");
    }

    #[tokio::test]
    async fn text_endpoint_relays_the_verdict_with_status_200() {
        let app = router(test_pipeline(VERDICT_REPLY));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify_text_news")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{ "content": "the moon is cheese" }"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["truth_score"], 80);
        assert_eq!(value["verdict"], "Likely True");
    }

    #[tokio::test]
    async fn parse_failures_still_return_200() {
        let app = router(test_pipeline("{not json"));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify_text_news")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{ "content": "claim" }"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert!(value["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to parse response:"));
    }

    #[tokio::test]
    async fn image_endpoint_reads_the_multipart_form() {
        let pipeline = test_pipeline(VERDICT_REPLY);
        let app = router(pipeline.clone());

        let body = concat!(
            "--boundary\r\n",
            "content-disposition: form-data; name=\"file\"; filename=\"photo.JPG\"\r\n",
            "content-type: image/jpeg\r\n\r\n",
            "rawbytes\r\n",
            "--boundary\r\n",
            "content-disposition: form-data; name=\"query\"\r\n\r\n",
            "chennai flood\r\n",
            "--boundary--\r\n",
        );
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify_image_news")
                    .header(
                        header::CONTENT_TYPE,
                        "multipart/form-data; boundary=boundary",
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let calls = pipeline.model.received.lock().unwrap();
        match &calls[0][0] {
            crate::pipeline::ModelPart::Image { bytes, mime } => {
                assert_eq!(bytes, b"rawbytes");
                assert_eq!(mime, "image/jpg");
            }
            other => panic!("expected an image part, got {other:?}"),
        }
        assert_eq!(*pipeline.search.queries.lock().unwrap(), vec!["chennai flood"]);
    }

    #[tokio::test]
    async fn invalid_social_url_is_a_400() {
        let app = router(test_pipeline(VERDICT_REPLY));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify_social_news")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{ "url": "not a url" }"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "INVALID_REQUEST");
    }
}
