use claimlens::config::Config;
use claimlens::pipeline::{
    GoogleSearchClient, OpenAiModelClient, VerificationPipeline, WebPageFetcher,
};
use claimlens::server;
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent(concat!("claimlens/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let pipeline = Arc::new(VerificationPipeline {
        search: GoogleSearchClient::new(http.clone(), &config.search_api_key, &config.search_cx),
        model: OpenAiModelClient::new(&config.openai_api_key, &config.model),
        pages: WebPageFetcher::new(http),
    });

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("claimlens listening on {}", config.bind_addr);
    axum::serve(listener, server::router(pipeline)).await?;
    Ok(())
}
