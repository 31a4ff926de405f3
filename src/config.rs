use std::env;
use std::net::SocketAddr;

/// Process configuration, read once at startup and immutable afterwards.
/// Missing upstream keys are warned about, not fatal: every non-trivial call
/// will fail later, which mirrors how the keys are actually exercised.
#[derive(Clone, Debug)]
pub struct Config {
    pub search_api_key: String,
    pub search_cx: String,
    pub openai_api_key: String,
    pub model: String,
    pub bind_addr: SocketAddr,
}

pub fn valid_api_key(key: &str) -> bool {
    let trimmed = key.trim();
    !trimmed.is_empty() && !trimmed.contains("...")
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let search_api_key = env::var("SEARCH_ENGINE_API_KEY").unwrap_or_default();
        let search_cx = env::var("CX").unwrap_or_default();
        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        for (name, value) in [
            ("SEARCH_ENGINE_API_KEY", &search_api_key),
            ("CX", &search_cx),
            ("OPENAI_API_KEY", &openai_api_key),
        ] {
            if !valid_api_key(value) {
                tracing::warn!("{name} is unset or a placeholder; upstream calls will fail");
            }
        }

        Ok(Self {
            search_api_key,
            search_cx,
            openai_api_key,
            model,
            bind_addr,
        })
    }
}
