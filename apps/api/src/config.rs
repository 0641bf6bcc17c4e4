use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Skip loading the embedding model entirely (semantic similarity then
    /// contributes 0.0). Useful for CI and air-gapped deployments.
    pub disable_embeddings: bool,
    /// Where fastembed caches downloaded model files; its default when unset.
    pub embedding_cache_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            disable_embeddings: std::env::var("DISABLE_EMBEDDINGS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            embedding_cache_dir: std::env::var("EMBEDDING_CACHE_DIR").ok(),
        })
    }
}
