use anyhow::{Context, Result};

/// Default Model2Vec repo used when EMBEDDING_MODEL is not set.
pub const DEFAULT_EMBEDDING_MODEL: &str = "minishlab/M2V_base_output";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing — the Groq key must be
/// present before any remote call can ever be attempted.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    /// HuggingFace repo id or local directory holding the embedding model.
    pub embedding_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
