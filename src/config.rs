use serde::Deserialize;

/// Engine configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Jikan (MyAnimeList) catalog API base URL
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// DeepSeek chat-completion API key
    pub deepseek_api_key: String,

    /// DeepSeek chat-completion API base URL
    #[serde(default = "default_deepseek_api_url")]
    pub deepseek_api_url: String,

    /// Chat model used for candidate generation
    #[serde(default = "default_deepseek_model")]
    pub deepseek_model: String,

    /// Per-request timeout for external collaborator calls, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum concurrent catalog lookups while resolving candidates
    #[serde(default = "default_catalog_lookup_concurrency")]
    pub catalog_lookup_concurrency: usize,
}

fn default_catalog_api_url() -> String {
    "https://api.jikan.moe/v4".to_string()
}

fn default_deepseek_api_url() -> String {
    "https://api.deepseek.com/v1".to_string()
}

fn default_deepseek_model() -> String {
    "deepseek-chat".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_catalog_lookup_concurrency() -> usize {
    4
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
