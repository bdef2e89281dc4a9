use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Base URL of the upstream RUC registry API.
    #[serde(default = "default_ruc_api_base")]
    pub ruc_api_base: String,

    /// TTL in seconds for cached upstream responses. 0 disables caching.
    #[serde(default = "default_ruc_cache_ttl_secs")]
    pub ruc_cache_ttl_secs: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_ruc_api_base() -> String {
    "https://api.apis.net.pe/v1".to_string()
}

fn default_ruc_cache_ttl_secs() -> u64 {
    3600
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
