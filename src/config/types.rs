// Configuration type definitions

use serde::Deserialize;

fn default_debounce_ms() -> u64 {
    300
}

fn default_suggestion_limit() -> u64 {
    25
}

/// `[service]` section as written in config.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServiceSection {
    pub endpoint: Option<String>,
    pub project: Option<String>,
    pub database_id: Option<String>,
    pub post_collection_id: Option<String>,
    #[serde(default)]
    pub other_collection_ids: Vec<String>,
    pub api_key: Option<String>,
}

/// `[search]` section as written in config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSection {
    /// Idle interval before a suggestion fetch fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Page size for the suggestion source query
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u64,
}

impl Default for SearchSection {
    fn default() -> Self {
        SearchSection {
            debounce_ms: default_debounce_ms(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

/// Root configuration structure as parsed from disk
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub service: ServiceSection,
    #[serde(default)]
    pub search: SearchSection,
}

/// Validated service settings with all required fields present
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub project: String,
    pub database_id: String,
    pub post_collection_id: String,
    pub other_collection_ids: Vec<String>,
    pub api_key: Option<String>,
}

/// Validated search tuning settings
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub suggestion_limit: u64,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceConfig,
    pub search: SearchConfig,
}
