use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe API connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Retry behaviour for API calls
    #[serde(default)]
    pub retry: RetryConfig,
    /// Spell-check dictionary settings
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

/// Configuration for the Food2Fork REST API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// API key for authentication (can also be set via FOOD2FORK_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the bounded retry of API calls
#[derive(Debug, Deserialize, Clone)]
pub struct RetryConfig {
    /// Attempts allowed per API operation
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Fixed delay between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

/// Configuration for the spell-check dictionary
#[derive(Debug, Deserialize, Clone)]
pub struct DictionaryConfig {
    /// Dictionary file: a JSON object keyed by word, or a plain word list
    #[serde(default = "default_dictionary_path")]
    pub path: String,
    /// Maximum suggestions offered for a misspelled word
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Minimum similarity (0.0-1.0) for a word to be suggested
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_dictionary_path(),
            max_suggestions: default_max_suggestions(),
            cutoff: default_cutoff(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://food2fork.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    4
}

fn default_retry_delay_ms() -> u64 {
    5000
}

fn default_dictionary_path() -> String {
    "dictionary.json".to_string()
}

fn default_max_suggestions() -> usize {
    3
}

fn default_cutoff() -> f64 {
    0.6
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// The API key from the config file, falling back to FOOD2FORK_API_KEY
    pub fn api_key(&self) -> Option<String> {
        self.api
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var("FOOD2FORK_API_KEY").ok())
            .filter(|key| !key.is_empty())
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_FINDER__RETRY__MAX_ATTEMPTS
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
