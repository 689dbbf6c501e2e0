use crate::constants::{AUTH_PATH, DEFAULT_HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_required_string, load_env_file};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Connection settings for the protected API
pub struct AppSettings {
    /// Base URI of the API, e.g. `https://api.example.com`
    pub base_uri: String,
    /// Login name sent to the authentication endpoint
    pub username: String,
    /// Password sent to the authentication endpoint
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl AppSettings {
    /// Creates settings from explicit values
    pub fn new(
        base_uri: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_uri: base_uri.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Loads settings from `API_BASE_URI`, `API_USUARIO` and `API_SENHA`
    ///
    /// Missing values become empty strings and are logged as errors.
    pub fn from_env() -> Self {
        load_env_file();
        Self {
            base_uri: get_required_string("API_BASE_URI"),
            username: get_required_string("API_USUARIO"),
            password: get_required_string("API_SENHA"),
        }
    }

    /// URL of the authentication endpoint
    #[must_use]
    pub fn auth_url(&self) -> String {
        format!("{}{}", self.base_uri.trim_end_matches('/'), AUTH_PATH)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Settings of the underlying HTTP client
pub struct HttpConfig {
    /// Client level timeout in seconds, applied to every exchange
    pub timeout_secs: u64,
    /// User agent header value
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the client
pub struct Config {
    /// API location and credentials
    pub settings: AppSettings,
    /// HTTP client settings
    pub http: HttpConfig,
    /// Retry schedule for every request
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment (and `.env` when present)
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `API_BASE_URI`, `API_USUARIO`, `API_SENHA` | empty |
    /// | `API_HTTP_TIMEOUT_SECS` | 100 |
    /// | `API_USER_AGENT` | `bearer-client/<version>` |
    /// | `MAX_RETRY_COUNT` | 3 |
    /// | `RETRY_BASE_DELAY_SECS` | 1 |
    pub fn new() -> Self {
        load_env_file();
        let defaults = HttpConfig::default();

        Config {
            settings: AppSettings::from_env(),
            http: HttpConfig {
                timeout_secs: get_env_or_default("API_HTTP_TIMEOUT_SECS", defaults.timeout_secs),
                user_agent: get_env_or_default("API_USER_AGENT", defaults.user_agent),
            },
            retry: RetryConfig::from_env(),
        }
    }

    /// Builds a configuration around explicit settings, with default HTTP and retry values
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            settings,
            http: HttpConfig::default(),
            retry: RetryConfig::default(),
        }
    }

    /// Replaces the retry schedule
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
