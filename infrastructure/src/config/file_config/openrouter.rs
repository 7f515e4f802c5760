//! OpenRouter endpoint configuration from TOML (`[openrouter]` section)

use serde::{Deserialize, Serialize};

/// OpenRouter connection settings. The API key itself never lives in the
/// config file, only the name of the environment variable holding it.
///
/// # Example
///
/// ```toml
/// [openrouter]
/// base_url = "https://openrouter.ai/api/v1"
/// api_key_env = "OPENROUTER_API_KEY"
/// request_timeout_secs = 120
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenRouterConfig {
    /// API base URL; `OPENROUTER_BASE_URL` env and the built-in default
    /// apply when unset
    pub base_url: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: Option<String>,
    /// Per-call timeout in seconds
    pub request_timeout_secs: Option<u64>,
}
