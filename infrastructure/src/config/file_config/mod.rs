//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! convert into domain types with defaults applied.

mod context;
mod council;
mod models;
mod openrouter;
mod storage;

pub use context::FileContextConfig;
pub use council::FileCouncilConfig;
pub use models::FileModelsConfig;
pub use openrouter::FileOpenRouterConfig;
pub use storage::FileStorageConfig;

use crate::config::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Council roster
    pub council: FileCouncilConfig,
    /// Auxiliary model roles
    pub models: FileModelsConfig,
    /// Context window settings
    pub context: FileContextConfig,
    /// Storage locations
    pub storage: FileStorageConfig,
    /// OpenRouter endpoint settings
    pub openrouter: FileOpenRouterConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.council.validate());
        issues.extend(self.models.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::Model;

    #[test]
    fn test_full_config_roundtrip() {
        let toml_str = r#"
[council]
members = ["anthropic/claude-sonnet-4.5", "gpt-5.2-chat-latest"]
chairman = "gemini-3-pro-preview"

[models]
title = "gemini-2.5-flash"
summarizer_fallbacks = ["openai/gpt-4o-mini"]

[context]
history_limit = 6
summarize_older = false

[storage]
data_dir = "/tmp/council-data"

[openrouter]
base_url = "http://localhost:9000/v1"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();

        let roster = config.council.to_roster();
        assert_eq!(roster.members.len(), 2);
        assert_eq!(roster.chairman, Model::Gemini3Pro);

        let policy = config.context.to_policy();
        assert_eq!(policy.recent_limit, 6);
        assert!(!policy.summarize_older);

        assert_eq!(
            config.storage.data_dir(),
            std::path::PathBuf::from("/tmp/council-data")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_empty());
    }
}
