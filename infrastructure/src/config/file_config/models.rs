//! Auxiliary model roles from TOML (`[models]` section)

use crate::config::{ConfigIssue, Severity};
use council_domain::{Model, SummarizerChain};
use serde::{Deserialize, Serialize};

/// Role-based model selection for the paths outside the council pipeline
///
/// # Example
///
/// ```toml
/// [models]
/// title = "gemini-2.5-flash"
/// quick = "gemini-2.5-flash"
/// summarizer = "gemini-2.5-flash"
/// summarizer_fallbacks = ["openai/gpt-4o-mini", "anthropic/claude-haiku"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model generating conversation titles
    pub title: Option<String>,
    /// Model answering quick (non-council) queries
    pub quick: Option<String>,
    /// Primary history summarizer
    pub summarizer: Option<String>,
    /// Fallbacks tried in order when the summarizer fails
    pub summarizer_fallbacks: Option<Vec<String>>,
}

impl FileModelsConfig {
    pub fn title_model(&self) -> Model {
        Self::parse_or(&self.title, Model::default_title_model)
    }

    pub fn quick_model(&self) -> Model {
        Self::parse_or(&self.quick, Model::default_quick_model)
    }

    pub fn summarizer_chain(&self) -> SummarizerChain {
        let primary = Self::parse_or(&self.summarizer, Model::default_summarizer);
        let fallbacks = match &self.summarizer_fallbacks {
            Some(names) => names
                .iter()
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse().unwrap())
                .collect(),
            None => Model::default_summarizer_fallbacks(),
        };
        SummarizerChain::new(primary, fallbacks)
    }

    fn parse_or(value: &Option<String>, default: fn() -> Model) -> Model {
        value
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse().unwrap())
            .unwrap_or_else(default)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("title", &self.title),
            ("quick", &self.quick),
            ("summarizer", &self.summarizer),
        ] {
            if let Some(s) = value
                && s.trim().is_empty()
            {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    message: format!("models.{field}: model name cannot be empty"),
                });
            }
        }
        issues
    }
}
