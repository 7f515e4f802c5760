//! Context window configuration from TOML (`[context]` section)

use council_domain::ContextPolicy;
use serde::{Deserialize, Serialize};

/// Context construction knobs
///
/// # Example
///
/// ```toml
/// [context]
/// history_limit = 10
/// summarize_older = true
/// summary_char_budget = 8000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContextConfig {
    /// Recent `(user, assistant)` pairs kept verbatim
    pub history_limit: Option<usize>,
    /// Condense older history instead of dropping it
    pub summarize_older: Option<bool>,
    /// Character cap on summarizer input
    pub summary_char_budget: Option<usize>,
}

impl FileContextConfig {
    pub fn to_policy(&self) -> ContextPolicy {
        let defaults = ContextPolicy::default();
        ContextPolicy {
            recent_limit: self.history_limit.unwrap_or(defaults.recent_limit),
            summarize_older: self.summarize_older.unwrap_or(defaults.summarize_older),
            summary_char_budget: self
                .summary_char_budget
                .unwrap_or(defaults.summary_char_budget),
            fallback_extra_pairs: defaults.fallback_extra_pairs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_policy_defaults() {
        assert_eq!(FileContextConfig::default().to_policy(), ContextPolicy::default());
    }

    #[test]
    fn test_partial_override() {
        let config: FileContextConfig = toml::from_str("history_limit = 4").unwrap();
        let policy = config.to_policy();
        assert_eq!(policy.recent_limit, 4);
        assert!(policy.summarize_older);
    }
}
