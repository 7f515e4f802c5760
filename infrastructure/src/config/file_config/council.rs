//! Council roster configuration from TOML (`[council]` section)

use crate::config::{ConfigIssue, Severity};
use council_domain::{CouncilRoster, MAX_COUNCIL_SIZE, Model};
use serde::{Deserialize, Serialize};

/// Council roster configuration
///
/// # Example
///
/// ```toml
/// [council]
/// members = ["anthropic/claude-sonnet-4.5", "gpt-5.2-chat-latest", "gemini-3-pro-preview"]
/// chairman = "gemini-3-pro-preview"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCouncilConfig {
    /// Models answering and ranking; defaults to the built-in council
    pub members: Option<Vec<String>>,
    /// Model synthesizing the final answer
    pub chairman: Option<String>,
}

impl FileCouncilConfig {
    /// Build the roster, falling back to defaults for missing fields
    pub fn to_roster(&self) -> CouncilRoster {
        let members = match &self.members {
            Some(names) if !names.is_empty() => names
                .iter()
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse().unwrap())
                .collect(),
            _ => Model::default_council(),
        };

        let chairman = self
            .chairman
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse().unwrap())
            .unwrap_or_else(Model::default_chairman);

        CouncilRoster { members, chairman }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(members) = &self.members {
            for (i, name) in members.iter().enumerate() {
                if name.trim().is_empty() {
                    issues.push(ConfigIssue {
                        severity: Severity::Error,
                        message: format!("council.members[{i}]: model name cannot be empty"),
                    });
                }
            }
            if members.len() > MAX_COUNCIL_SIZE {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    message: format!(
                        "council.members: {} members exceed the {} label alphabet",
                        members.len(),
                        MAX_COUNCIL_SIZE
                    ),
                });
            }
        }

        if let Some(chairman) = &self.chairman
            && chairman.trim().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                message: "council.chairman: model name cannot be empty".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = FileCouncilConfig::default();
        let roster = config.to_roster();
        assert_eq!(roster.members, Model::default_council());
        assert_eq!(roster.chairman, Model::default_chairman());
    }

    #[test]
    fn test_explicit_roster() {
        let config: FileCouncilConfig = toml::from_str(
            r#"
members = ["openai/gpt-4o-mini", "anthropic/claude-haiku"]
chairman = "openai/gpt-4o-mini"
"#,
        )
        .unwrap();
        let roster = config.to_roster();
        assert_eq!(roster.members.len(), 2);
        assert_eq!(roster.chairman, Model::Gpt4oMini);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_oversized_roster_is_flagged() {
        let config = FileCouncilConfig {
            members: Some((0..27).map(|i| format!("m{i}")).collect()),
            chairman: None,
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("26"));
    }

    #[test]
    fn test_empty_member_name_is_flagged() {
        let config = FileCouncilConfig {
            members: Some(vec!["ok".to_string(), "  ".to_string()]),
            chairman: None,
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("members[1]"));
    }
}
