//! Structured model reply types
//!
//! The gateway returns a fixed-shape [`ModelReply`] rather than an open
//! JSON map: the orchestration layer only ever touches these fields, and
//! the optional metadata travels untouched into the persisted record.

use serde::{Deserialize, Serialize};

/// Token accounting reported by the provider, all fields optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
}

impl TokenUsage {
    pub fn is_empty(&self) -> bool {
        self.prompt_tokens.is_none()
            && self.completion_tokens.is_none()
            && self.total_tokens.is_none()
    }
}

/// One successful model call, immutable once produced.
///
/// Failure is not represented here: a failed call surfaces as a gateway
/// error, which the orchestrator treats as the model's absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReply {
    /// The model's text output
    pub content: String,
    /// Provider-assigned response id, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
    /// Token accounting, empty when the provider omitted it
    #[serde(default, skip_serializing_if = "TokenUsage::is_empty")]
    pub usage: TokenUsage,
    /// Why generation stopped, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl ModelReply {
    /// A reply carrying only content, for tests and fallback paths
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            response_id: None,
            usage: TokenUsage::default(),
            finish_reason: None,
        }
    }

    /// True when the provider returned no usable text
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content() {
        let reply = ModelReply::from_content("hello");
        assert_eq!(reply.content, "hello");
        assert!(reply.response_id.is_none());
        assert!(reply.usage.is_empty());
    }

    #[test]
    fn test_blank_detection() {
        assert!(ModelReply::from_content("   \n").is_blank());
        assert!(!ModelReply::from_content("x").is_blank());
    }

    #[test]
    fn test_empty_usage_is_skipped_in_json() {
        let reply = ModelReply::from_content("hi");
        let json = serde_json::to_string(&reply).unwrap();
        assert!(!json.contains("usage"));

        let full = ModelReply {
            usage: TokenUsage {
                prompt_tokens: Some(10),
                completion_tokens: Some(20),
                total_tokens: Some(30),
            },
            ..reply
        };
        let json = serde_json::to_string(&full).unwrap();
        assert!(json.contains("\"total_tokens\":30"));
    }
}
