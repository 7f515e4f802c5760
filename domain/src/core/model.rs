//! Model value object representing an LLM endpoint

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known LLM models (Value Object)
///
/// Identifiers follow the OpenRouter naming scheme. Anything the enum does
/// not know becomes `Custom`, so config files can reference new models
/// without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    ClaudeSonnet45,
    ClaudeHaiku,
    Gpt52Chat,
    Gpt4oMini,
    Gemini3Pro,
    Gemini25Flash,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet45 => "anthropic/claude-sonnet-4.5",
            Model::ClaudeHaiku => "anthropic/claude-haiku",
            Model::Gpt52Chat => "gpt-5.2-chat-latest",
            Model::Gpt4oMini => "openai/gpt-4o-mini",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Custom(s) => s,
        }
    }

    /// Short display name, e.g. "anthropic/claude-sonnet-4.5" -> "claude-sonnet-4.5"
    pub fn short_name(&self) -> &str {
        let s = self.as_str();
        s.rsplit('/').next().unwrap_or(s)
    }

    /// Default council members for a deliberation
    pub fn default_council() -> Vec<Model> {
        vec![Model::ClaudeSonnet45, Model::Gpt52Chat, Model::Gemini3Pro]
    }

    /// Default chairman model for the synthesis stage
    pub fn default_chairman() -> Model {
        Model::Gemini3Pro
    }

    /// Default model for title generation (fast and cheap)
    pub fn default_title_model() -> Model {
        Model::Gemini25Flash
    }

    /// Default model for quick single-model queries
    pub fn default_quick_model() -> Model {
        Model::Gemini25Flash
    }

    /// Default primary model for history summarization
    pub fn default_summarizer() -> Model {
        Model::Gemini25Flash
    }

    /// Default fallback models tried when the primary summarizer fails
    pub fn default_summarizer_fallbacks() -> Vec<Model> {
        vec![Model::Gpt4oMini, Model::ClaudeHaiku]
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "anthropic/claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "anthropic/claude-haiku" => Model::ClaudeHaiku,
            "gpt-5.2-chat-latest" => Model::Gpt52Chat,
            "openai/gpt-4o-mini" => Model::Gpt4oMini,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::default_council() {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "mistral/mistral-large".parse().unwrap();
        assert_eq!(model, Model::Custom("mistral/mistral-large".to_string()));
        assert_eq!(model.to_string(), "mistral/mistral-large");
    }

    #[test]
    fn test_short_name_strips_provider() {
        assert_eq!(Model::ClaudeSonnet45.short_name(), "claude-sonnet-4.5");
        assert_eq!(Model::Gemini3Pro.short_name(), "gemini-3-pro-preview");
    }

    #[test]
    fn test_default_council_size() {
        assert_eq!(Model::default_council().len(), 3);
    }
}
