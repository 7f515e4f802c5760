//! OpenRouter chat-completions wire types
//!
//! Mirrors the slice of the OpenAI-compatible payload the gateway actually
//! reads. Everything beyond `choices[0].message.content` is optional and a
//! missing field never fails deserialization.

use council_domain::{Message, ModelReply, Role, TokenUsage};
use serde::{Deserialize, Serialize};

/// Outgoing chat-completion request body
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
}

/// One message in the request payload
#[derive(Debug, Serialize)]
pub struct WireMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> WireMessage<'a> {
    pub fn from_message(message: &'a Message) -> Self {
        let role = match message.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role,
            content: &message.content,
        }
    }
}

/// Incoming chat-completion response body
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireUsage {
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

impl ChatResponse {
    /// Map the payload to a [`ModelReply`], or `None` when no choice
    /// carries content.
    pub fn into_reply(mut self) -> Option<ModelReply> {
        let choice = if self.choices.is_empty() {
            return None;
        } else {
            self.choices.swap_remove(0)
        };
        let content = choice.message.content?;

        let usage = self
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Some(ModelReply {
            content,
            response_id: self.id,
            usage,
            finish_reason: choice.finish_reason,
        })
    }
}
