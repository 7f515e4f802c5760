//! Generate Title use case
//!
//! One short-lived call against a fast model to name a conversation after
//! its first question. Hard-capped at 50 characters; any failure falls back
//! to the default title.

use crate::config::ExecutionParams;
use crate::ports::model_gateway::ModelGateway;
use council_domain::{DEFAULT_TITLE, Message, Model, PromptTemplate, util::ellipsize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum title length, ellipsis included
const TITLE_MAX_CHARS: usize = 50;

/// Use case for titling a conversation from its first query
pub struct GenerateTitleUseCase {
    gateway: Arc<dyn ModelGateway>,
    model: Model,
    params: ExecutionParams,
}

impl GenerateTitleUseCase {
    pub fn new(gateway: Arc<dyn ModelGateway>, model: Model) -> Self {
        Self {
            gateway,
            model,
            params: ExecutionParams::default(),
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    /// Produce a short title; never fails
    pub async fn execute(&self, query: &str) -> String {
        let prompt = PromptTemplate::title_prompt(query);
        let messages = vec![Message::user(prompt)];

        let reply = match self
            .gateway
            .query(&self.model, &messages, Some(self.params.title_timeout()))
            .await
        {
            Ok(reply) if !reply.is_blank() => reply,
            Ok(_) => {
                debug!("Title model returned empty content");
                return DEFAULT_TITLE.to_string();
            }
            Err(e) => {
                warn!("Title model {} failed: {}", self.model, e);
                return DEFAULT_TITLE.to_string();
            }
        };

        let title = reply.content.trim().trim_matches(['"', '\'']).to_string();
        ellipsize(&title, TITLE_MAX_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_gateway::GatewayError;
    use async_trait::async_trait;
    use council_domain::ModelReply;
    use std::sync::Mutex;
    use std::time::Duration;

    struct OneShotGateway {
        reply: Mutex<Option<Result<ModelReply, GatewayError>>>,
    }

    #[async_trait]
    impl ModelGateway for OneShotGateway {
        async fn query(
            &self,
            _model: &Model,
            _messages: &[Message],
            _timeout: Option<Duration>,
        ) -> Result<ModelReply, GatewayError> {
            self.reply.lock().unwrap().take().unwrap()
        }
    }

    fn use_case(reply: Result<ModelReply, GatewayError>) -> GenerateTitleUseCase {
        let gateway = Arc::new(OneShotGateway {
            reply: Mutex::new(Some(reply)),
        });
        GenerateTitleUseCase::new(gateway, Model::Gemini25Flash)
    }

    #[tokio::test]
    async fn test_title_is_trimmed_and_unquoted() {
        let title = use_case(Ok(ModelReply::from_content("  \"Rust Lifetimes\"  ")))
            .execute("how do lifetimes work?")
            .await;
        assert_eq!(title, "Rust Lifetimes");
    }

    #[tokio::test]
    async fn test_long_title_is_capped_at_50_chars() {
        let long = "A Very Long Title About Rust Borrow Checker Internals And More";
        let title = use_case(Ok(ModelReply::from_content(long)))
            .execute("q")
            .await;
        assert_eq!(title.chars().count(), 50);
        assert!(title.ends_with("..."));
    }

    #[tokio::test]
    async fn test_exactly_50_chars_passes_untouched() {
        let exact = "x".repeat(50);
        let title = use_case(Ok(ModelReply::from_content(exact.clone())))
            .execute("q")
            .await;
        assert_eq!(title, exact);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_default() {
        let title = use_case(Err(GatewayError::Timeout)).execute("q").await;
        assert_eq!(title, DEFAULT_TITLE);
    }

    #[tokio::test]
    async fn test_blank_reply_falls_back_to_default() {
        let title = use_case(Ok(ModelReply::from_content("   ")))
            .execute("q")
            .await;
        assert_eq!(title, DEFAULT_TITLE);
    }
}
