//! History summarization with an ordered model fallback chain
//!
//! The chain is strictly sequential: each model is tried only after the
//! previous one failed or returned nothing. When every model in the chain
//! fails, the deterministic source-text summary takes over, so this
//! implementation never errors.

use crate::config::ExecutionParams;
use crate::ports::model_gateway::ModelGateway;
use crate::ports::summarizer::{SummarizeError, Summarizer};
use async_trait::async_trait;
use council_domain::{
    ContextPolicy, Message, PromptTemplate, SummarizerChain, fallback_summary,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Model-backed summarizer with deterministic last resort
pub struct ChainSummarizer {
    gateway: Arc<dyn ModelGateway>,
    chain: SummarizerChain,
    policy: ContextPolicy,
    params: ExecutionParams,
}

impl ChainSummarizer {
    pub fn new(gateway: Arc<dyn ModelGateway>, chain: SummarizerChain) -> Self {
        Self {
            gateway,
            chain,
            policy: ContextPolicy::default(),
            params: ExecutionParams::default(),
        }
    }

    pub fn with_policy(mut self, policy: ContextPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }
}

#[async_trait]
impl Summarizer for ChainSummarizer {
    async fn summarize(&self, older: &[Message]) -> Result<String, SummarizeError> {
        let input = self.policy.summary_input(older);
        let prompt = PromptTemplate::summary_prompt(&input);
        let messages = vec![Message::user(prompt)];

        let total = 1 + self.chain.fallbacks.len();
        for (attempt, model) in self.chain.models().enumerate() {
            debug!(
                "Summarizing {} messages, model {}/{}: {}",
                older.len(),
                attempt + 1,
                total,
                model
            );

            match self
                .gateway
                .query(model, &messages, Some(self.params.request_timeout()))
                .await
            {
                Ok(reply) if !reply.is_blank() => {
                    info!("Summary generated by {}", model);
                    return Ok(reply.content.trim().to_string());
                }
                Ok(_) => {
                    warn!("Summarizer {} returned empty content", model);
                }
                Err(e) => {
                    warn!("Summarizer {} failed: {}", model, e);
                }
            }
        }

        warn!("Every summarizer model failed; using source-text summary");
        Ok(fallback_summary(older))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_gateway::GatewayError;
    use council_domain::{Model, ModelReply};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    struct ScriptedGateway {
        replies: HashMap<String, Result<ModelReply, GatewayError>>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ModelGateway for ScriptedGateway {
        async fn query(
            &self,
            model: &Model,
            _messages: &[Message],
            _timeout: Option<Duration>,
        ) -> Result<ModelReply, GatewayError> {
            self.calls.lock().unwrap().push(model.to_string());
            self.replies
                .get(model.as_str())
                .cloned()
                .unwrap_or(Err(GatewayError::Other("unscripted".to_string())))
        }
    }

    fn chain() -> SummarizerChain {
        SummarizerChain::new(
            "primary".parse().unwrap(),
            vec!["backup1".parse().unwrap(), "backup2".parse().unwrap()],
        )
    }

    fn older() -> Vec<Message> {
        vec![
            Message::user("we discussed ownership"),
            Message::assistant("ownership moves values"),
        ]
    }

    #[tokio::test]
    async fn test_primary_model_wins() {
        let mut replies = HashMap::new();
        replies.insert(
            "primary".to_string(),
            Ok(ModelReply::from_content("a fine summary")),
        );
        let gateway = Arc::new(ScriptedGateway {
            replies,
            calls: Mutex::new(Vec::new()),
        });

        let summary = ChainSummarizer::new(gateway.clone(), chain())
            .summarize(&older())
            .await
            .unwrap();

        assert_eq!(summary, "a fine summary");
        assert_eq!(*gateway.calls.lock().unwrap(), vec!["primary".to_string()]);
    }

    #[tokio::test]
    async fn test_chain_is_sequential_and_skips_blank() {
        let mut replies = HashMap::new();
        replies.insert(
            "primary".to_string(),
            Err(GatewayError::Timeout),
        );
        replies.insert("backup1".to_string(), Ok(ModelReply::from_content("  ")));
        replies.insert(
            "backup2".to_string(),
            Ok(ModelReply::from_content("third time lucky")),
        );
        let gateway = Arc::new(ScriptedGateway {
            replies,
            calls: Mutex::new(Vec::new()),
        });

        let summary = ChainSummarizer::new(gateway.clone(), chain())
            .summarize(&older())
            .await
            .unwrap();

        assert_eq!(summary, "third time lucky");
        assert_eq!(
            *gateway.calls.lock().unwrap(),
            vec![
                "primary".to_string(),
                "backup1".to_string(),
                "backup2".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_exhausted_chain_degrades_to_source_text() {
        let gateway = Arc::new(ScriptedGateway {
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        });

        let summary = ChainSummarizer::new(gateway, chain())
            .summarize(&older())
            .await
            .unwrap();

        assert!(summary.starts_with("Conversation covers: "));
        assert!(summary.contains("we discussed ownership"));
    }
}
