//! Quick Query use case
//!
//! Single-model path that bypasses the three-stage pipeline entirely.
//! Shares the history-flattening convention with stage 1, so a quick turn
//! sees the same context a council turn would.

use crate::config::ExecutionParams;
use crate::ports::model_gateway::ModelGateway;
use council_domain::{MemberResponse, Message, Model, ModelReply, PromptTemplate, Query};
use std::sync::Arc;
use tracing::{info, warn};

/// Sentinel content when the quick model fails
pub const QUICK_QUERY_FAILED: &str = "Error: Model failed to respond. Please try again.";

/// Use case for a direct single-model answer
pub struct QuickQueryUseCase {
    gateway: Arc<dyn ModelGateway>,
    model: Model,
    params: ExecutionParams,
}

impl QuickQueryUseCase {
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

    /// Ask the quick model directly. Failure yields a sentinel-content
    /// response, never an error.
    pub async fn execute(&self, query: &Query, history: &[Message]) -> MemberResponse {
        info!("Quick query via {}", self.model);

        let prompt = PromptTemplate::collect_prompt(query.content(), history);
        let messages = vec![Message::user(prompt)];

        match self
            .gateway
            .query(&self.model, &messages, Some(self.params.request_timeout()))
            .await
        {
            Ok(reply) => MemberResponse::from_reply(self.model.clone(), reply),
            Err(e) => {
                warn!("Quick model {} failed: {}", self.model, e);
                MemberResponse::from_reply(
                    self.model.clone(),
                    ModelReply::from_content(QUICK_QUERY_FAILED),
                )
            }
        }
    }
}
