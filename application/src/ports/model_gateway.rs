//! Model gateway port
//!
//! Defines how the application layer reaches an LLM provider: one call per
//! model, bounded by a per-call timeout enforced at the adapter. Any
//! failure comes back as a [`GatewayError`]; the orchestrator treats an
//! erring model as absent and never retries.

use async_trait::async_trait;
use council_domain::{Message, Model, ModelReply};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::warn;

/// Errors that can occur during a model call
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for single model calls
///
/// Implementations (adapters) live in the infrastructure layer. One call is
/// one request/response; streaming, retries and provider routing are the
/// adapter's business.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send `messages` to `model` and return its reply.
    ///
    /// `timeout` overrides the adapter's default per-call timeout.
    async fn query(
        &self,
        model: &Model,
        messages: &[Message],
        timeout: Option<Duration>,
    ) -> Result<ModelReply, GatewayError>;
}

/// Fan one payload out to every model concurrently.
///
/// Returns one entry per requested model, in the order the models were
/// given. Failed calls keep their slot as an `Err` rather than being
/// dropped.
pub async fn query_models_parallel(
    gateway: Arc<dyn ModelGateway>,
    models: &[Model],
    messages: &[Message],
    timeout: Option<Duration>,
) -> Vec<(Model, Result<ModelReply, GatewayError>)> {
    query_models_parallel_with(gateway, models, messages, timeout, |_, _| {}).await
}

/// [`query_models_parallel`] with a completion callback, invoked in arrival
/// order as each call finishes (for progress reporting).
pub async fn query_models_parallel_with<F>(
    gateway: Arc<dyn ModelGateway>,
    models: &[Model],
    messages: &[Message],
    timeout: Option<Duration>,
    notify: F,
) -> Vec<(Model, Result<ModelReply, GatewayError>)>
where
    F: Fn(&Model, bool),
{
    let mut join_set = JoinSet::new();

    for (index, model) in models.iter().enumerate() {
        let gateway = Arc::clone(&gateway);
        let model = model.clone();
        let messages = messages.to_vec();

        join_set.spawn(async move {
            let result = gateway.query(&model, &messages, timeout).await;
            (index, model, result)
        });
    }

    let mut slots: Vec<Option<(Model, Result<ModelReply, GatewayError>)>> =
        (0..models.len()).map(|_| None).collect();

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, model, result)) => {
                notify(&model, result.is_ok());
                slots[index] = Some((model, result));
            }
            Err(e) => {
                warn!("Model query task panicked: {}", e);
            }
        }
    }

    // A panicked task leaves its slot empty; surface it as a failure so the
    // per-model invariant holds.
    slots
        .into_iter()
        .zip(models)
        .map(|(slot, model)| {
            slot.unwrap_or_else(|| {
                (
                    model.clone(),
                    Err(GatewayError::Other("query task aborted".to_string())),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Gateway that answers from a fixed per-model script
    struct ScriptedGateway {
        replies: HashMap<String, Result<ModelReply, GatewayError>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new(replies: HashMap<String, Result<ModelReply, GatewayError>>) -> Self {
            Self {
                replies,
                calls: Mutex::new(Vec::new()),
            }
        }
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

    #[tokio::test]
    async fn test_parallel_preserves_declaration_order_and_slots() {
        let models: Vec<Model> = vec![
            "m1".parse().unwrap(),
            "m2".parse().unwrap(),
            "m3".parse().unwrap(),
        ];
        let mut replies = HashMap::new();
        replies.insert("m1".to_string(), Ok(ModelReply::from_content("one")));
        replies.insert(
            "m2".to_string(),
            Err(GatewayError::ConnectionError("down".to_string())),
        );
        replies.insert("m3".to_string(), Ok(ModelReply::from_content("three")));

        let gateway = Arc::new(ScriptedGateway::new(replies));
        let results = query_models_parallel(
            gateway,
            &models,
            &[Message::user("q")],
            None,
        )
        .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0.as_str(), "m1");
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].0.as_str(), "m2");
        assert!(results[1].1.is_err());
        assert_eq!(results[2].0.as_str(), "m3");
    }

    #[tokio::test]
    async fn test_notify_reports_each_completion() {
        let models: Vec<Model> = vec!["m1".parse().unwrap(), "m2".parse().unwrap()];
        let mut replies = HashMap::new();
        replies.insert("m1".to_string(), Ok(ModelReply::from_content("one")));
        replies.insert(
            "m2".to_string(),
            Err(GatewayError::Timeout),
        );

        let gateway = Arc::new(ScriptedGateway::new(replies));
        let seen = Mutex::new(Vec::new());
        query_models_parallel_with(
            gateway,
            &models,
            &[Message::user("q")],
            None,
            |model, ok| seen.lock().unwrap().push((model.to_string(), ok)),
        )
        .await;

        let mut seen = seen.into_inner().unwrap();
        seen.sort();
        assert_eq!(
            seen,
            vec![("m1".to_string(), true), ("m2".to_string(), false)]
        );
    }
}
