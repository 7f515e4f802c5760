//! Build Context use case
//!
//! Decides how much history stages 1-3 get to see. Short histories pass
//! through verbatim; long ones are either hard-truncated or split so the
//! older segment is condensed into a single synthetic system message. A
//! summarizer error widens the truncation window instead of surfacing.

use crate::ports::summarizer::Summarizer;
use council_domain::{ContextPolicy, Message, summary_message};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for constructing the context window of one turn
pub struct BuildContextUseCase {
    summarizer: Arc<dyn Summarizer>,
    policy: ContextPolicy,
}

impl BuildContextUseCase {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            summarizer,
            policy: ContextPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ContextPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Produce the context window for the given flattened history.
    /// Never fails; every degradation path returns a usable window.
    pub async fn execute(&self, history: Vec<Message>) -> Vec<Message> {
        if self.policy.fits(&history) {
            return history;
        }

        if !self.policy.summarize_older {
            debug!("Summarization disabled; truncating to recent window");
            return self.policy.recent_window(&history).to_vec();
        }

        let (older, recent) = self.policy.split(&history);

        match self.summarizer.summarize(older).await {
            Ok(summary) => {
                let mut context = Vec::with_capacity(recent.len() + 1);
                context.push(summary_message(&summary));
                context.extend_from_slice(recent);
                context
            }
            Err(e) => {
                warn!("Summarization failed, widening truncation window: {}", e);
                self.policy.widened_window(&history).to_vec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::summarizer::SummarizeError;
    use async_trait::async_trait;
    use council_domain::Role;

    struct FixedSummarizer(String);

    #[async_trait]
    impl Summarizer for FixedSummarizer {
        async fn summarize(&self, _older: &[Message]) -> Result<String, SummarizeError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _older: &[Message]) -> Result<String, SummarizeError> {
            Err(SummarizeError::Failed("boom".to_string()))
        }
    }

    fn pairs(n: usize) -> Vec<Message> {
        (0..n)
            .flat_map(|i| {
                vec![
                    Message::user(format!("q{i}")),
                    Message::assistant(format!("a{i}")),
                ]
            })
            .collect()
    }

    #[tokio::test]
    async fn test_short_history_passes_through() {
        let use_case = BuildContextUseCase::new(Arc::new(FixedSummarizer("s".into())));
        let history = pairs(8);

        let context = use_case.execute(history.clone()).await;

        assert_eq!(context, history);
    }

    #[tokio::test]
    async fn test_long_history_gets_summary_plus_recent() {
        let use_case = BuildContextUseCase::new(Arc::new(FixedSummarizer(
            "they argued about tabs".into(),
        )));

        let context = use_case.execute(pairs(30)).await;

        // one synthetic system message + the last 10 pairs
        assert_eq!(context.len(), 21);
        assert_eq!(context[0].role, Role::System);
        assert_eq!(
            context[0].content,
            "Previous conversation summary: they argued about tabs"
        );
        assert_eq!(context[1].content, "q20");
        assert_eq!(context[20].content, "a29");
    }

    #[tokio::test]
    async fn test_summarizer_error_widens_the_window() {
        let use_case = BuildContextUseCase::new(Arc::new(FailingSummarizer));

        let context = use_case.execute(pairs(30)).await;

        // last 15 pairs, no summary message
        assert_eq!(context.len(), 30);
        assert_eq!(context[0].content, "q15");
        assert!(context.iter().all(|m| m.role != Role::System));
    }

    #[tokio::test]
    async fn test_disabled_summarization_truncates_hard() {
        let policy = ContextPolicy::default().without_summarization();
        let use_case =
            BuildContextUseCase::new(Arc::new(FixedSummarizer("unused".into()))).with_policy(policy);

        let context = use_case.execute(pairs(30)).await;

        assert_eq!(context.len(), 20);
        assert_eq!(context[0].content, "q20");
    }

    #[tokio::test]
    async fn test_boundary_exactly_at_limit() {
        let use_case = BuildContextUseCase::new(Arc::new(FailingSummarizer));
        let history = pairs(10);

        let context = use_case.execute(history.clone()).await;

        assert_eq!(context, history);
    }
}
