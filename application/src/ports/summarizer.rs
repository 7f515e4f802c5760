//! Summarizer port
//!
//! Seam between context building and the model-backed summarizer, so the
//! fallback behavior of [`crate::use_cases::BuildContextUseCase`] can be
//! exercised against a failing implementation.

use async_trait::async_trait;
use council_domain::Message;
use thiserror::Error;

/// Errors from a summarizer implementation
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Summarization failed: {0}")]
    Failed(String),
}

/// Condenses a segment of older conversation history into one summary
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, older: &[Message]) -> Result<String, SummarizeError>;
}
