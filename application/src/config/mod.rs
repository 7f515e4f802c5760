//! Execution parameters shared across use cases

use std::time::Duration;

/// Timeouts applied to model calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionParams {
    /// Per-call timeout for council and summarization queries, seconds
    pub request_timeout_secs: u64,
    /// Per-call timeout for title generation, seconds
    pub title_timeout_secs: u64,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            request_timeout_secs: 120,
            title_timeout_secs: 30,
        }
    }
}

impl ExecutionParams {
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn title_timeout(&self) -> Duration {
        Duration::from_secs(self.title_timeout_secs)
    }
}
