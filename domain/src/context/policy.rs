//! Context window policy
//!
//! Controls how much flattened history a council turn sees. Histories at or
//! under the recency limit pass through verbatim; longer histories either
//! truncate hard or split into an older segment (condensed to one synthetic
//! system message by the summarizer) and a verbatim recent tail.
//!
//! All functions here are pure; the summarizer itself lives in the
//! application layer because it calls models.

use crate::session::entities::Message;
use crate::util::snippet;
use serde::{Deserialize, Serialize};

/// Prefix of the synthetic system message that replaces condensed history
pub const SUMMARY_PREFIX: &str = "Previous conversation summary: ";

/// Policy knobs for context construction, immutable per invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextPolicy {
    /// Number of recent `(user, assistant)` pairs kept verbatim
    pub recent_limit: usize,
    /// Condense older history instead of dropping it
    pub summarize_older: bool,
    /// Character cap on the text handed to the summarizer
    pub summary_char_budget: usize,
    /// Extra pairs kept when summarization fails and we widen the window
    pub fallback_extra_pairs: usize,
}

impl Default for ContextPolicy {
    fn default() -> Self {
        Self {
            recent_limit: 10,
            summarize_older: true,
            summary_char_budget: 8000,
            fallback_extra_pairs: 5,
        }
    }
}

impl ContextPolicy {
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    pub fn without_summarization(mut self) -> Self {
        self.summarize_older = false;
        self
    }

    /// History fits when it holds at most `recent_limit` pairs
    /// (two messages per pair)
    pub fn fits(&self, history: &[Message]) -> bool {
        history.len() <= self.recent_limit * 2
    }

    /// Hard truncation: the most recent `recent_limit` pairs
    pub fn recent_window<'a>(&self, history: &'a [Message]) -> &'a [Message] {
        tail(history, self.recent_limit * 2)
    }

    /// Wider truncation used when summarization fails
    pub fn widened_window<'a>(&self, history: &'a [Message]) -> &'a [Message] {
        tail(history, (self.recent_limit + self.fallback_extra_pairs) * 2)
    }

    /// Split history into the older segment to condense and the recent tail
    pub fn split<'a>(&self, history: &'a [Message]) -> (&'a [Message], &'a [Message]) {
        let split_point = history.len().saturating_sub(self.recent_limit * 2);
        history.split_at(split_point)
    }

    /// Render older messages as role-labeled text for the summarizer,
    /// stopping before the message that would exceed the character budget.
    pub fn summary_input(&self, older: &[Message]) -> String {
        let mut text = String::new();
        for message in older {
            let line = format!("{}: {}\n\n", message.role.label(), message.content);
            if text.chars().count() + line.chars().count() > self.summary_char_budget {
                break;
            }
            text.push_str(&line);
        }
        text
    }
}

/// The synthetic system message carrying a summary of condensed history
pub fn summary_message(summary: &str) -> Message {
    Message::system(format!("{SUMMARY_PREFIX}{summary}"))
}

/// Deterministic last-resort summary built from the first five messages'
/// leading characters. Source text only, never a model call; cannot fail.
pub fn fallback_summary(older: &[Message]) -> String {
    let topics: Vec<String> = older
        .iter()
        .take(5)
        .map(|m| snippet(&m.content, 50))
        .collect();
    format!("Conversation covers: {}", topics.join(", "))
}

fn tail(history: &[Message], count: usize) -> &[Message] {
    &history[history.len().saturating_sub(count)..]
}
