//! Conversation store port
//!
//! Persistence is an external collaborator: the orchestrator produces
//! verdicts and never reads or writes the record itself. The store owns
//! ids, timestamps and durability.

use async_trait::async_trait;
use council_domain::{Conversation, ConversationSummary, CouncilVerdict, Message};
use thiserror::Error;

/// Errors from conversation storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Conversation {0} not found")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Repository for persisted conversations
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Create and persist a fresh conversation under the given id
    async fn create(&self, id: &str) -> Result<Conversation, StoreError>;

    /// Load a conversation, `None` when the id is unknown
    async fn get(&self, id: &str) -> Result<Option<Conversation>, StoreError>;

    /// Persist the full record, replacing any previous version
    async fn save(&self, conversation: &Conversation) -> Result<(), StoreError>;

    /// Metadata for every stored conversation, newest first
    async fn list(&self) -> Result<Vec<ConversationSummary>, StoreError>;

    /// Remove a conversation; errors when the id is unknown
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Append a user message
    async fn append_user(&self, id: &str, content: &str) -> Result<(), StoreError>;

    /// Append an assistant message carrying the full three-stage verdict
    async fn append_turn(&self, id: &str, verdict: &CouncilVerdict) -> Result<(), StoreError>;

    /// Update the conversation title
    async fn rename(&self, id: &str, title: &str) -> Result<(), StoreError>;

    /// Flattened `(user, stage-3)` history pairs for prompt building
    async fn history(&self, id: &str, limit: Option<usize>) -> Result<Vec<Message>, StoreError>;
}
