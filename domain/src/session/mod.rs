//! Conversation session domain

pub mod conversation;
pub mod entities;
pub mod reply;

pub use conversation::{Conversation, ConversationSummary, DEFAULT_TITLE, StoredMessage};
pub use entities::{Message, Role};
pub use reply::{ModelReply, TokenUsage};
