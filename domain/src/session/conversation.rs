//! Persisted conversation record
//!
//! The storage adapter owns durability; this module only defines the record
//! shape and the pure reduction from stored turns to prompt history. An
//! assistant turn keeps the full three-stage result, but history exposed to
//! later prompts is reduced to `(user content, stage-3 content)` pairs;
//! stage 1/2 detail is never replayed.

use crate::orchestration::value_objects::{MemberResponse, PeerRanking, Synthesis};
use crate::session::entities::Message;
use serde::{Deserialize, Serialize};

/// Default title before the first turn has been titled
pub const DEFAULT_TITLE: &str = "New Conversation";

/// One stored message: a user query or a full council reply
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum StoredMessage {
    User {
        content: String,
    },
    Assistant {
        stage1: Vec<MemberResponse>,
        stage2: Vec<PeerRanking>,
        stage3: Synthesis,
    },
}

/// A persisted conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    /// ISO-8601 creation timestamp, assigned by the storage adapter
    pub created_at: String,
    pub title: String,
    pub messages: Vec<StoredMessage>,
}

impl Conversation {
    pub fn new(id: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: created_at.into(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(StoredMessage::User {
            content: content.into(),
        });
    }

    pub fn push_assistant(
        &mut self,
        stage1: Vec<MemberResponse>,
        stage2: Vec<PeerRanking>,
        stage3: Synthesis,
    ) {
        self.messages.push(StoredMessage::Assistant {
            stage1,
            stage2,
            stage3,
        });
    }

    /// True before any turn has completed
    pub fn is_untitled(&self) -> bool {
        self.title == DEFAULT_TITLE
    }

    /// Reduce stored turns to flat `(user, assistant)` history messages.
    ///
    /// Each user message is paired with the stage-3 content of the
    /// assistant message that follows it, when one exists. `limit` caps the
    /// number of exchanges counted from the start of the conversation.
    pub fn history_pairs(&self, limit: Option<usize>) -> Vec<Message> {
        let mut history = Vec::new();
        let mut exchanges = 0;
        let mut i = 0;

        while i < self.messages.len() {
            if let StoredMessage::User { content } = &self.messages[i] {
                history.push(Message::user(content.clone()));

                if let Some(StoredMessage::Assistant { stage3, .. }) = self.messages.get(i + 1) {
                    history.push(Message::assistant(stage3.content.clone()));
                    i += 1;
                }

                exchanges += 1;
                if limit.is_some_and(|l| exchanges >= l) {
                    break;
                }
            }
            i += 1;
        }

        history
    }
}

/// Conversation metadata for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub created_at: String,
    pub title: String,
    pub message_count: usize,
}

impl ConversationSummary {
    pub fn of(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id.clone(),
            created_at: conversation.created_at.clone(),
            title: conversation.title.clone(),
            message_count: conversation.messages.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Model;
    use crate::session::entities::Role;
    use crate::session::reply::ModelReply;

    fn turn(conversation: &mut Conversation, question: &str, answer: &str) {
        conversation.push_user(question);
        conversation.push_assistant(
            vec![],
            vec![],
            Synthesis::from_reply(Model::Gemini3Pro, ModelReply::from_content(answer)),
        );
    }

    #[test]
    fn test_history_pairs_reduce_to_stage3_only() {
        let mut conv = Conversation::new("c1", "2026-08-06T00:00:00Z");
        turn(&mut conv, "first?", "first answer");
        turn(&mut conv, "second?", "second answer");

        let history = conv.history_pairs(None);
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[1].content, "first answer");
        assert_eq!(history[3].content, "second answer");
    }

    #[test]
    fn test_history_pairs_limit_counts_exchanges() {
        let mut conv = Conversation::new("c1", "2026-08-06T00:00:00Z");
        for i in 0..5 {
            turn(&mut conv, &format!("q{i}"), &format!("a{i}"));
        }

        let history = conv.history_pairs(Some(2));
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].content, "q0");
        assert_eq!(history[3].content, "a1");
    }

    #[test]
    fn test_unanswered_user_message_stands_alone() {
        let mut conv = Conversation::new("c1", "2026-08-06T00:00:00Z");
        conv.push_user("pending question");

        let history = conv.history_pairs(None);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, Role::User);
    }

    #[test]
    fn test_stored_message_role_tagging() {
        let mut conv = Conversation::new("c1", "2026-08-06T00:00:00Z");
        turn(&mut conv, "q", "a");

        let json = serde_json::to_string(&conv).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"role\":\"assistant\""));

        let back: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.messages.len(), 2);
    }

    #[test]
    fn test_untitled_until_renamed() {
        let mut conv = Conversation::new("c1", "2026-08-06T00:00:00Z");
        assert!(conv.is_untitled());
        conv.title = "Rust error handling".to_string();
        assert!(!conv.is_untitled());
    }
}
