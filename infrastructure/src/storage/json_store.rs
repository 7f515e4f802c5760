//! JSON-file conversation store
//!
//! One pretty-printed JSON file per conversation under the data directory.
//! The store owns ids and timestamps; everything else round-trips through
//! the domain's `Conversation` record.

use async_trait::async_trait;
use council_application::ports::conversation_store::{ConversationStore, StoreError};
use council_domain::{Conversation, ConversationSummary, CouncilVerdict, Message};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed conversation store
pub struct FileConversationStore {
    data_dir: PathBuf,
}

impl FileConversationStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Generate a fresh conversation id from the current UTC time
    pub fn next_conversation_id() -> String {
        chrono::Utc::now().format("%Y%m%d-%H%M%S%3f").to_string()
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.data_dir.join(format!("{id}.json"))
    }

    fn ensure_data_dir(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::Io(e.to_string()))
    }

    fn read(&self, path: &Path) -> Result<Conversation, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn write(&self, conversation: &Conversation) -> Result<(), StoreError> {
        self.ensure_data_dir()?;
        let content = serde_json::to_string_pretty(conversation)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        std::fs::write(self.path_for(&conversation.id), content)
            .map_err(|e| StoreError::Io(e.to_string()))
    }

    fn load_required(&self, id: &str) -> Result<Conversation, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.read(&path)
    }
}

#[async_trait]
impl ConversationStore for FileConversationStore {
    async fn create(&self, id: &str) -> Result<Conversation, StoreError> {
        let conversation = Conversation::new(id, chrono::Utc::now().to_rfc3339());
        self.write(&conversation)?;
        debug!("Created conversation {}", id);
        Ok(conversation)
    }

    async fn get(&self, id: &str) -> Result<Option<Conversation>, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        self.read(&path).map(Some)
    }

    async fn save(&self, conversation: &Conversation) -> Result<(), StoreError> {
        self.write(conversation)
    }

    async fn list(&self) -> Result<Vec<ConversationSummary>, StoreError> {
        self.ensure_data_dir()?;

        let entries =
            std::fs::read_dir(&self.data_dir).map_err(|e| StoreError::Io(e.to_string()))?;

        let mut summaries = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Io(e.to_string()))?;
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match self.read(&path) {
                Ok(conversation) => summaries.push(ConversationSummary::of(&conversation)),
                Err(e) => {
                    // A corrupt file should not hide every other conversation
                    warn!("Skipping unreadable conversation {}: {}", path.display(), e);
                }
            }
        }

        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        std::fs::remove_file(&path).map_err(|e| StoreError::Io(e.to_string()))
    }

    async fn append_user(&self, id: &str, content: &str) -> Result<(), StoreError> {
        let mut conversation = self.load_required(id)?;
        conversation.push_user(content);
        self.write(&conversation)
    }

    async fn append_turn(&self, id: &str, verdict: &CouncilVerdict) -> Result<(), StoreError> {
        let mut conversation = self.load_required(id)?;
        conversation.push_assistant(
            verdict.stage1.clone(),
            verdict.stage2.clone(),
            verdict.stage3.clone(),
        );
        self.write(&conversation)
    }

    async fn rename(&self, id: &str, title: &str) -> Result<(), StoreError> {
        let mut conversation = self.load_required(id)?;
        conversation.title = title.to_string();
        self.write(&conversation)
    }

    async fn history(&self, id: &str, limit: Option<usize>) -> Result<Vec<Message>, StoreError> {
        match self.get(id).await? {
            Some(conversation) => Ok(conversation.history_pairs(limit)),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{Model, ModelReply, Synthesis};

    fn store() -> (tempfile::TempDir, FileConversationStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConversationStore::new(dir.path().join("conversations"));
        (dir, store)
    }

    fn verdict(answer: &str) -> CouncilVerdict {
        CouncilVerdict {
            stage1: vec![],
            stage2: vec![],
            stage3: Synthesis::from_reply(Model::Gemini3Pro, ModelReply::from_content(answer)),
            metadata: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let (_dir, store) = store();

        let created = store.create("c1").await.unwrap();
        assert_eq!(created.title, "New Conversation");

        let loaded = store.get("c1").await.unwrap().unwrap();
        assert_eq!(loaded.id, "c1");
        assert_eq!(loaded.created_at, created.created_at);
        assert!(loaded.messages.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let (_dir, store) = store();
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_and_history() {
        let (_dir, store) = store();
        store.create("c1").await.unwrap();

        store.append_user("c1", "first question").await.unwrap();
        store.append_turn("c1", &verdict("first answer")).await.unwrap();

        let history = store.history("c1", None).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "first question");
        assert_eq!(history[1].content, "first answer");
    }

    #[tokio::test]
    async fn test_history_of_unknown_conversation_is_empty() {
        let (_dir, store) = store();
        assert!(store.history("ghost", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_to_unknown_conversation_errors() {
        let (_dir, store) = store();
        let result = store.append_user("ghost", "hello?").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rename() {
        let (_dir, store) = store();
        store.create("c1").await.unwrap();
        store.rename("c1", "Borrow checker woes").await.unwrap();

        let loaded = store.get("c1").await.unwrap().unwrap();
        assert_eq!(loaded.title, "Borrow checker woes");
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let (_dir, store) = store();

        let mut first = store.create("older").await.unwrap();
        first.created_at = "2026-01-01T00:00:00Z".to_string();
        store.save(&first).await.unwrap();

        let mut second = store.create("newer").await.unwrap();
        second.created_at = "2026-06-01T00:00:00Z".to_string();
        store.save(&second).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "newer");
        assert_eq!(listed[1].id, "older");
    }

    #[tokio::test]
    async fn test_delete() {
        let (_dir, store) = store();
        store.create("c1").await.unwrap();

        store.delete("c1").await.unwrap();
        assert!(store.get("c1").await.unwrap().is_none());

        let result = store.delete("c1").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_skips_corrupt_files() {
        let (_dir, store) = store();
        store.create("good").await.unwrap();

        std::fs::write(store.path_for("bad"), "{not json").unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "good");
    }
}
