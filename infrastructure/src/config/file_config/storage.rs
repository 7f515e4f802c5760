//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where conversations and turn logs live
///
/// # Example
///
/// ```toml
/// [storage]
/// data_dir = "data/conversations"
/// turn_log = "data/turns.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Conversation directory; defaults to `data/conversations`
    pub data_dir: Option<PathBuf>,
    /// Optional JSONL turn-event log file
    pub turn_log: Option<PathBuf>,
}

impl FileStorageConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("data/conversations"))
    }
}
