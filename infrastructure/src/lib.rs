//! Infrastructure layer for llm-council
//!
//! Adapters for the application ports: the OpenRouter HTTP gateway, TOML
//! configuration loading, the JSON-file conversation store and the JSONL
//! turn logger.

pub mod config;
pub mod logging;
pub mod openrouter;
pub mod storage;

pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use logging::JsonlTurnLogger;
pub use openrouter::OpenRouterGateway;
pub use storage::FileConversationStore;
