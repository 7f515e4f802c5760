//! Domain layer for llm-council
//!
//! Core business logic for the three-stage council protocol. This crate has
//! no I/O: model calls, storage, and terminals live in the outer layers.
//!
//! # The protocol
//!
//! 1. **Collect**: every council member answers the query independently.
//! 2. **Rank**: members rank the anonymized answers ("Response A", ...);
//!    the parsed orderings fold into one consensus score per model.
//! 3. **Synthesize**: a chairman model folds answers and rankings into the
//!    final reply.
//!
//! Long conversations are condensed by a summarizer with an ordered model
//! fallback chain; the last tier is deterministic and cannot fail.

pub mod context;
pub mod core;
pub mod council;
pub mod orchestration;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use context::{ContextPolicy, SUMMARY_PREFIX, fallback_summary, summary_message};
pub use core::{error::DomainError, model::Model, query::Query};
pub use council::{
    AggregateEntry, LabelMap, ResponseLabel, aggregate_rankings, parse_ranking,
};
pub use orchestration::{
    ALL_MEMBERS_FAILED, CouncilMetadata, CouncilRoster, CouncilVerdict, MAX_COUNCIL_SIZE,
    MemberResponse, PeerRanking, SYNTHESIS_UNAVAILABLE, Stage, SummarizerChain, Synthesis,
};
pub use prompt::PromptTemplate;
pub use session::{
    Conversation, ConversationSummary, DEFAULT_TITLE, Message, ModelReply, Role, StoredMessage,
    TokenUsage,
};
