//! Application layer for llm-council
//!
//! Use cases compose the domain's pure logic with the ports implemented by
//! the infrastructure layer: the model gateway, the conversation store and
//! the progress/turn-log sinks.

pub mod config;
pub mod ports;
pub mod use_cases;

pub use config::ExecutionParams;
pub use ports::{
    ConversationStore, CouncilProgress, GatewayError, ModelGateway, NoProgress, NoTurnLogger,
    StoreError, SummarizeError, Summarizer, TurnEvent, TurnLogger, query_models_parallel,
    query_models_parallel_with,
};
pub use use_cases::{
    BuildContextUseCase, ChainSummarizer, GenerateTitleUseCase, QUICK_QUERY_FAILED,
    QuickQueryUseCase, RunCouncilError, RunCouncilInput, RunCouncilUseCase,
};
