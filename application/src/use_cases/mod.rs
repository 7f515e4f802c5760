//! Use cases - application-level orchestration

pub mod build_context;
pub mod generate_title;
pub mod quick_query;
pub mod run_council;
pub mod summarize;

pub use build_context::BuildContextUseCase;
pub use generate_title::GenerateTitleUseCase;
pub use quick_query::{QUICK_QUERY_FAILED, QuickQueryUseCase};
pub use run_council::{RunCouncilError, RunCouncilInput, RunCouncilUseCase};
pub use summarize::ChainSummarizer;
