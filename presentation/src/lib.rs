//! Presentation layer for llm-council
//!
//! Terminal concerns only: clap argument types, console rendering of
//! verdicts, and progress bars.

pub mod cli;
pub mod output;
pub mod progress;

pub use cli::{Cli, OutputFormat};
pub use output::{ConsoleFormatter, OutputFormatter};
pub use progress::{ProgressReporter, SimpleProgress};
