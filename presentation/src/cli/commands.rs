//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for council results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with all stages
    Full,
    /// Only the final synthesis
    Synthesis,
    /// JSON output
    Json,
}

/// CLI arguments for llm-council
#[derive(Parser, Debug)]
#[command(name = "llm-council")]
#[command(version, about = "LLM Council - models answer, rank each other blind, and a chairman synthesizes")]
#[command(long_about = r#"
llm-council puts a question before a council of LLMs.

Each turn has three stages:
1. Responses: every council member answers independently, in parallel
2. Peer Ranking: members rank the anonymized answers (their own included)
3. Synthesis: the chairman folds answers and rankings into the final reply

Conversations persist between runs; long histories are condensed through a
summarizer with an ordered model fallback chain.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/llm-council/config.toml   Global config

Example:
  llm-council "What's the best way to handle errors in Rust?"
  llm-council -m gpt-5.2-chat-latest -m anthropic/claude-sonnet-4.5 "Compare async runtimes"
  llm-council --conversation 20260806-101500123 "And what about cancellation?"
  llm-council --quick "What does ? do in Rust?"
"#)]
pub struct Cli {
    /// The question to put before the council
    pub question: Option<String>,

    /// Continue an existing conversation by id
    #[arg(short = 'c', long, value_name = "ID")]
    pub conversation: Option<String>,

    /// Answer with a single quick model, skipping the council pipeline
    #[arg(long)]
    pub quick: bool,

    /// Council members (can be specified multiple times)
    #[arg(short, long = "member", value_name = "MODEL")]
    pub members: Vec<String>,

    /// Model performing the final synthesis
    #[arg(long, value_name = "MODEL")]
    pub chairman: Option<String>,

    /// Drop older history instead of summarizing it
    #[arg(long)]
    pub no_summarize: bool,

    /// List stored conversations and exit
    #[arg(long)]
    pub list: bool,

    /// Delete a stored conversation and exit
    #[arg(long, value_name = "ID")]
    pub delete: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "synthesis")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
