//! CLI entrypoint for llm-council
//!
//! Wires the layers together: config in, gateway and store constructed,
//! context built, the council run, the turn persisted, the verdict printed.

use anyhow::{Context, Result, bail};
use clap::Parser;
use council_application::{
    BuildContextUseCase, ChainSummarizer, ExecutionParams, GenerateTitleUseCase, NoTurnLogger,
    QuickQueryUseCase, RunCouncilInput, RunCouncilUseCase,
    ports::conversation_store::ConversationStore,
    ports::model_gateway::ModelGateway,
    ports::progress::NoProgress,
    ports::turn_logger::TurnLogger,
};
use council_domain::{CouncilVerdict, Query, Synthesis};
use council_infrastructure::{
    ConfigLoader, FileConfig, FileConversationStore, JsonlTurnLogger, OpenRouterGateway,
};
use council_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    for issue in config.validate() {
        if issue.is_error() {
            bail!("configuration error: {}", issue.message);
        }
        eprintln!("warning: {}", issue.message);
    }

    let store = FileConversationStore::new(config.storage.data_dir());

    if cli.list {
        return list_conversations(&store).await;
    }
    if let Some(id) = &cli.delete {
        store.delete(id).await?;
        println!("Deleted conversation {id}");
        return Ok(());
    }

    let Some(question) = cli.question.clone() else {
        bail!("A question is required. See --help for usage.");
    };
    let Some(query) = Query::try_new(question.clone()) else {
        bail!("The question cannot be empty.");
    };

    let gateway: Arc<dyn ModelGateway> = Arc::new(
        OpenRouterGateway::from_file_config(&config.openrouter)
            .context("failed to set up the OpenRouter gateway")?,
    );

    let roster = resolve_roster(&cli, &config);
    roster.validate()?;

    // Open or create the conversation
    let (conversation_id, is_new) = match &cli.conversation {
        Some(id) => {
            if store.get(id).await?.is_none() {
                bail!("Conversation {id} not found");
            }
            (id.clone(), false)
        }
        None => {
            let id = FileConversationStore::next_conversation_id();
            store.create(&id).await?;
            (id, true)
        }
    };

    // Build the context window from stored history
    let mut policy = config.context.to_policy();
    if cli.no_summarize {
        policy.summarize_older = false;
    }
    let params = ExecutionParams::default().with_request_timeout_secs(
        config.openrouter.request_timeout_secs.unwrap_or(120),
    );
    let summarizer = Arc::new(
        ChainSummarizer::new(Arc::clone(&gateway), config.models.summarizer_chain())
            .with_policy(policy.clone())
            .with_params(params.clone()),
    );
    let raw_history = store.history(&conversation_id, None).await?;
    let history = BuildContextUseCase::new(summarizer)
        .with_policy(policy)
        .execute(raw_history)
        .await;

    info!(
        "Conversation {} ({} context messages)",
        conversation_id,
        history.len()
    );

    store.append_user(&conversation_id, query.content()).await?;

    let verdict = if cli.quick {
        run_quick(&config, &gateway, &params, &query, &history).await
    } else {
        run_council(&cli, &config, &gateway, &params, &query, roster, history).await?
    };

    store.append_turn(&conversation_id, &verdict).await?;

    // Title fresh conversations from their first question
    if is_new {
        let title = GenerateTitleUseCase::new(Arc::clone(&gateway), config.models.title_model())
            .with_params(params)
            .execute(query.content())
            .await;
        store.rename(&conversation_id, &title).await?;
    }

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&verdict),
        OutputFormat::Synthesis => ConsoleFormatter::format_synthesis_only(&verdict),
        OutputFormat::Json => ConsoleFormatter::format_json(&verdict),
    };
    println!("{output}");

    if !cli.quiet {
        eprintln!("\nconversation: {conversation_id}");
    }

    Ok(())
}

fn resolve_roster(cli: &Cli, config: &FileConfig) -> council_domain::CouncilRoster {
    let mut roster = config.council.to_roster();
    if !cli.members.is_empty() {
        roster.members = cli.members.iter().map(|s| s.parse().unwrap()).collect();
    }
    if let Some(chairman) = &cli.chairman {
        roster.chairman = chairman.parse().unwrap();
    }
    roster
}

async fn run_council(
    cli: &Cli,
    config: &FileConfig,
    gateway: &Arc<dyn ModelGateway>,
    params: &ExecutionParams,
    query: &Query,
    roster: council_domain::CouncilRoster,
    history: Vec<council_domain::Message>,
) -> Result<CouncilVerdict> {
    let turn_logger: Arc<dyn TurnLogger> = config
        .storage
        .turn_log
        .as_ref()
        .and_then(|path| JsonlTurnLogger::open(path))
        .map(|logger| Arc::new(logger) as Arc<dyn TurnLogger>)
        .unwrap_or_else(|| Arc::new(NoTurnLogger));

    let use_case = RunCouncilUseCase::new(Arc::clone(gateway))
        .with_params(params.clone())
        .with_turn_logger(turn_logger);

    let input = RunCouncilInput::new(query.clone(), roster).with_history(history);

    let verdict = if cli.quiet {
        use_case.execute_with_progress(input, &NoProgress).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    Ok(verdict)
}

async fn run_quick(
    config: &FileConfig,
    gateway: &Arc<dyn ModelGateway>,
    params: &ExecutionParams,
    query: &Query,
    history: &[council_domain::Message],
) -> CouncilVerdict {
    let use_case = QuickQueryUseCase::new(Arc::clone(gateway), config.models.quick_model())
        .with_params(params.clone());

    let response = use_case.execute(query, history).await;

    // A quick turn persists as a council turn with empty stages 1 and 2
    CouncilVerdict {
        stage1: Vec::new(),
        stage2: Vec::new(),
        stage3: Synthesis {
            model: response.model,
            content: response.content,
            response_id: response.response_id,
            usage: response.usage,
            finish_reason: response.finish_reason,
        },
        metadata: Default::default(),
    }
}

async fn list_conversations(store: &FileConversationStore) -> Result<()> {
    let summaries = store.list().await?;
    if summaries.is_empty() {
        println!("No stored conversations.");
        return Ok(());
    }
    for summary in summaries {
        println!(
            "{}  {:>3} messages  {}  {}",
            summary.created_at, summary.message_count, summary.id, summary.title
        );
    }
    Ok(())
}
