//! Run Council use case
//!
//! Orchestrates the full three-stage council turn: collect answers, rank
//! them blind, synthesize a final reply. Model failures degrade the output
//! rather than erroring: a member that fails simply disappears from the
//! turn, a failed chairman yields a sentinel synthesis, and a fully-failed
//! stage 1 short-circuits into an error-shaped verdict without touching
//! stages 2 and 3.

use crate::config::ExecutionParams;
use crate::ports::model_gateway::{ModelGateway, query_models_parallel_with};
use crate::ports::progress::{CouncilProgress, NoProgress};
use crate::ports::turn_logger::{NoTurnLogger, TurnEvent, TurnLogger};
use council_domain::{
    CouncilMetadata, CouncilRoster, CouncilVerdict, DomainError, LabelMap, MemberResponse,
    Message, PeerRanking, PromptTemplate, Query, Stage, Synthesis, aggregate_rankings,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur before any model is called
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error("Invalid council roster: {0}")]
    InvalidRoster(#[from] DomainError),
}

/// Input for the RunCouncil use case
#[derive(Debug, Clone)]
pub struct RunCouncilInput {
    /// The question to put before the council
    pub query: Query,
    /// Members answering and ranking, plus the synthesizing chairman
    pub roster: CouncilRoster,
    /// Flattened `(user, assistant)` history pairs, possibly
    /// summary-augmented by the context builder
    pub history: Vec<Message>,
}

impl RunCouncilInput {
    pub fn new(query: impl Into<Query>, roster: CouncilRoster) -> Self {
        Self {
            query: query.into(),
            roster,
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }
}

/// Use case for running one council turn
pub struct RunCouncilUseCase {
    gateway: Arc<dyn ModelGateway>,
    params: ExecutionParams,
    turn_logger: Arc<dyn TurnLogger>,
}

impl RunCouncilUseCase {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            gateway,
            params: ExecutionParams::default(),
            turn_logger: Arc::new(NoTurnLogger),
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_turn_logger(mut self, logger: Arc<dyn TurnLogger>) -> Self {
        self.turn_logger = logger;
        self
    }

    /// Execute the turn with default (no-op) progress
    pub async fn execute(&self, input: RunCouncilInput) -> Result<CouncilVerdict, RunCouncilError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the turn with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunCouncilInput,
        progress: &dyn CouncilProgress,
    ) -> Result<CouncilVerdict, RunCouncilError> {
        input.roster.validate()?;

        info!(
            "Starting council turn with {} members, chairman {}",
            input.roster.members.len(),
            input.roster.chairman
        );

        // Stage 1: Collect answers
        let stage1 = self.stage_collect(&input, progress).await;

        if stage1.is_empty() {
            warn!("Every council member failed; returning error-shaped turn");
            self.turn_logger.log(TurnEvent::new(
                "council_all_failed",
                serde_json::json!({
                    "members": input.roster.members.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
                }),
            ));
            return Ok(CouncilVerdict::all_failed());
        }

        // Labels follow the filtered stage-1 order, not the full roster
        let labels = LabelMap::assign(stage1.iter().map(|r| r.model.clone()));

        // Stage 2: Blind peer ranking
        let stage2 = self.stage_rank(&input, &stage1, &labels, progress).await;

        let aggregate = aggregate_rankings(stage2.iter().map(|r| r.parsed.as_slice()), &labels);

        // Stage 3: Chairman synthesis
        let stage3 = self.stage_synthesize(&input, &stage1, &stage2, progress).await;

        self.turn_logger.log(TurnEvent::new(
            "council_turn",
            serde_json::json!({
                "members_answered": stage1.len(),
                "rankings_received": stage2.len(),
                "synthesis_degraded": stage3.is_sentinel(),
            }),
        ));

        Ok(CouncilVerdict {
            stage1,
            stage2,
            stage3,
            metadata: CouncilMetadata {
                label_to_model: labels,
                aggregate_rankings: aggregate,
            },
        })
    }

    /// Stage 1: fan the query out to every member, keep the survivors in
    /// declaration order
    async fn stage_collect(
        &self,
        input: &RunCouncilInput,
        progress: &dyn CouncilProgress,
    ) -> Vec<MemberResponse> {
        info!("Stage 1: collecting responses");
        progress.on_stage_start(&Stage::Collect, input.roster.members.len());

        let prompt = PromptTemplate::collect_prompt(input.query.content(), &input.history);
        let messages = vec![Message::user(prompt)];

        let results = query_models_parallel_with(
            Arc::clone(&self.gateway),
            &input.roster.members,
            &messages,
            Some(self.params.request_timeout()),
            |model, success| progress.on_model_complete(&Stage::Collect, model, success),
        )
        .await;

        let mut stage1 = Vec::new();
        for (model, result) in results {
            match result {
                Ok(reply) => {
                    debug!("Member {} answered ({} bytes)", model, reply.content.len());
                    stage1.push(MemberResponse::from_reply(model, reply));
                }
                Err(e) => {
                    warn!("Member {} failed: {}", model, e);
                }
            }
        }

        progress.on_stage_complete(&Stage::Collect);
        stage1
    }

    /// Stage 2: every member ranks the anonymized answers, its own included
    async fn stage_rank(
        &self,
        input: &RunCouncilInput,
        stage1: &[MemberResponse],
        labels: &LabelMap,
        progress: &dyn CouncilProgress,
    ) -> Vec<PeerRanking> {
        info!("Stage 2: collecting peer rankings");
        progress.on_stage_start(&Stage::Rank, input.roster.members.len());

        let labeled: Vec<_> = labels
            .iter()
            .zip(stage1)
            .map(|((label, _), response)| (label, response.content.as_str()))
            .collect();

        let prompt = PromptTemplate::ranking_prompt(input.query.content(), &labeled, &input.history);
        let messages = vec![Message::user(prompt)];

        let results = query_models_parallel_with(
            Arc::clone(&self.gateway),
            &input.roster.members,
            &messages,
            Some(self.params.request_timeout()),
            |model, success| progress.on_model_complete(&Stage::Rank, model, success),
        )
        .await;

        let mut stage2 = Vec::new();
        for (model, result) in results {
            match result {
                Ok(reply) => {
                    let ranking = PeerRanking::from_reply(model, reply);
                    if ranking.parsed.is_empty() {
                        debug!("Ranking from {} did not parse", ranking.model);
                    }
                    stage2.push(ranking);
                }
                Err(e) => {
                    warn!("Ranker {} failed: {}", model, e);
                }
            }
        }

        progress.on_stage_complete(&Stage::Rank);
        stage2
    }

    /// Stage 3: one chairman call; failure degrades to the sentinel
    async fn stage_synthesize(
        &self,
        input: &RunCouncilInput,
        stage1: &[MemberResponse],
        stage2: &[PeerRanking],
        progress: &dyn CouncilProgress,
    ) -> Synthesis {
        info!("Stage 3: chairman synthesis via {}", input.roster.chairman);
        progress.on_stage_start(&Stage::Synthesize, 1);

        let responses: Vec<_> = stage1
            .iter()
            .map(|r| (r.model.as_str(), r.content.as_str()))
            .collect();
        let rankings: Vec<_> = stage2
            .iter()
            .map(|r| (r.model.as_str(), r.ranking.as_str()))
            .collect();

        let prompt = PromptTemplate::synthesis_prompt(
            input.query.content(),
            &responses,
            &rankings,
            &input.history,
        );
        let messages = vec![Message::user(prompt)];

        let chairman = input.roster.chairman.clone();
        let synthesis = match self
            .gateway
            .query(&chairman, &messages, Some(self.params.request_timeout()))
            .await
        {
            Ok(reply) => {
                progress.on_model_complete(&Stage::Synthesize, &chairman, true);
                Synthesis::from_reply(chairman, reply)
            }
            Err(e) => {
                warn!("Chairman {} failed: {}", chairman, e);
                progress.on_model_complete(&Stage::Synthesize, &chairman, false);
                Synthesis::unavailable(chairman)
            }
        };

        progress.on_stage_complete(&Stage::Synthesize);
        synthesis
    }
}
