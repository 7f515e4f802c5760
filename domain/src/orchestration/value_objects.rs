//! Orchestration value objects - immutable per-turn result types.
//!
//! One council turn produces:
//! - [`MemberResponse`] per surviving member (stage 1)
//! - [`PeerRanking`] per surviving ranker (stage 2)
//! - one [`Synthesis`] (stage 3), possibly a failure sentinel
//! - [`CouncilMetadata`] derived from the label map and the rankings
//!
//! Failures never surface as errors at this level: a failed chairman call
//! becomes a sentinel `Synthesis`, and a fully-failed stage 1 becomes the
//! error-shaped [`CouncilVerdict::all_failed`].

use crate::core::model::Model;
use crate::council::aggregate::AggregateEntry;
use crate::council::label::{LabelMap, ResponseLabel};
use crate::council::ranking::parse_ranking;
use crate::session::reply::{ModelReply, TokenUsage};
use serde::{Deserialize, Serialize};

/// Sentinel content when the chairman call fails
pub const SYNTHESIS_UNAVAILABLE: &str = "Error: Unable to generate final synthesis.";

/// Sentinel content when every council member fails in stage 1
pub const ALL_MEMBERS_FAILED: &str = "All models failed to respond. Please try again.";

/// One council member's answer from stage 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub model: Model,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
    #[serde(default, skip_serializing_if = "TokenUsage::is_empty")]
    pub usage: TokenUsage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl MemberResponse {
    pub fn from_reply(model: Model, reply: ModelReply) -> Self {
        Self {
            model,
            content: reply.content,
            response_id: reply.response_id,
            usage: reply.usage,
            finish_reason: reply.finish_reason,
        }
    }
}

/// One ranker's verdict from stage 2: the raw text plus whatever ordering
/// could be recovered from it. An unparseable ranking keeps its raw text
/// and carries an empty `parsed` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerRanking {
    pub model: Model,
    /// Full ranking text as returned by the model
    pub ranking: String,
    /// Labels in best-first order, empty when parsing found nothing
    pub parsed: Vec<ResponseLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
    #[serde(default, skip_serializing_if = "TokenUsage::is_empty")]
    pub usage: TokenUsage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl PeerRanking {
    pub fn from_reply(model: Model, reply: ModelReply) -> Self {
        let parsed = parse_ranking(&reply.content);
        Self {
            model,
            ranking: reply.content,
            parsed,
            response_id: reply.response_id,
            usage: reply.usage,
            finish_reason: reply.finish_reason,
        }
    }
}

/// The chairman's final answer from stage 3
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synthesis {
    pub model: Model,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
    #[serde(default, skip_serializing_if = "TokenUsage::is_empty")]
    pub usage: TokenUsage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl Synthesis {
    pub fn from_reply(model: Model, reply: ModelReply) -> Self {
        Self {
            model,
            content: reply.content,
            response_id: reply.response_id,
            usage: reply.usage,
            finish_reason: reply.finish_reason,
        }
    }

    /// Sentinel produced when the chairman call fails; the turn still
    /// succeeds with degraded output.
    pub fn unavailable(chairman: Model) -> Self {
        Self {
            model: chairman,
            content: SYNTHESIS_UNAVAILABLE.to_string(),
            response_id: None,
            usage: TokenUsage::default(),
            finish_reason: None,
        }
    }

    /// Sentinel for a turn where no council member answered at all
    pub fn all_failed() -> Self {
        Self {
            model: Model::Custom("error".to_string()),
            content: ALL_MEMBERS_FAILED.to_string(),
            response_id: None,
            usage: TokenUsage::default(),
            finish_reason: None,
        }
    }

    /// True when this synthesis is one of the failure sentinels
    pub fn is_sentinel(&self) -> bool {
        self.content == SYNTHESIS_UNAVAILABLE || self.content == ALL_MEMBERS_FAILED
    }
}

/// Derived per-turn metadata: the anonymization map and the consensus ordering
#[derive(Debug, Clone, Default, Serialize)]
pub struct CouncilMetadata {
    pub label_to_model: LabelMap,
    pub aggregate_rankings: Vec<AggregateEntry>,
}

/// Complete result of one council turn
#[derive(Debug, Clone, Serialize)]
pub struct CouncilVerdict {
    /// Stage 1: each surviving member's answer, declaration order
    pub stage1: Vec<MemberResponse>,
    /// Stage 2: each surviving ranker's verdict
    pub stage2: Vec<PeerRanking>,
    /// Stage 3: the chairman's synthesis (or a failure sentinel)
    pub stage3: Synthesis,
    pub metadata: CouncilMetadata,
}

impl CouncilVerdict {
    /// The error-shaped turn returned when stage 1 produced nothing.
    /// Stages 2 and 3 never ran; metadata is empty.
    pub fn all_failed() -> Self {
        Self {
            stage1: Vec::new(),
            stage2: Vec::new(),
            stage3: Synthesis::all_failed(),
            metadata: CouncilMetadata::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_ranking_parses_on_construction() {
        let reply = ModelReply::from_content("FINAL RANKING:\n1. Response B\n2. Response A");
        let ranking = PeerRanking::from_reply(Model::Gpt52Chat, reply);

        let letters: String = ranking.parsed.iter().map(|l| l.letter()).collect();
        assert_eq!(letters, "BA");
    }

    #[test]
    fn test_unparseable_ranking_keeps_raw_text() {
        let reply = ModelReply::from_content("I refuse to rank.");
        let ranking = PeerRanking::from_reply(Model::Gpt52Chat, reply);

        assert!(ranking.parsed.is_empty());
        assert_eq!(ranking.ranking, "I refuse to rank.");
    }

    #[test]
    fn test_synthesis_sentinels() {
        let unavailable = Synthesis::unavailable(Model::Gemini3Pro);
        assert_eq!(unavailable.model, Model::Gemini3Pro);
        assert_eq!(unavailable.content, SYNTHESIS_UNAVAILABLE);
        assert!(unavailable.is_sentinel());

        let failed = Synthesis::all_failed();
        assert_eq!(failed.model.as_str(), "error");
        assert!(failed.is_sentinel());

        let real = Synthesis::from_reply(Model::Gemini3Pro, ModelReply::from_content("answer"));
        assert!(!real.is_sentinel());
    }

    #[test]
    fn test_all_failed_verdict_shape() {
        let verdict = CouncilVerdict::all_failed();
        assert!(verdict.stage1.is_empty());
        assert!(verdict.stage2.is_empty());
        assert_eq!(verdict.stage3.content, ALL_MEMBERS_FAILED);
        assert!(verdict.metadata.label_to_model.is_empty());
        assert!(verdict.metadata.aggregate_rankings.is_empty());
    }
}
