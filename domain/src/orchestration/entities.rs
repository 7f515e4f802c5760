//! Orchestration domain entities

use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Maximum council size, bounded by the A..Z anonymization alphabet
pub const MAX_COUNCIL_SIZE: usize = 26;

/// Stage of a council turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Every council member answers the query independently
    Collect,
    /// Every member ranks the anonymized answers
    Rank,
    /// The chairman folds answers and rankings into one reply
    Synthesize,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Collect => "collect",
            Stage::Rank => "rank",
            Stage::Synthesize => "synthesize",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Collect => "Stage 1: Responses",
            Stage::Rank => "Stage 2: Peer Ranking",
            Stage::Synthesize => "Stage 3: Synthesis",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The set of models taking part in one council turn (Entity)
#[derive(Debug, Clone, PartialEq)]
pub struct CouncilRoster {
    /// Models answering and ranking
    pub members: Vec<Model>,
    /// Model performing the final synthesis
    pub chairman: Model,
}

impl Default for CouncilRoster {
    fn default() -> Self {
        Self {
            members: Model::default_council(),
            chairman: Model::default_chairman(),
        }
    }
}

impl CouncilRoster {
    pub fn new(members: Vec<Model>) -> Self {
        Self {
            members,
            ..Default::default()
        }
    }

    pub fn with_chairman(mut self, chairman: Model) -> Self {
        self.chairman = chairman;
        self
    }

    /// Reject rosters the label alphabet cannot cover
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.members.is_empty() {
            return Err(DomainError::EmptyRoster);
        }
        if self.members.len() > MAX_COUNCIL_SIZE {
            return Err(DomainError::RosterTooLarge(self.members.len()));
        }
        Ok(())
    }
}

/// Ordered model chain for history summarization (Value Object)
///
/// The primary model is tried first, then each fallback in turn. The chain
/// is an explicit configuration value, immutable per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerChain {
    pub primary: Model,
    pub fallbacks: Vec<Model>,
}

impl Default for SummarizerChain {
    fn default() -> Self {
        Self {
            primary: Model::default_summarizer(),
            fallbacks: Model::default_summarizer_fallbacks(),
        }
    }
}

impl SummarizerChain {
    pub fn new(primary: Model, fallbacks: Vec<Model>) -> Self {
        Self { primary, fallbacks }
    }

    /// Iterate the chain in try-order: primary first, then fallbacks
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        std::iter::once(&self.primary).chain(self.fallbacks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_is_invalid() {
        let roster = CouncilRoster::new(vec![]);
        assert!(matches!(roster.validate(), Err(DomainError::EmptyRoster)));
    }

    #[test]
    fn test_roster_past_label_alphabet_is_invalid() {
        let members = (0..27)
            .map(|i| Model::Custom(format!("m{i}")))
            .collect();
        let roster = CouncilRoster::new(members);
        assert!(matches!(
            roster.validate(),
            Err(DomainError::RosterTooLarge(27))
        ));
    }

    #[test]
    fn test_default_roster_is_valid() {
        assert!(CouncilRoster::default().validate().is_ok());
    }

    #[test]
    fn test_summarizer_chain_try_order() {
        let chain = SummarizerChain::default();
        let models: Vec<&Model> = chain.models().collect();
        assert_eq!(models[0], &Model::Gemini25Flash);
        assert_eq!(models.len(), 3);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Collect.as_str(), "collect");
        assert_eq!(Stage::Synthesize.to_string(), "Stage 3: Synthesis");
    }
}
