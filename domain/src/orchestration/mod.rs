//! Council turn orchestration types

pub mod entities;
pub mod value_objects;

pub use entities::{CouncilRoster, MAX_COUNCIL_SIZE, Stage, SummarizerChain};
pub use value_objects::{
    ALL_MEMBERS_FAILED, CouncilMetadata, CouncilVerdict, MemberResponse, PeerRanking,
    SYNTHESIS_UNAVAILABLE, Synthesis,
};
