//! Council deliberation domain
//!
//! The pieces of the three-stage protocol that are pure logic: the
//! anonymization labels handed out before peer ranking, the parser that
//! recovers an ordering from free-form ranking text, and the aggregation
//! that folds every ranker's ordering into one consensus score per model.

pub mod aggregate;
pub mod label;
pub mod ranking;

pub use aggregate::{AggregateEntry, aggregate_rankings};
pub use label::{LabelMap, ResponseLabel};
pub use ranking::parse_ranking;
