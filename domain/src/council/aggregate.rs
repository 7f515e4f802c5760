//! Aggregate ranking across peer rankings
//!
//! Each ranker's parsed label sequence assigns 1-based positions; a model's
//! aggregate score is the mean of every position it received. Rankers that
//! omitted a model contribute nothing for it, and models no ranker mentioned
//! are excluded entirely.

use crate::core::model::Model;
use crate::council::label::{LabelMap, ResponseLabel};
use serde::{Deserialize, Serialize};

/// One model's consensus standing across all peer rankings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEntry {
    /// The ranked model
    pub model: Model,
    /// Mean 1-based position, rounded to two decimals (lower is better)
    pub average_rank: f64,
    /// How many rankers mentioned this model
    pub rankings_count: usize,
}

/// Combine parsed rankings into one consensus ordering, best first.
///
/// Pure function of its inputs: re-running on the same rankings yields the
/// same output. Ties on `average_rank` keep label-assignment order (the
/// sort is stable and positions are accumulated per label in order).
pub fn aggregate_rankings<'a, I>(rankings: I, labels: &LabelMap) -> Vec<AggregateEntry>
where
    I: IntoIterator<Item = &'a [ResponseLabel]>,
{
    // Positions indexed by label-assignment slot to keep insertion order fixed
    let mut positions: Vec<(ResponseLabel, &Model, Vec<usize>)> = labels
        .iter()
        .map(|(label, model)| (label, model, Vec::new()))
        .collect();

    for ranking in rankings {
        for (position, label) in ranking.iter().enumerate() {
            if let Some(slot) = positions.iter_mut().find(|(l, _, _)| l == label) {
                slot.2.push(position + 1);
            }
        }
    }

    let mut aggregate: Vec<AggregateEntry> = positions
        .into_iter()
        .filter(|(_, _, positions)| !positions.is_empty())
        .map(|(_, model, positions)| {
            let sum: usize = positions.iter().sum();
            let average = sum as f64 / positions.len() as f64;
            AggregateEntry {
                model: model.clone(),
                average_rank: round2(average),
                rankings_count: positions.len(),
            }
        })
        .collect();

    aggregate.sort_by(|a, b| {
        a.average_rank
            .partial_cmp(&b.average_rank)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    aggregate
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
