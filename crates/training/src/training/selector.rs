//! Merge selection policies.
//!
//! A [`MergeScorer`] assigns each eligible pair a score; selection then takes
//! the best candidate from a [`PairPriorityQueue`], which breaks equal scores by
//! raw count and then by ascending pair order.

use super::stats::PairStats;
use varnika_core::{MergeCandidate, MergePolicy, Pair, PairPriorityQueue};

/// Scores candidate pairs for merging.
pub trait MergeScorer {
    /// Score a pair with aggregated frequency `count`, or `None` if it may not be merged.
    fn score(&self, pair: &Pair, count: u64, stats: &PairStats) -> Option<f64>;

    /// Choose the best pair to merge, or `None` if no pair is eligible.
    fn select(&self, stats: &PairStats) -> Option<MergeCandidate> {
        let mut queue: PairPriorityQueue = stats
            .pairs()
            .filter_map(|(pair, count)| {
                self.score(pair, count, stats)
                    .map(|score| MergeCandidate::new(pair.clone(), count, score))
            })
            .collect();
        queue.pop()
    }
}

/// Frequency-maximizing scorer: the score is the raw pair count.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyScorer;

impl MergeScorer for FrequencyScorer {
    fn score(&self, _pair: &Pair, count: u64, _stats: &PairStats) -> Option<f64> {
        (count > 0).then_some(count as f64)
    }
}

/// Co-occurrence scorer: `P(xy) / (P(x) P(y))`.
///
/// Pairs seen at most once are never candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutualInformationScorer;

impl MergeScorer for MutualInformationScorer {
    fn score(&self, pair: &Pair, count: u64, stats: &PairStats) -> Option<f64> {
        if count <= 1 || stats.total_pairs() == 0 || stats.total_units() == 0 {
            return None;
        }

        let total_units = stats.total_units() as f64;
        let p_xy = count as f64 / stats.total_pairs() as f64;
        let p_x = stats.unit_count(&pair.0) as f64 / total_units;
        let p_y = stats.unit_count(&pair.1) as f64 / total_units;

        if p_x > 0.0 && p_y > 0.0 {
            Some(p_xy / (p_x * p_y))
        } else {
            None
        }
    }
}

/// The scorer for a merge policy.
pub fn scorer_for(policy: MergePolicy) -> &'static dyn MergeScorer {
    match policy {
        MergePolicy::Frequency => &FrequencyScorer,
        MergePolicy::MutualInformation => &MutualInformationScorer,
    }
}
