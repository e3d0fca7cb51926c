//! Priority queue for merge candidates.
//!
//! Candidates are ranked by score, then by raw pair count, then by ascending
//! pair order, so that equal scores always resolve the same way regardless of
//! hash-map iteration order.

use super::unit::Pair;
use dary_heap::OctonaryHeap;
use std::cmp::Ordering;

/// A scored pair that could be merged.
#[derive(Debug, Clone)]
pub struct MergeCandidate {
    /// The pair of units to merge
    pub pair: Pair,
    /// Aggregated frequency of this pair
    pub count: u64,
    /// Policy-specific score (higher is better)
    pub score: f64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64, score: f64) -> Self {
        Self { pair, count, score }
    }
}

// Max-heap by score, then count; tie-break to the smallest pair.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.count.cmp(&other.count))
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MergeCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MergeCandidate {}

/// Priority queue of merge candidates.
///
/// Uses an 8-ary heap for better cache locality than a binary heap.
pub struct PairPriorityQueue {
    heap: OctonaryHeap<MergeCandidate>,
}

impl PairPriorityQueue {
    /// Pop the highest priority merge candidate.
    pub fn pop(&mut self) -> Option<MergeCandidate> {
        self.heap.pop()
    }
}

impl FromIterator<MergeCandidate> for PairPriorityQueue {
    fn from_iter<I: IntoIterator<Item = MergeCandidate>>(iter: I) -> Self {
        let candidates: Vec<MergeCandidate> = iter.into_iter().collect();
        Self {
            heap: OctonaryHeap::from(candidates),
        }
    }
}
