//! Merge history and merge-rule lookup.
//!
//! Training appends one [`MergeRecord`] per merge. [`MergeRules`] indexes that
//! history by pair so a word can be re-segmented by replaying it.

use super::unit::{Pair, Unit};
use ahash::AHashMap;

/// One entry of the ordered merge log: `(left, right) -> merged`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord {
    pub left: Unit,
    pub right: Unit,
    pub merged: Unit,
}

impl MergeRecord {
    /// Create a new merge record.
    pub fn new(left: Unit, right: Unit, merged: Unit) -> Self {
        Self {
            left,
            right,
            merged,
        }
    }

    /// The merged pair.
    pub fn pair(&self) -> Pair {
        (self.left.clone(), self.right.clone())
    }
}

/// Merge rule mapping: pair -> every (rank, merged unit) recorded for it, ascending.
///
/// Lower rank means the merge was learned earlier. A pair normally appears once,
/// but can be learned again if one of its units is re-created by a later merge.
pub type MergeMap = AHashMap<Pair, Vec<(u32, Unit)>>;

/// Collection of merge rules with rank lookup.
#[derive(Debug, Clone, Default)]
pub struct MergeRules {
    merges: MergeMap,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build rules from an ordered merge log.
    pub fn from_records(records: &[MergeRecord]) -> Self {
        let mut merges = MergeMap::with_capacity(records.len());
        for (rank, record) in records.iter().enumerate() {
            merges
                .entry(record.pair())
                .or_default()
                .push((rank as u32, record.merged.clone()));
        }
        Self { merges }
    }

    /// Get the earliest rank and merged unit for a pair.
    #[inline]
    pub fn get(&self, left: &Unit, right: &Unit) -> Option<&(u32, Unit)> {
        self.next_rank(left, right, 0)
    }

    /// Get the earliest rule for a pair whose rank is at least `min_rank`.
    pub fn next_rank(&self, left: &Unit, right: &Unit, min_rank: u32) -> Option<&(u32, Unit)> {
        // Lookup needs an owned key; units are cheap to clone for short text.
        self.merges
            .get(&(left.clone(), right.clone()))?
            .iter()
            .find(|(rank, _)| *rank >= min_rank)
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(left: &str, right: &str) -> MergeRecord {
        MergeRecord::new(
            Unit::plain(left),
            Unit::plain(right),
            Unit::plain(format!("{left}{right}")),
        )
    }

    #[test]
    fn test_from_records_assigns_ranks() {
        let rules = MergeRules::from_records(&[record("a", "b"), record("ab", "c")]);

        assert_eq!(rules.len(), 2);
        assert_eq!(
            rules.get(&Unit::plain("a"), &Unit::plain("b")),
            Some(&(0, Unit::plain("ab")))
        );
        assert_eq!(
            rules.get(&Unit::plain("ab"), &Unit::plain("c")),
            Some(&(1, Unit::plain("abc")))
        );
        assert_eq!(rules.get(&Unit::plain("b"), &Unit::plain("c")), None);
    }

    #[test]
    fn test_duplicate_pair_ranks() {
        let rules = MergeRules::from_records(&[record("a", "b"), record("x", "y"), record("a", "b")]);
        let (a, b) = (Unit::plain("a"), Unit::plain("b"));

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get(&a, &b).map(|r| r.0), Some(0));
        assert_eq!(rules.next_rank(&a, &b, 1).map(|r| r.0), Some(2));
        assert_eq!(rules.next_rank(&a, &b, 3), None);
    }
}
