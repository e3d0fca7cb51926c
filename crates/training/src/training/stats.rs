//! Pair and unit statistics.
//!
//! Statistics are recomputed from scratch each iteration: every adjacent
//! position of every word contributes that word's frequency to its pair, and
//! every unit position contributes it to the unit.

use super::counter::Word;
use ahash::AHashMap;
use varnika_core::{Pair, Unit};

/// Frequency-weighted pair and unit counts over the current segmentations.
#[derive(Debug, Clone, Default)]
pub struct PairStats {
    /// Pair -> aggregated frequency
    pairs: AHashMap<Pair, u64>,
    /// Unit -> aggregated frequency
    units: AHashMap<Unit, u64>,
    total_pairs: u64,
    total_units: u64,
}

impl PairStats {
    /// Count pairs and units across all words.
    pub fn compute(words: &[Word]) -> Self {
        let mut stats = Self::default();

        for word in words {
            let freq = word.freq();
            let units = word.units();

            for unit in units {
                *stats.units.entry(unit.clone()).or_insert(0) += freq;
            }
            stats.total_units += freq * units.len() as u64;

            for window in units.windows(2) {
                let pair = (window[0].clone(), window[1].clone());
                *stats.pairs.entry(pair).or_insert(0) += freq;
            }
            stats.total_pairs += freq * units.len().saturating_sub(1) as u64;
        }

        stats
    }

    /// Aggregated frequency of a pair (0 if never adjacent).
    pub fn pair_count(&self, pair: &Pair) -> u64 {
        self.pairs.get(pair).copied().unwrap_or(0)
    }

    /// Aggregated frequency of a unit (0 if absent).
    pub fn unit_count(&self, unit: &Unit) -> u64 {
        self.units.get(unit).copied().unwrap_or(0)
    }

    /// Iterate over all pairs and their counts, in no particular order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Pair, u64)> {
        self.pairs.iter().map(|(pair, &count)| (pair, count))
    }

    /// Total pair-occurrence mass.
    pub fn total_pairs(&self) -> u64 {
        self.total_pairs
    }

    /// Total unit-occurrence mass.
    pub fn total_units(&self) -> u64 {
        self.total_units
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no adjacent pair remains.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, freq: u64, units: &[&str]) -> Word {
        Word::new(text, freq, units.iter().map(|u| Unit::plain(*u)).collect())
    }

    fn pair(a: &str, b: &str) -> Pair {
        (Unit::plain(a), Unit::plain(b))
    }

    #[test]
    fn test_pairs_weighted_by_frequency() {
        let words = vec![word("ab", 3, &["a", "b"]), word("bc", 2, &["b", "c"])];
        let stats = PairStats::compute(&words);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats.pair_count(&pair("a", "b")), 3);
        assert_eq!(stats.pair_count(&pair("b", "c")), 2);
        assert_eq!(stats.pair_count(&pair("c", "a")), 0);
        assert_eq!(stats.total_pairs(), 5);
    }

    #[test]
    fn test_pairs_summed_across_words() {
        let words = vec![word("abc", 1, &["a", "b", "c"]), word("bcd", 4, &["b", "c", "d"])];
        let stats = PairStats::compute(&words);

        assert_eq!(stats.pair_count(&pair("b", "c")), 5);
        assert_eq!(stats.pair_count(&pair("a", "b")), 1);
        assert_eq!(stats.pair_count(&pair("c", "d")), 4);
    }

    #[test]
    fn test_repeated_unit_counts_every_position() {
        let words = vec![word("aaa", 2, &["a", "a", "a"])];
        let stats = PairStats::compute(&words);

        assert_eq!(stats.pair_count(&pair("a", "a")), 4);
        assert_eq!(stats.unit_count(&Unit::plain("a")), 6);
    }

    #[test]
    fn test_unit_totals() {
        let words = vec![word("ab", 3, &["a", "b"]), word("b", 2, &["b"])];
        let stats = PairStats::compute(&words);

        assert_eq!(stats.unit_count(&Unit::plain("a")), 3);
        assert_eq!(stats.unit_count(&Unit::plain("b")), 5);
        assert_eq!(stats.total_units(), 8);
        assert_eq!(stats.total_pairs(), 3);
    }

    #[test]
    fn test_single_unit_words_have_no_pairs() {
        let words = vec![word("a", 10, &["a"])];
        let stats = PairStats::compute(&words);

        assert!(stats.is_empty());
        assert_eq!(stats.total_pairs(), 0);
        assert_eq!(stats.total_units(), 10);
    }
}
