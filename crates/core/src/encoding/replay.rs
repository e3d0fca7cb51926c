//! Merge-replay encoding.
//!
//! Re-segments a word the way training did: start from its graphemes, then apply
//! the learned merges strictly in the order they were recorded, each as one
//! left-to-right sweep. Merges whose pair is absent from the word are skipped
//! without being visited.

use crate::core::{MergePolicy, MergeRules, Model, Unit};
use crate::pre_tokenizer::{split_graphemes, split_words};

/// Encoder that replays an ordered merge log.
pub struct MergeReplayEncoder {
    rules: MergeRules,
    policy: MergePolicy,
}

impl MergeReplayEncoder {
    /// Create an encoder from merge rules and the policy that produced them.
    pub fn new(rules: MergeRules, policy: MergePolicy) -> Self {
        Self { rules, policy }
    }

    /// Create an encoder from a trained model.
    pub fn from_model(model: &Model) -> Self {
        Self::new(model.merge_rules(), model.policy())
    }

    /// Encode text into rendered units.
    pub fn encode(&self, text: &str) -> Vec<String> {
        split_words(text)
            .into_iter()
            .flat_map(|word| self.encode_word(word))
            .map(|unit| unit.render().into_string())
            .collect()
    }

    /// Encode a single word into units.
    pub fn encode_word(&self, word: &str) -> Vec<Unit> {
        let graphemes = split_graphemes(word);
        let mut units = self.policy.initial_units(&graphemes);

        let mut next_rank = 0u32;
        while let Some((rank, pos)) = self.earliest_applicable(&units, next_rank) {
            let (left, right) = (units[pos].clone(), units[pos + 1].clone());
            let merged = self.rules.next_rank(&left, &right, rank).map(|(_, m)| m.clone());
            if let Some(merged) = merged {
                units = sweep(units, &left, &right, &merged);
            }
            next_rank = rank + 1;
        }

        units
    }

    /// Lowest rank ≥ `min_rank` among the adjacent pairs of `units`, with its position.
    fn earliest_applicable(&self, units: &[Unit], min_rank: u32) -> Option<(u32, usize)> {
        units
            .windows(2)
            .enumerate()
            .filter_map(|(pos, w)| {
                self.rules
                    .next_rank(&w[0], &w[1], min_rank)
                    .map(|(rank, _)| (*rank, pos))
            })
            .min()
    }
}

/// Replace every non-overlapping `(left, right)` occurrence, scanning left to right once.
fn sweep(units: Vec<Unit>, left: &Unit, right: &Unit, merged: &Unit) -> Vec<Unit> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        if i + 1 < units.len() && units[i] == *left && units[i + 1] == *right {
            out.push(merged.clone());
            i += 2;
        } else {
            out.push(units[i].clone());
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MergeRecord;

    fn bpe_rules(pairs: &[(&str, &str)]) -> MergeRules {
        let records: Vec<MergeRecord> = pairs
            .iter()
            .map(|(l, r)| {
                let (left, right) = (Unit::plain(*l), Unit::plain(*r));
                let merged = MergePolicy::Frequency.merge_units(&left, &right);
                MergeRecord::new(left, right, merged)
            })
            .collect();
        MergeRules::from_records(&records)
    }

    fn rendered(units: &[Unit]) -> Vec<String> {
        units.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_replay_in_order() {
        let rules = bpe_rules(&[("છ", "ે"), ("છે", "</w>")]);
        let encoder = MergeReplayEncoder::new(rules, MergePolicy::Frequency);

        // "છે" is one grapheme, so only the sentinel merge applies.
        assert_eq!(rendered(&encoder.encode_word("છે")), vec!["છે</w>"]);
    }

    #[test]
    fn test_replay_chain() {
        let rules = bpe_rules(&[("ર", "મ"), ("રમ", "ે"), ("રમે", "</w>")]);
        let encoder = MergeReplayEncoder::new(rules, MergePolicy::Frequency);

        // રમે splits as ર, મે; "ર"+"મ" never appears, so nothing merges.
        assert_eq!(rendered(&encoder.encode_word("રમે")), vec!["ર", "મે", "</w>"]);
    }

    #[test]
    fn test_replay_follows_rank_order() {
        // (b, c) was learned first, so it claims the second "b" before (a, b) runs.
        let rules = bpe_rules(&[("b", "c"), ("a", "b"), ("x", "y")]);
        let encoder = MergeReplayEncoder::new(rules, MergePolicy::Frequency);

        assert_eq!(
            rendered(&encoder.encode_word("abbc")),
            vec!["ab", "bc", "</w>"]
        );
    }

    #[test]
    fn test_non_overlapping_sweep() {
        let rules = bpe_rules(&[("a", "a")]);
        let encoder = MergeReplayEncoder::new(rules, MergePolicy::Frequency);

        assert_eq!(
            rendered(&encoder.encode_word("aaa")),
            vec!["aa", "a", "</w>"]
        );
    }

    #[test]
    fn test_replay_mutual_information() {
        let policy = MergePolicy::MutualInformation;
        let (k, r) = (Unit::plain("ક"), Unit::continuation("ર"));
        let merged = policy.merge_units(&k, &r);
        let rules = MergeRules::from_records(&[MergeRecord::new(k, r, merged)]);
        let encoder = MergeReplayEncoder::new(rules, policy);

        assert_eq!(rendered(&encoder.encode_word("કરત")), vec!["કર", "##ત"]);
    }

    #[test]
    fn test_encode_text() {
        let rules = bpe_rules(&[("છે", "</w>")]);
        let encoder = MergeReplayEncoder::new(rules, MergePolicy::Frequency);

        assert_eq!(encoder.encode("છે, છે"), vec!["છે</w>", "છે</w>"]);
    }
}
