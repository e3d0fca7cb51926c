//! Trained model artifact.

use super::merges::{MergeRecord, MergeRules};
use super::policy::MergePolicy;
use super::unit::Unit;
use super::vocab::Vocabulary;
use compact_str::CompactString;
use std::collections::BTreeMap;

/// Final segmentation of every training word, keyed by the word itself.
pub type WordSegmentations = BTreeMap<CompactString, Vec<Unit>>;

/// A trained subword model: vocabulary, ordered merge log and per-word segmentations.
///
/// Created once at the end of training (or by loading a persisted model) and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    policy: MergePolicy,
    vocab: Vocabulary,
    merges: Vec<MergeRecord>,
    words: WordSegmentations,
}

impl Model {
    /// Assemble a model from its parts.
    pub fn new(
        policy: MergePolicy,
        vocab: Vocabulary,
        merges: Vec<MergeRecord>,
        words: WordSegmentations,
    ) -> Self {
        Self {
            policy,
            vocab,
            merges,
            words,
        }
    }

    /// The policy the model was trained with.
    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Merge log in the order merges were chosen.
    pub fn merges(&self) -> &[MergeRecord] {
        &self.merges
    }

    pub fn words(&self) -> &WordSegmentations {
        &self.words
    }

    /// Index the merge log for replay.
    pub fn merge_rules(&self) -> MergeRules {
        MergeRules::from_records(&self.merges)
    }
}
