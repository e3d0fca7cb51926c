//! Merge application.

use super::counter::Word;
use varnika_core::Unit;

/// What one merge changed across the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeEffect {
    /// Distinct words whose segmentation changed
    pub words_changed: usize,
    /// Replaced occurrences, weighted by word frequency
    pub occurrences: u64,
}

/// Replace every non-overlapping `(left, right)` occurrence with `merged`.
///
/// Each word is swept once from left to right; after a replacement the scan
/// resumes past the merged unit, so `a a a` under `(a, a)` becomes `aa a`.
/// A word's text and frequency are never touched.
pub fn apply_merge(words: &mut [Word], left: &Unit, right: &Unit, merged: &Unit) -> MergeEffect {
    let mut effect = MergeEffect::default();

    for word in words.iter_mut() {
        let units = &mut word.units;
        if units.len() < 2 {
            continue;
        }

        let mut replaced = 0u64;
        let mut i = 0;
        while i + 1 < units.len() {
            if units[i] == *left && units[i + 1] == *right {
                units[i] = merged.clone();
                units.remove(i + 1);
                replaced += 1;
            }
            i += 1;
        }

        if replaced > 0 {
            effect.words_changed += 1;
            effect.occurrences += replaced * word.freq();
        }
    }

    effect
}
