//! Greedy longest-match encoding.
//!
//! Each word is scanned left to right. At every position the longest substring
//! that is a vocabulary member is taken, shrinking one character at a time.
//! When nothing matches, a single character is emitted instead.

use crate::core::{strip_markers, MergePolicy, Model, Vocabulary, CONTINUATION_MARKER, END_OF_WORD};
use crate::pre_tokenizer::split_words;
use ahash::AHashSet;
use compact_str::CompactString;

/// Longest-match-first encoder over a trained vocabulary.
pub struct GreedyEncoder {
    /// Rendered vocabulary entries
    pieces: AHashSet<CompactString>,
    /// Marker convention of the trained vocabulary
    policy: MergePolicy,
    /// Longest entry in characters, markers excluded
    max_piece_chars: usize,
}

impl GreedyEncoder {
    /// Create an encoder over a vocabulary trained with `policy`.
    pub fn new(vocab: &Vocabulary, policy: MergePolicy) -> Self {
        let pieces: AHashSet<CompactString> = vocab.iter().map(|unit| unit.render()).collect();
        let max_piece_chars = pieces
            .iter()
            .map(|piece| strip_markers(piece).chars().count())
            .max()
            .unwrap_or(0);

        Self {
            pieces,
            policy,
            max_piece_chars,
        }
    }

    /// Create an encoder from a trained model.
    pub fn from_model(model: &Model) -> Self {
        Self::new(model.vocab(), model.policy())
    }

    /// Encode text into vocabulary symbols.
    ///
    /// Text is split into words first; no case folding is applied here.
    pub fn encode(&self, text: &str) -> Vec<String> {
        let mut symbols = Vec::new();
        for word in split_words(text) {
            self.encode_word_into(word, &mut symbols);
        }
        symbols
    }

    /// Encode a single word.
    pub fn encode_word(&self, word: &str) -> Vec<String> {
        let mut symbols = Vec::new();
        self.encode_word_into(word, &mut symbols);
        symbols
    }

    fn encode_word_into(&self, word: &str, out: &mut Vec<String>) {
        // Byte offsets of every character boundary, including the end of the word.
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(word.len()))
            .collect();
        let num_chars = bounds.len() - 1;

        let mut begin = 0;
        while begin < num_chars {
            let longest = num_chars.min(begin + self.max_piece_chars);

            let matched = (begin + 1..=longest).rev().find_map(|end| {
                let candidate = &word[bounds[begin]..bounds[end]];
                self.lookup(candidate, begin == 0, end == num_chars)
                    .map(|piece| (piece, end))
            });

            match matched {
                Some((piece, end)) => {
                    out.push(piece);
                    begin = end;
                }
                None => {
                    let ch = &word[bounds[begin]..bounds[begin + 1]];
                    if begin == 0 {
                        out.push(ch.to_string());
                    } else {
                        out.push(format!("{}{}", CONTINUATION_MARKER, ch));
                    }
                    begin += 1;
                }
            }
        }
    }

    /// Find the vocabulary form of a candidate, trying the marked form first.
    fn lookup(&self, candidate: &str, initial: bool, word_final: bool) -> Option<String> {
        if !initial && self.policy.uses_continuation_marker() {
            let marked = format!("{}{}", CONTINUATION_MARKER, candidate);
            if self.pieces.contains(marked.as_str()) {
                return Some(marked);
            }
        }

        if word_final && self.policy.uses_end_of_word() {
            let terminated = format!("{}{}", candidate, END_OF_WORD);
            if self.pieces.contains(terminated.as_str()) {
                return Some(terminated);
            }
        }

        self.pieces
            .contains(candidate)
            .then(|| candidate.to_string())
    }

    /// Number of distinct vocabulary entries.
    pub fn vocab_size(&self) -> usize {
        self.pieces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Unit;

    fn wordpiece_vocab(entries: &[&str]) -> Vocabulary {
        entries.iter().map(|e| Unit::parse_marked(e)).collect()
    }

    fn bpe_vocab(entries: &[&str]) -> Vocabulary {
        entries.iter().map(|e| Unit::plain(*e)).collect()
    }

    #[test]
    fn test_longest_match_with_continuation() {
        let vocab = wordpiece_vocab(&["ક", "કૂ", "##ત", "##તરો", "##રો"]);
        let encoder = GreedyEncoder::new(&vocab, MergePolicy::MutualInformation);

        assert_eq!(encoder.encode_word("કૂતરો"), vec!["કૂ", "##તરો"]);
    }

    #[test]
    fn test_continuation_form_preferred_over_bare() {
        let vocab = wordpiece_vocab(&["ક", "ર", "##ર"]);
        let encoder = GreedyEncoder::new(&vocab, MergePolicy::MutualInformation);

        assert_eq!(encoder.encode_word("કર"), vec!["ક", "##ર"]);
    }

    #[test]
    fn test_bare_form_accepted_at_non_initial_position() {
        let vocab = wordpiece_vocab(&["ક", "ર"]);
        let encoder = GreedyEncoder::new(&vocab, MergePolicy::MutualInformation);

        assert_eq!(encoder.encode_word("કર"), vec!["ક", "ર"]);
    }

    #[test]
    fn test_unknown_word_falls_back_to_characters() {
        let vocab = wordpiece_vocab(&["ક"]);
        let encoder = GreedyEncoder::new(&vocab, MergePolicy::MutualInformation);

        assert_eq!(encoder.encode_word("xyz"), vec!["x", "##y", "##z"]);
    }

    #[test]
    fn test_empty_vocabulary_falls_back() {
        let encoder = GreedyEncoder::new(&Vocabulary::new(), MergePolicy::Frequency);
        assert_eq!(encoder.encode_word("ગા"), vec!["ગ", "##ા"]);
    }

    #[test]
    fn test_end_of_word_form_at_word_end() {
        let vocab = bpe_vocab(&["ક", "ર", "રો</w>", "કર"]);
        let encoder = GreedyEncoder::new(&vocab, MergePolicy::Frequency);

        // "રો" only exists with the sentinel, so it matches only at the word end.
        assert_eq!(encoder.encode_word("કરો"), vec!["કર", "##ો"]);
        assert_eq!(encoder.encode_word("રો"), vec!["રો</w>"]);
    }

    #[test]
    fn test_encode_splits_words() {
        let vocab = wordpiece_vocab(&["છે", "રમ", "##ે"]);
        let encoder = GreedyEncoder::new(&vocab, MergePolicy::MutualInformation);

        assert_eq!(encoder.encode("રમે છે."), vec!["રમ", "##ે", "છે"]);
    }

    #[test]
    fn test_stripped_output_reconstructs_word() {
        let vocab = bpe_vocab(&["ક", "ર", "ો</w>", "કર", "બગ"]);
        let encoder = GreedyEncoder::new(&vocab, MergePolicy::Frequency);

        for word in ["કરો", "બગીચામાં", "abc9"] {
            let pieces = encoder.encode_word(word);
            assert!(!pieces.is_empty());
            let rebuilt: String = pieces.iter().map(|p| strip_markers(p)).collect();
            assert_eq!(rebuilt, word);
        }
    }
}
