//! Word frequency counting for vocabulary training.
//!
//! The corpus is reduced to distinct words and their occurrence counts. Only
//! words containing at least one script character take part in training.

use ahash::AHashMap;
use compact_str::CompactString;
use varnika_core::pre_tokenizer::{contains_script_char, split_graphemes, split_words};
use varnika_core::{MergePolicy, Unit};

/// A distinct training word and its current segmentation.
///
/// Text and frequency are fixed at construction; only the unit sequence changes
/// as merges are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: CompactString,
    freq: u64,
    pub(crate) units: Vec<Unit>,
}

impl Word {
    /// Create a word from its text, frequency and initial units.
    pub fn new(text: impl Into<CompactString>, freq: u64, units: Vec<Unit>) -> Self {
        Self {
            text: text.into(),
            freq,
            units,
        }
    }

    /// The word as it appeared in the (lower-cased) corpus.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of occurrences across the corpus.
    #[inline]
    pub fn freq(&self) -> u64 {
        self.freq
    }

    /// Current segmentation.
    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }
}

/// Counter for corpus word frequencies.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    /// Word -> frequency count
    counts: AHashMap<CompactString, u64>,
}

impl WordCounter {
    /// Create a new word counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one corpus line.
    ///
    /// The line is lower-cased, split into words, and every qualifying word
    /// occurrence is counted.
    pub fn add_line(&mut self, line: &str) {
        let lowered = line.to_lowercase();
        for word in split_words(&lowered) {
            self.add_word(word, 1);
        }
    }

    /// Add every line of a corpus.
    pub fn add_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.add_line(line.as_ref());
        }
    }

    /// Add `count` occurrences of a single word.
    ///
    /// Words without any script character are ignored.
    pub fn add_word(&mut self, word: &str, count: u64) {
        if count == 0 || !contains_script_char(word) {
            return;
        }
        *self.counts.entry(CompactString::new(word)).or_insert(0) += count;
    }

    /// Frequency of a word, if it was counted.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether no word has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the total count of all word occurrences.
    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Turn the counts into training words with their initial segmentation.
    ///
    /// Words are returned sorted by text so that training is reproducible.
    pub fn into_words(self, policy: MergePolicy) -> Vec<Word> {
        let mut words: Vec<Word> = self
            .counts
            .into_iter()
            .map(|(text, freq)| {
                let units = policy.initial_units(&split_graphemes(&text));
                Word::new(text, freq, units)
            })
            .collect();
        words.sort_by(|a, b| a.text.cmp(&b.text));
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_line_counts_occurrences() {
        let mut counter = WordCounter::new();
        counter.add_line("છે છે, છે");
        counter.add_line("રમે છે");

        assert_eq!(counter.get("છે"), Some(4));
        assert_eq!(counter.get("રમે"), Some(1));
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.total_occurrences(), 5);
    }

    #[test]
    fn test_non_script_words_discarded() {
        let mut counter = WordCounter::new();
        counter.add_line("hello 42 ગામ abcક");

        assert_eq!(counter.get("hello"), None);
        assert_eq!(counter.get("42"), None);
        assert_eq!(counter.get("ગામ"), Some(1));
        assert_eq!(counter.get("abcક"), Some(1));
    }

    #[test]
    fn test_lowercases_before_counting() {
        let mut counter = WordCounter::new();
        counter.add_lines(["Xક", "xક"]);

        assert_eq!(counter.get("xક"), Some(2));
        assert_eq!(counter.get("Xક"), None);
    }

    #[test]
    fn test_empty_corpus() {
        let mut counter = WordCounter::new();
        counter.add_lines(Vec::<String>::new());
        counter.add_line("  ...  ");

        assert!(counter.is_empty());
        assert!(counter.into_words(MergePolicy::Frequency).is_empty());
    }

    #[test]
    fn test_into_words_frequency_policy() {
        let mut counter = WordCounter::new();
        counter.add_word("કૂતરો", 3);

        let words = counter.into_words(MergePolicy::Frequency);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].freq(), 3);
        assert_eq!(
            words[0].units(),
            &[
                Unit::plain("કૂ"),
                Unit::plain("ત"),
                Unit::plain("રો"),
                Unit::end_of_word()
            ]
        );
    }

    #[test]
    fn test_into_words_mutual_information_policy() {
        let mut counter = WordCounter::new();
        counter.add_word("કૂતરો", 1);

        let words = counter.into_words(MergePolicy::MutualInformation);
        assert_eq!(
            words[0].units(),
            &[
                Unit::plain("કૂ"),
                Unit::continuation("ત"),
                Unit::continuation("રો")
            ]
        );
    }

    #[test]
    fn test_into_words_sorted() {
        let mut counter = WordCounter::new();
        counter.add_lines(["ખ ક ગ"]);

        let words = counter.into_words(MergePolicy::Frequency);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ક", "ખ", "ગ"]);
    }
}
