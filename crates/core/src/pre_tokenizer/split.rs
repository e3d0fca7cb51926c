//! Word and grapheme splitting.
//!
//! Words are maximal runs of word characters (script text or alphanumerics);
//! everything else separates words and is dropped. A word is then cut into
//! graphemes: every character opens a new grapheme unless it is a dependent
//! mark, in which case it joins the grapheme before it.

use super::script::{is_dependent_mark, is_word_char};

/// Split a line of text into words.
///
/// Returned slices borrow from `text`; separators are not retained.
pub fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        if is_word_char(c) {
            start.get_or_insert(idx);
        } else if let Some(begin) = start.take() {
            words.push(&text[begin..idx]);
        }
    }

    // Flush a word still open at end of input
    if let Some(begin) = start {
        words.push(&text[begin..]);
    }

    words
}

/// Split a word into graphemes (base character plus trailing dependent marks).
pub fn split_graphemes(word: &str) -> Vec<&str> {
    let mut graphemes = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in word.char_indices() {
        match start {
            Some(_) if is_dependent_mark(c) => {}
            Some(begin) => {
                graphemes.push(&word[begin..idx]);
                start = Some(idx);
            }
            // A leading mark has nothing to attach to and opens its own grapheme.
            None => start = Some(idx),
        }
    }

    if let Some(begin) = start {
        graphemes.push(&word[begin..]);
    }

    graphemes
}
