//! Pre-tokenization for Gujarati text.
//!
//! This module turns raw lines into words and words into graphemes, the
//! indivisible starting units of vocabulary training.

pub mod script;
pub mod split;

pub use script::{contains_script_char, is_dependent_mark, is_script_char, is_word_char};
pub use split::{split_graphemes, split_words};
