//! Varnika-core - data model, segmentation and encoders
//!
//! This crate provides the building blocks shared by training and encoding:
//! Gujarati-aware word and grapheme splitting, the unit/vocabulary/merge data
//! model, the trained [`Model`] artifact and the two encoders that apply it.
//!
//! # Example
//!
//! ```rust
//! use varnika_core::pre_tokenizer::{split_graphemes, split_words};
//!
//! let words = split_words("જિલ્લા ફોરમમાં, જેની");
//! assert_eq!(words, vec!["જિલ્લા", "ફોરમમાં", "જેની"]);
//! assert_eq!(split_graphemes(words[0]), vec!["જિ", "લ્", "લા"]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Data model
pub mod core;
pub use crate::core::{
    strip_markers, MergeCandidate, MergePolicy, MergeRecord, MergeRules, Model, Pair,
    PairPriorityQueue, Unit, Vocabulary, WordSegmentations, CONTINUATION_MARKER, END_OF_WORD,
};

// Script-aware splitting
pub mod pre_tokenizer;

// Encoders
pub mod encoding;
pub use encoding::{GreedyEncoder, MergeReplayEncoder};
