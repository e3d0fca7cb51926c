//! Core data model.
//!
//! Units, vocabulary, merge history and the trained model, independent of how
//! merges are scored.

pub mod merges;
pub mod model;
pub mod policy;
pub mod priority;
pub mod unit;
pub mod vocab;

pub use merges::{MergeMap, MergeRecord, MergeRules};
pub use model::{Model, WordSegmentations};
pub use policy::MergePolicy;
pub use priority::{MergeCandidate, PairPriorityQueue};
pub use unit::{strip_markers, Pair, Unit, CONTINUATION_MARKER, END_OF_WORD};
pub use vocab::{Vocab, Vocabulary};
