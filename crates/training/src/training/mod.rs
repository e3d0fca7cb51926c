//! Training infrastructure for subword vocabularies.
//!
//! The pipeline runs corpus lines through the word counter, then repeats
//! statistics, selection and merge application until a stop condition holds.

pub mod apply;
pub mod corpus;
pub mod counter;
pub mod selector;
pub mod stats;
pub mod trainer;

pub use apply::{apply_merge, MergeEffect};
pub use corpus::read_corpus;
pub use counter::{Word, WordCounter};
pub use selector::{scorer_for, FrequencyScorer, MergeScorer, MutualInformationScorer};
pub use stats::PairStats;
pub use trainer::{MergeObserver, StopReason, Trainer, TrainingConfig, TrainingOutcome};
