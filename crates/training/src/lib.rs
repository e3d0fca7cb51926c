//! Varnika-training - subword vocabulary training
//!
//! This crate learns a subword vocabulary and an ordered merge log from a
//! Gujarati text corpus, under either merge policy.
//!
//! # Features
//!
//! - Lower-cased word counting restricted to words with script characters
//! - Frequency-weighted pair and unit statistics, recomputed every iteration
//! - Frequency and mutual-information merge scoring with deterministic tie-breaks
//! - Cancellable training loop reporting why it stopped
//!
//! # Example
//!
//! ```rust
//! use varnika_training::{MergePolicy, StopReason, Trainer, TrainingConfig};
//!
//! let config = TrainingConfig::new()
//!     .with_policy(MergePolicy::Frequency)
//!     .with_vocab_size(4);
//!
//! let outcome = Trainer::new(config).train_lines(["ક ક ક", "ક ખ", "ખ ખ ખ ખ"])?;
//! assert_eq!(outcome.stop_reason, StopReason::TargetReached);
//! assert_eq!(outcome.model.vocab().len(), 4);
//! # Ok::<(), varnika_training::TokenizerError>(())
//! ```

pub use varnika_core::{MergePolicy, Model, Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    read_corpus, MergeObserver, PairStats, StopReason, Trainer, TrainingConfig, TrainingOutcome,
    WordCounter,
};
