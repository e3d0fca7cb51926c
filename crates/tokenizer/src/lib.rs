//! Varnika-tokenizer - High-level tokenizer API
//!
//! This crate ties a trained model to its encoders and to the on-disk model
//! format, behind a single `Tokenizer` type.
//!
//! # Features
//!
//! - Greedy longest-match encoding with continuation markers
//! - Merge-replay encoding that reproduces training-time segmentation
//! - Parallel batch encoding
//! - Atomic JSON model persistence with load-time validation
//!
//! # Example
//!
//! ```rust
//! use varnika_tokenizer::{MergePolicy, Tokenizer, TrainingConfig};
//!
//! let config = TrainingConfig::new()
//!     .with_policy(MergePolicy::MutualInformation)
//!     .with_vocab_size(100);
//! let tokenizer = Tokenizer::train(["કર કર કમ", "રમ રમ રમ"], config)?;
//!
//! let encoding = tokenizer.encode("કર રમત");
//! assert_eq!(encoding.stripped_tokens().concat(), "કરરમત");
//! # Ok::<(), varnika_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use varnika_core::{MergePolicy, Model, Result, TokenizerError};
pub use varnika_training::{StopReason, TrainingConfig};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, EncodingMode, Tokenizer, TokenizerBuilder, TokenizerConfig};

// IO/Serialization
pub mod io;
pub use io::{ModelLoader, ModelSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
