//! Encoders that apply a trained model to new text.
//!
//! - [`GreedyEncoder`]: longest-match lookup against the final vocabulary
//! - [`MergeReplayEncoder`]: re-applies the ordered merge log to each word

pub mod greedy;
pub mod replay;

pub use greedy::GreedyEncoder;
pub use replay::MergeReplayEncoder;
