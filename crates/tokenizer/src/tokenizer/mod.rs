//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that wraps a trained
//! model together with its encoders.

use crate::io::{ModelLoader, ModelSaver};
use rayon::prelude::*;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use varnika_core::{
    strip_markers, GreedyEncoder, MergePolicy, MergeReplayEncoder, Model, Result, TokenizerError,
};
use varnika_training::{Trainer, TrainingConfig};

/// How text is segmented with a trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingMode {
    /// Longest-match-first lookup in the vocabulary
    #[default]
    Greedy,
    /// Replay the ordered merge log on each word
    MergeReplay,
}

impl EncodingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingMode::Greedy => "greedy",
            EncodingMode::MergeReplay => "merge_replay",
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingMode {
    type Err = TokenizerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(EncodingMode::Greedy),
            "merge_replay" | "merge-replay" | "replay" => Ok(EncodingMode::MergeReplay),
            other => Err(TokenizerError::InvalidConfig(format!(
                "Unknown encoding mode: {} (expected greedy or merge_replay)",
                other
            ))),
        }
    }
}

/// Configuration for encoding with a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Encoding mode
    pub encoding_mode: EncodingMode,
    /// Lower-case input before encoding, as training does
    pub lowercase: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            encoding_mode: EncodingMode::Greedy,
            lowercase: true,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the encoding mode.
    pub fn encoding_mode(mut self, mode: EncodingMode) -> Self {
        self.config.encoding_mode = mode;
        self
    }

    /// Set whether input is lower-cased before encoding.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self
    }

    /// Build a tokenizer around an existing model.
    pub fn build(self, model: Model) -> Tokenizer {
        Tokenizer::with_config(model, self.config)
    }

    /// Load a persisted model and build a tokenizer around it.
    pub fn load(self, path: &Path) -> Result<Tokenizer> {
        Ok(self.build(ModelLoader::load(path)?))
    }

    /// Train a new model on corpus lines.
    pub fn train<I>(self, lines: I, training: TrainingConfig) -> Result<Tokenizer>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let outcome = Trainer::new(training).train_lines(lines)?;
        Ok(self.build(outcome.model))
    }
}

/// Main tokenizer struct.
///
/// Owns an immutable trained model; encoding never mutates it, so a
/// tokenizer can be shared freely across threads.
pub struct Tokenizer {
    model: Model,
    config: TokenizerConfig,
    greedy: GreedyEncoder,
    replay: MergeReplayEncoder,
}

impl Tokenizer {
    /// Create a tokenizer with default configuration.
    pub fn new(model: Model) -> Self {
        Self::with_config(model, TokenizerConfig::default())
    }

    /// Create a tokenizer with the given configuration.
    pub fn with_config(model: Model, config: TokenizerConfig) -> Self {
        let greedy = GreedyEncoder::from_model(&model);
        let replay = MergeReplayEncoder::from_model(&model);
        Self {
            model,
            config,
            greedy,
            replay,
        }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Train a tokenizer on corpus lines with default encoding configuration.
    pub fn train<I>(lines: I, training: TrainingConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::builder().train(lines, training)
    }

    /// Encode text into vocabulary symbols.
    pub fn encode(&self, text: &str) -> Encoding {
        let tokens = if self.config.lowercase {
            self.encode_with_mode(&text.to_lowercase())
        } else {
            self.encode_with_mode(text)
        };

        Encoding {
            tokens,
            text: text.to_string(),
        }
    }

    fn encode_with_mode(&self, text: &str) -> Vec<String> {
        match self.config.encoding_mode {
            EncodingMode::Greedy => self.greedy.encode(text),
            EncodingMode::MergeReplay => self.replay.encode(text),
        }
    }

    /// Encode a batch of texts (parallelized).
    pub fn encode_batch(&self, texts: &[String]) -> Vec<Encoding> {
        texts.par_iter().map(|text| self.encode(text)).collect()
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.model.vocab().len()
    }

    /// The policy the underlying model was trained with.
    pub fn policy(&self) -> MergePolicy {
        self.model.policy()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Save the model to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        ModelSaver::new(&self.model).save(path)
    }

    /// Load a tokenizer from a JSON model file with default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        Self::builder().load(path)
    }
}

impl FromStr for Tokenizer {
    type Err = TokenizerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(ModelLoader::from_json_str(s)?))
    }
}

/// Result of encoding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Vocabulary symbols, markers included
    pub tokens: Vec<String>,
    /// Original text
    pub text: String,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens with continuation markers and end-of-word sentinels removed.
    pub fn stripped_tokens(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| strip_markers(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varnika_core::pre_tokenizer::split_words;

    const CORPUS: &[&str] = &[
        "રમેશ રમે છે અને રમત રમે છે",
        "કમલ ઘરમાં રમત રમે છે",
        "કરણ કમલ અને રમેશ ઘરમાં છે",
    ];

    fn training(policy: MergePolicy) -> TrainingConfig {
        TrainingConfig::new()
            .with_policy(policy)
            .with_vocab_size(50)
    }

    #[test]
    fn test_encoding_mode_from_str() {
        assert_eq!("greedy".parse::<EncodingMode>().unwrap(), EncodingMode::Greedy);
        assert_eq!(
            "merge-replay".parse::<EncodingMode>().unwrap(),
            EncodingMode::MergeReplay
        );
        assert!("bytes".parse::<EncodingMode>().is_err());
    }

    #[test]
    fn test_encode_reconstructs_words() {
        for policy in [MergePolicy::Frequency, MergePolicy::MutualInformation] {
            let tokenizer = Tokenizer::train(CORPUS, training(policy)).unwrap();
            let text = "રમેશ અને કમલ નવું ઘર, abc 12";

            let encoding = tokenizer.encode(text);
            assert!(!encoding.is_empty());
            assert_eq!(encoding.stripped_tokens().concat(), split_words(text).concat());
        }
    }

    #[test]
    fn test_unseen_word_falls_back_to_characters() {
        let tokenizer = Tokenizer::train(CORPUS, training(MergePolicy::MutualInformation)).unwrap();

        let encoding = tokenizer.encode("xyz");
        assert_eq!(encoding.tokens, vec!["x", "##y", "##z"]);
    }

    #[test]
    fn test_lowercase_before_encoding() {
        let tokenizer = Tokenizer::train(CORPUS, training(MergePolicy::Frequency)).unwrap();
        let raw = Tokenizer::builder()
            .lowercase(false)
            .build(tokenizer.model().clone());

        assert_eq!(tokenizer.encode("AB").tokens, vec!["a", "##b"]);
        assert_eq!(raw.encode("AB").tokens, vec!["A", "##B"]);
        assert_eq!(tokenizer.encode("AB").text, "AB");
    }

    #[test]
    fn test_merge_replay_reproduces_training_segmentation() {
        for policy in [MergePolicy::Frequency, MergePolicy::MutualInformation] {
            let tokenizer = Tokenizer::builder()
                .encoding_mode(EncodingMode::MergeReplay)
                .train(CORPUS, training(policy))
                .unwrap();

            for (word, units) in tokenizer.model().words() {
                let expected: Vec<String> = units.iter().map(|u| u.to_string()).collect();
                assert_eq!(tokenizer.encode(word).tokens, expected);
            }
        }
    }

    #[test]
    fn test_encode_batch_matches_encode() {
        let tokenizer = Tokenizer::train(CORPUS, training(MergePolicy::Frequency)).unwrap();
        let texts: Vec<String> = CORPUS.iter().map(|s| s.to_string()).collect();

        let batch = tokenizer.encode_batch(&texts);
        assert_eq!(batch.len(), texts.len());
        for (encoding, text) in batch.iter().zip(&texts) {
            assert_eq!(encoding, &tokenizer.encode(text));
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let tokenizer = Tokenizer::train(CORPUS, training(MergePolicy::MutualInformation)).unwrap();
        tokenizer.save(&path).unwrap();
        let loaded = Tokenizer::load(&path).unwrap();

        assert_eq!(loaded.model(), tokenizer.model());
        assert_eq!(loaded.policy(), MergePolicy::MutualInformation);
        assert_eq!(loaded.vocab_size(), tokenizer.vocab_size());
        assert_eq!(loaded.encode(CORPUS[0]), tokenizer.encode(CORPUS[0]));
    }

    #[test]
    fn test_from_str() {
        let tokenizer: Tokenizer = r###"{"vocab": ["ક", "##ર"], "merges": []}"###.parse().unwrap();
        assert_eq!(tokenizer.encode("કર").tokens, vec!["ક", "##ર"]);

        assert!("{}".parse::<Tokenizer>().is_err());
    }
}
