//! Vocabulary training loop.
//!
//! One loop serves both merge policies. Each iteration recomputes pair
//! statistics, checks the stop conditions, asks the policy's scorer for the best
//! pair and applies it to every word. The loop owns the word table and the
//! vocabulary for its whole duration.

use super::apply::apply_merge;
use super::corpus::read_corpus;
use super::counter::{Word, WordCounter};
use super::selector::scorer_for;
use super::stats::PairStats;
use compact_str::CompactString;
use log::{debug, info};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use varnika_core::{
    MergePolicy, MergeRecord, Model, Result, TokenizerError, Unit, Vocabulary, WordSegmentations,
};

/// Configuration for vocabulary training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Target vocabulary size
    pub vocab_size: usize,
    /// Hard ceiling on loop iterations
    pub max_iterations: usize,
    /// Merge selection policy
    pub policy: MergePolicy,
    /// Log progress every this many iterations
    pub log_every: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_size: 32_000,
            max_iterations: 32_000,
            policy: MergePolicy::Frequency,
            log_every: 1000,
        }
    }
}

impl TrainingConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocab_size(mut self, vocab_size: usize) -> Self {
        self.vocab_size = vocab_size;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// Check the configuration for values the loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.log_every == 0 {
            return Err(TokenizerError::InvalidConfig(
                "log_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Why the training loop stopped.
///
/// Every variant is a normal end of training and comes with a usable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// No adjacent pair is left in any word
    Exhausted,
    /// The vocabulary reached the target size
    TargetReached,
    /// Pairs remain but the policy accepts none of them
    NoValidPair,
    /// The iteration ceiling was hit
    IterationCap,
    /// Cancellation was requested between iterations
    Cancelled,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::Exhausted => "exhausted",
            StopReason::TargetReached => "target reached",
            StopReason::NoValidPair => "no valid pair",
            StopReason::IterationCap => "iteration cap",
            StopReason::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// The trained model
    pub model: Model,
    /// Why the loop stopped
    pub stop_reason: StopReason,
    /// Number of merges performed
    pub iterations: usize,
}

/// Called after each merge with its zero-based index and record.
pub type MergeObserver = Arc<dyn Fn(usize, &MergeRecord) + Send + Sync>;

/// Subword vocabulary trainer.
///
/// Learns a vocabulary by repeatedly merging the best adjacent unit pair
/// under the configured [`MergePolicy`].
#[derive(Clone, Default)]
pub struct Trainer {
    config: TrainingConfig,
    cancel: Option<Arc<AtomicBool>>,
    observer: Option<MergeObserver>,
}

impl fmt::Debug for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trainer")
            .field("config", &self.config)
            .field("cancel", &self.cancel)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Trainer {
    /// Create a new trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            cancel: None,
            observer: None,
        }
    }

    /// Create a new trainer with default configuration and the given target size.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(TrainingConfig::default().with_vocab_size(vocab_size))
    }

    /// Stop between iterations once `flag` becomes true.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Run `observer` after every merge, on the training thread.
    pub fn with_merge_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(usize, &MergeRecord) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on a corpus file, one record per line.
    pub fn train_file(&self, path: impl AsRef<Path>) -> Result<TrainingOutcome> {
        let lines = read_corpus(path)?;
        self.train_lines(&lines)
    }

    /// Train on corpus lines.
    pub fn train_lines<I>(&self, lines: I) -> Result<TrainingOutcome>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counter = WordCounter::new();
        counter.add_lines(lines);
        self.train_counts(counter)
    }

    /// Train on pre-counted words.
    pub fn train_counts(&self, counter: WordCounter) -> Result<TrainingOutcome> {
        self.config.validate()?;

        let policy = self.config.policy;
        let occurrences = counter.total_occurrences();
        let mut words = counter.into_words(policy);
        let mut vocab = initial_vocab(&words);

        info!(
            "Training {} model: {} distinct words, {} occurrences, {} initial units, target {}",
            policy,
            words.len(),
            occurrences,
            vocab.len(),
            self.config.vocab_size
        );

        let (merges, stop_reason) = self.run(&mut words, &mut vocab);

        info!(
            "Training stopped ({}) after {} merges with {} units",
            stop_reason,
            merges.len(),
            vocab.len()
        );

        let iterations = merges.len();
        let segmentations: WordSegmentations = words
            .into_iter()
            .map(|word| (CompactString::new(word.text()), word.units))
            .collect();

        Ok(TrainingOutcome {
            model: Model::new(policy, vocab, merges, segmentations),
            stop_reason,
            iterations,
        })
    }

    fn run(&self, words: &mut [Word], vocab: &mut Vocabulary) -> (Vec<MergeRecord>, StopReason) {
        let policy = self.config.policy;
        let scorer = scorer_for(policy);
        let mut merges = Vec::new();

        for iteration in 0..self.config.max_iterations {
            if self.is_cancelled() {
                return (merges, StopReason::Cancelled);
            }
            if iteration > 0 && iteration % self.config.log_every == 0 {
                info!("Iteration {}: vocabulary size {}", iteration, vocab.len());
            }

            let stats = PairStats::compute(words);
            if stats.is_empty() {
                return (merges, StopReason::Exhausted);
            }
            if vocab.len() >= self.config.vocab_size {
                return (merges, StopReason::TargetReached);
            }

            let Some(best) = scorer.select(&stats) else {
                return (merges, StopReason::NoValidPair);
            };

            let (left, right) = best.pair;
            let merged = policy.merge_units(&left, &right);
            let effect = apply_merge(words, &left, &right, &merged);
            let (_, added) = vocab.insert(merged.clone());

            debug!(
                "Merge {}: {} + {} -> {} (count {}, score {:.4}, {} words{})",
                iteration,
                left,
                right,
                merged,
                best.count,
                best.score,
                effect.words_changed,
                if added { "" } else { ", already known" }
            );

            let record = MergeRecord::new(left, right, merged);
            if let Some(observer) = &self.observer {
                observer(iteration, &record);
            }
            merges.push(record);
        }

        (merges, StopReason::IterationCap)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Every distinct initial unit, in sorted order.
fn initial_vocab(words: &[Word]) -> Vocabulary {
    let units: BTreeSet<&Unit> = words.iter().flat_map(|word| word.units()).collect();
    units.into_iter().cloned().collect()
}
