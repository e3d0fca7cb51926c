//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus, one sentence per line
    #[arg(short, long, default_value = "train_sampled.txt")]
    pub input: PathBuf,

    /// Output path for the trained model
    #[arg(short, long, default_value = "model.json")]
    pub output: PathBuf,

    /// Target vocabulary size
    #[arg(long, default_value_t = 32_000)]
    pub vocab_size: usize,

    /// Maximum number of merge iterations
    #[arg(long, default_value_t = 32_000)]
    pub max_iterations: usize,

    /// Merge policy: frequency (bpe) or mutual_information (wordpiece)
    #[arg(short, long, default_value_t = MergePolicy::Frequency)]
    pub policy: MergePolicy,

    /// Log progress every N iterations
    #[arg(long, default_value_t = 1000)]
    pub log_every: usize,
}

use anyhow::{Context, Result as AnyhowResult};
use std::path::PathBuf;
use std::time::Instant;
use varnika_core::MergePolicy;
use varnika_tokenizer::Tokenizer;
use varnika_training::{Trainer, TrainingConfig};

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let config = TrainingConfig::new()
        .with_vocab_size(cmd.vocab_size)
        .with_max_iterations(cmd.max_iterations)
        .with_policy(cmd.policy)
        .with_log_every(cmd.log_every);
    config.validate()?;

    println!("Training {} model...", cmd.policy);
    println!("  Input: {}", cmd.input.display());
    println!("  Output: {}", cmd.output.display());
    println!("  Vocab size: {}", cmd.vocab_size);
    println!("  Max iterations: {}", cmd.max_iterations);
    println!();

    let start = Instant::now();
    let outcome = Trainer::new(config)
        .train_file(&cmd.input)
        .with_context(|| format!("failed to train on {}", cmd.input.display()))?;
    println!(
        "Training stopped ({}) after {} merges in {:.2}s",
        outcome.stop_reason,
        outcome.iterations,
        start.elapsed().as_secs_f64()
    );

    let tokenizer = Tokenizer::new(outcome.model);
    println!("Final vocab size: {}", tokenizer.vocab_size());
    println!("Training words: {}", tokenizer.model().words().len());

    tokenizer
        .save(&cmd.output)
        .with_context(|| format!("failed to save model to {}", cmd.output.display()))?;
    println!("Model saved to {}", cmd.output.display());

    Ok(())
}
