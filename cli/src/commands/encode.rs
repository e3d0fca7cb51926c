//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the trained model
    #[arg(short, long)]
    pub model: PathBuf,

    /// Text to encode, or "-" to encode stdin line by line
    #[arg(short, long)]
    pub input: String,

    /// Encoding mode: greedy or merge_replay
    #[arg(long, default_value_t = EncodingMode::Greedy)]
    pub mode: EncodingMode,

    /// Keep the input's case instead of lower-casing it
    #[arg(long, default_value_t = false)]
    pub keep_case: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use anyhow::{Context, Result as AnyhowResult};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use varnika_tokenizer::{EncodingMode, Tokenizer};

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::builder()
        .encoding_mode(cmd.mode)
        .lowercase(!cmd.keep_case)
        .load(&cmd.model)
        .with_context(|| format!("failed to load model from {}", cmd.model.display()))?;

    // Read input text (from stdin if "-")
    let lines: Vec<String> = if cmd.input == "-" {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<_>>()
            .context("failed to read stdin")?
    } else {
        vec![cmd.input]
    };

    let encodings = tokenizer.encode_batch(&lines);
    let token_count: usize = encodings.iter().map(|e| e.len()).sum();
    let output: String = encodings
        .iter()
        .map(|encoding| encoding.tokens.join(" ") + "\n")
        .collect();

    match &cmd.output {
        Some(path) => {
            std::fs::File::create(path)
                .and_then(|mut file| file.write_all(output.as_bytes()))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Encoded {} tokens to {}", token_count, path.display());
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
