//! Load functionality for trained models.
//!
//! Loading is all-or-nothing: a document that is missing a field, has a merge
//! entry of the wrong shape, or refers to units outside its own vocabulary is
//! rejected with [`TokenizerError::Load`].

use super::format::{SerializedMerge, SerializedModel};
use ahash::AHashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use varnika_core::{
    MergePolicy, MergeRecord, Model, Result, TokenizerError, Unit, Vocabulary, WordSegmentations,
    CONTINUATION_MARKER,
};

/// Model loader - reads models written by [`ModelSaver`](super::ModelSaver).
pub struct ModelLoader;

impl ModelLoader {
    /// Load a model from a JSON file.
    pub fn load(path: &Path) -> Result<Model> {
        let file = File::open(path).map_err(|e| TokenizerError::io(path, e))?;

        let reader = BufReader::new(file);
        let serialized: SerializedModel = serde_json::from_reader(reader).map_err(|e| {
            TokenizerError::Load(format!("Failed to deserialize {}: {}", path.display(), e))
        })?;

        let model = Self::deserialize(serialized)?;
        log::info!(
            "Loaded {} model ({} units, {} merges) from {}",
            model.policy(),
            model.vocab().len(),
            model.merges().len(),
            path.display()
        );
        Ok(model)
    }

    /// Load a model from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Model> {
        let serialized: SerializedModel = serde_json::from_str(json)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize model: {}", e)))?;
        Self::deserialize(serialized)
    }

    /// Validate a serialized structure and build the model.
    pub fn deserialize(data: SerializedModel) -> Result<Model> {
        let policy = match data.policy {
            Some(policy) => policy,
            None => {
                let inferred = infer_policy(&data)?;
                log::warn!("Model does not record its policy; inferred {}", inferred);
                inferred
            }
        };

        let mut vocab = Vocabulary::with_capacity(data.vocab.len());
        for entry in &data.vocab {
            let (_, inserted) = vocab.insert(policy.parse_unit(entry));
            if !inserted {
                return Err(TokenizerError::Load(format!(
                    "Duplicate vocabulary entry: {}",
                    entry
                )));
            }
        }

        let mut merges = Vec::with_capacity(data.merges.len());
        for (rank, entry) in data.merges.iter().enumerate() {
            merges.push(Self::merge_record(policy, &vocab, rank, entry)?);
        }

        let mut words = WordSegmentations::new();
        for (word, symbols) in data.word_symbols {
            let units = symbols
                .iter()
                .map(|symbol| known_unit(policy, &vocab, symbol))
                .collect::<Result<Vec<Unit>>>()
                .map_err(|e| TokenizerError::Load(format!("In segmentation of {}: {}", word, e)))?;
            words.insert(word.into(), units);
        }

        Ok(Model::new(policy, vocab, merges, words))
    }

    fn merge_record(
        policy: MergePolicy,
        vocab: &Vocabulary,
        rank: usize,
        entry: &SerializedMerge,
    ) -> Result<MergeRecord> {
        let (left, right) = entry.operands();
        let left = known_unit(policy, vocab, left)?;
        let right = known_unit(policy, vocab, right)?;
        let derived = policy.merge_units(&left, &right);

        match (policy, entry.result()) {
            (MergePolicy::Frequency, None) => {}
            (MergePolicy::MutualInformation, Some(result)) => {
                let recorded = known_unit(policy, vocab, result)?;
                if recorded != derived {
                    return Err(TokenizerError::Load(format!(
                        "Merge {} records {} but {} + {} yields {}",
                        rank, recorded, left, right, derived
                    )));
                }
            }
            (policy, _) => {
                return Err(TokenizerError::Load(format!(
                    "Merge {} has the wrong shape for a {} model",
                    rank, policy
                )));
            }
        }

        if !vocab.contains(&derived) {
            return Err(TokenizerError::Load(format!(
                "Merge {} result {} is not in the vocabulary",
                rank, derived
            )));
        }

        Ok(MergeRecord::new(left, right, derived))
    }
}

/// Parse a rendered symbol and require it to be a vocabulary member.
fn known_unit(policy: MergePolicy, vocab: &Vocabulary, symbol: &str) -> Result<Unit> {
    let unit = policy.parse_unit(symbol);
    if vocab.contains(&unit) {
        Ok(unit)
    } else {
        Err(TokenizerError::Load(format!(
            "Unknown symbol not in vocabulary: {}",
            symbol
        )))
    }
}

/// Guess the policy of a model written without one.
///
/// Merge entries carrying a result mean mutual information and bare pairs mean
/// frequency. Without merges, any `##`-marked entry means mutual information.
fn infer_policy(data: &SerializedModel) -> Result<MergePolicy> {
    let shapes: AHashSet<bool> = data.merges.iter().map(|m| m.result().is_some()).collect();

    match (shapes.contains(&true), shapes.contains(&false)) {
        (true, true) => Err(TokenizerError::Load(
            "Merge entries mix pairs and pair-plus-result triples".to_string(),
        )),
        (true, false) => Ok(MergePolicy::MutualInformation),
        (false, true) => Ok(MergePolicy::Frequency),
        (false, false) => {
            if data
                .vocab
                .iter()
                .any(|entry| entry.starts_with(CONTINUATION_MARKER))
            {
                Ok(MergePolicy::MutualInformation)
            } else {
                Ok(MergePolicy::Frequency)
            }
        }
    }
}
