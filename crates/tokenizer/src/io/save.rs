//! Save functionality for trained models.

use super::format::{SerializedMerge, SerializedModel};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use varnika_core::{MergePolicy, Model, Result, TokenizerError};

/// Model saver - writes a trained model as one JSON document.
pub struct ModelSaver<'a> {
    model: &'a Model,
}

impl<'a> ModelSaver<'a> {
    /// Create a new model saver.
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Save the model to `path`.
    ///
    /// The document is written to a sibling temporary file first and then
    /// renamed over `path`, so readers never observe a partial model.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                TokenizerError::Save(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let tmp_path = temporary_path(path);
        if let Err(err) = self.write_to(&tmp_path) {
            fs::remove_file(&tmp_path).ok();
            return Err(err);
        }

        fs::rename(&tmp_path, path).map_err(|e| {
            fs::remove_file(&tmp_path).ok();
            TokenizerError::Save(format!(
                "Failed to move model into place at {}: {}",
                path.display(),
                e
            ))
        })?;

        log::info!(
            "Saved {} model ({} units, {} merges) to {}",
            self.model.policy(),
            self.model.vocab().len(),
            self.model.merges().len(),
            path.display()
        );
        Ok(())
    }

    /// Render the model as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.serialize())?)
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| {
            TokenizerError::Save(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.serialize())
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize model: {}", e)))?;
        writer
            .flush()
            .map_err(|e| TokenizerError::Save(format!("Failed to write model: {}", e)))?;

        Ok(())
    }

    /// Serialize the model to its on-disk structure.
    pub(crate) fn serialize(&self) -> SerializedModel {
        let model = self.model;
        let policy = model.policy();

        let vocab = model
            .vocab()
            .iter()
            .map(|unit| unit.render().into_string())
            .collect();

        let merges = model
            .merges()
            .iter()
            .map(|record| {
                let operands = [
                    record.left.render().into_string(),
                    record.right.render().into_string(),
                ];
                match policy {
                    MergePolicy::Frequency => SerializedMerge::Pair(operands),
                    MergePolicy::MutualInformation => {
                        SerializedMerge::WithResult(operands, record.merged.render().into_string())
                    }
                }
            })
            .collect();

        let word_symbols = model
            .words()
            .iter()
            .map(|(word, units)| {
                let symbols = units.iter().map(|u| u.render().into_string()).collect();
                (word.to_string(), symbols)
            })
            .collect();

        SerializedModel {
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            policy: Some(policy),
            vocab,
            merges,
            word_symbols,
        }
    }
}

/// `model.json` -> `.model.json.tmp` in the same directory.
fn temporary_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
