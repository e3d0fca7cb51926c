//! On-disk model format.
//!
//! A model is one UTF-8 JSON document:
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "policy": "mutual_information",
//!   "vocab": ["ક", "##ર", "કર"],
//!   "merges": [[["ક", "##ર"], "કર"]],
//!   "word_symbols": { "કર": ["કર"] }
//! }
//! ```
//!
//! Frequency models store each merge as a bare `[left, right]` pair, since the
//! result is their concatenation. Mutual-information models store
//! `[[left, right], result]` because the result depends on marker rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use varnika_core::MergePolicy;

/// A single persisted merge entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerializedMerge {
    /// `[left, right]`
    Pair([String; 2]),
    /// `[[left, right], result]`
    WithResult([String; 2], String),
}

impl SerializedMerge {
    /// The two operands as rendered strings.
    pub fn operands(&self) -> (&str, &str) {
        match self {
            SerializedMerge::Pair([left, right]) | SerializedMerge::WithResult([left, right], _) => {
                (left.as_str(), right.as_str())
            }
        }
    }

    /// The recorded result, if the entry carries one.
    pub fn result(&self) -> Option<&str> {
        match self {
            SerializedMerge::Pair(_) => None,
            SerializedMerge::WithResult(_, result) => Some(result.as_str()),
        }
    }
}

/// Complete model serialization format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedModel {
    /// Version of the crate that wrote the file
    #[serde(default)]
    pub version: Option<String>,
    /// Merge policy; inferred on load when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<MergePolicy>,
    /// Every vocabulary entry, in ID order
    pub vocab: Vec<String>,
    /// Merge log, in the order merges were chosen
    pub merges: Vec<SerializedMerge>,
    /// Final segmentation of each training word
    #[serde(default)]
    pub word_symbols: BTreeMap<String, Vec<String>>,
}
