//! Merge policies.
//!
//! The policy decides three things that differ between the two training
//! variants: how a word's initial units are marked, how two units fuse into a
//! merged unit, and how rendered units are read back from a persisted model.
//! Scoring lives with the trainer.

use super::unit::Unit;
use crate::error::TokenizerError;
use compact_str::format_compact;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Merge-selection policy a model was trained with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Merge the most frequent pair; words end with an `</w>` sentinel.
    #[default]
    Frequency,
    /// Merge the pair with the highest P(xy) / (P(x) P(y)); non-initial units are `##`-marked.
    MutualInformation,
}

impl MergePolicy {
    /// Build the initial unit sequence of a word from its graphemes.
    pub fn initial_units(&self, graphemes: &[&str]) -> Vec<Unit> {
        match self {
            MergePolicy::Frequency => graphemes
                .iter()
                .map(|g| Unit::plain(*g))
                .chain(std::iter::once(Unit::end_of_word()))
                .collect(),
            MergePolicy::MutualInformation => graphemes
                .iter()
                .enumerate()
                .map(|(i, g)| {
                    if i == 0 {
                        Unit::plain(*g)
                    } else {
                        Unit::continuation(*g)
                    }
                })
                .collect(),
        }
    }

    /// Fuse two adjacent units into the unit that replaces them.
    pub fn merge_units(&self, left: &Unit, right: &Unit) -> Unit {
        match self {
            // Verbatim concatenation, sentinel text included.
            MergePolicy::Frequency => Unit::plain(format_compact!("{}{}", left, right)),
            // The right marker is dropped; the left operand decides continuation.
            MergePolicy::MutualInformation => left.join(right),
        }
    }

    /// Read a rendered unit back into a [`Unit`].
    pub fn parse_unit(&self, rendered: &str) -> Unit {
        match self {
            MergePolicy::Frequency => Unit::plain(rendered),
            MergePolicy::MutualInformation => Unit::parse_marked(rendered),
        }
    }

    /// Whether the encoder should try `##`-marked candidates at non-initial positions.
    pub fn uses_continuation_marker(&self) -> bool {
        matches!(self, MergePolicy::MutualInformation)
    }

    /// Whether words carry a trailing end-of-word sentinel.
    pub fn uses_end_of_word(&self) -> bool {
        matches!(self, MergePolicy::Frequency)
    }

    /// Stable name used in persisted models and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            MergePolicy::Frequency => "frequency",
            MergePolicy::MutualInformation => "mutual_information",
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergePolicy {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "frequency" | "bpe" => Ok(MergePolicy::Frequency),
            "mutual_information" | "mutual-information" | "wordpiece" => {
                Ok(MergePolicy::MutualInformation)
            }
            other => Err(TokenizerError::InvalidConfig(format!(
                "Unknown merge policy: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_units_frequency() {
        let units = MergePolicy::Frequency.initial_units(&["ક", "રો"]);
        assert_eq!(
            units,
            vec![Unit::plain("ક"), Unit::plain("રો"), Unit::end_of_word()]
        );
    }

    #[test]
    fn test_initial_units_mutual_information() {
        let units = MergePolicy::MutualInformation.initial_units(&["ક", "ર", "ો"]);
        assert_eq!(
            units,
            vec![
                Unit::plain("ક"),
                Unit::continuation("ર"),
                Unit::continuation("ો")
            ]
        );
    }

    #[test]
    fn test_initial_units_single_grapheme() {
        let units = MergePolicy::MutualInformation.initial_units(&["ને"]);
        assert_eq!(units, vec![Unit::plain("ને")]);
    }

    #[test]
    fn test_merge_units_frequency_keeps_sentinel() {
        let merged = MergePolicy::Frequency.merge_units(&Unit::plain("રો"), &Unit::end_of_word());
        assert_eq!(merged, Unit::plain("રો</w>"));
    }

    #[test]
    fn test_merge_units_mutual_information() {
        let policy = MergePolicy::MutualInformation;

        let merged = policy.merge_units(&Unit::plain("ક"), &Unit::continuation("ૂ"));
        assert_eq!(merged.render(), "કૂ");

        let merged = policy.merge_units(&Unit::continuation("ત"), &Unit::continuation("રો"));
        assert_eq!(merged.render(), "##તરો");
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!(
            MergePolicy::MutualInformation.parse_unit("##રો"),
            Unit::continuation("રો")
        );
        assert_eq!(MergePolicy::Frequency.parse_unit("રો</w>"), Unit::plain("રો</w>"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("frequency".parse::<MergePolicy>().unwrap(), MergePolicy::Frequency);
        assert_eq!(
            "wordpiece".parse::<MergePolicy>().unwrap(),
            MergePolicy::MutualInformation
        );
        assert!("unigram".parse::<MergePolicy>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&MergePolicy::MutualInformation).unwrap();
        assert_eq!(json, "\"mutual_information\"");
    }
}
