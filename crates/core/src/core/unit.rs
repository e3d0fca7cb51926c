//! Subword units.
//!
//! A [`Unit`] is the atomic symbol of a word's segmentation. Continuation status
//! is an explicit flag; the `##` marker only exists in rendered strings.

use compact_str::{format_compact, CompactString};
use std::fmt;

/// Prefix rendered in front of a non-initial unit.
pub const CONTINUATION_MARKER: &str = "##";

/// End-of-word sentinel appended to every word under the frequency policy.
pub const END_OF_WORD: &str = "</w>";

/// An indivisible symbol: a grapheme or the result of earlier merges.
///
/// Ordering is by text first, with a plain unit sorting before its
/// continuation-flagged twin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit {
    text: CompactString,
    continuation: bool,
}

/// An ordered pair of adjacent units.
pub type Pair = (Unit, Unit);

impl Unit {
    /// A unit that starts a word (or carries no marker at all).
    pub fn plain(text: impl Into<CompactString>) -> Self {
        Self {
            text: text.into(),
            continuation: false,
        }
    }

    /// A non-initial unit.
    pub fn continuation(text: impl Into<CompactString>) -> Self {
        Self {
            text: text.into(),
            continuation: true,
        }
    }

    /// The end-of-word sentinel unit.
    pub fn end_of_word() -> Self {
        Self::plain(END_OF_WORD)
    }

    /// Parse a rendered unit, treating a leading `##` as the continuation flag.
    pub fn parse_marked(rendered: &str) -> Self {
        match rendered.strip_prefix(CONTINUATION_MARKER) {
            Some(rest) if !rest.is_empty() => Self::continuation(rest),
            _ => Self::plain(rendered),
        }
    }

    /// The unit text without any marker.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Whether this unit is a non-initial piece of its word.
    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.continuation
    }

    /// Concatenate two units; continuation status comes from the left operand.
    pub fn join(&self, right: &Unit) -> Unit {
        Unit {
            text: format_compact!("{}{}", self.text, right.text),
            continuation: self.continuation,
        }
    }

    /// Render with the continuation marker when flagged.
    pub fn render(&self) -> CompactString {
        if self.continuation {
            format_compact!("{}{}", CONTINUATION_MARKER, self.text)
        } else {
            self.text.clone()
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.continuation {
            f.write_str(CONTINUATION_MARKER)?;
        }
        f.write_str(&self.text)
    }
}

/// Strip a leading continuation marker and a trailing end-of-word sentinel.
pub fn strip_markers(symbol: &str) -> &str {
    let symbol = symbol.strip_prefix(CONTINUATION_MARKER).unwrap_or(symbol);
    symbol.strip_suffix(END_OF_WORD).unwrap_or(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(Unit::plain("કા").render(), "કા");
        assert_eq!(Unit::continuation("કા").render(), "##કા");
        assert_eq!(Unit::continuation("કા").to_string(), "##કા");
    }

    #[test]
    fn test_parse_marked() {
        assert_eq!(Unit::parse_marked("##રે"), Unit::continuation("રે"));
        assert_eq!(Unit::parse_marked("રે"), Unit::plain("રે"));
        // A bare marker is not a continuation of nothing.
        assert_eq!(Unit::parse_marked("##"), Unit::plain("##"));
    }

    #[test]
    fn test_join_takes_left_status() {
        let joined = Unit::plain("ક").join(&Unit::continuation("ા"));
        assert_eq!(joined, Unit::plain("કા"));

        let joined = Unit::continuation("ર").join(&Unit::continuation("ે"));
        assert_eq!(joined, Unit::continuation("રે"));
    }

    #[test]
    fn test_ordering() {
        assert!(Unit::plain("a") < Unit::continuation("a"));
        assert!(Unit::continuation("a") < Unit::plain("b"));
    }

    #[test]
    fn test_strip_markers() {
        assert_eq!(strip_markers("##કા"), "કા");
        assert_eq!(strip_markers("રો</w>"), "રો");
        assert_eq!(strip_markers("##રો</w>"), "રો");
        assert_eq!(strip_markers("ક"), "ક");
    }
}
