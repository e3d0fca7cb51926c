//! Character classification for the Gujarati script.
//!
//! Only the block `U+0A80..=U+0AFF` is treated as script text. Within it, the
//! dependent vowel signs (matras) and the virama never start a grapheme of their
//! own; they attach to whatever unit precedes them.

use std::ops::RangeInclusive;

/// Codepoint block of the Gujarati script.
pub const SCRIPT_RANGE: RangeInclusive<char> = '\u{0A80}'..='\u{0AFF}';

/// Dependent vowel signs.
pub const DEPENDENT_VOWEL_SIGNS: [char; 13] = [
    '\u{0ABE}', '\u{0ABF}', '\u{0AC0}', '\u{0AC1}', '\u{0AC2}', '\u{0AC3}', '\u{0AC4}',
    '\u{0AC5}', '\u{0AC7}', '\u{0AC8}', '\u{0AC9}', '\u{0ACB}', '\u{0ACC}',
];

/// Vowel-killing signs.
pub const VIRAMAS: [char; 1] = ['\u{0ACD}'];

/// Whether `c` lies in the script block.
#[inline]
pub fn is_script_char(c: char) -> bool {
    SCRIPT_RANGE.contains(&c)
}

/// Whether `c` is a combining sign that joins the preceding unit.
#[inline]
pub fn is_dependent_mark(c: char) -> bool {
    DEPENDENT_VOWEL_SIGNS.contains(&c) || VIRAMAS.contains(&c)
}

/// Whether `c` may be part of a word: script text or any alphanumeric.
#[inline]
pub fn is_word_char(c: char) -> bool {
    is_script_char(c) || c.is_alphanumeric()
}

/// Whether `text` contains at least one script character.
pub fn contains_script_char(text: &str) -> bool {
    text.chars().any(is_script_char)
}
