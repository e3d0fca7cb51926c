//! Vocabulary storage and lookup.
//!
//! The vocabulary is an insertion-ordered set of units. Units are never removed,
//! so IDs stay stable for the lifetime of a model.

use super::unit::Unit;
use ahash::AHashMap;

/// Unit -> ID
pub type Vocab = AHashMap<Unit, u32>;

/// Insertion-ordered set of every unit produced by training.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Forward mapping: unit -> ID
    vocab: Vocab,
    /// Reverse mapping: ID -> unit
    vocab_r: Vec<Unit>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vocab: Vocab::with_capacity(capacity),
            vocab_r: Vec::with_capacity(capacity),
        }
    }

    /// Add a unit to the vocabulary.
    ///
    /// Returns the ID of the unit and whether it was newly inserted.
    pub fn insert(&mut self, unit: Unit) -> (u32, bool) {
        if let Some(&id) = self.vocab.get(&unit) {
            return (id, false);
        }

        let id = self.vocab_r.len() as u32;
        self.vocab_r.push(unit.clone());
        self.vocab.insert(unit, id);

        (id, true)
    }

    /// Check whether a unit is a member.
    #[inline]
    pub fn contains(&self, unit: &Unit) -> bool {
        self.vocab.contains_key(unit)
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.vocab_r.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vocab_r.is_empty()
    }

    /// Iterate over units in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.vocab_r.iter()
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.vocab_r == other.vocab_r
    }
}

impl Eq for Vocabulary {}

impl FromIterator<Unit> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        let mut vocab = Vocabulary::new();
        for unit in iter {
            vocab.insert(unit);
        }
        vocab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert() {
        let mut vocab = Vocabulary::new();
        let (id1, new1) = vocab.insert(Unit::plain("ક"));
        let (id2, new2) = vocab.insert(Unit::continuation("ા"));

        assert_eq!((id1, new1), (0, true));
        assert_eq!((id2, new2), (1, true));
        assert!(vocab.contains(&Unit::plain("ક")));
        assert!(!vocab.contains(&Unit::plain("ા")));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut vocab = Vocabulary::new();
        vocab.insert(Unit::plain("ક"));
        let (id, inserted) = vocab.insert(Unit::plain("ક"));

        assert_eq!(id, 0);
        assert!(!inserted);
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_continuation_is_distinct() {
        let vocab: Vocabulary = [Unit::plain("ક"), Unit::continuation("ક")]
            .into_iter()
            .collect();

        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains(&Unit::continuation("ક")));
    }

    #[test]
    fn test_iter_in_id_order() {
        let vocab: Vocabulary = ["b", "a", "c"].into_iter().map(Unit::plain).collect();
        let texts: Vec<&str> = vocab.iter().map(Unit::text).collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
    }
}
