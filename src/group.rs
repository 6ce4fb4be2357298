use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::config::Config;
use crate::mask::{encode, LetterMask, INVALID};

/// Words bucketed by letter mask, so anagrams share one combinatorial identity.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordGroup {
    by_mask: FxHashMap<LetterMask, Vec<String>>,
    invalid: Vec<String>,
}

impl WordGroup {
    /// Buckets `words` by mask, keeping first-seen order within each bucket.
    /// Words with a repeated letter are set aside in [`WordGroup::invalid`].
    pub fn build<I, S>(words: I, config: &Config) -> WordGroup
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = WordGroup::default();
        for word in words {
            let word = word.into();
            match encode(&word, config) {
                INVALID => group.invalid.push(word),
                mask => group.by_mask.entry(mask).or_default().push(word),
            }
        }
        group
    }

    /// Words rejected for repeating a letter, in input order.
    pub fn invalid(&self) -> &[String] {
        &self.invalid
    }

    pub fn words(&self, mask: LetterMask) -> Option<&[String]> {
        self.by_mask.get(&mask).map(Vec::as_slice)
    }

    /// Number of distinct non-zero masks.
    pub fn len(&self) -> usize {
        self.by_mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_mask.is_empty()
    }

    /// The distinct masks, ascending. These are the atoms every sequence is built from.
    pub fn atoms(&self) -> Vec<LetterMask> {
        self.by_mask.keys().copied().sorted().collect_vec()
    }
}
