use rayon::prelude::*;
use thiserror::Error;

use crate::combine::Chain;
use crate::group::WordGroup;
use crate::mask::LetterMask;

/// A mask the combiner produced but that cannot be traced back to words.
/// Results past this point would be incomplete, so expansion stops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("no {level}-word sequence recorded for mask {mask:#010x}")]
    MissingSequence { level: usize, mask: LetterMask },
    #[error("no words recorded for mask {mask:#010x}")]
    MissingWords { mask: LetterMask },
}

/// Turns the full-length masks of a [`Chain`] back into word tuples.
///
/// Every tuple is emitted once, with its words in ascending order: a word is
/// only placed after a word that sorts strictly before it. The chain records
/// every ordering of every sequence, so the ascending one is always reachable.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    chain: &'a Chain,
    group: &'a WordGroup,
}

impl<'a> Expander<'a> {
    pub fn new(chain: &'a Chain, group: &'a WordGroup) -> Self {
        Expander { chain, group }
    }

    /// Calls `emit` with every tuple, in map iteration order. The first error,
    /// from `emit` or from a broken chain, stops the expansion.
    pub fn for_each<E>(
        &self,
        mut emit: impl FnMut(&[&'a str]) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: From<ExpandError>,
    {
        let mut prefix = Vec::with_capacity(self.chain.num_words());
        for &mask in self.chain.last().keys() {
            self.expand(&mut prefix, mask, &mut emit)?;
        }
        Ok(())
    }

    /// Calls `emit` with every tuple whose letters are exactly `mask`.
    pub fn expand_mask<E>(
        &self,
        mask: LetterMask,
        mut emit: impl FnMut(&[&'a str]) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: From<ExpandError>,
    {
        let mut prefix = Vec::with_capacity(self.chain.num_words());
        self.expand(&mut prefix, mask, &mut emit)
    }

    pub fn collect(&self) -> Result<Vec<Vec<&'a str>>, ExpandError> {
        let mut found = Vec::new();
        self.for_each(|words| {
            found.push(words.to_vec());
            Ok::<_, ExpandError>(())
        })?;
        Ok(found)
    }

    /// [`Expander::collect`], one full-length mask per task.
    pub fn par_collect(&self) -> Result<Vec<Vec<&'a str>>, ExpandError> {
        let per_mask = self
            .chain
            .last()
            .par_iter()
            .map(|(&mask, _)| {
                let mut found = Vec::new();
                self.expand_mask(mask, |words| {
                    found.push(words.to_vec());
                    Ok::<_, ExpandError>(())
                })?;
                Ok(found)
            })
            .collect::<Result<Vec<_>, ExpandError>>()?;
        Ok(per_mask.into_iter().flatten().collect())
    }

    // `mask` holds the letters of the words still to be placed after `prefix`.
    fn expand<E>(
        &self,
        prefix: &mut Vec<&'a str>,
        mask: LetterMask,
        emit: &mut dyn FnMut(&[&'a str]) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: From<ExpandError>,
    {
        let level = self.chain.num_words() - prefix.len();
        if level == 0 {
            return emit(&prefix[..]);
        }

        let pairs = self
            .chain
            .level(level)
            .and_then(|sequences| sequences.get(&mask))
            .ok_or(ExpandError::MissingSequence { level, mask })?;
        for pair in pairs {
            let words = self
                .group
                .words(pair.head)
                .ok_or(ExpandError::MissingWords { mask: pair.head })?;
            for word in words {
                if prefix.last().is_some_and(|&last| word.as_str() <= last) {
                    continue;
                }
                prefix.push(word);
                let result = self.expand(prefix, pair.tail, emit);
                prefix.pop();
                result?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::{seed, Provenance, SequenceMap};
    use crate::config::Config;
    use itertools::Itertools;

    fn config(word_len: usize, alphabet_size: usize, num_words: usize) -> Config {
        Config {
            word_len,
            alphabet_size,
            num_words,
        }
    }

    fn solve(words: &[&str], config: &Config) -> Vec<String> {
        let group = WordGroup::build(words.iter().copied(), config);
        let chain = Chain::build(&group.atoms(), config.num_words, false, |_, _| {});
        Expander::new(&chain, &group)
            .collect()
            .unwrap()
            .into_iter()
            .map(|words| words.join(" "))
            .sorted()
            .collect()
    }

    #[test]
    fn each_set_is_emitted_once_ascending() {
        let found = solve(&["ef", "cd", "ab"], &config(2, 6, 3));
        assert_eq!(found, ["ab cd ef"]);
    }

    #[test]
    fn anagrams_are_expanded_individually() {
        let found = solve(&["ab", "cd", "ba", "ef"], &config(2, 6, 2));
        assert_eq!(found, ["ab cd", "ab ef", "ba cd", "ba ef", "cd ef"]);
    }

    #[test]
    fn overlapping_words_never_share_a_tuple() {
        let found = solve(&["ab", "bc", "cd"], &config(2, 4, 2));
        assert_eq!(found, ["ab cd"]);
    }

    #[test]
    fn too_few_atoms_yield_nothing() {
        assert!(solve(&["ab", "cd"], &config(2, 6, 3)).is_empty());
    }

    #[test]
    fn single_mask_expands_to_its_tuples() {
        let config = config(1, 4, 2);
        let group = WordGroup::build(["a", "b", "c", "d"], &config);
        let chain = Chain::build(&group.atoms(), 2, false, |_, _| {});
        let mut found = Vec::new();
        Expander::new(&chain, &group)
            .expand_mask(0b0101, |words| {
                found.push(words.join(" "));
                Ok::<_, ExpandError>(())
            })
            .unwrap();
        assert_eq!(found, ["a c"]);
    }

    #[test]
    fn parallel_finds_the_same_tuples() {
        let config = config(1, 8, 3);
        let words = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let group = WordGroup::build(words, &config);
        let chain = Chain::build(&group.atoms(), 3, true, |_, _| {});
        let expander = Expander::new(&chain, &group);
        let sequential = expander
            .collect()
            .unwrap()
            .into_iter()
            .sorted()
            .collect_vec();
        let parallel = expander
            .par_collect()
            .unwrap()
            .into_iter()
            .sorted()
            .collect_vec();
        // 8 choose 3.
        assert_eq!(sequential.len(), 56);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn unknown_head_mask_is_fatal() {
        let config = config(1, 2, 1);
        let group = WordGroup::build(["a"], &config);
        let chain = Chain::build(&[0b10], 1, false, |_, _| {});
        let err = Expander::new(&chain, &group).collect().unwrap_err();
        assert_eq!(err, ExpandError::MissingWords { mask: 0b10 });
    }

    #[test]
    fn unknown_tail_mask_is_fatal() {
        let config = config(1, 2, 2);
        let group = WordGroup::build(["a"], &config);
        let mut top = SequenceMap::default();
        let pair = Provenance {
            head: 0b01,
            tail: 0b10,
        };
        top.insert(0b11, vec![pair]);
        let chain = Chain::from_levels(vec![seed(), SequenceMap::default(), top]);
        let err = Expander::new(&chain, &group).collect().unwrap_err();
        let missing = ExpandError::MissingSequence {
            level: 1,
            mask: 0b10,
        };
        assert_eq!(err, missing);
    }

    #[test]
    fn failed_emit_stops_the_expansion() {
        let config = config(1, 8, 3);
        let group = WordGroup::build(["a", "b", "c", "d", "e", "f", "g", "h"], &config);
        let chain = Chain::build(&group.atoms(), 3, false, |_, _| {});
        let mut calls = 0;
        let err = Expander::new(&chain, &group)
            .for_each(|_| {
                calls += 1;
                Err(anyhow::anyhow!("output closed"))
            })
            .unwrap_err();
        assert_eq!(calls, 1);
        assert_eq!(err.to_string(), "output closed");
    }
}
