use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::mask::LetterMask;

/// One way a combined mask was assembled: a head word's mask in front of a
/// shorter sequence's combined mask. `head & tail == 0` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Provenance {
    pub head: LetterMask,
    pub tail: LetterMask,
}

/// Combined mask of a k-word sequence -> every way it was built.
pub type SequenceMap = FxHashMap<LetterMask, Vec<Provenance>>;

/// The empty sequence: mask 0 built from nothing.
pub fn seed() -> SequenceMap {
    let mut map = SequenceMap::default();
    map.insert(0, vec![Provenance { head: 0, tail: 0 }]);
    map
}

/// Puts every atom in front of every sequence in `previous` it shares no letter with.
pub fn combine(previous: &SequenceMap, atoms: &[LetterMask]) -> SequenceMap {
    let mut output = SequenceMap::default();
    for &tail in previous.keys() {
        push_disjoint(&mut output, tail, atoms);
    }
    output
}

/// [`combine`], sharded over the keys of `previous`.
pub fn par_combine(previous: &SequenceMap, atoms: &[LetterMask]) -> SequenceMap {
    previous
        .par_iter()
        .fold(SequenceMap::default, |mut output, (&tail, _)| {
            push_disjoint(&mut output, tail, atoms);
            output
        })
        .reduce(SequenceMap::default, merge)
}

fn push_disjoint(output: &mut SequenceMap, tail: LetterMask, atoms: &[LetterMask]) {
    for &head in atoms {
        if head & tail == 0 {
            output
                .entry(head | tail)
                .or_default()
                .push(Provenance { head, tail });
        }
    }
}

fn merge(a: SequenceMap, b: SequenceMap) -> SequenceMap {
    let (mut into, from) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (mask, pairs) in from {
        into.entry(mask).or_default().extend(pairs);
    }
    into
}

/// `SequenceMap`s for sequence lengths `0..=n`, each built from the one before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    levels: Vec<SequenceMap>,
}

impl Chain {
    /// Combines `atoms` `num_words` times, calling `on_step(k, map)` as each
    /// k-word map is finished.
    pub fn build(
        atoms: &[LetterMask],
        num_words: usize,
        parallel: bool,
        mut on_step: impl FnMut(usize, &SequenceMap),
    ) -> Chain {
        let mut levels = Vec::with_capacity(num_words + 1);
        levels.push(seed());
        for k in 1..=num_words {
            let previous = &levels[k - 1];
            let next = if parallel {
                par_combine(previous, atoms)
            } else {
                combine(previous, atoms)
            };
            tracing::debug!(k, keys = next.len(), "combined sequences");
            on_step(k, &next);
            levels.push(next);
        }
        Chain { levels }
    }

    #[cfg(test)]
    pub(crate) fn from_levels(levels: Vec<SequenceMap>) -> Chain {
        Chain { levels }
    }

    /// Longest sequence length held.
    pub fn num_words(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn level(&self, k: usize) -> Option<&SequenceMap> {
        self.levels.get(k)
    }

    /// Sequences of the full length.
    pub fn last(&self) -> &SequenceMap {
        &self.levels[self.levels.len() - 1]
    }
}
