use anyhow::Result;
use std::io::Write;
use std::time::Instant;

use crate::combine::Chain;
use crate::config::Config;
use crate::expand::Expander;
use crate::group::WordGroup;
use crate::mask::{try_encode, Rejection};
use crate::report::{write_solution, Diagnostics};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub config: Config,
    /// Emit solutions in lexicographic order instead of discovery order.
    pub sort: bool,
    /// Spread combining and expansion over the rayon pool.
    pub parallel: bool,
}

/// Finds every set of `num_words` letter-disjoint words in `words` and writes
/// one per line to `out`. Returns the number of solutions written.
pub fn run<W, E>(
    words: Vec<String>,
    options: &Options,
    out: &mut W,
    diagnostics: &mut Diagnostics<E>,
) -> Result<usize>
where
    W: Write,
    E: Write,
{
    let config = &options.config;
    config.validate()?;

    diagnostics.word_count(words.len());
    let group = WordGroup::build(words, config);
    diagnostics.invalid_words(group.invalid());
    diagnostics.unique_keys(group.len());

    let start = Instant::now();
    let chain = Chain::build(
        &group.atoms(),
        config.num_words,
        options.parallel,
        |size, map| diagnostics.groups(size, map.len()),
    );
    tracing::info!(elapsed = ?start.elapsed(), "built sequence maps");

    let start = Instant::now();
    let expander = Expander::new(&chain, &group);
    let count = if options.sort || options.parallel {
        let mut solutions = if options.parallel {
            expander.par_collect()?
        } else {
            expander.collect()?
        };
        if options.sort {
            solutions.sort_unstable();
        }
        for solution in &solutions {
            write_solution(out, solution)?;
        }
        solutions.len()
    } else {
        let mut count = 0;
        expander.for_each(|solution| -> Result<()> {
            write_solution(out, solution)?;
            count += 1;
            Ok(())
        })?;
        count
    };
    tracing::info!(elapsed = ?start.elapsed(), solutions = count, "expanded solutions");
    Ok(count)
}

/// Writes only the words of the configured length that use each alphabet
/// letter at most once, in input order. Words with a character outside the
/// alphabet are named in `diagnostics`; other rejects are dropped silently.
pub fn write_unique_letter_words<W, E>(
    words: &[String],
    config: &Config,
    out: &mut W,
    diagnostics: &mut Diagnostics<E>,
) -> Result<usize>
where
    W: Write,
    E: Write,
{
    config.validate()?;
    let mut kept = 0;
    for word in words {
        match try_encode(word, config) {
            Ok(_) => {
                writeln!(out, "{word}")?;
                kept += 1;
            }
            Err(Rejection::Letter) => diagnostics.invalid_chars(word),
            Err(Rejection::Length | Rejection::Repeat) => {}
        }
    }
    Ok(kept)
}
