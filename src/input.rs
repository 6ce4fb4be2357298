use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::config::Config;
use crate::mask::is_candidate;

/// Reads one word per line, keeping only words of the configured length over
/// the alphabet. Anything else is dictionary noise and dropped silently.
pub fn read_words<R: BufRead>(reader: R, config: &Config) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end();
        if is_candidate(word, config) {
            words.push(word.to_owned());
        } else {
            tracing::trace!(line = word, "skipping malformed word");
            skipped += 1;
        }
    }
    tracing::debug!(accepted = words.len(), skipped, "read dictionary");
    Ok(words)
}

/// Reads every whitespace-separated token, unfiltered.
pub fn read_tokens<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        tokens.extend(line?.split_whitespace().map(str::to_owned));
    }
    Ok(tokens)
}

/// [`read_words`] over each of `paths` in order, or stdin when there are none.
pub fn read_sources(paths: &[PathBuf], config: &Config) -> Result<Vec<String>> {
    read_each(paths, |reader| read_words(reader, config))
}

/// [`read_tokens`] over each of `paths` in order, or stdin when there are none.
pub fn read_source_tokens(paths: &[PathBuf]) -> Result<Vec<String>> {
    read_each(paths, |reader| read_tokens(reader))
}

fn read_each<F>(paths: &[PathBuf], mut read: F) -> Result<Vec<String>>
where
    F: FnMut(&mut dyn BufRead) -> Result<Vec<String>>,
{
    if paths.is_empty() {
        return read(&mut io::stdin().lock()).context("reading stdin");
    }
    let mut words = Vec::new();
    for path in paths {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let more = read(&mut BufReader::new(file))
            .with_context(|| format!("reading {}", path.display()))?;
        words.extend(more);
    }
    Ok(words)
}
