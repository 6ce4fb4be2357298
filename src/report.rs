use itertools::Itertools;
use std::io::{self, Write};

/// Progress lines for the auxiliary stream. Best-effort: a failed write is
/// logged and the run carries on.
pub struct Diagnostics<W: Write> {
    out: W,
}

impl<W: Write> Diagnostics<W> {
    pub fn new(out: W) -> Self {
        Diagnostics { out }
    }

    pub fn word_count(&mut self, count: usize) {
        self.line(format_args!("{count} words"));
    }

    /// Lists words with a repeated letter, if there are any.
    pub fn invalid_words(&mut self, words: &[String]) {
        if words.is_empty() {
            return;
        }
        self.line(format_args!("Invalid words:"));
        for word in words {
            self.line(format_args!("{word}"));
        }
        self.line(format_args!("End invalid words"));
    }

    /// Notes a word dropped for a character outside the alphabet.
    pub fn invalid_chars(&mut self, word: &str) {
        self.line(format_args!("Invalid chars: {word}"));
    }

    pub fn unique_keys(&mut self, count: usize) {
        self.line(format_args!("{count} unique keys"));
    }

    pub fn groups(&mut self, size: usize, count: usize) {
        self.line(format_args!("{count} groups of size {size}"));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{args}") {
            tracing::warn!(%err, "failed to write diagnostics");
        }
    }
}

/// Writes one solution as a space-separated line.
pub fn write_solution<W: Write>(out: &mut W, words: &[&str]) -> io::Result<()> {
    writeln!(out, "{}", words.iter().join(" "))
}
