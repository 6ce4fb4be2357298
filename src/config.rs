use thiserror::Error;

/// Letters per word.
pub const WORD_LEN: usize = 5;
/// Letters `a..` available to words; one bit each in a [`LetterMask`](crate::mask::LetterMask).
pub const ALPHABET_SIZE: usize = 26;
/// Words per solution.
pub const NUM_WORDS: usize = 5;

/// Widest alphabet a `u32` mask can hold.
pub const MAX_ALPHABET_SIZE: usize = u32::BITS as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub word_len: usize,
    pub alphabet_size: usize,
    pub num_words: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alphabet size must be between 1 and 32, got {0}")]
    AlphabetSize(usize),
    #[error(
        "word length must be between 1 and the alphabet size ({alphabet_size}), got {word_len}"
    )]
    WordLen { word_len: usize, alphabet_size: usize },
    #[error("a solution needs at least one word")]
    NoWords,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            word_len: WORD_LEN,
            alphabet_size: ALPHABET_SIZE,
            num_words: NUM_WORDS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet_size == 0 || self.alphabet_size > MAX_ALPHABET_SIZE {
            return Err(ConfigError::AlphabetSize(self.alphabet_size));
        }
        if self.word_len == 0 || self.word_len > self.alphabet_size {
            return Err(ConfigError::WordLen {
                word_len: self.word_len,
                alphabet_size: self.alphabet_size,
            });
        }
        if self.num_words == 0 {
            return Err(ConfigError::NoWords);
        }
        Ok(())
    }
}
