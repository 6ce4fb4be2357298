use crate::config::Config;

/// One bit per letter as bitset, `a` in bit 0.
///
/// Both `dowry` and `rowdy` encode to
/// ```text
/// ------zyxwvutsrqponmlkjihgfedcba
/// 00000001010000100100000000001000
/// ```
pub type LetterMask = u32;

/// Mask of a word that repeats a letter or is otherwise unusable.
pub const INVALID: LetterMask = 0;

fn letter_index(c: u8, config: &Config) -> Option<u32> {
    let idx = c.checked_sub(b'a')? as usize;
    (idx < config.alphabet_size).then_some(idx as u32)
}

/// Whether `word` has the configured length and only uses alphabet letters.
pub fn is_candidate(word: &str, config: &Config) -> bool {
    word.len() == config.word_len && word.bytes().all(|c| letter_index(c, config).is_some())
}

/// Why a word has no usable mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Length,
    /// A character outside the alphabet.
    Letter,
    Repeat,
}

/// Encodes `word` into its letter mask. Characters are checked in order, so
/// a repeat before a foreign character is reported as [`Rejection::Repeat`].
pub fn try_encode(word: &str, config: &Config) -> Result<LetterMask, Rejection> {
    if word.len() != config.word_len {
        return Err(Rejection::Length);
    }
    let mut mask = 0;
    for c in word.bytes() {
        let bit: LetterMask = 1 << letter_index(c, config).ok_or(Rejection::Letter)?;
        if mask & bit != 0 {
            return Err(Rejection::Repeat);
        }
        mask |= bit;
    }
    Ok(mask)
}

/// Encodes `word` into its letter mask, or [`INVALID`] when it has the wrong
/// length, a letter outside the alphabet, or a repeated letter.
pub fn encode(word: &str, config: &Config) -> LetterMask {
    try_encode(word, config).unwrap_or(INVALID)
}
