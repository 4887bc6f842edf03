//! Word normalisation
//!
//! Lexicon words are lowercase ASCII letters. Everything that enters the
//! lexicon, or is checked against it, goes through [`normalize`] first.

use thiserror::Error;

/// Shortest word accepted by default
pub const MIN_WORD_LEN: usize = 3;

/// Longest word accepted by default
pub const MAX_WORD_LEN: usize = 20;

/// Error type for words that cannot be placed in a lexicon
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word is empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
    #[error("Word must be {min}-{max} letters, got {len}")]
    InvalidLength { len: usize, min: usize, max: usize },
}

/// Case-fold and validate a word
///
/// Trims surrounding whitespace and lowercases. Only ASCII letters are
/// accepted; no length check is made here.
///
/// # Errors
/// Returns `WordError` if the word is empty or contains anything other
/// than ASCII letters.
///
/// # Examples
/// ```
/// use wordchain::core::normalize;
///
/// assert_eq!(normalize(" Bade ").unwrap(), "bade");
/// assert!(normalize("b4d").is_err());
/// ```
pub fn normalize(word: &str) -> Result<String, WordError> {
    let trimmed = word.trim();

    if trimmed.is_empty() {
        return Err(WordError::Empty);
    }

    if !trimmed.is_ascii() {
        return Err(WordError::NonAscii);
    }

    if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters);
    }

    Ok(trimmed.to_ascii_lowercase())
}

/// Normalise a word and check it against length bounds
///
/// # Errors
/// Returns `WordError` if [`normalize`] fails or the length is outside
/// `min..=max`.
pub fn normalize_bounded(word: &str, min: usize, max: usize) -> Result<String, WordError> {
    let word = normalize(word)?;
    let len = word.len();

    if len < min || len > max {
        return Err(WordError::InvalidLength { len, min, max });
    }

    Ok(word)
}

/// Is `letter` usable in a single-letter edit?
#[inline]
#[must_use]
pub const fn is_edit_letter(letter: char) -> bool {
    letter.is_ascii_alphabetic()
}
