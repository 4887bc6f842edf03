//! The set of valid words
//!
//! Words are case-folded on the way in and on every lookup, so membership
//! is case-insensitive.

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN, normalize_bounded};
use rustc_hash::FxHashSet;
use tracing::warn;

/// Word length bounds applied when words enter a lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Shorter words are dropped (default: 3)
    pub min_len: usize,
    /// Longer words are dropped (default: 20)
    pub max_len: usize,
}

impl LexiconConfig {
    #[must_use]
    pub const fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    /// Default minimum with a custom maximum
    #[must_use]
    pub const fn with_max_len(max_len: usize) -> Self {
        Self::new(MIN_WORD_LEN, max_len)
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self::new(MIN_WORD_LEN, MAX_WORD_LEN)
    }
}

/// The authoritative set of valid words for a puzzle
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
    config: LexiconConfig,
}

impl Lexicon {
    /// Create an empty lexicon
    #[must_use]
    pub fn new(config: LexiconConfig) -> Self {
        Self {
            words: FxHashSet::default(),
            config,
        }
    }

    /// Build a lexicon from explicit words with the default length bounds
    ///
    /// # Examples
    /// ```
    /// use wordchain::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["bad", "Bat", "BAT", "ox"]);
    /// assert_eq!(lexicon.len(), 2); // "ox" is too short, "bat" deduplicated
    /// assert!(lexicon.is_word("bAt"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, LexiconConfig::default())
    }

    /// Build a lexicon from explicit words with custom length bounds
    #[must_use]
    pub fn with_config<I, S>(words: I, config: LexiconConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new(config);
        lexicon.extend(words);
        lexicon
    }

    /// Add a word, returning whether it was accepted and new
    ///
    /// Words that are not purely alphabetic or fall outside the configured
    /// length bounds are silently skipped.
    pub fn insert(&mut self, word: &str) -> bool {
        normalize_bounded(word, self.config.min_len, self.config.max_len)
            .is_ok_and(|word| self.words.insert(word))
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(word.to_ascii_lowercase().as_str())
        } else {
            self.words.contains(word)
        }
    }

    /// Membership test for a word already known to be lowercase
    #[inline]
    pub(crate) fn contains_folded(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Delete a word from this lexicon
    ///
    /// Only used on a search-local [`working_copy`](Self::working_copy).
    /// Removing an absent word is logged and reported as `false`.
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = self.words.remove(word.to_ascii_lowercase().as_str());
        if !removed {
            warn!(word, "tried to remove a word that is not in the lexicon");
        }
        removed
    }

    /// An independent copy a search may consume words from
    #[must_use]
    pub fn working_copy(&self) -> Self {
        self.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub const fn config(&self) -> LexiconConfig {
        self.config
    }

    /// Words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words in lexicographic order
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> Extend<S> for Lexicon {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_custom_lexicon() {
        let lexicon = Lexicon::from_words(["apple", "pear", "banana"]);
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.is_word("apple"));
        assert!(lexicon.is_word("apPle"));
        assert!(!lexicon.is_word("peach"));
    }

    #[test]
    fn case_folded_at_insertion() {
        let lexicon = Lexicon::from_words(["SCAD", "Bade"]);
        assert!(lexicon.is_word("scad"));
        assert!(lexicon.is_word("BADE"));
        assert_eq!(lexicon.sorted_words(), ["bade", "scad"]);
    }

    #[test]
    fn membership_ignores_case_everywhere() {
        let lexicon = Lexicon::from_words(["bat", "cat", "scad"]);
        for word in ["bat", "BAT", "Cat", "sCaD", "dog", "DOG"] {
            assert_eq!(lexicon.is_word(word), lexicon.is_word(&word.to_lowercase()));
        }
    }

    #[test]
    fn length_bounds_filter_words() {
        let lexicon = Lexicon::with_config(["ox", "bad", "bade", "bread"], LexiconConfig::with_max_len(4));
        assert_eq!(lexicon.sorted_words(), ["bad", "bade"]);
    }

    #[test]
    fn non_alphabetic_words_skipped() {
        let mut lexicon = Lexicon::default();
        assert!(!lexicon.insert("#comment"));
        assert!(!lexicon.insert("can't"));
        assert!(!lexicon.insert(""));
        assert!(lexicon.insert("cant"));
        assert!(!lexicon.insert("CANT"));
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn working_copy_is_independent() {
        let lexicon = Lexicon::from_words(["bad", "bat"]);
        let mut working = lexicon.working_copy();

        assert!(working.remove("bad"));
        assert!(!working.is_word("bad"));
        assert!(lexicon.is_word("bad"));
    }

    #[test]
    fn removing_absent_word_reports_false() {
        let mut lexicon = Lexicon::from_words(["bad"]);
        assert!(!lexicon.remove("cat"));
        assert!(lexicon.remove("BAD"));
        assert!(lexicon.is_empty());
    }

    #[test]
    fn default_config_bounds() {
        let config = LexiconConfig::default();
        assert_eq!(config.min_len, 3);
        assert_eq!(config.max_len, 20);
    }
}
