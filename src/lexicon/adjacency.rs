//! One-edit neighbours
//!
//! The implicit word graph: two lexicon words are adjacent when one can be
//! turned into the other by inserting, removing or replacing a single letter.

use super::Lexicon;
use std::collections::BTreeSet;
use tracing::trace;

/// Letters tried at every insertion and replacement position
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Case-fold a query word, or `None` if it cannot have neighbours
fn fold(word: &str) -> Option<String> {
    word.bytes()
        .all(|b| b.is_ascii_alphabetic())
        .then(|| word.to_ascii_lowercase())
}

impl Lexicon {
    /// All words formed by inserting one letter anywhere in `word`
    ///
    /// Insertions at different positions can yield the same word (`"cell"`
    /// from `"cel"` at position 2 or 3); the result holds it once.
    ///
    /// # Examples
    /// ```
    /// use wordchain::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["cad", "scad", "bald"]);
    /// assert!(lexicon.find_adder_words("cad").contains("scad"));
    /// ```
    #[must_use]
    pub fn find_adder_words(&self, word: &str) -> BTreeSet<String> {
        let mut adders = BTreeSet::new();
        let Some(word) = fold(word) else {
            return adders;
        };

        let mut candidate = String::with_capacity(word.len() + 1);
        for position in 0..=word.len() {
            for &letter in ALPHABET {
                candidate.clear();
                candidate.push_str(&word[..position]);
                candidate.push(char::from(letter));
                candidate.push_str(&word[position..]);

                if candidate != word && self.contains_folded(&candidate) {
                    adders.insert(candidate.clone());
                }
            }
        }

        trace!(word = %word, ?adders, "adders");
        adders
    }

    /// All words formed by deleting one letter of `word`
    #[must_use]
    pub fn find_remover_words(&self, word: &str) -> BTreeSet<String> {
        let mut removers = BTreeSet::new();
        let Some(word) = fold(word) else {
            return removers;
        };

        let mut candidate = String::with_capacity(word.len());
        for position in 0..word.len() {
            candidate.clear();
            candidate.push_str(&word[..position]);
            candidate.push_str(&word[position + 1..]);

            if candidate != word && self.contains_folded(&candidate) {
                removers.insert(candidate.clone());
            }
        }

        trace!(word = %word, ?removers, "removers");
        removers
    }

    /// All words formed by substituting one letter of `word`
    ///
    /// The original letter is tried too and then filtered out because the
    /// candidate equals `word`.
    #[must_use]
    pub fn find_replacement_words(&self, word: &str) -> BTreeSet<String> {
        let mut replacements = BTreeSet::new();
        let Some(word) = fold(word) else {
            return replacements;
        };

        let mut candidate = String::with_capacity(word.len());
        for position in 0..word.len() {
            for &letter in ALPHABET {
                candidate.clear();
                candidate.push_str(&word[..position]);
                candidate.push(char::from(letter));
                candidate.push_str(&word[position + 1..]);

                if candidate != word && self.contains_folded(&candidate) {
                    replacements.insert(candidate.clone());
                }
            }
        }

        trace!(word = %word, ?replacements, "replacements");
        replacements
    }

    /// Every lexicon word one edit away from `word`, in sorted order
    ///
    /// The union of adders, removers and replacements. A word reachable by
    /// more than one kind of edit appears once.
    ///
    /// # Examples
    /// ```
    /// use wordchain::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["bad", "bade", "bat", "cad", "ba"]);
    /// let next: Vec<String> = lexicon.find_next_words("bad").into_iter().collect();
    /// assert_eq!(next, ["bade", "bat", "cad"]);
    /// ```
    #[must_use]
    pub fn find_next_words(&self, word: &str) -> BTreeSet<String> {
        let mut next_words = self.find_replacement_words(word);
        next_words.extend(self.find_adder_words(word));
        next_words.extend(self.find_remover_words(word));
        next_words
    }

    /// Are `a` and `b` distinct lexicon words exactly one edit apart?
    #[must_use]
    pub fn is_one_step(&self, a: &str, b: &str) -> bool {
        self.is_word(b) && self.find_next_words(a).contains(&b.to_ascii_lowercase())
    }
}
