//! Word chains under construction
//!
//! A [`PathState`] is an ordered chain of words heading for a target word,
//! together with the priority the best-first search orders it by. Chains are
//! only ever extended; branching clones the parent so sibling states never
//! share storage.

use super::distance::{DistanceMemo, word_distance};
use std::fmt;
use thiserror::Error;

/// Why a search ended without reaching its target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The start or target word is not in the lexicon
    #[error("{0} is not a word.")]
    NotAWord(String),
    /// The frontier emptied without reaching the target
    #[error("No solution")]
    NoSolution,
    /// The configured expansion budget ran out first
    #[error("No solution within {0} expansions")]
    SearchLimit(usize),
}

/// An ordered chain of words from a start toward a target
///
/// `priority` is always `word_distance(last_word, target) + num_words()`
/// while no error is set. Once an error is attached the state is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    words: Vec<String>,
    target: String,
    error: Option<SolveError>,
    priority: usize,
}

impl PathState {
    /// Start a chain at `start`
    ///
    /// # Examples
    /// ```
    /// use wordchain::core::PathState;
    ///
    /// let state = PathState::new("bat", "cat");
    /// assert_eq!(state.last_word(), "bat");
    /// assert_eq!(state.priority(), 2); // one edit away + one word so far
    /// ```
    #[must_use]
    pub fn new(start: impl Into<String>, target: impl Into<String>) -> Self {
        let start = start.into();
        let target = target.into();
        let priority = word_distance(&start, &target) + 1;

        Self {
            words: vec![start],
            target,
            error: None,
            priority,
        }
    }

    /// Build a chain from an existing word sequence
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn from_words(words: Vec<String>, target: impl Into<String>) -> Option<Self> {
        let target = target.into();
        let last = words.last()?;
        let priority = word_distance(last, &target) + words.len();

        Some(Self {
            words,
            target,
            error: None,
            priority,
        })
    }

    /// Append a word in place, recomputing the priority
    pub fn push_word(&mut self, word: impl Into<String>) {
        let word = word.into();
        self.priority = word_distance(&word, &self.target) + self.words.len() + 1;
        self.words.push(word);
    }

    /// A copy of this chain extended by one word
    #[must_use]
    pub fn with_word(&self, word: &str) -> Self {
        let mut next = self.clone();
        next.push_word(word);
        next
    }

    /// Branch for the search frontier, scoring through a shared memo
    ///
    /// `memo` must be built for this chain's target.
    pub(crate) fn branch(&self, word: &str, memo: &mut DistanceMemo) -> Self {
        debug_assert_eq!(memo.target(), self.target);
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend(self.words.iter().cloned());
        words.push(word.to_owned());

        Self {
            priority: memo.distance(word) + words.len(),
            words,
            target: self.target.clone(),
            error: None,
        }
    }

    /// Mark this state as terminally failed
    #[must_use]
    pub fn with_error(mut self, error: SolveError) -> Self {
        self.error = Some(error);
        self
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn first_word(&self) -> &str {
        self.words.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn last_word(&self) -> &str {
        self.words.last().map_or("", String::as_str)
    }

    /// Zero-based word lookup
    #[must_use]
    pub fn nth_word(&self, n: usize) -> Option<&str> {
        self.words.get(n).map(String::as_str)
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn priority(&self) -> usize {
        self.priority
    }

    #[must_use]
    pub const fn error(&self) -> Option<&SolveError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Number of edits made so far (words minus the start)
    #[must_use]
    pub fn num_steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// No error has been attached
    #[must_use]
    pub const fn success(&self) -> bool {
        self.error.is_none()
    }

    /// Succeeded and ends at the target
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.success() && self.last_word() == self.target
    }

    /// Shortest and longest word lengths in the chain
    #[must_use]
    pub fn length_range(&self) -> (usize, usize) {
        let shortest = self.words.iter().map(String::len).min().unwrap_or(0);
        let longest = self.words.iter().map(String::len).max().unwrap_or(0);
        (shortest, longest)
    }

    /// One-line summary like `[bat, cat] [1 steps]`
    #[must_use]
    pub fn summarize(&self) -> String {
        format!("[{}] [{} steps]", self.words.join(", "), self.num_steps())
    }
}

impl fmt::Display for PathState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "{error}");
        }
        write!(
            f,
            "{} [distance to '{}' is {}]",
            self.words.join(" -> "),
            self.target,
            self.priority
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_one_word() {
        let state = PathState::new("bat", "scad");
        assert_eq!(state.words(), ["bat"]);
        assert_eq!(state.num_steps(), 0);
        assert_eq!(state.first_word(), "bat");
        assert_eq!(state.target(), "scad");
        assert_eq!(state.priority(), word_distance("bat", "scad") + 1);
    }

    #[test]
    fn identity_chain_is_solved() {
        let state = PathState::new("bat", "bat");
        assert!(state.is_solved());
        assert_eq!(state.priority(), 1);
    }

    #[test]
    fn push_word_recomputes_priority() {
        let mut state = PathState::new("bat", "scad");
        state.push_word("cat");
        assert_eq!(state.priority(), word_distance("cat", "scad") + 2);
        state.push_word("cad");
        assert_eq!(state.priority(), 1 + 3);
        state.push_word("scad");
        assert_eq!(state.priority(), 4);
        assert!(state.is_solved());
    }

    #[test]
    fn with_word_leaves_parent_untouched() {
        let parent = PathState::new("bat", "cat");
        let child = parent.with_word("cat");
        assert_eq!(parent.words(), ["bat"]);
        assert_eq!(child.words(), ["bat", "cat"]);
        assert!(!parent.is_solved());
        assert!(child.is_solved());
    }

    #[test]
    fn branch_matches_with_word() {
        let mut memo = DistanceMemo::new("scad");
        let parent = PathState::new("bad", "scad");
        assert_eq!(parent.branch("cad", &mut memo), parent.with_word("cad"));
    }

    #[test]
    fn from_words_requires_a_word() {
        assert!(PathState::from_words(Vec::new(), "cat").is_none());

        let words = vec!["bat".to_string(), "cat".to_string()];
        let state = PathState::from_words(words, "cat").unwrap();
        assert!(state.is_solved());
        assert_eq!(state.priority(), 2);
    }

    #[test]
    fn error_makes_state_unsolved() {
        let state = PathState::new("cat", "cat").with_error(SolveError::NoSolution);
        assert!(!state.success());
        assert!(!state.is_solved());
        assert_eq!(state.to_string(), "No solution");
    }

    #[test]
    fn not_a_word_message() {
        let error = SolveError::NotAWord("flump".to_string());
        assert_eq!(error.to_string(), "flump is not a word.");
    }

    #[test]
    fn nth_word_is_zero_based() {
        let state = PathState::new("bat", "cad").with_word("cat").with_word("cad");
        assert_eq!(state.nth_word(0), Some("bat"));
        assert_eq!(state.nth_word(2), Some("cad"));
        assert_eq!(state.nth_word(3), None);
        assert!(state.contains("cat"));
        assert!(!state.contains("bad"));
    }

    #[test]
    fn length_range_spans_chain() {
        let state = PathState::new("bade", "scad").with_word("bad").with_word("cad");
        assert_eq!(state.length_range(), (3, 4));
    }

    #[test]
    fn summarize_lists_words_and_steps() {
        let state = PathState::new("bat", "cat").with_word("cat");
        assert_eq!(state.summarize(), "[bat, cat] [1 steps]");
    }
}
