//! Puzzle discovery
//!
//! Breadth-first walk outward from a start word. Every lexicon word is
//! reached at most once across the whole walk, so each chain found is a
//! shortest chain from the start to its last word.

use crate::core::PathState;
use crate::lexicon::Lexicon;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::debug;

/// Filters applied to discovered chains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleBounds {
    /// The shortest word in a chain must be at most this long
    pub low_len: usize,
    /// The longest word in a chain must be at least this long
    pub high_len: usize,
    /// Fewest words a chain may have, start included
    pub min_words: usize,
    /// Most words a chain may have; the walk stops at this depth
    pub max_words: usize,
}

impl PuzzleBounds {
    #[must_use]
    pub const fn new(low_len: usize, high_len: usize, min_words: usize, max_words: usize) -> Self {
        Self {
            low_len,
            high_len,
            min_words,
            max_words,
        }
    }

    /// Does `chain` pass every filter?
    fn accepts(&self, chain: &[String]) -> bool {
        let shortest = chain.iter().map(String::len).min().unwrap_or(0);
        let longest = chain.iter().map(String::len).max().unwrap_or(0);

        (self.min_words..=self.max_words).contains(&chain.len())
            && shortest <= self.low_len
            && longest >= self.high_len
    }
}

impl Default for PuzzleBounds {
    fn default() -> Self {
        Self::new(3, 4, 4, 7)
    }
}

/// Enumerate puzzles reachable from `start_word`
///
/// Each result is a solved [`PathState`] whose target is its own last word,
/// in breadth-first discovery order. A start word missing from the lexicon
/// yields no puzzles.
///
/// # Examples
/// ```
/// use wordchain::lexicon::Lexicon;
/// use wordchain::solver::{PuzzleBounds, find_puzzles};
///
/// let lexicon = Lexicon::from_words(["bat", "bad", "cad", "scad"]);
/// let puzzles = find_puzzles(&lexicon, "bat", PuzzleBounds::new(3, 4, 4, 4));
///
/// assert_eq!(puzzles.len(), 1);
/// assert_eq!(puzzles[0].words(), ["bat", "bad", "cad", "scad"]);
/// ```
#[must_use]
pub fn find_puzzles(lexicon: &Lexicon, start_word: &str, bounds: PuzzleBounds) -> Vec<PathState> {
    let start = start_word.trim().to_ascii_lowercase();
    if !lexicon.is_word(&start) || bounds.max_words == 0 {
        return Vec::new();
    }

    let mut visited = FxHashSet::default();
    visited.insert(start.clone());

    let mut queue = VecDeque::new();
    queue.push_back(vec![start]);

    let mut puzzles = Vec::new();

    while let Some(chain) = queue.pop_front() {
        if bounds.accepts(&chain) {
            let target = chain.last().cloned().unwrap_or_default();
            puzzles.extend(PathState::from_words(chain.clone(), target));
        }

        if chain.len() >= bounds.max_words {
            continue;
        }

        let Some(last) = chain.last() else {
            continue;
        };

        for next in lexicon.find_next_words(last) {
            if visited.insert(next.clone()) {
                let mut extended = Vec::with_capacity(chain.len() + 1);
                extended.extend(chain.iter().cloned());
                extended.push(next);
                queue.push_back(extended);
            }
        }
    }

    debug!(
        start = start_word,
        visited = visited.len(),
        found = puzzles.len(),
        "puzzle search finished"
    );
    puzzles
}
