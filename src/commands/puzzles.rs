//! Puzzle discovery command
//!
//! Finds practice puzzles reachable from a start word, or picks one at random.

use crate::core::PathState;
use crate::lexicon::Lexicon;
use crate::solver::{PuzzleBounds, find_puzzles};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Start words tried before [`random_puzzle`] gives up
pub const RANDOM_ATTEMPTS: usize = 50;

/// Puzzles found from one start word
pub struct PuzzleReport {
    pub start: String,
    pub bounds: PuzzleBounds,
    pub puzzles: Vec<PathState>,
}

/// Find puzzles from `start`
///
/// # Errors
///
/// Returns an error if `start` is not in the lexicon.
pub fn discover_puzzles(
    lexicon: &Lexicon,
    start: &str,
    bounds: PuzzleBounds,
) -> Result<PuzzleReport, String> {
    if !lexicon.is_word(start) {
        return Err(format!("Word '{start}' not in word list"));
    }

    Ok(PuzzleReport {
        start: start.to_ascii_lowercase(),
        bounds,
        puzzles: find_puzzles(lexicon, start, bounds),
    })
}

/// Pick a random puzzle
///
/// Tries up to `attempts` random start words, returning a random puzzle from
/// the first start word that has any.
pub fn random_puzzle<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    bounds: PuzzleBounds,
    attempts: usize,
    rng: &mut R,
) -> Option<PathState> {
    let words = lexicon.sorted_words();

    for _ in 0..attempts {
        let start = words.choose(rng)?;
        let puzzles = find_puzzles(lexicon, start, bounds);
        if let Some(puzzle) = puzzles.choose(rng) {
            return Some(puzzle.clone());
        }
    }
    None
}
