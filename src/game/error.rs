//! Move outcomes

use super::hint::MoveKind;
use crate::core::SolveError;
use std::fmt;
use thiserror::Error;

/// Why a move was rejected
///
/// A rejected move never changes the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The edited word is not in the lexicon
    #[error("{0} is not a word.")]
    NotAWord(String),

    /// The edit position does not exist in the current word
    #[error("Position {index} is out of range for '{word}'")]
    IndexOutOfRange { index: usize, word: String },

    /// Only the letters a-z can be placed
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    /// A played word must be exactly one edit from the current word
    #[error("{word} is not one step from {from}")]
    NotOneStep { from: String, word: String },

    /// The word exists but the target cannot be reached from it
    #[error("{target} cannot be reached from {word}")]
    DeadEnd { word: String, target: String },

    /// The search budget ran out before a continuation from the word was found
    #[error("Gave up after {limit} expansions looking for a way on from {word}")]
    SearchLimit { word: String, limit: usize },

    /// A single-letter reply only makes sense when the next step is a replace
    #[error("The next step is a {expected}, not a replace")]
    WrongMoveKind { expected: MoveKind },

    /// The puzzle has already been solved
    #[error("The puzzle is already solved")]
    GameOver,

    /// The session never had a solution to play toward
    #[error("No puzzle to play: {0}")]
    NoPuzzle(SolveError),
}

/// How an accepted move compares to the solution it replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRating {
    /// The next word of the current solution
    Expected,
    /// A different word that shortens the solution
    Genius,
    /// A different word, same solution length
    Ok,
    /// Costs one extra step
    Wrong,
    /// Costs two or more extra steps
    Dodo,
}

impl MoveRating {
    /// Rate a move from the solution length before and after it
    #[must_use]
    pub const fn from_steps(expected: bool, before: usize, after: usize) -> Self {
        if expected {
            return Self::Expected;
        }
        if after < before {
            Self::Genius
        } else if after == before {
            Self::Ok
        } else if after == before + 1 {
            Self::Wrong
        } else {
            Self::Dodo
        }
    }

    /// The move kept the solution at least as short
    #[must_use]
    pub const fn is_good(self) -> bool {
        matches!(self, Self::Expected | Self::Genius | Self::Ok)
    }
}

impl fmt::Display for MoveRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Expected => "OK",
            Self::Genius => "GENIUS",
            Self::Ok => "OK",
            Self::Wrong => "WRONG",
            Self::Dodo => "DODO",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_from_steps() {
        assert_eq!(MoveRating::from_steps(true, 3, 5), MoveRating::Expected);
        assert_eq!(MoveRating::from_steps(false, 4, 3), MoveRating::Genius);
        assert_eq!(MoveRating::from_steps(false, 4, 4), MoveRating::Ok);
        assert_eq!(MoveRating::from_steps(false, 4, 5), MoveRating::Wrong);
        assert_eq!(MoveRating::from_steps(false, 4, 6), MoveRating::Dodo);
    }

    #[test]
    fn good_ratings() {
        assert!(MoveRating::Genius.is_good());
        assert!(!MoveRating::Wrong.is_good());
        assert!(!MoveRating::Dodo.is_good());
    }

    #[test]
    fn error_messages() {
        assert_eq!(MoveError::NotAWord("scd".to_string()).to_string(), "scd is not a word.");
        assert_eq!(
            MoveError::IndexOutOfRange {
                index: 7,
                word: "bad".to_string()
            }
            .to_string(),
            "Position 7 is out of range for 'bad'"
        );
        assert_eq!(
            MoveError::NoPuzzle(SolveError::NoSolution).to_string(),
            "No puzzle to play: No solution"
        );
    }
}
