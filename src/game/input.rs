//! Typed player input
//!
//! Both front ends accept the same replies to a hint:
//! - a single letter fills the `?` of a replace hint (`c`)
//! - a number deletes that letter, counting from 1 (`2`)
//! - a slot and a letter inserts (`0,s` or `0 s`)
//! - a whole word plays it directly (`cad`)

use super::error::{MoveError, MoveRating};
use super::hint::MoveKind;
use super::session::GameSession;

/// One parsed reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerMove {
    /// Replace the letter the hint marks as changing
    Letter(char),
    /// Delete the letter at a 1-based position
    Delete(usize),
    /// Insert a letter at a 0-based slot
    Insert(usize, char),
    /// Play a whole word
    Word(String),
}

impl PlayerMove {
    /// Parse a reply, or `None` if it matches no move form
    ///
    /// # Examples
    /// ```
    /// use wordchain::game::PlayerMove;
    ///
    /// assert_eq!(PlayerMove::parse("c"), Some(PlayerMove::Letter('c')));
    /// assert_eq!(PlayerMove::parse("2"), Some(PlayerMove::Delete(2)));
    /// assert_eq!(PlayerMove::parse("0,s"), Some(PlayerMove::Insert(0, 's')));
    /// assert_eq!(PlayerMove::parse("Scad"), Some(PlayerMove::Word("scad".into())));
    /// assert_eq!(PlayerMove::parse("2x"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Some((slot, letter)) = input.split_once([',', ' ']) {
            let slot = slot.trim().parse().ok()?;
            let mut letters = letter.trim().chars();
            let letter = letters.next()?;
            if letters.next().is_some() || !letter.is_ascii_alphabetic() {
                return None;
            }
            return Some(Self::Insert(slot, letter.to_ascii_lowercase()));
        }

        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            return input.parse().ok().map(Self::Delete);
        }

        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Some(Self::Letter(letter.to_ascii_lowercase())),
            _ => Some(Self::Word(input.to_ascii_lowercase())),
        }
    }
}

impl GameSession<'_> {
    /// Apply a parsed reply
    ///
    /// # Errors
    ///
    /// Whatever the underlying move rejects with. A bare letter is rejected
    /// with [`MoveError::WrongMoveKind`] unless the next step is a replace.
    pub fn apply(&mut self, player_move: &PlayerMove) -> Result<MoveRating, MoveError> {
        match player_move {
            PlayerMove::Letter(letter) => {
                let hint = self.next_word_hint();
                match hint {
                    Some(hint) if hint.kind == MoveKind::Replace => {
                        let index = hint.positions.first().copied().unwrap_or_default();
                        self.replace(index, *letter)
                    }
                    Some(hint) => Err(MoveError::WrongMoveKind { expected: hint.kind }),
                    // Solved or unsolvable; let the move report which
                    None => self.replace(0, *letter),
                }
            }
            PlayerMove::Delete(position) => match position.checked_sub(1) {
                Some(index) => self.remove(index),
                None => Err(MoveError::IndexOutOfRange {
                    index: 0,
                    word: self.progress().last_word().to_string(),
                }),
            },
            PlayerMove::Insert(slot, letter) => self.insert(*slot, *letter),
            PlayerMove::Word(word) => self.play_word(word),
        }
    }
}
