//! Hints and board rows
//!
//! Unplayed words are never shown literally. A word the same length as its
//! predecessor is drawn as a shape: [`KEPT_CHAR`] where the letter stays and
//! [`CHANGED_CHAR`] where it changes. A word of a different length is all
//! [`KEPT_CHAR`].

use std::fmt;

/// Placeholder for a letter that stays
pub const KEPT_CHAR: char = '*';
/// Placeholder for a letter that changes
pub const CHANGED_CHAR: char = '?';

/// The kind of edit the next word needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Same length: change one letter
    Replace,
    /// One shorter: delete one letter
    Reduce,
    /// One longer: insert one letter
    Increase,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Replace => "replace",
            Self::Reduce => "delete",
            Self::Increase => "insert",
        };
        f.write_str(text)
    }
}

/// How much a replace hint gives away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintStyle {
    /// Kept letters shown literally, the changed one as `?` (`"?ad"`)
    #[default]
    Revealing,
    /// Only the shape (`"?**"`)
    Masked,
}

impl HintStyle {
    /// Supported names: "revealing", "masked". Defaults to revealing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "masked" | "hard" => Self::Masked,
            _ => Self::Revealing,
        }
    }
}

/// What the next edit looks like
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub kind: MoveKind,
    /// Ready-to-print hint text
    pub text: String,
    /// Positions the player chooses from
    ///
    /// - Replace: 0-based indices of the letters that change
    /// - Reduce: 1-based positions of every letter that could be deleted
    /// - Increase: 0-based insertion slots, `0..=len`
    pub positions: Vec<usize>,
}

impl Hint {
    /// Build the hint for stepping from `previous` to `next`
    ///
    /// Returns `None` when the lengths differ by more than one.
    ///
    /// # Examples
    /// ```
    /// use wordchain::game::{Hint, HintStyle, MoveKind};
    ///
    /// let hint = Hint::between("bad", "cad", HintStyle::Revealing).unwrap();
    /// assert_eq!(hint.kind, MoveKind::Replace);
    /// assert_eq!(hint.text, "?ad");
    ///
    /// let hint = Hint::between("bat", "bate", HintStyle::Revealing).unwrap();
    /// assert_eq!(hint.text, "0b1a2t3");
    /// ```
    #[must_use]
    pub fn between(previous: &str, next: &str, style: HintStyle) -> Option<Self> {
        let (prev_len, next_len) = (previous.len(), next.len());

        if next_len == prev_len {
            let text = match style {
                HintStyle::Revealing => previous
                    .bytes()
                    .zip(next.bytes())
                    .map(|(p, n)| if p == n { char::from(n) } else { CHANGED_CHAR })
                    .collect(),
                HintStyle::Masked => shape(next, previous),
            };
            let positions = previous
                .bytes()
                .zip(next.bytes())
                .enumerate()
                .filter(|(_, (p, n))| p != n)
                .map(|(i, _)| i)
                .collect();

            Some(Self {
                kind: MoveKind::Replace,
                text,
                positions,
            })
        } else if next_len + 1 == prev_len {
            let positions: Vec<usize> = (1..=prev_len).collect();
            let text = positions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");

            Some(Self {
                kind: MoveKind::Reduce,
                text,
                positions,
            })
        } else if next_len == prev_len + 1 {
            let mut text = String::new();
            for (slot, letter) in previous.chars().enumerate() {
                text.push_str(&slot.to_string());
                text.push(letter);
            }
            text.push_str(&prev_len.to_string());

            Some(Self {
                kind: MoveKind::Increase,
                text,
                positions: (0..=prev_len).collect(),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Replace => write!(f, "{} give replacement letter", self.text),
            MoveKind::Reduce => write!(f, "{} give one location to delete", self.text),
            MoveKind::Increase => write!(f, "{} give a slot and a letter to insert", self.text),
        }
    }
}

/// One line of the game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A word the player has committed
    Played(String),
    /// An unplayed word drawn as its shape
    Hidden(String),
    /// The target, always shown
    Target(String),
}

impl Row {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Played(text) | Self::Hidden(text) | Self::Target(text) => text,
        }
    }
}

/// The shape of `word` relative to the word before it
///
/// # Examples
/// ```
/// use wordchain::game::shape;
///
/// assert_eq!(shape("cad", "bad"), "?**");
/// assert_eq!(shape("scad", "cad"), "****");
/// ```
#[must_use]
pub fn shape(word: &str, previous: &str) -> String {
    if word.len() == previous.len() {
        word.bytes()
            .zip(previous.bytes())
            .map(|(w, p)| if w == p { KEPT_CHAR } else { CHANGED_CHAR })
            .collect()
    } else {
        KEPT_CHAR.to_string().repeat(word.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_hint_revealing() {
        let hint = Hint::between("bat", "bad", HintStyle::Revealing).unwrap();
        assert_eq!(hint.kind, MoveKind::Replace);
        assert_eq!(hint.text, "ba?");
        assert_eq!(hint.positions, [2]);
    }

    #[test]
    fn replace_hint_masked() {
        let hint = Hint::between("bat", "bad", HintStyle::Masked).unwrap();
        assert_eq!(hint.text, "**?");
        assert_eq!(hint.positions, [2]);
    }

    #[test]
    fn reduce_hint_lists_every_position() {
        let hint = Hint::between("scad", "cad", HintStyle::Revealing).unwrap();
        assert_eq!(hint.kind, MoveKind::Reduce);
        assert_eq!(hint.text, "1 2 3 4");
        assert_eq!(hint.positions, [1, 2, 3, 4]);
    }

    #[test]
    fn increase_hint_lists_every_slot() {
        let hint = Hint::between("bad", "bade", HintStyle::Revealing).unwrap();
        assert_eq!(hint.kind, MoveKind::Increase);
        assert_eq!(hint.text, "0b1a2d3");
        assert_eq!(hint.positions, [0, 1, 2, 3]);
    }

    #[test]
    fn no_hint_across_two_lengths() {
        assert!(Hint::between("bat", "scads", HintStyle::Revealing).is_none());
    }

    #[test]
    fn hint_display_names_the_action() {
        let hint = Hint::between("bad", "cad", HintStyle::Revealing).unwrap();
        assert_eq!(hint.to_string(), "?ad give replacement letter");
    }

    #[test]
    fn shape_of_length_change() {
        assert_eq!(shape("bade", "bad"), "****");
        assert_eq!(shape("bad", "bade"), "***");
    }

    #[test]
    fn hint_style_from_name() {
        assert_eq!(HintStyle::from_name("masked"), HintStyle::Masked);
        assert_eq!(HintStyle::from_name("easy"), HintStyle::Revealing);
    }
}
