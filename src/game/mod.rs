//! Interactive puzzle play
//!
//! A [`GameSession`] tracks the words a player has committed against a
//! solution that is recomputed after every accepted move, and turns the
//! next step of that solution into a [`Hint`].

mod error;
mod hint;
mod input;
mod session;

pub use error::{MoveError, MoveRating};
pub use hint::{CHANGED_CHAR, Hint, HintStyle, KEPT_CHAR, MoveKind, Row, shape};
pub use input::PlayerMove;
pub use session::GameSession;
