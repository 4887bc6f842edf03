//! Lexicons for word chains
//!
//! Owns the set of valid words, answers membership queries and enumerates
//! one-edit neighbours. An embedded default word list is compiled into the
//! binary.

mod adjacency;
mod embedded;
pub mod loader;
mod word_set;

pub use adjacency::ALPHABET;
pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use word_set::{Lexicon, LexiconConfig};
