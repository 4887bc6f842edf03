//! Core domain types for word chains
//!
//! Word normalisation, the edit-distance heuristic and the chain state the
//! search engine orders its frontier by. Nothing in here touches a lexicon.

mod distance;
mod path;
mod word;

pub use distance::{DistanceMemo, UNREACHABLE_DISTANCE, word_distance};
pub use path::{PathState, SolveError};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, WordError, is_edit_letter, normalize, normalize_bounded};
