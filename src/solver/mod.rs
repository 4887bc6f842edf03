//! Word chain search
//!
//! A best-first solver for start/target queries and a breadth-first walk
//! for discovering puzzles.

mod engine;
mod mode;
mod observer;
mod puzzles;

pub use engine::{DEFAULT_MAX_EXPANSIONS, Solver, SolverConfig, resolve, solve};
pub use mode::SearchMode;
pub use observer::{NoopObserver, SearchObserver, SearchStats};
pub use puzzles::{PuzzleBounds, find_puzzles};
