//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod puzzles;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, random_pairs, run_benchmark};
pub use puzzles::{PuzzleReport, RANDOM_ATTEMPTS, discover_puzzles, random_puzzle};
pub use simple::{SimpleOutcome, play_lines, run_simple};
pub use solve::{SolveResult, solve_chain};
