//! Opt-in search instrumentation
//!
//! The engine reports progress through [`SearchObserver`]. Every method has
//! a no-op default, so an observer only implements what it needs.

use crate::core::PathState;

/// Receives events from a running search
pub trait SearchObserver {
    /// A state was popped and is about to be expanded
    fn on_expand(&mut self, _state: &PathState, _frontier_len: usize) {}

    /// A successor state was pushed onto the frontier
    fn on_push(&mut self, _state: &PathState, _frontier_len: usize) {}

    /// The search ended with `result`, solved or failed
    fn on_finish(&mut self, _result: &PathState) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Counters collected over one or more searches
///
/// # Examples
/// ```
/// use wordchain::lexicon::Lexicon;
/// use wordchain::solver::{SearchStats, Solver};
///
/// let lexicon = Lexicon::from_words(["bat", "cat"]);
/// let mut stats = SearchStats::default();
/// let result = Solver::new(&lexicon).solve_observed("bat", "cat", &mut stats);
///
/// assert!(result.is_solved());
/// assert_eq!(stats.searches, 1);
/// assert!(stats.expanded >= 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped and expanded
    pub expanded: usize,
    /// Successor states pushed
    pub pushed: usize,
    /// Largest frontier seen
    pub peak_frontier: usize,
    /// Searches finished
    pub searches: usize,
    /// Searches that reached their target
    pub solved: usize,
}

impl SearchStats {
    /// Fold another set of counters into this one
    pub fn merge(&mut self, other: &Self) {
        self.expanded += other.expanded;
        self.pushed += other.pushed;
        self.peak_frontier = self.peak_frontier.max(other.peak_frontier);
        self.searches += other.searches;
        self.solved += other.solved;
    }
}

impl SearchObserver for SearchStats {
    fn on_expand(&mut self, _state: &PathState, frontier_len: usize) {
        self.expanded += 1;
        self.peak_frontier = self.peak_frontier.max(frontier_len);
    }

    fn on_push(&mut self, _state: &PathState, frontier_len: usize) {
        self.pushed += 1;
        self.peak_frontier = self.peak_frontier.max(frontier_len);
    }

    fn on_finish(&mut self, result: &PathState) {
        self.searches += 1;
        if result.is_solved() {
            self.solved += 1;
        }
    }
}
