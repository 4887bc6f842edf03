//! Best-first word chain search

use super::mode::SearchMode;
use super::observer::{NoopObserver, SearchObserver};
use crate::core::{DistanceMemo, PathState, SolveError};
use crate::lexicon::Lexicon;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use tracing::{debug, trace};

/// Expansions between progress log lines
const PROGRESS_INTERVAL: usize = 1000;

/// Expansion budget of [`SolverConfig::default`]
///
/// Per-path search is exponential in the worst case. Reachable pairs in the
/// built-in word list need at most a few tens of thousands of expansions.
pub const DEFAULT_MAX_EXPANSIONS: usize = 50_000;

/// Search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Which words a branch may still be offered
    pub mode: SearchMode,
    /// Give up with [`SolveError::SearchLimit`] after this many expansions
    pub max_expansions: Option<usize>,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(mode: SearchMode, max_expansions: Option<usize>) -> Self {
        Self {
            mode,
            max_expansions,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(SearchMode::default(), Some(DEFAULT_MAX_EXPANSIONS))
    }
}

/// A frontier slot
///
/// Ordered so the max-heap pops the lowest priority first, and among equal
/// priorities the state pushed earliest.
#[derive(Debug)]
struct FrontierEntry {
    priority: usize,
    seq: usize,
    state: PathState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Word chain solver
///
/// Runs a best-first search over the implicit graph whose nodes are lexicon
/// words and whose edges are single-letter edits. States are popped in order
/// of `distance(last word, target) + words so far`; candidate words are
/// enumerated in sorted order and ties go to the earliest push, so the same
/// query always yields the same chain.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver with the default configuration
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_config(lexicon, SolverConfig::default())
    }

    #[must_use]
    pub const fn with_config(lexicon: &'a Lexicon, config: SolverConfig) -> Self {
        Self { lexicon, config }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Find a chain from `from` to `to`
    ///
    /// Both words must be in the lexicon; otherwise the result carries
    /// [`SolveError::NotAWord`] and no search is run. Check
    /// [`PathState::is_solved`] before trusting the word list.
    ///
    /// # Examples
    /// ```
    /// use wordchain::lexicon::Lexicon;
    /// use wordchain::solver::Solver;
    ///
    /// let lexicon = Lexicon::from_words(["bat", "bad", "cad", "scad", "cat"]);
    /// let result = Solver::new(&lexicon).solve("bat", "scad");
    ///
    /// assert!(result.is_solved());
    /// assert_eq!(result.num_steps(), 3);
    /// ```
    #[must_use]
    pub fn solve(&self, from: &str, to: &str) -> PathState {
        self.solve_observed(from, to, &mut NoopObserver)
    }

    /// [`solve`](Self::solve), reporting search events to `observer`
    pub fn solve_observed<O>(&self, from: &str, to: &str, observer: &mut O) -> PathState
    where
        O: SearchObserver + ?Sized,
    {
        let from = from.trim().to_ascii_lowercase();
        let to = to.trim().to_ascii_lowercase();

        for word in [&from, &to] {
            if !self.lexicon.is_word(word) {
                debug!(word = %word, "rejected solve: not a word");
                let failed = PathState::new(from.as_str(), to.as_str())
                    .with_error(SolveError::NotAWord(word.clone()));
                observer.on_finish(&failed);
                return failed;
            }
        }

        self.search(PathState::new(from, to), observer)
    }

    /// Continue an existing chain to its target
    ///
    /// The search frontier starts from `partial` as-is, so the result always
    /// begins with `partial`'s words. A state that already carries an error
    /// is returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordchain::core::PathState;
    /// use wordchain::lexicon::Lexicon;
    /// use wordchain::solver::Solver;
    ///
    /// let lexicon = Lexicon::from_words(["bat", "bad", "cat", "cad", "scad"]);
    /// let partial = PathState::new("bat", "scad").with_word("cat");
    /// let result = Solver::new(&lexicon).resolve(&partial);
    ///
    /// assert_eq!(result.words(), ["bat", "cat", "cad", "scad"]);
    /// ```
    #[must_use]
    pub fn resolve(&self, partial: &PathState) -> PathState {
        self.resolve_observed(partial, &mut NoopObserver)
    }

    /// [`resolve`](Self::resolve), reporting search events to `observer`
    pub fn resolve_observed<O>(&self, partial: &PathState, observer: &mut O) -> PathState
    where
        O: SearchObserver + ?Sized,
    {
        if !partial.success() {
            return partial.clone();
        }
        self.search(partial.clone(), observer)
    }

    fn search<O>(&self, start: PathState, observer: &mut O) -> PathState
    where
        O: SearchObserver + ?Sized,
    {
        debug!(
            from = start.last_word(),
            to = start.target(),
            mode = %self.config.mode,
            "starting search"
        );

        if !self.target_reachable(&start) {
            debug!("target outside the words reachable from the chain");
            let failed = start.with_error(SolveError::NoSolution);
            observer.on_finish(&failed);
            return failed;
        }

        let mut working = match self.config.mode {
            SearchMode::PerPath => None,
            SearchMode::Consuming => {
                let mut working = self.lexicon.working_copy();
                for word in start.words() {
                    if working.contains_folded(word) {
                        working.remove(word);
                    }
                }
                Some(working)
            }
        };

        let mut memo = DistanceMemo::new(start.target());
        let mut frontier = BinaryHeap::new();
        let mut seq = 0;
        let mut expansions = 0;

        frontier.push(FrontierEntry {
            priority: start.priority(),
            seq,
            state: start.clone(),
        });

        while let Some(FrontierEntry { state, .. }) = frontier.pop() {
            if state.last_word() == state.target() {
                debug!(
                    steps = state.num_steps(),
                    expansions,
                    cached_distances = memo.len(),
                    "search solved"
                );
                observer.on_finish(&state);
                return state;
            }

            if let Some(limit) = self.config.max_expansions.filter(|&limit| expansions >= limit) {
                debug!(limit, "search limit reached");
                let failed = start.with_error(SolveError::SearchLimit(limit));
                observer.on_finish(&failed);
                return failed;
            }

            observer.on_expand(&state, frontier.len());
            expansions += 1;
            if expansions % PROGRESS_INTERVAL == 0 {
                debug!(expansions, frontier = frontier.len(), "search progress");
            }

            let candidates = match &working {
                Some(working) => working.find_next_words(state.last_word()),
                None => self.lexicon.find_next_words(state.last_word()),
            };
            trace!(word = state.last_word(), candidates = candidates.len(), "expanding");

            for word in candidates {
                if state.contains(&word) {
                    continue;
                }
                if let Some(working) = working.as_mut() {
                    working.remove(&word);
                }

                seq += 1;
                let next = state.branch(&word, &mut memo);
                observer.on_push(&next, frontier.len() + 1);
                frontier.push(FrontierEntry {
                    priority: next.priority(),
                    seq,
                    state: next,
                });
            }
        }

        debug!(expansions, "search exhausted");
        let failed = start.with_error(SolveError::NoSolution);
        observer.on_finish(&failed);
        failed
    }

    /// Breadth-first check that the target can be reached from the chain's
    /// last word without passing through any earlier chain word
    ///
    /// A path found here is itself a valid continuation, so `false` means
    /// the best-first search could only end in [`SolveError::NoSolution`].
    fn target_reachable(&self, start: &PathState) -> bool {
        if start.last_word() == start.target() {
            return true;
        }

        let mut seen: FxHashSet<String> = start.words().iter().cloned().collect();
        let mut queue = VecDeque::from([start.last_word().to_string()]);

        while let Some(word) = queue.pop_front() {
            for next in self.lexicon.find_next_words(&word) {
                if !seen.insert(next.clone()) {
                    continue;
                }
                if next == start.target() {
                    return true;
                }
                queue.push_back(next);
            }
        }

        trace!(visited = seen.len(), "target not reachable");
        false
    }
}

/// Find a chain from `from` to `to` with the default configuration
#[must_use]
pub fn solve(lexicon: &Lexicon, from: &str, to: &str) -> PathState {
    Solver::new(lexicon).solve(from, to)
}

/// Continue `partial` to its target with the default configuration
#[must_use]
pub fn resolve(lexicon: &Lexicon, partial: &PathState) -> PathState {
    Solver::new(lexicon).resolve(partial)
}
