//! Chain solving command
//!
//! Solves one start/target pair and reports the chain with search counters.

use crate::core::PathState;
use crate::solver::{SearchStats, Solver};
use std::time::{Duration, Instant};

/// Result of solving one pair
pub struct SolveResult {
    pub from: String,
    pub to: String,
    pub chain: PathState,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.chain.is_solved()
    }
}

/// Solve `from` to `to`, recording search statistics
///
/// # Examples
/// ```
/// use wordchain::commands::solve_chain;
/// use wordchain::lexicon::Lexicon;
/// use wordchain::solver::Solver;
///
/// let lexicon = Lexicon::from_words(["bad", "bade"]);
/// let result = solve_chain(&Solver::new(&lexicon), "bad", "bade");
/// assert!(result.success());
/// ```
#[must_use]
pub fn solve_chain(solver: &Solver<'_>, from: &str, to: &str) -> SolveResult {
    let start = Instant::now();
    let mut stats = SearchStats::default();
    let chain = solver.solve_observed(from, to, &mut stats);

    SolveResult {
        from: from.to_string(),
        to: to.to_string(),
        chain,
        stats,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SolveError;
    use crate::lexicon::Lexicon;

    fn small_lexicon() -> Lexicon {
        Lexicon::from_words([
            "bad", "bade", "bald", "bat", "bate", "bid", "cad", "cat", "dog", "scad",
        ])
    }

    #[test]
    fn solve_chain_succeeds() {
        let lexicon = small_lexicon();
        let result = solve_chain(&Solver::new(&lexicon), "bat", "scad");

        assert!(result.success());
        assert_eq!(result.chain.num_steps(), 3);
        assert_eq!(result.stats.searches, 1);
        assert_eq!(result.stats.solved, 1);
        assert!(result.stats.expanded >= 3);
    }

    #[test]
    fn solve_chain_reports_failure() {
        let lexicon = small_lexicon();
        let result = solve_chain(&Solver::new(&lexicon), "bat", "dog");

        assert!(!result.success());
        assert_eq!(result.chain.error(), Some(&SolveError::NoSolution));
        assert_eq!(result.stats.solved, 0);
    }

    #[test]
    fn solve_chain_rejects_unknown_words() {
        let lexicon = small_lexicon();
        let result = solve_chain(&Solver::new(&lexicon), "qqq", "bat");

        assert!(!result.success());
        assert_eq!(result.stats.expanded, 0);
    }
}
