//! Benchmark command
//!
//! Solves many random word pairs in parallel. Each solve borrows the lexicon
//! read-only and owns its frontier, so pairs are independent.

use crate::lexicon::Lexicon;
use crate::solver::{SearchStats, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub solved: usize,
    pub average_steps: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    /// Chain length in steps -> solved pairs
    pub distribution: BTreeMap<usize, usize>,
    pub stats: SearchStats,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total_pairs - self.solved
    }
}

/// Draw `count` random start/target pairs of distinct words
///
/// Returns an empty list if the lexicon has fewer than two words.
pub fn random_pairs<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    count: usize,
    rng: &mut R,
) -> Vec<(String, String)> {
    let words = lexicon.sorted_words();
    if words.len() < 2 {
        return Vec::new();
    }

    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let mut picked = words.choose_multiple(rng, 2);
        if let (Some(from), Some(to)) = (picked.next(), picked.next()) {
            pairs.push(((*from).to_string(), (*to).to_string()));
        }
    }
    pairs
}

/// Solve every pair in parallel
pub fn run_benchmark(solver: &Solver<'_>, pairs: &[(String, String)], show_progress: bool) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let outcomes: Vec<(Option<usize>, SearchStats)> = pairs
        .par_iter()
        .map(|(from, to)| {
            let mut stats = SearchStats::default();
            let chain = solver.solve_observed(from, to, &mut stats);
            pb.inc(1);
            (chain.is_solved().then_some(chain.num_steps()), stats)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut stats = SearchStats::default();
    let mut distribution = BTreeMap::new();
    for (steps, pair_stats) in &outcomes {
        stats.merge(pair_stats);
        if let Some(steps) = steps {
            *distribution.entry(*steps).or_insert(0) += 1;
        }
    }

    let solved: usize = distribution.values().sum();
    let total_steps: usize = distribution.iter().map(|(steps, count)| steps * count).sum();

    BenchmarkResult {
        total_pairs: pairs.len(),
        solved,
        average_steps: if solved > 0 {
            total_steps as f64 / solved as f64
        } else {
            0.0
        },
        min_steps: distribution.keys().next().copied().unwrap_or(0),
        max_steps: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        stats,
        duration,
        pairs_per_second: pairs.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
