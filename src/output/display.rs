//! Display functions for command results

use super::formatters::{chain_arrow, create_progress_bar, word_list};
use crate::commands::{AnalysisResult, BenchmarkResult, PuzzleReport, SolveResult};
use crate::core::UNREACHABLE_DISTANCE;
use colored::Colorize;

/// Print the result of solving a pair
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        result.from.to_uppercase().bright_yellow().bold(),
        result.to.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.success() {
        println!("\n{}", chain_arrow(result.chain.words()));
    }

    if verbose {
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Expanded:       {}", result.stats.expanded);
        println!("   Pushed:         {}", result.stats.pushed);
        println!("   Peak frontier:  {}", result.stats.peak_frontier);
        println!("   Time taken:     {:.2}ms", result.duration.as_secs_f64() * 1000.0);
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} steps!", result.chain.num_steps())
                .green()
                .bold()
        );
    } else {
        let reason = result
            .chain
            .error()
            .map_or_else(|| "No solution".to_string(), ToString::to_string);
        println!("{}", format!("❌ {reason}").red().bold());
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBOURS OF".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔗 {} one-edit neighbours:", result.degree());
    println!("   Insert:  {}", word_list(&result.adders));
    println!("   Delete:  {}", word_list(&result.removers));
    println!("   Replace: {}", word_list(&result.replacements));

    if let Some((target, distance)) = &result.target {
        let distance_text = if *distance >= UNREACHABLE_DISTANCE {
            "unreachable in one length step".to_string()
        } else {
            format!("{distance} edits")
        };
        println!(
            "\n🎯 Distance to {}: {}",
            target.to_uppercase(),
            distance_text.bright_yellow()
        );
    }
}

/// Print discovered puzzles
pub fn print_puzzle_report(report: &PuzzleReport, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLES FROM".bright_cyan().bold(),
        report.start.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n{} chains of {}-{} words, dipping to ≤{} letters and reaching ≥{}",
        report.puzzles.len(),
        report.bounds.min_words,
        report.bounds.max_words,
        report.bounds.low_len,
        report.bounds.high_len
    );

    for (i, puzzle) in report.puzzles.iter().take(limit).enumerate() {
        println!(
            "   {:>3}. {} {}",
            i + 1,
            chain_arrow(puzzle.words()),
            format!("[{} steps]", puzzle.num_steps()).bright_black()
        );
    }

    if report.puzzles.len() > limit {
        println!("   ... and {} more", report.puzzles.len() - limit);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   No solution:      {}",
        format!("{}", result.failed()).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps)
            .bright_yellow()
            .bold()
    );
    println!("   Shortest:         {}", result.min_steps);
    println!("   Longest:          {}", result.max_steps);
    println!("   Nodes expanded:   {}", result.stats.expanded);
    println!("   Peak frontier:    {}", result.stats.peak_frontier);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&steps, &count) in &result.distribution {
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {steps:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
