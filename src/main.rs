//! Word Chain - CLI
//!
//! Word-ladder solver and puzzle game with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordchain::{
    commands::{
        RANDOM_ATTEMPTS, SimpleOutcome, analyze_word, discover_puzzles, random_pairs,
        random_puzzle, run_benchmark, run_simple, solve_chain,
    },
    game::{GameSession, HintStyle},
    lexicon::{Lexicon, LexiconConfig, loader},
    output::{
        print_analysis_result, print_benchmark_result, print_puzzle_report, print_solve_result,
    },
    solver::{DEFAULT_MAX_EXPANSIONS, PuzzleBounds, SearchMode, Solver, SolverConfig},
};

#[derive(Parser)]
#[command(
    name = "wordchain",
    about = "Word-ladder solver and puzzle game: change, add or drop one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'default' (built-in list) or path to a word-per-line file
    #[arg(short, long, global = true, default_value = "default")]
    dictionary: String,

    /// Longest word kept from the dictionary
    #[arg(long, global = true, default_value_t = wordchain::core::MAX_WORD_LEN)]
    max_length: usize,

    /// Search mode: per-path (default) or consuming
    #[arg(short, long, global = true, default_value = "per-path")]
    mode: String,

    /// Give up a search after this many expansions (0 for no limit)
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_EXPANSIONS)]
    max_expansions: usize,

    /// Hint style for games: revealing (default) or masked
    #[arg(long, global = true, default_value = "revealing")]
    hint_style: String,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Start word; with a target, skips the setup prompt
        from: Option<String>,
        to: Option<String>,
    },

    /// Line-based game without the TUI
    Simple {
        /// Start word
        from: String,
        /// Target word
        to: String,
    },

    /// Find the shortest chain between two words
    Solve {
        from: String,
        to: String,

        /// Show search statistics
        #[arg(short, long)]
        stats: bool,
    },

    /// List the one-edit neighbours of a word
    Analyze {
        word: String,

        /// Also report the distance heuristic to this word
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Discover practice puzzles from a start word
    Puzzles {
        /// Start word (ignored with --random)
        start: Option<String>,

        /// Shortest word must be at most this long
        #[arg(long, default_value = "3")]
        low: usize,

        /// Longest word must be at least this long
        #[arg(long, default_value = "4")]
        high: usize,

        /// Fewest words per chain
        #[arg(long, default_value = "4")]
        min_words: usize,

        /// Most words per chain
        #[arg(long, default_value = "7")]
        max_words: usize,

        /// Pick one puzzle from a random start word
        #[arg(short, long)]
        random: bool,

        /// Puzzles to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Benchmark solver performance on random pairs
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible pairs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "wordchain=warn",
        1 => "wordchain=debug",
        _ => "wordchain=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the lexicon named by the -d flag
fn load_lexicon(dictionary: &str, max_length: usize) -> Result<Lexicon> {
    let config = LexiconConfig::with_max_len(max_length);

    let lexicon = match dictionary {
        "default" => loader::default_lexicon(config),
        path => loader::load_from_file(path, config)
            .with_context(|| format!("failed to read dictionary {path}"))?,
    };

    if lexicon.is_empty() {
        bail!("dictionary {dictionary} has no usable words");
    }
    debug!(words = lexicon.len(), dictionary, "lexicon loaded");
    Ok(lexicon)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lexicon = load_lexicon(&cli.dictionary, cli.max_length)?;
    let max_expansions = (cli.max_expansions > 0).then_some(cli.max_expansions);
    let config = SolverConfig::new(SearchMode::from_name(&cli.mode), max_expansions);
    let hint_style = HintStyle::from_name(&cli.hint_style);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { from: None, to: None });

    match command {
        Commands::Play { from, to } => run_play_command(&lexicon, config, hint_style, from, to),
        Commands::Simple { from, to } => {
            run_simple_command(&lexicon, config, hint_style, &from, &to)
        }
        Commands::Solve { from, to, stats } => {
            let solver = Solver::with_config(&lexicon, config);
            let result = solve_chain(&solver, &from, &to);
            print_solve_result(&result, stats);
            Ok(())
        }
        Commands::Analyze { word, target } => {
            let result =
                analyze_word(&lexicon, &word, target.as_deref()).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Puzzles {
            start,
            low,
            high,
            min_words,
            max_words,
            random,
            limit,
        } => {
            let bounds = PuzzleBounds::new(low, high, min_words, max_words);
            run_puzzles_command(&lexicon, start.as_deref(), bounds, random, limit)
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&lexicon, config, count, seed);
            Ok(())
        }
    }
}

fn run_puzzles_command(
    lexicon: &Lexicon,
    start: Option<&str>,
    bounds: PuzzleBounds,
    random: bool,
    limit: usize,
) -> Result<()> {
    if random {
        let puzzle = random_puzzle(lexicon, bounds, RANDOM_ATTEMPTS, &mut rand::rng())
            .context("no puzzle found within the bounds")?;
        println!(
            "{} → {} ({} steps)",
            puzzle.first_word().to_uppercase(),
            puzzle.last_word().to_uppercase(),
            puzzle.num_steps()
        );
        return Ok(());
    }

    let Some(start) = start else {
        bail!("give a start word or --random");
    };
    let report = discover_puzzles(lexicon, start, bounds).map_err(|e| anyhow::anyhow!(e))?;
    print_puzzle_report(&report, limit);
    Ok(())
}

fn run_benchmark_command(lexicon: &Lexicon, config: SolverConfig, count: usize, seed: Option<u64>) {
    println!("Running benchmark on {count} random pairs ({} mode)...", config.mode);

    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let pairs = random_pairs(lexicon, count, &mut rng);

    let solver = Solver::with_config(lexicon, config);
    let result = run_benchmark(&solver, &pairs, true);
    print_benchmark_result(&result);
}

fn run_simple_command(
    lexicon: &Lexicon,
    config: SolverConfig,
    hint_style: HintStyle,
    from: &str,
    to: &str,
) -> Result<()> {
    let solver = Solver::with_config(lexicon, config);
    let mut game = GameSession::with_solver(solver, from, to).with_hint_style(hint_style);

    match run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))? {
        SimpleOutcome::Invalid => bail!("{from} → {to} cannot be played"),
        _ => Ok(()),
    }
}

fn run_play_command(
    lexicon: &Lexicon,
    config: SolverConfig,
    hint_style: HintStyle,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    use wordchain::interactive::{App, run_tui};

    let mut app = App::new(lexicon, config, hint_style);
    if let (Some(from), Some(to)) = (from, to) {
        app.start_game(&from, &to);
    }
    run_tui(app)
}
