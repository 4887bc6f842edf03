//! Simple interactive CLI mode
//!
//! Text-based game without the TUI

use crate::game::{GameSession, MoveRating, PlayerMove, Row};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How a line-mode game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleOutcome {
    Solved { steps: usize },
    Quit,
    /// Input ran out before the puzzle was solved
    Abandoned,
    /// The puzzle had no solution to play toward
    Invalid,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// the board.
pub fn run_simple(game: &mut GameSession<'_>) -> Result<SimpleOutcome, String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Drive a game from any line source
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub fn play_lines<R: BufRead, W: Write>(
    game: &mut GameSession<'_>,
    input: R,
    mut out: W,
) -> io::Result<SimpleOutcome> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Chain - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    if let Some(error) = game.get_error() {
        writeln!(out, "❌ {error}")?;
        return Ok(SimpleOutcome::Invalid);
    }

    writeln!(
        out,
        "Get from {} to {}, one letter at a time.",
        game.start().to_uppercase(),
        game.target().to_uppercase()
    )?;
    writeln!(out, "Reply with a letter (replace), a number (delete), 'slot,letter' (insert) or a word.")?;
    writeln!(out, "Commands: 'quit' to exit, 'undo' to take back a move\n")?;

    let mut lines = input.lines();

    loop {
        write_board(game, &mut out)?;

        if game.is_solved() {
            let steps = game.steps_taken();
            writeln!(out, "\n{}", format!("🎉 Solved in {steps} steps!").green().bold())?;
            return Ok(SimpleOutcome::Solved { steps });
        }

        if let Some(hint) = game.next_word_hint() {
            write!(out, "{hint}: ")?;
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(SimpleOutcome::Abandoned);
        };
        let line = line?;

        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(SimpleOutcome::Quit);
            }
            "undo" | "u" => {
                if game.undo() {
                    writeln!(out, "✓ Undone!\n")?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
                continue;
            }
            _ => {}
        }

        let Some(player_move) = PlayerMove::parse(&line) else {
            writeln!(out, "❌ bad input; try again\n")?;
            continue;
        };

        match game.apply(&player_move) {
            Ok(rating) => writeln!(out, "{}\n", rating_text(rating))?,
            Err(e) => writeln!(out, "❌ {e}\n")?,
        }
    }
}

fn write_board<W: Write>(game: &GameSession<'_>, out: &mut W) -> io::Result<()> {
    for row in game.rows() {
        let text = row.text().to_uppercase();
        match row {
            Row::Played(_) => writeln!(out, "  {}", text.bright_white().bold())?,
            Row::Hidden(_) => writeln!(out, "  {}", text.bright_black())?,
            Row::Target(_) => writeln!(out, "  {}", text.bright_yellow().bold())?,
        }
    }
    Ok(())
}

fn rating_text(rating: MoveRating) -> String {
    match rating {
        MoveRating::Expected | MoveRating::Ok => format!("{}", "✓ OK".green()),
        MoveRating::Genius => format!("{}", "✨ GENIUS! That was shorter".bright_green().bold()),
        MoveRating::Wrong => format!("{}", "✗ WRONG: one step longer".yellow()),
        MoveRating::Dodo => format!("{}", "🦤 DODO: two or more steps longer".red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn small_lexicon() -> Lexicon {
        Lexicon::from_words([
            "bad", "bade", "bald", "bat", "bate", "bid", "cad", "cat", "dog", "scad",
        ])
    }

    fn play(game: &mut GameSession<'_>, script: &str) -> (SimpleOutcome, String) {
        let mut out = Vec::new();
        let outcome = play_lines(game, script.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn scripted_game_solves() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bad", "scad");

        let (outcome, output) = play(&mut game, "c\n0,s\n");
        assert_eq!(outcome, SimpleOutcome::Solved { steps: 2 });
        assert!(output.contains("give replacement letter"));
    }

    #[test]
    fn bad_input_is_reported() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bad", "scad");

        let (outcome, output) = play(&mut game, "b4d\nzzz\n");
        assert_eq!(outcome, SimpleOutcome::Abandoned);
        assert!(output.contains("bad input"));
        assert!(output.contains("zzz is not a word."));
        assert_eq!(game.steps_taken(), 0);
    }

    #[test]
    fn undo_and_quit() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bat", "scad");

        let (outcome, output) = play(&mut game, "cat\nundo\nquit\n");
        assert_eq!(outcome, SimpleOutcome::Quit);
        assert!(output.contains("Undone!"));
        assert_eq!(game.steps_taken(), 0);
    }

    #[test]
    fn invalid_puzzle_stops_early() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bat", "dog");

        let (outcome, output) = play(&mut game, "c\n");
        assert_eq!(outcome, SimpleOutcome::Invalid);
        assert!(output.contains("No solution"));
    }
}
