//! TUI application state and logic

use crate::commands::{RANDOM_ATTEMPTS, random_puzzle};
use crate::game::{GameSession, HintStyle, MoveRating, PlayerMove};
use crate::lexicon::Lexicon;
use crate::solver::{PuzzleBounds, Solver, SolverConfig};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub lexicon: &'a Lexicon,
    pub config: SolverConfig,
    pub hint_style: HintStyle,
    pub game: Option<GameSession<'a>>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub last_rating: Option<MoveRating>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a start and target, or Enter for a random puzzle
    Setup,
    Playing,
    Solved,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_solved: usize,
    pub moves: usize,
    pub good_moves: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, config: SolverConfig, hint_style: HintStyle) -> Self {
        Self {
            lexicon,
            config,
            hint_style,
            game: None,
            input_mode: InputMode::Setup,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Type 'start target' and press Enter, or just Enter for a random puzzle."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            last_rating: None,
            should_quit: false,
        }
    }

    /// Start a puzzle; returns whether it can be played
    pub fn start_game(&mut self, from: &str, to: &str) -> bool {
        let solver = Solver::with_config(self.lexicon, self.config);
        let game = GameSession::with_solver(solver, from, to).with_hint_style(self.hint_style);

        if let Some(error) = game.get_error() {
            self.add_message(&error.to_string(), MessageStyle::Error);
            return false;
        }

        self.add_message(
            &format!(
                "{} → {}: {} steps",
                game.start().to_uppercase(),
                game.target().to_uppercase(),
                game.steps_remaining()
            ),
            MessageStyle::Info,
        );
        self.game = Some(game);
        self.stats.total_games += 1;
        self.last_rating = None;
        self.input_mode = InputMode::Playing;
        true
    }

    /// Start a random practice puzzle
    pub fn random_game(&mut self) -> bool {
        let puzzle = random_puzzle(
            self.lexicon,
            PuzzleBounds::default(),
            RANDOM_ATTEMPTS,
            &mut rand::rng(),
        );

        if let Some(puzzle) = puzzle {
            self.start_game(puzzle.first_word(), puzzle.last_word())
        } else {
            self.add_message("No puzzle found in this word list", MessageStyle::Error);
            false
        }
    }

    /// Handle Enter for the current mode
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.input_mode {
            InputMode::Setup => self.submit_setup(&input),
            InputMode::Playing => self.submit_move(&input),
            InputMode::Solved => {}
        }
    }

    fn submit_setup(&mut self, input: &str) {
        let words: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .collect();

        match words.as_slice() {
            [] => {
                self.random_game();
            }
            [from, to] => {
                self.start_game(from, to);
            }
            _ => self.add_message("Give a start and a target word", MessageStyle::Error),
        }
    }

    fn submit_move(&mut self, input: &str) {
        let Some(player_move) = PlayerMove::parse(input) else {
            self.add_message("Bad input; try a letter, a number, 'slot,letter' or a word", MessageStyle::Error);
            return;
        };
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.apply(&player_move) {
            Ok(rating) => {
                let solved = game.is_solved();
                let steps = game.steps_taken();
                let last = game.progress().last_word().to_uppercase();

                self.stats.moves += 1;
                if rating.is_good() {
                    self.stats.good_moves += 1;
                }
                self.last_rating = Some(rating);

                let style = if rating.is_good() {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&format!("{last}: {rating}"), style);

                if solved {
                    self.stats.games_solved += 1;
                    self.input_mode = InputMode::Solved;
                    self.add_message(&format!("🎉 SOLVED in {steps} steps! 🎉"), MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn undo_last(&mut self) {
        let undone = self.game.as_mut().is_some_and(GameSession::undo);
        if undone {
            self.input_mode = InputMode::Playing;
            self.last_rating = None;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn new_game(&mut self) {
        self.game = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.last_rating = None;
        self.input_mode = InputMode::Setup;
        self.add_message(
            "New game! Type 'start target', or Enter for a random puzzle.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Char('n')) if ctrl => self.new_game(),
            (_, KeyCode::Char('u')) if ctrl => self.undo_last(),
            (InputMode::Solved, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::Solved, KeyCode::Char('n')) => self.new_game(),
            (InputMode::Solved, KeyCode::Char('u')) => self.undo_last(),
            (InputMode::Solved, _) => {}
            (_, KeyCode::Char(c)) => self.input_buffer.push(c),
            (_, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (_, KeyCode::Enter) => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
