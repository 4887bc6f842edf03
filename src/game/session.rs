//! Interactive play against a live solution
//!
//! The player commits words one edit at a time (`progress`). After every
//! accepted move the solver re-runs from the whole of `progress`, so
//! `reference` is always a full solution whose prefix is exactly the words
//! played so far.

use super::error::{MoveError, MoveRating};
use super::hint::{Hint, HintStyle, Row, shape};
use crate::core::{PathState, SolveError, is_edit_letter};
use crate::lexicon::Lexicon;
use crate::solver::Solver;
use tracing::debug;

/// A snapshot restored by [`GameSession::undo`]
#[derive(Debug, Clone)]
struct Snapshot {
    progress: PathState,
    reference: PathState,
}

/// One puzzle being played
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    solver: Solver<'a>,
    start: String,
    target: String,
    progress: PathState,
    reference: PathState,
    /// Outcome of the solve made when the puzzle was set
    start_error: Option<SolveError>,
    history: Vec<Snapshot>,
    hint_style: HintStyle,
}

impl<'a> GameSession<'a> {
    /// Start a puzzle with the default solver settings
    ///
    /// The initial solve runs immediately; check [`is_valid`](Self::is_valid)
    /// before playing.
    ///
    /// # Examples
    /// ```
    /// use wordchain::game::GameSession;
    /// use wordchain::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["bad", "cad", "scad"]);
    /// let mut game = GameSession::new(&lexicon, "bad", "scad");
    /// assert!(game.is_valid());
    ///
    /// game.replace(0, 'c').unwrap();
    /// game.insert(0, 's').unwrap();
    /// assert!(game.is_solved());
    /// ```
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, start: &str, target: &str) -> Self {
        Self::with_solver(Solver::new(lexicon), start, target)
    }

    /// Start a puzzle with a configured solver
    #[must_use]
    pub fn with_solver(solver: Solver<'a>, start: &str, target: &str) -> Self {
        let start = start.trim().to_ascii_lowercase();
        let target = target.trim().to_ascii_lowercase();
        let reference = solver.solve(&start, &target);
        let progress = PathState::new(start.as_str(), target.as_str());
        let start_error = reference.error().cloned();

        debug!(start = %start, target = %target, error = ?start_error, "new game");

        Self {
            solver,
            start,
            target,
            progress,
            reference,
            start_error,
            history: Vec::new(),
            hint_style: HintStyle::default(),
        }
    }

    #[must_use]
    pub fn with_hint_style(mut self, hint_style: HintStyle) -> Self {
        self.hint_style = hint_style;
        self
    }

    /// A solution existed when the puzzle started
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.start_error.is_none()
    }

    /// The last committed word is the target
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.progress.last_word() == self.target
    }

    /// Why the puzzle has no solution, if it has none
    #[must_use]
    pub const fn get_error(&self) -> Option<&SolveError> {
        self.start_error.as_ref()
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Words committed so far, starting with the start word
    #[must_use]
    pub const fn progress(&self) -> &PathState {
        &self.progress
    }

    /// The current full solution consistent with [`progress`](Self::progress)
    #[must_use]
    pub const fn reference(&self) -> &PathState {
        &self.reference
    }

    #[must_use]
    pub const fn hint_style(&self) -> HintStyle {
        self.hint_style
    }

    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.progress.num_steps()
    }

    /// Edits left along the current solution
    #[must_use]
    pub fn steps_remaining(&self) -> usize {
        if !self.reference.success() {
            return 0;
        }
        self.reference.num_words().saturating_sub(self.progress.num_words())
    }

    /// Change the letter at `index` (0-based) to `letter`
    ///
    /// # Errors
    ///
    /// Rejects the move if the index is out of range, `letter` is not a-z,
    /// the letter is unchanged or the new word is not a playable word.
    pub fn replace(&mut self, index: usize, letter: char) -> Result<MoveRating, MoveError> {
        self.ensure_playable()?;
        let last = self.progress.last_word();
        check_index(last, index, last.len())?;
        let letter = check_letter(letter)?;

        let mut word = String::with_capacity(last.len());
        word.push_str(&last[..index]);
        word.push(letter);
        word.push_str(&last[index + 1..]);

        if word == last {
            return Err(MoveError::NotOneStep {
                from: last.to_string(),
                word,
            });
        }
        self.add_word_if_exists(&word)
    }

    /// Delete the letter at `index` (0-based)
    ///
    /// # Errors
    ///
    /// Rejects the move if the index is out of range or the shorter word is
    /// not a playable word.
    pub fn remove(&mut self, index: usize) -> Result<MoveRating, MoveError> {
        self.ensure_playable()?;
        let last = self.progress.last_word();
        check_index(last, index, last.len())?;

        let word = format!("{}{}", &last[..index], &last[index + 1..]);
        self.add_word_if_exists(&word)
    }

    /// Insert `letter` before position `index` (0-based, `len` appends)
    ///
    /// # Errors
    ///
    /// Rejects the move if the slot is out of range, `letter` is not a-z or
    /// the longer word is not a playable word.
    pub fn insert(&mut self, index: usize, letter: char) -> Result<MoveRating, MoveError> {
        self.ensure_playable()?;
        let last = self.progress.last_word();
        check_index(last, index, last.len() + 1)?;
        let letter = check_letter(letter)?;

        let mut word = String::with_capacity(last.len() + 1);
        word.push_str(&last[..index]);
        word.push(letter);
        word.push_str(&last[index..]);

        self.add_word_if_exists(&word)
    }

    /// Play a whole word
    ///
    /// # Errors
    ///
    /// Rejects the word if it is not exactly one edit from the last word, or
    /// for any reason [`add_word_if_exists`](Self::add_word_if_exists) would.
    pub fn play_word(&mut self, word: &str) -> Result<MoveRating, MoveError> {
        self.ensure_playable()?;
        let word = word.trim().to_ascii_lowercase();
        let last = self.progress.last_word();

        if !self.solver.lexicon().is_word(&word) {
            return Err(MoveError::NotAWord(word));
        }
        if !self.solver.lexicon().is_one_step(last, &word) {
            return Err(MoveError::NotOneStep {
                from: last.to_string(),
                word,
            });
        }
        self.add_word_if_exists(&word)
    }

    /// Commit `word` and re-solve from the new progress
    ///
    /// The word is appended only if it is in the lexicon and the target can
    /// still be reached from it. On rejection nothing changes.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotAWord`] for words outside the lexicon,
    /// [`MoveError::DeadEnd`] when no solution continues from `word` and
    /// [`MoveError::SearchLimit`] when the solver's budget ran out first.
    pub fn add_word_if_exists(&mut self, word: &str) -> Result<MoveRating, MoveError> {
        self.ensure_playable()?;
        let word = word.to_ascii_lowercase();

        if !self.solver.lexicon().is_word(&word) {
            debug!(word = %word, "rejected move: not a word");
            return Err(MoveError::NotAWord(word));
        }

        let progress = self.progress.with_word(&word);
        let reference = self.solver.resolve(&progress);

        if let Some(error) = reference.error() {
            debug!(word = %word, ?error, "rejected move: no continuation");
            return Err(match error {
                SolveError::SearchLimit(limit) => MoveError::SearchLimit {
                    word,
                    limit: *limit,
                },
                SolveError::NoSolution | SolveError::NotAWord(_) => MoveError::DeadEnd {
                    word,
                    target: self.target.clone(),
                },
            });
        }

        let expected = self.reference.nth_word(self.progress.num_words()) == Some(word.as_str());
        let rating = MoveRating::from_steps(expected, self.reference.num_steps(), reference.num_steps());

        debug!(
            word = %word,
            ?rating,
            remaining = reference.num_words() - progress.num_words(),
            "accepted move"
        );

        let previous = Snapshot {
            progress: std::mem::replace(&mut self.progress, progress),
            reference: std::mem::replace(&mut self.reference, reference),
        };
        self.history.push(previous);

        Ok(rating)
    }

    /// Take back the last accepted move
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.progress = snapshot.progress;
        self.reference = snapshot.reference;
        debug!(last = self.progress.last_word(), "undo");
        true
    }

    /// Accepted moves that can be undone
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// The hint for the next required edit
    ///
    /// `None` once solved, or when the puzzle has no solution.
    ///
    /// # Examples
    /// ```
    /// use wordchain::game::{GameSession, MoveKind};
    /// use wordchain::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["bad", "cad", "scad"]);
    /// let game = GameSession::new(&lexicon, "bad", "scad");
    ///
    /// let hint = game.next_word_hint().unwrap();
    /// assert_eq!(hint.kind, MoveKind::Replace);
    /// assert_eq!(hint.text, "?ad");
    /// ```
    #[must_use]
    pub fn next_word_hint(&self) -> Option<Hint> {
        if self.is_solved() || !self.reference.success() {
            return None;
        }
        let next = self.reference.nth_word(self.progress.num_words())?;
        Hint::between(self.progress.last_word(), next, self.hint_style)
    }

    /// The board: played words, unplayed shapes, then the target
    ///
    /// A failed puzzle shows only its start and target.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = self
            .progress
            .words()
            .iter()
            .cloned()
            .map(Row::Played)
            .collect();

        if self.is_solved() {
            return rows;
        }

        if self.reference.success() {
            let words = self.reference.words();
            let last = words.len().saturating_sub(1);
            for i in self.progress.num_words()..last {
                rows.push(Row::Hidden(shape(&words[i], &words[i - 1])));
            }
        }

        rows.push(Row::Target(self.target.clone()));
        rows
    }

    fn ensure_playable(&self) -> Result<(), MoveError> {
        if let Some(error) = &self.start_error {
            return Err(MoveError::NoPuzzle(error.clone()));
        }
        if self.is_solved() {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }
}

fn check_index(word: &str, index: usize, bound: usize) -> Result<(), MoveError> {
    if index < bound {
        Ok(())
    } else {
        Err(MoveError::IndexOutOfRange {
            index,
            word: word.to_string(),
        })
    }
}

fn check_letter(letter: char) -> Result<char, MoveError> {
    if is_edit_letter(letter) {
        Ok(letter.to_ascii_lowercase())
    } else {
        Err(MoveError::InvalidLetter(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MoveKind;
    use crate::lexicon::{LexiconConfig, loader};
    use crate::solver::{SearchMode, SolverConfig};

    fn small_lexicon() -> Lexicon {
        Lexicon::from_words([
            "bad", "bade", "bald", "bat", "bate", "bid", "cad", "cat", "dog", "scad",
        ])
    }

    fn assert_prefix_invariant(game: &GameSession<'_>) {
        let played = game.progress().words();
        assert_eq!(&game.reference().words()[..played.len()], played);
    }

    #[test]
    fn new_game_is_valid() {
        let lexicon = small_lexicon();
        let game = GameSession::new(&lexicon, "scad", "bat");
        assert!(game.is_valid());
        assert!(!game.is_solved());
        assert_eq!(game.get_error(), None);
        assert_eq!(game.steps_taken(), 0);
        assert_eq!(game.steps_remaining(), 3);
    }

    #[test]
    fn remove_first_letter() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "scad", "bat");

        assert_eq!(game.remove(0), Ok(MoveRating::Expected));
        assert_eq!(game.progress().last_word(), "cad");
        assert_prefix_invariant(&game);
    }

    #[test]
    fn remove_to_non_word_is_rejected() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "scad", "bat");
        let before = game.clone();

        assert_eq!(game.remove(2), Err(MoveError::NotAWord("scd".to_string())));
        assert_eq!(game.progress(), before.progress());
        assert_eq!(game.reference(), before.reference());
    }

    #[test]
    fn insert_changes_reference() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bad", "cat");
        assert_eq!(game.reference().words(), ["bad", "bat", "cat"]);

        assert_eq!(game.insert(3, 'e'), Ok(MoveRating::Dodo));
        assert_eq!(game.reference().words(), ["bad", "bade", "bate", "bat", "cat"]);
        assert_prefix_invariant(&game);
    }

    #[test]
    fn full_game_bad_to_scad() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bad", "scad");

        assert_eq!(game.replace(0, 'c'), Ok(MoveRating::Expected));
        assert!(!game.is_solved());
        assert_eq!(game.insert(0, 'S'), Ok(MoveRating::Expected));
        assert!(game.is_solved());
        assert_eq!(game.progress().words(), ["bad", "cad", "scad"]);
        assert_eq!(game.steps_remaining(), 0);
        assert_eq!(game.next_word_hint(), None);
        assert_eq!(game.remove(0), Err(MoveError::GameOver));
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bad", "scad");

        assert!(matches!(game.replace(3, 'c'), Err(MoveError::IndexOutOfRange { index: 3, .. })));
        assert!(matches!(game.remove(5), Err(MoveError::IndexOutOfRange { .. })));
        assert!(matches!(game.insert(4, 'e'), Err(MoveError::IndexOutOfRange { .. })));
        assert_eq!(game.steps_taken(), 0);
    }

    #[test]
    fn invalid_letters_are_rejected() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bad", "scad");
        assert_eq!(game.replace(0, '1'), Err(MoveError::InvalidLetter('1')));
        assert_eq!(game.insert(0, 'é'), Err(MoveError::InvalidLetter('é')));
    }

    #[test]
    fn unchanged_letter_is_not_a_move() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bad", "scad");
        assert!(matches!(game.replace(0, 'b'), Err(MoveError::NotOneStep { .. })));
    }

    #[test]
    fn dead_end_is_rejected() {
        let lexicon = Lexicon::from_words(["bat", "cat", "bit", "cot"]);
        let mut game = GameSession::new(&lexicon, "bat", "cot");
        assert_eq!(game.reference().words(), ["bat", "cat", "cot"]);

        let before = game.clone();
        assert!(matches!(game.replace(1, 'i'), Err(MoveError::DeadEnd { .. })));
        assert_eq!(game.progress(), before.progress());
        assert_eq!(game.reference(), before.reference());
    }

    #[test]
    fn unsolvable_puzzle() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bat", "dog");
        assert!(!game.is_valid());
        assert_eq!(game.get_error(), Some(&SolveError::NoSolution));
        assert_eq!(game.replace(0, 'c'), Err(MoveError::NoPuzzle(SolveError::NoSolution)));
        assert_eq!(game.next_word_hint(), None);
    }

    #[test]
    fn not_a_word_puzzle() {
        let lexicon = small_lexicon();
        let game = GameSession::new(&lexicon, "bat", "flump");
        assert!(!game.is_valid());
        assert_eq!(game.get_error().map(ToString::to_string).as_deref(), Some("flump is not a word."));
    }

    #[test]
    fn play_word_requires_one_step() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bat", "scad");

        assert!(matches!(game.play_word("cad"), Err(MoveError::NotOneStep { .. })));
        assert_eq!(game.play_word("zzz"), Err(MoveError::NotAWord("zzz".to_string())));
        assert_eq!(game.play_word("Bad"), Ok(MoveRating::Expected));
        assert_eq!(game.play_word("cad"), Ok(MoveRating::Expected));
        assert_eq!(game.play_word("scad"), Ok(MoveRating::Expected));
        assert!(game.is_solved());
    }

    #[test]
    fn detour_is_rated() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bat", "scad");
        assert_eq!(game.reference().words(), ["bat", "bad", "cad", "scad"]);

        // cat reaches scad in the same number of steps
        assert_eq!(game.play_word("cat"), Ok(MoveRating::Ok));
        assert_eq!(game.reference().words(), ["bat", "cat", "cad", "scad"]);
        assert_prefix_invariant(&game);
    }

    #[test]
    fn wandering_costs_steps() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bat", "cat");

        // bat -> bate -> bade -> bad -> cad -> cat
        assert_eq!(game.play_word("bate"), Ok(MoveRating::Dodo));
        assert_eq!(game.steps_remaining(), 4);
        assert_prefix_invariant(&game);
    }

    #[test]
    fn repeated_word_is_allowed() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bat", "scad");

        game.play_word("cat").unwrap();
        assert_eq!(game.play_word("bat"), Ok(MoveRating::Dodo));
        assert_eq!(game.progress().words(), ["bat", "cat", "bat"]);
        assert_prefix_invariant(&game);
    }

    #[test]
    fn undo_restores_snapshot() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bad", "cat");
        let fresh = game.clone();

        assert!(!game.undo());
        game.insert(3, 'e').unwrap();
        assert_eq!(game.undo_depth(), 1);

        assert!(game.undo());
        assert_eq!(game.progress(), fresh.progress());
        assert_eq!(game.reference(), fresh.reference());
        assert_eq!(game.undo_depth(), 0);
    }

    #[test]
    fn prefix_invariant_after_many_moves() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bat", "scad");

        for word in ["cat", "bat", "bad", "cad"] {
            game.play_word(word).unwrap();
            assert_prefix_invariant(&game);
        }
        assert_eq!(game.next_word_hint().map(|h| h.kind), Some(MoveKind::Increase));
    }

    #[test]
    fn hints_follow_reference() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "scad", "bat");

        let hint = game.next_word_hint().unwrap();
        assert_eq!(hint.kind, MoveKind::Reduce);
        assert_eq!(hint.positions, [1, 2, 3, 4]);

        game.remove(0).unwrap();
        let hint = game.next_word_hint().unwrap();
        assert_eq!(hint.kind, MoveKind::Replace);
        assert_eq!(hint.text, "?ad");
    }

    #[test]
    fn masked_hints() {
        let lexicon = small_lexicon();
        let game = GameSession::new(&lexicon, "bad", "scad").with_hint_style(HintStyle::Masked);
        assert_eq!(game.next_word_hint().map(|h| h.text).as_deref(), Some("?**"));
    }

    #[test]
    fn rows_hide_unplayed_words() {
        let lexicon = small_lexicon();
        let mut game = GameSession::new(&lexicon, "bat", "scad");

        assert_eq!(
            game.rows(),
            [
                Row::Played("bat".to_string()),
                Row::Hidden("**?".to_string()),
                Row::Hidden("?**".to_string()),
                Row::Target("scad".to_string()),
            ]
        );

        game.play_word("bad").unwrap();
        game.play_word("cad").unwrap();
        game.play_word("scad").unwrap();
        let rows = game.rows();
        let words: Vec<&str> = rows.iter().map(Row::text).collect();
        assert_eq!(words, ["bat", "bad", "cad", "scad"]);
        assert!(rows.iter().all(|row| matches!(row, Row::Played(_))));
    }

    #[test]
    fn exhausted_budget_is_not_a_dead_end() {
        let lexicon = small_lexicon();
        let solver = Solver::with_config(&lexicon, SolverConfig::new(SearchMode::PerPath, Some(2)));
        let mut game = GameSession::with_solver(solver, "bad", "scad");
        assert!(game.is_valid());
        let before = game.clone();

        assert_eq!(
            game.play_word("bade"),
            Err(MoveError::SearchLimit {
                word: "bade".to_string(),
                limit: 2,
            })
        );
        assert_eq!(game.progress(), before.progress());
        assert_eq!(game.reference(), before.reference());
        assert!(game.is_valid());
        assert_eq!(game.get_error(), None);

        assert_eq!(game.replace(0, 'c'), Ok(MoveRating::Expected));
    }

    #[test]
    fn unreachable_pair_in_default_words() {
        let lexicon = loader::default_lexicon(LexiconConfig::default());
        let mut game = GameSession::new(&lexicon, "bat", "egg");

        assert!(!game.is_valid());
        assert_eq!(game.get_error(), Some(&SolveError::NoSolution));
        assert_eq!(game.replace(0, 'c'), Err(MoveError::NoPuzzle(SolveError::NoSolution)));
        assert_eq!(game.next_word_hint(), None);
    }

    #[test]
    fn detour_in_default_words() {
        let lexicon = loader::default_lexicon(LexiconConfig::default());
        let mut game = GameSession::new(&lexicon, "cat", "dog");
        assert_eq!(game.reference().words(), ["cat", "cot", "cog", "dog"]);

        assert_eq!(game.play_word("cab"), Ok(MoveRating::Dodo));
        assert_eq!(game.reference().words(), ["cat", "cab", "dab", "dub", "dug", "dog"]);

        let tight = Solver::with_config(&lexicon, SolverConfig::new(SearchMode::PerPath, Some(5)));
        let mut game = GameSession::with_solver(tight, "cat", "dog");
        assert!(game.is_valid());
        assert!(matches!(game.play_word("cab"), Err(MoveError::SearchLimit { limit: 5, .. })));
        assert_eq!(game.steps_taken(), 0);
    }
}
