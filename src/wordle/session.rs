use serde::Serialize;
use tracing::{debug, trace};

use super::core::{Grid, KeyColorMap, Row, Tile, TileColor, ROWS, WORD_LENGTH};
use crate::solver::HistoryEntry;

/// Position of the next letter to be typed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Editing,
    /// A row was just submitted and is settling; all edits are rejected.
    Submitting,
    /// Every row has been used.
    Exhausted,
}

/// Outcome of a successful [`Session::submit_row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub row: usize,
    pub entry: HistoryEntry,
}

/// Outcome of [`Session::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Editing resumes on `row`; suggestions for rows `[0, row)` are due.
    Editing { row: usize },
    Exhausted,
}

/// The guess grid state machine.
///
/// Every operation is a silent no-op when its preconditions fail; the return
/// value only reports whether anything changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    grid: Grid,
    cursor: Cursor,
    keys: KeyColorMap,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn keys(&self) -> &KeyColorMap {
        &self.keys
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    fn editable(&self) -> bool {
        self.phase == Phase::Editing && self.cursor.row < ROWS
    }

    pub fn input_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_uppercase() {
            trace!(%letter, "ignoring non-letter input");
            return false;
        }

        if !self.editable() || self.cursor.col >= WORD_LENGTH {
            trace!(%letter, cursor = ?self.cursor, phase = ?self.phase, "ignoring letter");
            return false;
        }

        let Cursor { row, col } = self.cursor;
        if let Some(tile) = self.grid.tile_mut(row, col) {
            *tile = Tile::new(letter);
            self.cursor.col += 1;
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) -> bool {
        if !self.editable() || self.cursor.col == 0 {
            trace!(cursor = ?self.cursor, phase = ?self.phase, "ignoring backspace");
            return false;
        }

        self.cursor.col -= 1;

        let Cursor { row, col } = self.cursor;
        if let Some(tile) = self.grid.tile_mut(row, col) {
            *tile = Tile::EMPTY;
        }

        true
    }

    /// Advances the color of a filled tile in the active row, returning the
    /// new color.
    pub fn cycle_tile_color(&mut self, row: usize, col: usize) -> Option<TileColor> {
        if row != self.cursor.row {
            trace!(row, col, "ignoring click outside the active row");
            return None;
        }

        let tile = self.grid.tile_mut(row, col).filter(|tile| tile.is_filled())?;
        let color = tile.color().cycled();
        *tile = tile.with_color(color);

        trace!(row, col, ?color, "tile color changed");
        Some(color)
    }

    /// Fills the active row with `word`, uncolored and ready to submit.
    pub fn select_suggestion(&mut self, word: &str) -> bool {
        if !self.editable() {
            trace!(word, phase = ?self.phase, "ignoring suggestion");
            return false;
        }

        let letters: Vec<char> = word.chars().map(|ch| ch.to_ascii_uppercase()).collect();
        if letters.len() != WORD_LENGTH || !letters.iter().all(char::is_ascii_uppercase) {
            trace!(word, "ignoring malformed suggestion");
            return false;
        }

        let Some(row) = self.grid.row_mut(self.cursor.row) else {
            return false;
        };

        *row = Row::from_letters(letters);
        self.cursor.col = WORD_LENGTH;
        true
    }

    /// Submits the full active row: records its effective colors on the
    /// keyboard, moves to the next row and locks editing until [`Self::settle`].
    #[tracing::instrument(level = "debug", skip(self), fields(row = self.cursor.row))]
    pub fn submit_row(&mut self) -> Option<Submission> {
        if !self.editable() || self.cursor.col != WORD_LENGTH {
            trace!(cursor = ?self.cursor, phase = ?self.phase, "ignoring submission");
            return None;
        }

        let row = self.cursor.row;
        let submitted = *self.grid.row(row)?;
        let entry = HistoryEntry::from_row(&submitted)?;

        self.phase = Phase::Submitting;
        self.keys.record_row(&submitted);
        self.cursor = Cursor {
            row: row + 1,
            col: 0,
        };

        debug!(guess = %entry.guess, feedback = %entry.feedback, "row submitted");

        Some(Submission { row, entry })
    }

    /// Releases the submission lock.
    pub fn settle(&mut self) -> Option<Settled> {
        if self.phase != Phase::Submitting {
            trace!(phase = ?self.phase, "nothing to settle");
            return None;
        }

        if self.cursor.row < ROWS {
            self.phase = Phase::Editing;
            Some(Settled::Editing {
                row: self.cursor.row,
            })
        } else {
            debug!("all rows used");
            self.phase = Phase::Exhausted;
            Some(Settled::Exhausted)
        }
    }

    /// Guess/feedback pairs of rows `[0, upto)`, skipping incomplete rows.
    pub fn history(&self, upto: usize) -> Vec<HistoryEntry> {
        self.grid
            .iter()
            .take(upto)
            .filter_map(HistoryEntry::from_row)
            .collect()
    }

    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::{Cursor, Phase, Session, Settled};
    use crate::{
        solver::HistoryEntry,
        wordle::core::{LetterState, Tile, TileColor},
    };
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn typed(word: &str) -> Session {
        let mut session = Session::new();
        for letter in word.chars() {
            session.input_letter(letter);
        }
        session
    }

    fn submit_word(session: &mut Session, word: &str, clicks: [usize; 5]) {
        assert!(session.select_suggestion(word));
        let row = session.cursor().row;
        for (col, times) in clicks.into_iter().enumerate() {
            for _ in 0..times {
                session.cycle_tile_color(row, col);
            }
        }
        assert!(session.submit_row().is_some());
        assert!(session.settle().is_some());
    }

    #[test]
    fn letters_fill_left_to_right() {
        let session = typed("CRA");

        assert_eq!(session.cursor(), Cursor { row: 0, col: 3 });
        assert_eq!(session.grid()[0].guess(), "CRA");
        assert_eq!(session.grid()[0].filled_prefix(), 3);
    }

    #[test]
    #[traced_test]
    fn full_row_ignores_more_letters() {
        let mut session = typed("CRANE");
        let before = session.clone();

        assert!(!session.input_letter('A'));
        assert_eq!(session, before);
        assert!(logs_contain("ignoring letter"));
    }

    #[test]
    fn lowercase_and_symbols_are_ignored() {
        let mut session = Session::new();

        assert!(!session.input_letter('a'));
        assert!(!session.input_letter('1'));
        assert!(!session.input_letter('É'));
        assert_eq!(session, Session::new());
    }

    #[test]
    fn cursor_tracks_filled_prefix() {
        let mut session = Session::new();
        let script = "AB<C<<<DEFGH<<IJ<<<<<<<KLMNOP";

        for step in script.chars() {
            if step == '<' {
                session.backspace();
            } else {
                session.input_letter(step);
            }

            let cursor = session.cursor();
            assert!(cursor.col <= 5);
            assert_eq!(cursor.col, session.grid()[0].filled_prefix());
        }

        assert_eq!(session.grid()[0].guess(), "KLMNO");
    }

    #[test]
    fn backspace_on_empty_row_is_noop() {
        let mut session = Session::new();

        assert!(!session.backspace());
        assert_eq!(session, Session::new());
    }

    #[test]
    fn backspace_clears_color_too() {
        let mut session = typed("AB");
        session.cycle_tile_color(0, 1);
        session.backspace();

        assert_eq!(*session.grid().tile(0, 1).expect("in range"), Tile::EMPTY);
    }

    #[test]
    fn tile_click_cycle() {
        let mut session = typed("A");

        assert_eq!(session.cycle_tile_color(0, 0), Some(TileColor::Green));
        assert_eq!(session.cycle_tile_color(0, 0), Some(TileColor::Yellow));
        assert_eq!(session.cycle_tile_color(0, 0), Some(TileColor::Empty));
    }

    #[test]
    fn tile_click_needs_letter_in_active_row() {
        let mut session = typed("A");

        assert_eq!(session.cycle_tile_color(0, 1), None);
        assert_eq!(session.cycle_tile_color(1, 0), None);
        assert_eq!(session.cycle_tile_color(0, 9), None);

        submit_word(&mut session, "CRANE", [0; 5]);
        assert_eq!(session.cycle_tile_color(0, 0), None);
        assert_eq!(
            session.grid().tile(0, 0).map(|tile| tile.color()),
            Some(TileColor::Empty)
        );
    }

    #[test]
    fn submit_needs_full_row() {
        let mut session = typed("CRAN");
        let before = session.clone();

        assert_eq!(session.submit_row(), None);
        assert_eq!(session, before);
    }

    #[test]
    fn crane_scenario() {
        // grey, grey, green, grey, yellow
        let mut session = typed("CRANE");
        session.cycle_tile_color(0, 2);
        session.cycle_tile_color(0, 4);
        session.cycle_tile_color(0, 4);

        let submission = session.submit_row().expect("row is full");

        assert_eq!(submission.row, 0);
        assert_eq!(
            submission.entry,
            HistoryEntry {
                guess: "CRANE".to_owned(),
                feedback: "bbgby".to_owned(),
            }
        );
        assert_eq!(session.cursor(), Cursor { row: 1, col: 0 });

        let keys: Vec<_> = session.keys().iter().collect();
        assert_eq!(
            keys,
            vec![
                ('A', LetterState::Correct),
                ('C', LetterState::NotPresent),
                ('E', LetterState::WrongPlace),
                ('N', LetterState::NotPresent),
                ('R', LetterState::NotPresent),
            ]
        );
    }

    #[test]
    fn submitting_locks_edits_until_settled() {
        let mut session = typed("CRANE");
        session.submit_row();

        assert_eq!(session.phase(), Phase::Submitting);
        assert!(!session.input_letter('S'));
        assert!(!session.backspace());
        assert!(!session.select_suggestion("SLATE"));
        assert_eq!(session.submit_row(), None);
        assert_eq!(session.cursor(), Cursor { row: 1, col: 0 });

        assert_eq!(session.settle(), Some(Settled::Editing { row: 1 }));
        assert_eq!(session.settle(), None);
        assert!(session.input_letter('S'));
    }

    #[test]
    fn select_suggestion_fills_active_row() {
        let mut session = Session::new();
        submit_word(&mut session, "CRANE", [0; 5]);
        submit_word(&mut session, "TOILS", [0; 5]);

        session.input_letter('X');
        assert!(session.select_suggestion("solar"));

        let row = session.grid()[2];
        assert_eq!(row.guess(), "SOLAR");
        assert!(row.iter().all(|tile| tile.color() == TileColor::Empty));
        assert_eq!(session.cursor(), Cursor { row: 2, col: 5 });
        assert_eq!(session.phase(), Phase::Editing);

        let submission = session.submit_row().expect("row is full");
        assert_eq!(submission.entry.guess, "SOLAR");
        assert_eq!(submission.entry.feedback, "bbbbb");
    }

    #[test]
    fn malformed_suggestions_are_ignored() {
        let mut session = Session::new();

        assert!(!session.select_suggestion("SOLARS"));
        assert!(!session.select_suggestion("SOL"));
        assert!(!session.select_suggestion("SO1AR"));
        assert_eq!(session, Session::new());
    }

    #[test]
    fn green_survives_later_rows() {
        let mut session = Session::new();
        submit_word(&mut session, "CRANE", [0, 0, 1, 0, 0]);
        submit_word(&mut session, "SALTY", [0, 2, 0, 0, 0]);
        submit_word(&mut session, "ABACK", [0, 0, 0, 0, 0]);

        assert_eq!(session.keys().get('A'), Some(LetterState::Correct));
        assert_eq!(session.keys().get('C'), Some(LetterState::NotPresent));
    }

    #[test]
    fn six_rows_exhaust_the_session() {
        let mut session = Session::new();
        for word in ["CRANE", "SLOTH", "PUDGY", "WIMPY", "FJORD", "BUXOM"] {
            submit_word(&mut session, word, [0; 5]);
        }

        assert!(session.is_locked());
        assert_eq!(session.phase(), Phase::Exhausted);
        assert_eq!(session.cursor(), Cursor { row: 6, col: 0 });

        let before = session.clone();
        assert!(!session.input_letter('A'));
        assert!(!session.select_suggestion("CRANE"));
        assert_eq!(session.submit_row(), None);
        assert_eq!(session.cycle_tile_color(5, 0), None);
        assert_eq!(session, before);

        session.reset();
        assert!(session.input_letter('A'));
    }

    #[test]
    fn sixth_submission_settles_to_exhausted() {
        let mut session = Session::new();
        for word in ["CRANE", "SLOTH", "PUDGY", "WIMPY", "FJORD"] {
            submit_word(&mut session, word, [0; 5]);
        }

        session.select_suggestion("BUXOM");
        session.submit_row();
        assert_eq!(session.phase(), Phase::Submitting);
        assert_eq!(session.settle(), Some(Settled::Exhausted));
    }

    #[test]
    fn history_skips_incomplete_rows() {
        let mut session = Session::new();
        submit_word(&mut session, "CRANE", [1, 0, 0, 0, 0]);
        session.input_letter('S');
        session.input_letter('L');

        let history = session.history(2);
        assert_eq!(
            history,
            vec![HistoryEntry {
                guess: "CRANE".to_owned(),
                feedback: "gbbbb".to_owned(),
            }]
        );
        assert!(session.history(0).is_empty());
    }

    #[test]
    fn reset_from_any_state() {
        let mut session = Session::new();
        submit_word(&mut session, "CRANE", [1, 2, 0, 0, 0]);
        session.select_suggestion("SLATE");
        session.submit_row();

        session.reset();

        assert_eq!(session, Session::new());
        assert!(session.grid().is_blank());
        assert_eq!(session.cursor(), Cursor::default());
        assert!(session.keys().is_empty());
        assert_eq!(session.phase(), Phase::Editing);
    }
}
