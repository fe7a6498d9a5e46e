//! Everything that can happen to a session, from the outside or from its own
//! background work.

use std::str::FromStr;

use crate::{solver, wordle::Ticket};

/// A key as reported by a physical or on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Always uppercase.
    Letter(char),
    Enter,
    Backspace,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a letter, enter or backspace")]
pub struct UnknownKey(String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        let mut chars = name.chars();

        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(Self::Letter(letter)),
            _ => match name.as_str() {
                "ENTER" => Ok(Self::Enter),
                "BACKSPACE" => Ok(Self::Backspace),
                _ => Err(UnknownKey(s.to_owned())),
            },
        }
    }
}

#[derive(Debug)]
pub enum Event {
    Key(Key),
    TileClicked {
        row: usize,
        col: usize,
    },
    /// A word picked directly from the suggestion list.
    SuggestionPicked(String),
    /// Moves the suggestion list selection down.
    SelectNext,
    /// Moves the suggestion list selection up.
    SelectPrevious,
    /// Picks the selected suggestion.
    PickSelected,
    /// Asks the solver again for the current history.
    Refresh,
    Reset,
    Quit,

    /// The settle delay of a submission made in `epoch` has passed.
    Settled {
        epoch: u64,
    },
    SuggestionsLoaded {
        ticket: Ticket,
        result: Result<Vec<String>, solver::Error>,
    },
}

impl From<Key> for Event {
    fn from(value: Key) -> Self {
        Self::Key(value)
    }
}
