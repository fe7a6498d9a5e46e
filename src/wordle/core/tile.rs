use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::AsEmoji;

/// Color a tile carries while its row is being edited.
///
/// `Grey` is never reached by clicking; a tile left `Empty` only becomes grey
/// once its row is submitted (see [`TileColor::effective`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    #[default]
    Empty,
    Grey,
    Yellow,
    Green,
}

impl TileColor {
    /// Next color in the click cycle `empty -> green -> yellow -> empty`.
    pub const fn cycled(self) -> Self {
        match self {
            Self::Empty => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow | Self::Grey => Self::Empty,
        }
    }

    pub const fn effective(self) -> LetterState {
        match self {
            Self::Empty | Self::Grey => LetterState::NotPresent,
            Self::Yellow => LetterState::WrongPlace,
            Self::Green => LetterState::Correct,
        }
    }
}

/// Effective color of a submitted letter.
///
/// Variants are declared in precedence order, so `Ord` gives
/// `Correct > WrongPlace > NotPresent`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub enum LetterState {
    #[default]
    #[serde(rename = "grey")]
    NotPresent,
    #[serde(rename = "yellow")]
    WrongPlace,
    #[serde(rename = "green")]
    Correct,
}

impl LetterState {
    /// Single-character feedback code the solver expects.
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::WrongPlace => 'y',
            Self::NotPresent => 'b',
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Correct => "🟩",    // green square
            Self::WrongPlace => "🟨", // yellow square
            Self::NotPresent => "⬛", // black square
        }
    }
}

impl AsEmoji for LetterState {
    fn as_emoji(&self) -> Cow<str> {
        self.emoji().into()
    }
}

impl AsEmoji for TileColor {
    fn as_emoji(&self) -> Cow<str> {
        match self {
            Self::Empty => "⬜".into(), // white square
            other => other.effective().emoji().into(),
        }
    }
}

impl std::fmt::Display for LetterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One cell of the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    letter: Option<char>,
    color: TileColor,
}

impl Tile {
    pub const EMPTY: Self = Self {
        letter: None,
        color: TileColor::Empty,
    };

    pub const fn new(letter: char) -> Self {
        Self {
            letter: Some(letter),
            color: TileColor::Empty,
        }
    }

    pub const fn with_color(self, color: TileColor) -> Self {
        Self {
            letter: self.letter,
            color,
        }
    }

    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    pub const fn color(&self) -> TileColor {
        self.color
    }

    pub const fn is_filled(&self) -> bool {
        self.letter.is_some()
    }
}

impl AsEmoji for Tile {
    fn as_emoji(&self) -> Cow<str> {
        self.color.as_emoji()
    }
}
