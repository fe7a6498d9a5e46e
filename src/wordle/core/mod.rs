use std::borrow::Cow;

mod tile;
pub use tile::{LetterState, Tile, TileColor};

mod grid;
pub use grid::{Grid, Row};

pub mod keyboard;
pub use keyboard::KeyColorMap;

/// Letters per guess.
pub const WORD_LENGTH: usize = 5;

/// Guesses per session.
pub const ROWS: usize = 6;

/// Colored-square rendering for chat-style boards.
pub trait AsEmoji {
    fn as_emoji(&self) -> Cow<str>;
}
