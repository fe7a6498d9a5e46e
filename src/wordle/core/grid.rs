use std::{
    borrow::Cow,
    ops::{Index, IndexMut},
};

use serde::{Deserialize, Serialize};

use super::{AsEmoji, LetterState, Tile, ROWS, WORD_LENGTH};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    tiles: [Tile; WORD_LENGTH],
}

impl Row {
    pub const EMPTY: Self = Self {
        tiles: [Tile::EMPTY; WORD_LENGTH],
    };

    /// Builds a row from a word's letters, every tile uncolored.
    ///
    /// The caller is responsible for the word having [`WORD_LENGTH`] letters;
    /// extra letters are dropped and missing ones stay empty.
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Self {
        let mut row = Self::EMPTY;

        for (tile, letter) in row.tiles.iter_mut().zip(letters) {
            *tile = Tile::new(letter);
        }

        row
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// Letters of the row, empty tiles contributing nothing.
    pub fn guess(&self) -> String {
        self.tiles.iter().filter_map(Tile::letter).collect()
    }

    pub fn states(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.tiles.iter().map(|tile| tile.color().effective())
    }

    /// Feedback string (`g`/`y`/`b` per tile) using effective colors.
    pub fn feedback(&self) -> String {
        self.states().map(LetterState::code).collect()
    }

    /// Number of filled tiles before the first empty one.
    pub fn filled_prefix(&self) -> usize {
        self.tiles.iter().take_while(|tile| tile.is_filled()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.tiles.iter().all(|tile| *tile == Tile::EMPTY)
    }
}

impl Index<usize> for Row {
    type Output = Tile;

    fn index(&self, index: usize) -> &Self::Output {
        self.tiles.index(index)
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.tiles.index_mut(index)
    }
}

impl Row {
    /// The row's letters (`_` for empty tiles) above its colored squares.
    pub fn emoji_with_letters_spaced(&self) -> String {
        let letters = self
            .tiles
            .iter()
            .map(|tile| tile.letter().unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ");

        letters + "\n" + &self.as_emoji()
    }
}

impl AsEmoji for Row {
    fn as_emoji(&self) -> Cow<str> {
        self.tiles
            .iter()
            .map(|tile| tile.as_emoji())
            .collect::<Vec<_>>()
            .join(" ")
            .into()
    }
}

/// The six guess rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: [Row; ROWS],
}

impl Grid {
    pub const EMPTY: Self = Self {
        rows: [Row::EMPTY; ROWS],
    };

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.row(row).and_then(|row| row.tiles.get(col))
    }

    pub fn tile_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.row_mut(row).and_then(|row| row.tiles.get_mut(col))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(Row::is_blank)
    }

    pub fn emoji_with_letters_spaced(&self) -> String {
        self.rows
            .iter()
            .map(Row::emoji_with_letters_spaced)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Index<usize> for Grid {
    type Output = Row;

    fn index(&self, index: usize) -> &Self::Output {
        self.rows.index(index)
    }
}
