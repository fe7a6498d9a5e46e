use std::collections::BTreeMap;

use serde::Serialize;

use super::{LetterState, Row};

/// Keys of the on-screen keyboard, top to bottom.
pub const LAYOUT: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "BACKSPACE"],
];

/// Best known state of every letter across the submitted rows.
///
/// A letter only ever moves up the [`LetterState`] order: green is final,
/// yellow beats grey, and any color beats "unset" (absent from the map).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyColorMap {
    keys: BTreeMap<char, LetterState>,
}

impl KeyColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: char) -> Option<LetterState> {
        self.keys.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Records `state` for `letter`, returning whether the stored color changed.
    pub fn record(&mut self, letter: char, state: LetterState) -> bool {
        let letter = letter.to_ascii_uppercase();

        match self.keys.get_mut(&letter) {
            Some(stored) if state > *stored => {
                *stored = state;
                true
            }
            Some(_) => false,
            None => {
                self.keys.insert(letter, state);
                true
            }
        }
    }

    pub fn record_row(&mut self, row: &Row) {
        for tile in row.iter() {
            if let Some(letter) = tile.letter() {
                self.record(letter, tile.color().effective());
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.keys.iter().map(|(letter, state)| (*letter, *state))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    fn key_emoji(&self, key: &str) -> &'static str {
        let mut chars = key.chars();

        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.get(letter).map_or("⬜", LetterState::emoji),
            _ => "",
        }
    }

    /// Letter keys of [`LAYOUT`] above the color each one has reached.
    pub fn emoji_with_letters_spaced(&self) -> String {
        LAYOUT
            .iter()
            .map(|row| {
                let letters = row
                    .iter()
                    .filter(|key| key.len() == 1)
                    .copied()
                    .collect::<Vec<_>>()
                    .join("  ");
                let states = row
                    .iter()
                    .filter(|key| key.len() == 1)
                    .map(|key| self.key_emoji(key))
                    .collect::<Vec<_>>()
                    .join(" ");

                letters + "\n" + &states
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
