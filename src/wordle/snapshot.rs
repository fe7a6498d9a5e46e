use serde::Serialize;

use super::{
    core::{Grid, KeyColorMap},
    session::{Cursor, Phase, Session},
    suggestions::Suggestions,
};

/// Everything a front end needs to redraw, taken after each event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub cursor: Cursor,
    pub phase: Phase,
    pub key_colors: KeyColorMap,
    pub loading: bool,
    pub error: Option<String>,
    pub suggestions: Vec<String>,
    pub selected: usize,
}

impl Snapshot {
    pub fn new(session: &Session, suggestions: &Suggestions) -> Self {
        Self {
            grid: *session.grid(),
            cursor: session.cursor(),
            phase: session.phase(),
            key_colors: session.keys().clone(),
            loading: suggestions.is_loading(),
            error: suggestions.error().map(str::to_owned),
            suggestions: suggestions.words().to_vec(),
            selected: suggestions.selected(),
        }
    }
}
