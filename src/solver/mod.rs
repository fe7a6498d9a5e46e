//! Client side of the external solver api.
//!
//! The solver ranks candidate guesses from the history of submitted rows; how
//! it does so is its own business.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::wordle::core::{Row, WORD_LENGTH};

mod error;
pub use error::{Error, StatusError};

mod http;
pub use http::HttpSolver;

/// Path of the suggestions endpoint, relative to the solver's base url.
pub const SUGGESTIONS_PATH: &str = "api/suggestions";

/// One submitted row as reported to the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub guess: String,
    /// `g`, `y` or `b` per letter.
    pub feedback: String,
}

impl HistoryEntry {
    /// Builds the entry for a row, or `None` if the row is not a full guess.
    pub fn from_row(row: &Row) -> Option<Self> {
        let guess = row.guess();

        (guess.chars().count() == WORD_LENGTH).then(|| Self {
            guess,
            feedback: row.feedback(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// Best guess first.
    pub suggestions: Vec<String>,
}

#[async_trait]
pub trait SolverClient: Send + Sync {
    async fn suggestions(&self, history: Vec<HistoryEntry>) -> Result<Vec<String>, Error>;
}
