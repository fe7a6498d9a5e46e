use serde::Serialize;
use thisslime::TracingError;
use tracing::debug;

use crate::solver;

/// Tag for one suggestion fetch. Later fetches get larger tickets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Ticket(u64);

/// The ranked suggestion panel and the state of its fetches.
///
/// Only the most recently issued fetch may change the panel; a response that
/// arrives for an older ticket is dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Suggestions {
    words: Vec<String>,
    selected: usize,
    loading: bool,
    error: Option<String>,
    issued: Ticket,
}

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new fetch as in flight and returns its ticket.
    pub fn begin(&mut self) -> Ticket {
        self.issued = Ticket(self.issued.0 + 1);
        self.loading = true;
        self.issued
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket == self.issued
    }

    /// Applies the result of the fetch tagged `ticket`, returning whether it
    /// was current.
    ///
    /// On failure the previous words stay in place and the error becomes
    /// displayable until the next success.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<String>, solver::Error>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(?ticket, latest = ?self.issued, "discarding stale suggestions");
            return false;
        }

        self.loading = false;

        match result {
            Ok(words) => {
                debug!(count = words.len(), "suggestions updated");
                self.words = words;
                self.selected = 0;
                self.error = None;
            }
            Err(err) => {
                err.trace();
                self.error = Some(err.to_string());
            }
        }

        true
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_word(&self) -> Option<&str> {
        self.words.get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(self.words.len().saturating_sub(1));
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
