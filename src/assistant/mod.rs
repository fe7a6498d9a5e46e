//! Event loop around a [`Session`].
//!
//! Input and background completions all arrive on one channel and are handled
//! one at a time, so the session never sees two transitions interleave. The
//! settle timer and solver fetches run as tokio tasks that report back through
//! the same channel.

use std::{ops::ControlFlow, sync::Arc, time::Duration};

use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::{
    solver::SolverClient,
    wordle::{core::ROWS, Session, Settled, Snapshot, Suggestions},
};

pub mod events;
pub use events::{Event, Key};

pub struct Assistant {
    session: Session,
    suggestions: Suggestions,
    solver: Arc<dyn SolverClient>,
    settle: Duration,
    /// Bumped on reset so timers from before it are ignored.
    epoch: u64,
    events: mpsc::UnboundedSender<Event>,
}

impl Assistant {
    pub fn new(
        solver: Arc<dyn SolverClient>,
        settle: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (events, rx) = mpsc::unbounded_channel();

        let assistant = Self {
            session: Session::new(),
            suggestions: Suggestions::new(),
            solver,
            settle,
            epoch: 0,
            events,
        };

        (assistant, rx)
    }

    /// Handle for input actors to queue events.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.events.clone()
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn suggestions(&self) -> &Suggestions {
        &self.suggestions
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.session, &self.suggestions)
    }

    /// Fetches the opening suggestions.
    pub fn start(&mut self) {
        self.request_suggestions(0);
    }

    pub fn handle(&mut self, event: Event) -> ControlFlow<()> {
        trace!(?event, "handling event");

        match event {
            Event::Key(Key::Letter(letter)) => {
                self.session.input_letter(letter);
            }
            Event::Key(Key::Backspace) => {
                self.session.backspace();
            }
            Event::Key(Key::Enter) => {
                if self.session.submit_row().is_some() {
                    self.schedule_settle();
                }
            }
            Event::TileClicked { row, col } => {
                self.session.cycle_tile_color(row, col);
            }
            Event::SuggestionPicked(word) => {
                self.session.select_suggestion(&word);
            }
            Event::SelectNext => self.suggestions.select_next(),
            Event::SelectPrevious => self.suggestions.select_previous(),
            Event::PickSelected => {
                if let Some(word) = self.suggestions.selected_word().map(str::to_owned) {
                    self.session.select_suggestion(&word);
                }
            }
            Event::Refresh => {
                if self.suggestions.is_loading() {
                    trace!("ignoring refresh while loading");
                } else {
                    self.request_suggestions(self.session.cursor().row);
                }
            }
            Event::Reset => self.reset(),
            Event::Quit => return ControlFlow::Break(()),
            Event::Settled { epoch } => self.settled(epoch),
            Event::SuggestionsLoaded { ticket, result } => {
                self.suggestions.complete(ticket, result);
            }
        }

        ControlFlow::Continue(())
    }

    /// Handles events until [`Event::Quit`], calling `render` with a fresh
    /// snapshot after the opening fetch is issued and after every event.
    pub async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<Event>,
        mut render: impl FnMut(&Snapshot),
    ) {
        self.start();
        render(&self.snapshot());

        while let Some(event) = events.recv().await {
            if self.handle(event).is_break() {
                debug!("quitting");
                break;
            }

            render(&self.snapshot());
        }
    }

    fn reset(&mut self) {
        self.epoch += 1;
        self.session.reset();
        self.suggestions.clear_error();
        self.request_suggestions(0);
    }

    fn settled(&mut self, epoch: u64) {
        if epoch != self.epoch {
            trace!(epoch, current = self.epoch, "ignoring settle from before reset");
            return;
        }

        match self.session.settle() {
            Some(Settled::Editing { row }) => self.request_suggestions(row),
            Some(Settled::Exhausted) => info!("no guesses left, reset to start over"),
            None => {}
        }
    }

    fn schedule_settle(&self) {
        let events = self.events.clone();
        let epoch = self.epoch;
        let settle = self.settle;

        tokio::spawn(async move {
            tokio::time::sleep(settle).await;
            events.send(Event::Settled { epoch }).ok();
        });
    }

    fn request_suggestions(&mut self, upto: usize) {
        let history = self.session.history(upto.min(ROWS));
        let ticket = self.suggestions.begin();
        debug!(?ticket, rows = history.len(), "requesting suggestions");

        let solver = Arc::clone(&self.solver);
        let events = self.events.clone();

        tokio::spawn(async move {
            let result = solver.suggestions(history).await;
            events.send(Event::SuggestionsLoaded { ticket, result }).ok();
        });
    }
}
