//! Line based front end: reads commands from stdin, prints the board to stdout.

use std::{
    fmt::Write as _,
    io::{self, BufRead},
    str::FromStr,
    thread,
};

use thisslime::TracingError;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};

use crate::{
    assistant::{events::UnknownKey, Event, Key},
    errors::Error,
    wordle::{
        core::{ROWS, WORD_LENGTH},
        Phase, Snapshot,
    },
};

/// Suggestions shown below the board.
const SHOWN_SUGGESTIONS: usize = 10;

pub const HELP: &str = "\
commands:
  a-z / crane       type letters into the active row
  'up               type a word that is also a command
  enter             submit the active row
  backspace         delete the last letter
  click <row> <col> cycle a tile's color (1-based)
  pick [word]       fill the row with the selected (or given) suggestion
  up / down         move the suggestion selection
  refresh           ask the solver again
  reset             start over
  help              show this
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Keys(Vec<Key>),
    Click { row: usize, col: usize },
    Pick(Option<String>),
    Up,
    Down,
    Refresh,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Key(#[from] UnknownKey),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let args: Vec<&str> = words.collect();

        if let Some(word) = head.strip_prefix('\'') {
            return match (typed(word), args.is_empty()) {
                (Some(keys), true) => Ok(Self::Keys(keys)),
                _ => Err(CommandError::Unknown(s.trim().to_owned())),
            };
        }

        let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("enter" | "backspace", []) => Self::Keys(vec![head.parse()?]),
            ("click", [row, col]) => {
                let parse = |n: &str, max: usize| {
                    n.parse::<usize>()
                        .ok()
                        .filter(|n| (1..=max).contains(n))
                        .map(|n| n - 1)
                };

                match (parse(*row, ROWS), parse(*col, WORD_LENGTH)) {
                    (Some(row), Some(col)) => Self::Click { row, col },
                    _ => return Err(CommandError::Usage("click <row 1-6> <col 1-5>")),
                }
            }
            ("click", _) => return Err(CommandError::Usage("click <row 1-6> <col 1-5>")),
            ("pick", []) => Self::Pick(None),
            ("pick", [word]) => Self::Pick(Some(word.to_ascii_uppercase())),
            ("pick", _) => return Err(CommandError::Usage("pick [word]")),
            ("up", []) => Self::Up,
            ("down", []) => Self::Down,
            ("refresh", []) => Self::Refresh,
            ("reset", []) => Self::Reset,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            _ => match (typed(head), args.is_empty()) {
                (Some(keys), true) => Self::Keys(keys),
                _ => return Err(CommandError::Unknown(s.trim().to_owned())),
            },
        };

        Ok(command)
    }
}

/// Letter keys for a word short enough to fit in a row.
fn typed(word: &str) -> Option<Vec<Key>> {
    let fits = !word.is_empty()
        && word.len() <= WORD_LENGTH
        && word.chars().all(|c| c.is_ascii_alphabetic());

    fits.then(|| {
        word.chars()
            .map(|c| Key::Letter(c.to_ascii_uppercase()))
            .collect()
    })
}

impl Command {
    /// The events this command stands for. `help` has none.
    pub fn into_events(self) -> Vec<Event> {
        match self {
            Self::Keys(keys) => keys.into_iter().map(Event::from).collect(),
            Self::Click { row, col } => vec![Event::TileClicked { row, col }],
            Self::Pick(None) => vec![Event::PickSelected],
            Self::Pick(Some(word)) => vec![Event::SuggestionPicked(word)],
            Self::Up => vec![Event::SelectPrevious],
            Self::Down => vec![Event::SelectNext],
            Self::Refresh => vec![Event::Refresh],
            Self::Reset => vec![Event::Reset],
            Self::Help => Vec::new(),
            Self::Quit => vec![Event::Quit],
        }
    }
}

/// Reads commands line by line until `quit` or end of input, queueing their
/// events. Always queues [`Event::Quit`] before returning.
pub fn read_commands(input: impl BufRead, events: &UnboundedSender<Event>) -> Result<(), Error> {
    let result = forward_lines(input, events);
    events.send(Event::Quit).ok();
    result
}

fn forward_lines(input: impl BufRead, events: &UnboundedSender<Event>) -> Result<(), Error> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Help) => println!("{HELP}"),
            Ok(command) => {
                trace!(?command, "parsed command");
                let quit = command == Command::Quit;

                for event in command.into_events() {
                    if events.send(event).is_err() {
                        debug!("assistant stopped, no longer reading input");
                        return Ok(());
                    }
                }

                if quit {
                    return Ok(());
                }
            }
            Err(err) => {
                debug!(%err, "rejected command");
                println!("{err}");
            }
        }
    }

    Ok(())
}

/// Reads stdin on a plain thread, which is left behind rather than joined when
/// the assistant quits first.
pub fn spawn_stdin(events: UnboundedSender<Event>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin".to_owned())
        .spawn(move || {
            if let Err(err) = read_commands(io::stdin().lock(), &events) {
                err.trace();
            }
        })
}

pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", snapshot.grid.emoji_with_letters_spaced());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", snapshot.key_colors.emoji_with_letters_spaced());
    let _ = writeln!(out);

    match snapshot.phase {
        Phase::Editing => {
            let _ = writeln!(
                out,
                "row {} of {ROWS}, column {}",
                snapshot.cursor.row + 1,
                snapshot.cursor.col + 1
            );
        }
        Phase::Submitting => {
            let _ = writeln!(out, "submitted...");
        }
        Phase::Exhausted => {
            let _ = writeln!(out, "no guesses left, `reset` to start over");
        }
    }

    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "⚠️ {error}");
    }

    if snapshot.loading {
        let _ = writeln!(out, "loading suggestions...");
    } else if snapshot.suggestions.is_empty() {
        let _ = writeln!(out, "no suggestions");
    }

    for (index, word) in snapshot
        .suggestions
        .iter()
        .enumerate()
        .take(SHOWN_SUGGESTIONS)
    {
        let marker = if index == snapshot.selected { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {:>2}. {word}", index + 1);
    }

    if snapshot.suggestions.len() > SHOWN_SUGGESTIONS {
        let _ = writeln!(
            out,
            "   ...and {} more",
            snapshot.suggestions.len() - SHOWN_SUGGESTIONS
        );
    }

    out
}
