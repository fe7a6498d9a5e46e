#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

//! Headless Wordle assistant: a 6x5 guess grid with keyboard color tracking,
//! driven by discrete input events and fed ranked guesses by a solver api.

pub mod assistant;
pub mod config;
pub mod errors;
pub mod logging;
pub mod solver;
pub mod terminal;
pub mod wordle;

pub use assistant::{Assistant, Event};
pub use config::Config;
pub use errors::Error;
pub use solver::{HttpSolver, SolverClient};
pub use wordle::{Session, Snapshot};
