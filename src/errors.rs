use thiserror::Error as ThisError;
use thisslime::TracingError;

#[derive(Debug, ThisError, TracingError)]
#[span]
pub enum Error {
    #[error(transparent)]
    Config(#[from] crate::config::Error),

    #[error(transparent)]
    Solver(#[from] crate::solver::Error),

    #[error("terminal i/o failed: {0}")]
    #[event(level = ERROR)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
