use thisslime::TracingError;

#[derive(Debug, thiserror::Error, TracingError)]
#[span]
pub enum Error {
    #[error("could not connect to solver api: {0}")]
    #[event(level = WARN)]
    Connect(reqwest::Error),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error("solver api sent an unreadable response: {0}")]
    #[event(level = ERROR)]
    Decode(reqwest::Error),

    #[error("could not build http client: {0}")]
    #[event(level = ERROR)]
    Client(reqwest::Error),

    #[error("invalid solver url: {0}")]
    #[event(level = ERROR)]
    Url(#[from] url::ParseError),
}

/// The solver answered, but not with a success status.
#[derive(Debug, thiserror::Error, TracingError)]
#[error("solver api returned {status}: {body}")]
#[event(level = WARN)]
pub struct StatusError {
    #[field(print = Display)]
    pub status: reqwest::StatusCode,
    #[field(print = Display)]
    pub body: String,
}
