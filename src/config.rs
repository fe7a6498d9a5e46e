use std::time::Duration;

use serde::Deserialize;
use thisslime::TracingError;
use tracing::{info, warn};
use url::Url;

const DEFAULT_PATH: &str = "./wordle-assist.toml";
const PATH_VAR: &str = "WORDLE_ASSIST_TOML";
const ENV_PREFIX: &str = "WORDLE_ASSIST";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

impl Config {
    /// Loads the toml file named by `WORDLE_ASSIST_TOML` (if it exists), then
    /// `WORDLE_ASSIST_*` environment variables on top.
    pub fn load() -> Result<Self, Error> {
        let path = if let Ok(path) = std::env::var(PATH_VAR) {
            info!(%path, "looking for config file with {PATH_VAR}...");
            path
        } else {
            DEFAULT_PATH.to_owned()
        };

        if !std::path::Path::new(&path).exists() {
            warn!(%path, "config file not found, using defaults");
        }

        ::config::Config::builder()
            .add_source(::config::File::new(&path, ::config::FileFormat::Toml).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }

    pub fn from_toml(text: &str) -> Result<Self, Error> {
        ::config::Config::builder()
            .add_source(::config::File::from_str(text, ::config::FileFormat::Toml))
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }
}

#[derive(Debug, thiserror::Error, TracingError)]
pub enum Error {
    #[error("file read error: {0}")]
    #[event(level = ERROR)]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    #[event(level = ERROR)]
    Parse(::config::ConfigError),
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SolverConfig {
    pub url: Url,
    pub timeout_secs: u64,
}

impl Default for SolverConfig {
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            url: Url::parse("http://localhost:8000").unwrap(),
            timeout_secs: 10,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SessionConfig {
    settle_ms: u64,
}

impl SessionConfig {
    /// How long a submitted row stays locked before editing resumes.
    pub const fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { settle_ms: 800 }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LogsConfig {
    filter: String,
}

impl LogsConfig {
    pub fn filter(&self) -> &str {
        if self.filter.is_empty() {
            warn!("logs.filter provided in config as empty string, using default");
            return "wordle_assist=info";
        }

        &self.filter
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            filter: "wordle_assist=info".to_owned(),
        }
    }
}
