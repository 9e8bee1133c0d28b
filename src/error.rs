//! Error types for lax

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded. Fatal: the process must not read
    /// any input or contact Slack after this.
    #[error("Config error: {0}")]
    Config(String),

    /// The path given with `--file` could not be opened. The display prefix
    /// is part of the tool's stdout contract.
    #[error("File Open error: {0}")]
    FileOpen(std::io::Error),

    /// The Slack Web API rejected the call or the transport failed.
    #[error("Slack Error: {0}")]
    Slack(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Slack(err.to_string())
    }
}
