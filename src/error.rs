use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("cannot list {}: {source}", dir.display())]
    DiscoverTargets {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("Logger setup error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ExpandError>;
