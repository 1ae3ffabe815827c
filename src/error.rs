//! Error types for building and running a simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid dimensions {rows}x{cols}: rows and columns must be positive")]
    InvalidDimensions { rows: isize, cols: isize },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("pattern cell ({row}, {col}) lies outside the {rows}x{cols} grid")]
    PatternOutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },

    #[error("pattern {name} line {line}: {reason}")]
    PatternParse {
        name: String,
        line: usize,
        reason: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
