use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

/// Errors raised while loading, filtering and summarising trip data.
#[derive(Debug, Error)]
pub enum Error {
    /// The city key is not one of the known datasets.
    #[error("unknown city: '{0}'")]
    UnknownCity(String),

    #[error("unknown month: '{0}'")]
    UnknownMonth(String),

    #[error("unknown day: '{0}'")]
    UnknownDay(String),

    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("row {row}: cannot parse {column} '{value}'")]
    Timestamp {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// A report needs at least one row.
    #[error("no data for this selection")]
    EmptySelection,

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
