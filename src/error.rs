//! Error types for the qmaze crate

use thiserror::Error;

/// Main error type for the qmaze crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: usize },

    #[error("{name} must be within [0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },

    #[error("grid must not be empty")]
    EmptyGrid,

    #[error("grid rows must all have {expected} columns, row {row} has {got}")]
    RaggedGrid {
        expected: usize,
        row: usize,
        got: usize,
    },

    #[error("unknown cell code {code} at row {row}, column {col}")]
    InvalidCellCode { code: i8, row: usize, col: usize },

    #[error("invalid grid value '{token}' at row {row}, column {col}")]
    InvalidGridToken {
        token: String,
        row: usize,
        col: usize,
    },

    #[error("grid has no {marker} cell")]
    MissingMarker { marker: &'static str },

    #[error("grid has more than one {marker} cell")]
    DuplicateMarker { marker: &'static str },

    #[error("agent was trained on a {expected_rows}x{expected_cols} grid, got {rows}x{cols}")]
    GridShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
