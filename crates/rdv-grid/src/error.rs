//! Error types for rdv-grid.

use thiserror::Error;

/// Scenario loading failures.  All of these are fatal configuration errors,
/// surfaced to the caller before any simulation state is constructed.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("scenario declares {declared} robots but lists only {got} starting positions")]
    RobotCount { declared: usize, got: usize },

    #[error("scenario declares {declared} grid rows but provides {got}")]
    GridRows { declared: usize, got: usize },

    #[error("grid row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("invalid cell character {ch:?} in grid row {row}: expected '0' or '1'")]
    BadCell { row: usize, ch: char },
}

/// Alias for `Result<T, GridError>`.
pub type GridResult<T> = Result<T, GridError>;
