//! Error types for measurement access.

use thiserror::Error;

/// Result type for measurement operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while reading measurement series.
#[derive(Debug, Error)]
pub enum DataError {
    /// Target column is not part of the measurement table
    #[error("Missing column '{column}' (available: {available:?})")]
    MissingColumn {
        /// Column that was requested
        column: String,
        /// Columns present in the table
        available: Vec<String>,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
