//! Error types for the mapping core.

use thiserror::Error;
use zonda_data::DataError;

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

/// Errors that can occur while building features or labels.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A window parameter violates its constraint
    #[error("Invalid window configuration: {parameter} = {value} ({reason})")]
    InvalidWindow {
        /// Offending parameter (`feature_window` or `horizon`)
        parameter: &'static str,
        /// Value that was supplied
        value: usize,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Series is shorter than feature window + horizon + padding
    #[error(
        "Insufficient data: window needs at least {required} time steps, series has {actual}"
    )]
    InsufficientData {
        /// Minimum series length for the window
        required: usize,
        /// Actual series length
        actual: usize,
    },

    /// Park holds no turbines
    #[error("Park contains no turbines")]
    EmptyGroup,

    /// Park member series length differs from the first turbine
    #[error("Series length mismatch for {entity}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Turbine whose series differs
        entity: String,
        /// Length of the first turbine's series
        expected: usize,
        /// Length of this turbine's series
        actual: usize,
    },

    /// Feature and label row counts disagree
    #[error("Dimension mismatch: {features} feature rows, {labels} labels")]
    DimensionMismatch {
        /// Feature matrix rows
        features: usize,
        /// Label vector length
        labels: usize,
    },

    /// Measurement access error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Configuration parsing error
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
