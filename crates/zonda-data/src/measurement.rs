//! Measurement sources.
//!
//! Anything that owns a table of per-step measurements can feed the mapping
//! core. The table is a polars `DataFrame`; one named column holds the series
//! the mappings window over.

use crate::error::{DataError, Result};
use polars::prelude::*;

/// Column holding the corrected power score of a turbine.
///
/// Mappings default to this target unless configured otherwise.
pub const DEFAULT_TARGET: &str = "corrected_score";

/// Trait for entities exposing a measurement table.
pub trait MeasurementSource {
    /// Get the measurement table.
    fn measurements(&self) -> &DataFrame;

    /// Number of time steps in the measurement table.
    fn len(&self) -> usize {
        self.measurements().height()
    }

    /// Check whether the table holds no time steps.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a numeric column as an `f64` series.
    ///
    /// Any numeric dtype is cast to `Float64`. Null cells read as `NaN`.
    ///
    /// # Errors
    /// Returns [`DataError::MissingColumn`] if the column does not exist, or a
    /// polars error if the column cannot be cast to `Float64`.
    fn series(&self, column: &str) -> Result<Vec<f64>> {
        let measurements = self.measurements();
        let values = measurements
            .column(column)
            .map_err(|_| DataError::MissingColumn {
                column: column.to_string(),
                available: measurements
                    .get_column_names()
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            })?
            .cast(&DataType::Float64)?;

        Ok(values
            .as_materialized_series()
            .f64()?
            .iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect())
    }
}
