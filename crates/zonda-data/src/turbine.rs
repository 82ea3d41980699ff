//! A single turbine and its measurements.

use crate::error::Result;
use crate::measurement::MeasurementSource;
use derive_more::{Display, From, Into};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Turbine identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Serialize, Deserialize,
)]
#[display("turbine-{_0}")]
pub struct TurbineId(pub u32);

/// A turbine owning one measurement table.
#[derive(Debug, Clone)]
pub struct Turbine {
    id: TurbineId,
    measurements: DataFrame,
}

impl Turbine {
    /// Create a turbine from an existing measurement table.
    pub const fn new(id: TurbineId, measurements: DataFrame) -> Self {
        Self { id, measurements }
    }

    /// Create a turbine holding a single named series.
    ///
    /// # Errors
    /// Returns a polars error if the table cannot be built.
    pub fn from_values(id: u32, column: &str, values: Vec<f64>) -> Result<Self> {
        let measurements = DataFrame::new(vec![Column::new(column.into(), values)])?;
        Ok(Self::new(TurbineId(id), measurements))
    }

    /// Get the turbine identifier.
    pub const fn id(&self) -> TurbineId {
        self.id
    }
}

impl MeasurementSource for Turbine {
    fn measurements(&self) -> &DataFrame {
        &self.measurements
    }
}
