//! Power mappings - windows over a turbine's power series
//!
//! A turbine's feature row holds the window's levels, optionally followed by
//! the first differences inside the window. Park rows place every turbine's
//! levels first, then every turbine's differences:
//!
//! ```text
//! | levels t0 | levels t1 | ... | deltas t0 | deltas t1 | ... |
//!   W cols      W cols            W-1 cols    W-1 cols
//! ```
//!
//! Labels read the target `horizon` steps past the end of the window. Park
//! labels are the sum over turbines.

pub mod diff;
pub mod level;

pub use diff::PowerDiffMapping;
pub use level::PowerMapping;

use crate::error::{MappingError, Result};
use crate::window::WindowConfig;
use ndarray::{Array1, ArrayViewMut1};
use zonda_data::{MeasurementSource, Park, Turbine};

/// Read a turbine's target series and the number of output rows.
pub(crate) fn mill_series(
    turbine: &Turbine,
    target: &str,
    window: &WindowConfig,
) -> Result<(Vec<f64>, usize)> {
    let series = turbine.series(target)?;
    let timesteps = window.timesteps(series.len())?;
    Ok((series, timesteps))
}

/// Read every turbine's target series; all must match the first turbine's length.
pub(crate) fn park_series(
    park: &Park,
    target: &str,
    window: &WindowConfig,
) -> Result<(Vec<Vec<f64>>, usize)> {
    let first = park.turbines().first().ok_or(MappingError::EmptyGroup)?;
    let expected = first.len();
    let timesteps = window.timesteps(expected)?;

    let series = park
        .iter()
        .map(|turbine| {
            let values = turbine.series(target)?;
            if values.len() != expected {
                return Err(MappingError::LengthMismatch {
                    entity: turbine.id().to_string(),
                    expected,
                    actual: values.len(),
                });
            }
            Ok(values)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((series, timesteps))
}

/// Write window levels into `row[offset .. offset + W]`.
pub(crate) fn write_levels(row: &mut ArrayViewMut1<'_, f32>, offset: usize, values: &[f64]) {
    for (i, &value) in values.iter().enumerate() {
        row[offset + i] = value as f32;
    }
}

/// Write in-window first differences into `row[offset .. offset + W - 1]`.
///
/// Delta `i` (1 <= i < W) is `values[i] - values[i - 1]` and lands at `offset + i - 1`.
pub(crate) fn write_deltas(row: &mut ArrayViewMut1<'_, f32>, offset: usize, values: &[f64]) {
    for (i, pair) in values.windows(2).enumerate() {
        row[offset + i] = (pair[1] - pair[0]) as f32;
    }
}

/// Label vector for one series.
pub(crate) fn horizon_labels(series: &[f64], window: &WindowConfig, timesteps: usize) -> Array1<f32> {
    let mut labels = Array1::<f32>::zeros(timesteps);
    for t in window.rows(timesteps) {
        labels[t] = series[window.label_index(t)] as f32;
    }
    labels
}

/// Label vector summing every series, accumulated in `f32` in park order.
pub(crate) fn summed_horizon_labels(
    series: &[Vec<f64>],
    window: &WindowConfig,
    timesteps: usize,
) -> Array1<f32> {
    let mut labels = Array1::<f32>::zeros(timesteps);
    for values in series {
        for t in window.rows(timesteps) {
            labels[t] = (f64::from(labels[t]) + values[window.label_index(t)]) as f32;
        }
    }
    labels
}
