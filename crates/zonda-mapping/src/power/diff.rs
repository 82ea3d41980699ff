//! Power-Difference Mapping
//!
//! Feature rows hold the window's power levels followed by the first
//! differences between consecutive levels, `2W - 1` columns per turbine.
//! Labels are the power `horizon` steps after the window (summed over the
//! park for park labels).

use super::{
    horizon_labels, mill_series, park_series, summed_horizon_labels, write_deltas, write_levels,
};
use crate::error::Result;
use crate::traits::Mapping;
use crate::window::{MappingConfig, WindowConfig};
use ndarray::{Array1, Array2};
use zonda_data::{Park, Turbine};

/// Levels plus in-window differences.
#[derive(Debug, Clone, Default)]
pub struct PowerDiffMapping {
    config: MappingConfig,
}

impl PowerDiffMapping {
    /// Create a mapping with the given configuration.
    pub const fn new(config: MappingConfig) -> Self {
        Self { config }
    }
}

impl Mapping for PowerDiffMapping {
    fn name(&self) -> &str {
        "power_diff"
    }

    fn config(&self) -> &MappingConfig {
        &self.config
    }

    fn num_features_mill(&self, feature_window: usize) -> usize {
        (2 * feature_window).saturating_sub(1)
    }

    fn features_mill(&self, turbine: &Turbine, window: &WindowConfig) -> Result<Array2<f32>> {
        let (series, timesteps) = mill_series(turbine, &self.config.target, window)?;
        let w = window.feature_window;
        let num_features = self.num_features_mill(w);

        log::debug!(
            "power_diff features for {}: window={} horizon={} padding={} -> {}x{}",
            turbine.id(),
            w,
            window.horizon,
            window.padding,
            timesteps,
            num_features
        );

        let mut features = Array2::<f32>::zeros((timesteps, num_features));
        for t in window.rows(timesteps) {
            let values = &series[t..t + w];
            let mut row = features.row_mut(t);
            write_levels(&mut row, 0, values);
            write_deltas(&mut row, w, values);
        }

        Ok(features)
    }

    fn labels_mill(&self, turbine: &Turbine, window: &WindowConfig) -> Result<Array1<f32>> {
        let (series, timesteps) = mill_series(turbine, &self.config.target, window)?;
        Ok(horizon_labels(&series, window, timesteps))
    }

    fn features_park(&self, park: &Park, window: &WindowConfig) -> Result<Array2<f32>> {
        let (series, timesteps) = park_series(park, &self.config.target, window)?;
        let w = window.feature_window;
        let amount = series.len();
        let num_features = self.num_features_park(w, amount);
        let start_diffs = amount * w;

        log::debug!(
            "power_diff features for park {} ({} turbines): window={} horizon={} padding={} -> {}x{}",
            park.name(),
            amount,
            w,
            window.horizon,
            window.padding,
            timesteps,
            num_features
        );

        let mut features = Array2::<f32>::zeros((timesteps, num_features));
        for (idx, values) in series.iter().enumerate() {
            let level_offset = idx * w;
            let diff_offset = start_diffs + idx * (w - 1);
            for t in window.rows(timesteps) {
                let window_values = &values[t..t + w];
                let mut row = features.row_mut(t);
                write_levels(&mut row, level_offset, window_values);
                write_deltas(&mut row, diff_offset, window_values);
            }
        }

        Ok(features)
    }

    fn labels_park(&self, park: &Park, window: &WindowConfig) -> Result<Array1<f32>> {
        let (series, timesteps) = park_series(park, &self.config.target, window)?;
        Ok(summed_horizon_labels(&series, window, timesteps))
    }
}
