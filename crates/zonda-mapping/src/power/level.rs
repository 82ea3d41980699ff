//! Power-level mapping: the window's raw levels only, `W` columns per turbine.

use super::{horizon_labels, mill_series, park_series, summed_horizon_labels, write_levels};
use crate::error::Result;
use crate::traits::Mapping;
use crate::window::{MappingConfig, WindowConfig};
use ndarray::{Array1, Array2};
use zonda_data::{Park, Turbine};

/// Levels without differences.
#[derive(Debug, Clone, Default)]
pub struct PowerMapping {
    config: MappingConfig,
}

impl PowerMapping {
    /// Create a mapping with the given configuration.
    pub const fn new(config: MappingConfig) -> Self {
        Self { config }
    }
}

impl Mapping for PowerMapping {
    fn name(&self) -> &str {
        "power"
    }

    fn config(&self) -> &MappingConfig {
        &self.config
    }

    fn num_features_mill(&self, feature_window: usize) -> usize {
        feature_window
    }

    fn features_mill(&self, turbine: &Turbine, window: &WindowConfig) -> Result<Array2<f32>> {
        let (series, timesteps) = mill_series(turbine, &self.config.target, window)?;
        let w = window.feature_window;

        log::debug!(
            "power features for {}: window={} horizon={} padding={} -> {}x{}",
            turbine.id(),
            w,
            window.horizon,
            window.padding,
            timesteps,
            w
        );

        let mut features = Array2::<f32>::zeros((timesteps, w));
        for t in window.rows(timesteps) {
            write_levels(&mut features.row_mut(t), 0, &series[t..t + w]);
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
        let num_features = self.num_features_park(w, series.len());

        log::debug!(
            "power features for park {} ({} turbines): -> {}x{}",
            park.name(),
            series.len(),
            timesteps,
            num_features
        );

        let mut features = Array2::<f32>::zeros((timesteps, num_features));
        for (idx, values) in series.iter().enumerate() {
            for t in window.rows(timesteps) {
                write_levels(&mut features.row_mut(t), idx * w, &values[t..t + w]);
            }
        }

        Ok(features)
    }

    fn labels_park(&self, park: &Park, window: &WindowConfig) -> Result<Array1<f32>> {
        let (series, timesteps) = park_series(park, &self.config.target, window)?;
        Ok(summed_horizon_labels(&series, window, timesteps))
    }
}
