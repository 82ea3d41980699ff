//! The `Mapping` trait.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::window::{MappingConfig, WindowConfig};
use ndarray::{Array1, Array2};
use std::fmt::Debug;
use zonda_data::{Park, Turbine};

/// Maps measurement series to feature/label pairs for regression.
///
/// Implementations must use the same row layout for features and labels so
/// that row `t` of [`Mapping::features_mill`] pairs with element `t` of
/// [`Mapping::labels_mill`] (likewise for the park variants).
pub trait Mapping: Debug + Send + Sync {
    /// Unique mapping name.
    fn name(&self) -> &str;

    /// Mapping configuration.
    fn config(&self) -> &MappingConfig;

    /// Feature columns produced for one turbine.
    fn num_features_mill(&self, feature_window: usize) -> usize;

    /// Feature columns produced for a park of `turbines` turbines.
    fn num_features_park(&self, feature_window: usize, turbines: usize) -> usize {
        turbines * self.num_features_mill(feature_window)
    }

    /// Build the feature matrix for one turbine.
    fn features_mill(&self, turbine: &Turbine, window: &WindowConfig) -> Result<Array2<f32>>;

    /// Build the label vector for one turbine.
    fn labels_mill(&self, turbine: &Turbine, window: &WindowConfig) -> Result<Array1<f32>>;

    /// Build the feature matrix for a park.
    fn features_park(&self, park: &Park, window: &WindowConfig) -> Result<Array2<f32>>;

    /// Build the label vector for a park.
    fn labels_park(&self, park: &Park, window: &WindowConfig) -> Result<Array1<f32>>;

    /// Build features and labels for one turbine with a single window.
    fn mill_dataset(&self, turbine: &Turbine, window: &WindowConfig) -> Result<Dataset> {
        Dataset::new(
            self.features_mill(turbine, window)?,
            self.labels_mill(turbine, window)?,
        )
    }

    /// Build features and labels for a park with a single window.
    fn park_dataset(&self, park: &Park, window: &WindowConfig) -> Result<Dataset> {
        Dataset::new(
            self.features_park(park, window)?,
            self.labels_park(park, window)?,
        )
    }
}
