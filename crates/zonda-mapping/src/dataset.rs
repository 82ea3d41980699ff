//! Aligned feature/label pairs.

use crate::error::{MappingError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};

/// Feature matrix and label vector built with one window configuration.
///
/// Row `t` of `features` and element `t` of `labels` describe the same window.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Feature matrix (timesteps x features)
    pub features: Array2<f32>,
    /// Label vector (timesteps)
    pub labels: Array1<f32>,
}

impl Dataset {
    /// Pair a feature matrix with its labels.
    ///
    /// # Errors
    /// Returns [`MappingError::DimensionMismatch`] if the row counts differ.
    pub fn new(features: Array2<f32>, labels: Array1<f32>) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(MappingError::DimensionMismatch {
                features: features.nrows(),
                labels: labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    /// Number of rows, padding included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of feature columns.
    pub fn num_features(&self) -> usize {
        self.features.ncols()
    }

    /// Computed rows only, skipping the first `padding` rows.
    pub fn valid_rows(&self, padding: usize) -> (ArrayView2<'_, f32>, ArrayView1<'_, f32>) {
        let start = padding.min(self.len());
        (
            self.features.slice(s![start.., ..]),
            self.labels.slice(s![start..]),
        )
    }

    /// Split into the feature matrix and label vector.
    pub fn into_parts(self) -> (Array2<f32>, Array1<f32>) {
        (self.features, self.labels)
    }
}
