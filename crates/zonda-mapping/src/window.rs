//! Window configuration
//!
//! Every mapping shares one windowing scheme. For a series of length `L`,
//! feature window `W`, horizon `H` and padding `P`:
//!
//! ```text
//! timesteps = L - (W + H + P - 1)
//!
//! row t (P <= t < timesteps):
//!   features  <- series[t .. t + W - 1]
//!   label     <- series[t + W + H - 1]
//!
//! rows 0 .. P - 1 stay zero
//! ```
//!
//! Padding reserves leading rows instead of dropping them, so row `t` refers
//! to the window starting at time step `t` whatever the padding.

use crate::error::{MappingError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use zonda_data::DEFAULT_TARGET;

/// Feature window, horizon and padding shared by a feature/label pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Number of consecutive time steps in one feature row (default: 3)
    pub feature_window: usize,
    /// Steps between the end of the window and the label (default: 3)
    pub horizon: usize,
    /// Leading output rows left zero (default: 0)
    #[serde(default)]
    pub padding: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            feature_window: 3,
            horizon: 3,
            padding: 0,
        }
    }
}

impl WindowConfig {
    /// Create a window without padding.
    pub const fn new(feature_window: usize, horizon: usize) -> Self {
        Self {
            feature_window,
            horizon,
            padding: 0,
        }
    }

    /// Set the number of zero-filled leading rows.
    pub const fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Parse a window from JSON and validate it.
    ///
    /// `padding` may be omitted and defaults to 0.
    ///
    /// # Errors
    /// Returns [`MappingError::Config`] on malformed JSON, or
    /// [`MappingError::InvalidWindow`] if a parameter is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the feature window and horizon are at least 1 and that
    /// `W + H + P` fits in a `usize`.
    ///
    /// # Errors
    /// Returns [`MappingError::InvalidWindow`] naming the offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.feature_window == 0 {
            return Err(MappingError::InvalidWindow {
                parameter: "feature_window",
                value: self.feature_window,
                reason: "must be at least 1",
            });
        }
        if self.horizon == 0 {
            return Err(MappingError::InvalidWindow {
                parameter: "horizon",
                value: self.horizon,
                reason: "must be at least 1",
            });
        }
        if self.required_len().is_none() {
            return Err(MappingError::InvalidWindow {
                parameter: "padding",
                value: self.padding,
                reason: "feature_window + horizon + padding overflows usize",
            });
        }
        Ok(())
    }

    /// Minimum series length that yields at least one output row.
    ///
    /// `None` if `W + H + P` overflows.
    pub const fn required_len(&self) -> Option<usize> {
        match self.feature_window.checked_add(self.horizon) {
            Some(sum) => sum.checked_add(self.padding),
            None => None,
        }
    }

    /// Number of output rows for a series of `len` time steps.
    ///
    /// # Errors
    /// Returns [`MappingError::InvalidWindow`] for a zero window or horizon and
    /// [`MappingError::InsufficientData`] if `len < W + H + P`.
    pub fn timesteps(&self, len: usize) -> Result<usize> {
        self.validate()?;

        let required = self.required_len().ok_or(MappingError::InvalidWindow {
            parameter: "padding",
            value: self.padding,
            reason: "feature_window + horizon + padding overflows usize",
        })?;
        if len < required {
            return Err(MappingError::InsufficientData {
                required,
                actual: len,
            });
        }

        let timesteps = len - (required - 1);
        if self.padding >= timesteps {
            log::warn!(
                "padding {} covers all {} output rows; output will be all zeros",
                self.padding,
                timesteps
            );
        }

        Ok(timesteps)
    }

    /// Rows that are computed; rows before `padding` stay zero.
    pub const fn rows(&self, timesteps: usize) -> Range<usize> {
        self.padding..timesteps
    }

    /// Series index read by the label of row `t`.
    pub const fn label_index(&self, t: usize) -> usize {
        t + self.feature_window + self.horizon - 1
    }
}

/// Mapping configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Measurement column the mapping windows over (default: `corrected_score`)
    pub target: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
        }
    }
}

impl MappingConfig {
    /// Use a different measurement column as the target.
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}
