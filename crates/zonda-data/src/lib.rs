#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/zonda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod measurement;
pub mod park;
pub mod turbine;

pub use error::{DataError, Result};
pub use measurement::{DEFAULT_TARGET, MeasurementSource};
pub use park::Park;
pub use turbine::{Turbine, TurbineId};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
