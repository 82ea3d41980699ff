#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/zonda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod prelude;

// Re-export main types from sub-crates
pub use zonda_data as data;
pub use zonda_mapping as mapping;

pub use zonda_mapping::{Dataset, Mapping, MappingError, WindowConfig};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
