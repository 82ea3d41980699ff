#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/zonda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod power;
pub mod registry;
pub mod traits;
pub mod window;

pub use dataset::Dataset;
pub use error::{MappingError, Result};
pub use power::{PowerDiffMapping, PowerMapping};
pub use traits::Mapping;
pub use window::{MappingConfig, WindowConfig};

// Re-export registry types for convenience
pub use registry::{
    MappingInfo, MappingKind, available_mappings, create_mapping, create_mapping_by_name,
    get_mapping_info, list_mapping_names, mapping_map,
};
