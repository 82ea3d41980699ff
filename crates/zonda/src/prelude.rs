//! Common imports for building datasets.

pub use zonda_data::{DEFAULT_TARGET, MeasurementSource, Park, Turbine, TurbineId};
pub use zonda_mapping::{
    Dataset, Mapping, MappingConfig, MappingError, MappingKind, PowerDiffMapping, PowerMapping,
    WindowConfig, available_mappings, create_mapping, create_mapping_by_name, list_mapping_names,
};
