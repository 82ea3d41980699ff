//! Mapping Registry
//!
//! Central registry for all available mappings. Allows lookup and
//! instantiation by name.

use crate::power::{PowerDiffMapping, PowerMapping};
use crate::traits::Mapping;
use crate::window::MappingConfig;
use std::collections::HashMap;

/// Available mapping kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingKind {
    /// Window levels only
    Power,
    /// Window levels and in-window differences
    PowerDiff,
}

/// Mapping metadata
#[derive(Debug, Clone)]
pub struct MappingInfo {
    /// Mapping name (unique identifier)
    pub name: &'static str,
    /// Mapping kind
    pub kind: MappingKind,
    /// Brief description of the feature layout
    pub description: &'static str,
    /// Whether rows carry first differences after the levels
    pub includes_deltas: bool,
}

/// Get all available mapping info
pub fn available_mappings() -> Vec<MappingInfo> {
    vec![
        MappingInfo {
            name: "power",
            kind: MappingKind::Power,
            description: "Power levels over the feature window",
            includes_deltas: false,
        },
        MappingInfo {
            name: "power_diff",
            kind: MappingKind::PowerDiff,
            description: "Power levels and their first differences over the feature window",
            includes_deltas: true,
        },
    ]
}

/// Get mapping info by name
pub fn get_mapping_info(name: &str) -> Option<MappingInfo> {
    available_mappings().into_iter().find(|m| m.name == name)
}

/// Get a map of all mappings indexed by name
pub fn mapping_map() -> HashMap<&'static str, MappingInfo> {
    available_mappings()
        .into_iter()
        .map(|m| (m.name, m))
        .collect()
}

/// List all mapping names
pub fn list_mapping_names() -> Vec<&'static str> {
    available_mappings().into_iter().map(|m| m.name).collect()
}

/// Instantiate a mapping by kind
pub fn create_mapping(kind: MappingKind, config: MappingConfig) -> Box<dyn Mapping> {
    match kind {
        MappingKind::Power => Box::new(PowerMapping::new(config)),
        MappingKind::PowerDiff => Box::new(PowerDiffMapping::new(config)),
    }
}

/// Instantiate a mapping by name
pub fn create_mapping_by_name(name: &str, config: MappingConfig) -> Option<Box<dyn Mapping>> {
    get_mapping_info(name).map(|info| create_mapping(info.kind, config))
}
