//! Parks: ordered collections of turbines on a shared time axis.

use crate::turbine::{Turbine, TurbineId};

/// An ordered group of turbines.
///
/// Turbine order is significant: the park mappings lay out feature blocks in
/// this order.
#[derive(Debug, Clone, Default)]
pub struct Park {
    name: String,
    turbines: Vec<Turbine>,
}

impl Park {
    /// Create a park from its turbines.
    pub fn new(name: impl Into<String>, turbines: Vec<Turbine>) -> Self {
        Self {
            name: name.into(),
            turbines,
        }
    }

    /// Get the park name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the turbines in park order.
    pub fn turbines(&self) -> &[Turbine] {
        &self.turbines
    }

    /// Append a turbine to the park.
    pub fn push(&mut self, turbine: Turbine) {
        self.turbines.push(turbine);
    }

    /// Look up a turbine by identifier.
    pub fn get(&self, id: TurbineId) -> Option<&Turbine> {
        self.turbines.iter().find(|t| t.id() == id)
    }

    /// Number of turbines.
    pub fn len(&self) -> usize {
        self.turbines.len()
    }

    /// Check whether the park has no turbines.
    pub fn is_empty(&self) -> bool {
        self.turbines.is_empty()
    }

    /// Iterate over turbines in park order.
    pub fn iter(&self) -> std::slice::Iter<'_, Turbine> {
        self.turbines.iter()
    }
}

impl<'a> IntoIterator for &'a Park {
    type Item = &'a Turbine;
    type IntoIter = std::slice::Iter<'a, Turbine>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
