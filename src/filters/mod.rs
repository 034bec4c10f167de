//! Name/values filter abstraction
//!
//! A generic mapping from filter name to a list of values, narrowed into
//! service-specific filter records by generated accessor methods (see
//! `service_filters_gen.rs`, produced by the `generate-service-filters`
//! binary).

pub mod sdk;
pub mod services;

mod service_filters_gen;

use std::collections::{BTreeMap, HashMap};

/// Generic name → values filter map
///
/// Keys are unique; iteration order is sorted by name, so everything
/// derived from this map is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValuesFilters {
    filters: BTreeMap<String, Vec<String>>,
}

impl NameValuesFilters {
    /// Create an empty filter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values for a filter name, replacing any existing entry
    #[must_use]
    pub fn add(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.filters.insert(name.into(), values);
        self
    }

    /// Append a single value to a filter name
    #[must_use]
    pub fn add_one(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Merge another filter map into this one; other's entries win
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.filters.extend(other.filters);
        self
    }

    /// Owned copy of the underlying map, sorted by filter name
    pub fn map(&self) -> BTreeMap<String, Vec<String>> {
        self.filters.clone()
    }

    /// Number of filter names
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the map holds no filters
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for NameValuesFilters {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self {
            filters: map.into_iter().collect(),
        }
    }
}

impl FromIterator<(String, Vec<String>)> for NameValuesFilters {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}
