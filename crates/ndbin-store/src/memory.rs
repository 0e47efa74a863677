//! In-memory array store
//!
//! Records exactly what a writer requested (layout, values, attributes)
//! without applying chunking or compression. Used as the reference backend
//! in tests and examples; serializable, so a store can be snapshotted.

use crate::traits::ArrayStore;
use crate::types::{ArraySpec, AttrValue, StoredArray};
use ndbin_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An [`ArrayStore`] that keeps every array in process memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    arrays: BTreeMap<String, StoredArray>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an array by name
    pub fn get(&self, name: &str) -> Option<&StoredArray> {
        self.arrays.get(name)
    }

    /// Names of all stored arrays, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }

    /// Number of stored arrays
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}

impl ArrayStore for MemoryStore {
    fn put_array(&mut self, name: &str, spec: ArraySpec, values: &[f64]) -> Result<()> {
        if self.arrays.contains_key(name) {
            return Err(Error::store(format!("dataset {name} already exists")));
        }
        if values.len() != spec.element_count() {
            return Err(Error::store(format!(
                "dataset {name}: {} values for shape {:?}",
                values.len(),
                spec.shape
            )));
        }
        self.arrays.insert(
            name.to_string(),
            StoredArray {
                spec,
                values: values.to_vec(),
                attrs: BTreeMap::new(),
            },
        );
        Ok(())
    }

    fn put_attr(&mut self, array: &str, key: &str, value: AttrValue) -> Result<()> {
        let stored = self
            .arrays
            .get_mut(array)
            .ok_or_else(|| Error::store(format!("no dataset named {array}")))?;
        stored.attrs.insert(key.to_string(), value);
        Ok(())
    }
}
