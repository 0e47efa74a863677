//! The array-storage interface histograms write through

use crate::types::{ArraySpec, AttrValue};
use ndbin_core::Result;

/// Destination for dense shaped arrays with scalar attributes
///
/// A writer first creates a named array with [`put_array`], then attaches
/// any number of scalar attributes to it with [`put_attr`]. Backends decide
/// what to do with the requested chunking and compression; an in-memory
/// backend may simply record them.
///
/// [`put_array`]: ArrayStore::put_array
/// [`put_attr`]: ArrayStore::put_attr
pub trait ArrayStore {
    /// Create a named array from flat row-major values
    ///
    /// `values.len()` must equal `spec.element_count()`; the flat layout has
    /// the last dimension of `spec.shape` fastest-varying. Fails if an array
    /// with this name already exists.
    fn put_array(&mut self, name: &str, spec: ArraySpec, values: &[f64]) -> Result<()>;

    /// Attach a scalar attribute to an existing array
    ///
    /// Fails if no array with this name exists.
    fn put_attr(&mut self, array: &str, key: &str, value: AttrValue) -> Result<()>;
}
