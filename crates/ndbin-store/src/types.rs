//! Value types describing a persisted array and its metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Layout parameters requested for one persisted array
///
/// `shape` and `chunks` are given in declaration order, one entry per
/// dimension, with the last dimension fastest-varying in the flat data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArraySpec {
    /// Extent along each dimension
    pub shape: Vec<usize>,
    /// Requested chunk extent along each dimension
    pub chunks: Vec<usize>,
    /// Requested compression level (0 = none)
    pub compression: u8,
}

impl ArraySpec {
    /// Total number of elements implied by the shape
    pub fn element_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Number of dimensions
    pub fn n_dims(&self) -> usize {
        self.shape.len()
    }
}

/// A scalar attribute attached to a persisted array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Signed integer attribute
    Int(i64),
    /// Unsigned integer attribute
    Uint(u64),
    /// Floating-point attribute
    Float(f64),
    /// Text attribute
    Text(String),
}

impl AttrValue {
    /// The attribute as a float, if it holds one
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The attribute as a signed integer, if it holds one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(x) => Some(*x),
            _ => None,
        }
    }

    /// The attribute as an unsigned integer, if it holds one
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            AttrValue::Uint(x) => Some(*x),
            _ => None,
        }
    }

    /// The attribute as text, if it holds any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(x) => write!(f, "{x}"),
            AttrValue::Uint(x) => write!(f, "{x}"),
            AttrValue::Float(x) => write!(f, "{x}"),
            AttrValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One persisted array: layout, flat values, and scalar attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredArray {
    /// Layout the writer requested
    pub spec: ArraySpec,
    /// Flat element data, row-major with the last dimension fastest
    pub values: Vec<f64>,
    /// Scalar attributes keyed by name
    pub attrs: BTreeMap<String, AttrValue>,
}

impl StoredArray {
    /// Look up one scalar attribute
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Element at the given per-dimension indices, `None` if out of shape
    pub fn value_at(&self, indices: &[usize]) -> Option<f64> {
        if indices.len() != self.spec.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (&i, &extent) in indices.iter().zip(&self.spec.shape) {
            if i >= extent {
                return None;
            }
            flat = flat * extent + i;
        }
        self.values.get(flat).copied()
    }
}
