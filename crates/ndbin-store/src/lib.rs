//! Array-storage interface and in-memory backend for ndbin histograms
//!
//! A histogram persists itself as one dense shaped array plus scalar
//! attributes. This crate owns that seam: the [`ArrayStore`] trait a
//! destination implements, the value types describing what gets written
//! ([`ArraySpec`], [`AttrValue`], [`StoredArray`]), and [`MemoryStore`], an
//! in-memory reference backend.
//!
//! # Example
//!
//! ```rust
//! use ndbin_store::{ArraySpec, ArrayStore, AttrValue, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! let spec = ArraySpec {
//!     shape: vec![2, 3],
//!     chunks: vec![2, 3],
//!     compression: 0,
//! };
//! store.put_array("counts", spec, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! store.put_attr("counts", "x_units", AttrValue::Text("m".into())).unwrap();
//!
//! let stored = store.get("counts").unwrap();
//! assert_eq!(stored.value_at(&[1, 2]), Some(5.0));
//! ```

pub mod memory;
pub mod traits;
pub mod types;

pub use memory::MemoryStore;
pub use traits::ArrayStore;
pub use types::{ArraySpec, AttrValue, StoredArray};

pub use ndbin_core::{Error, Result};
