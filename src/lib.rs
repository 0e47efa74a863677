//! N-dimensional binned accumulation with self-describing persisted output
//!
//! This crate re-exports the ndbin workspace: axes and binning strategies,
//! the histogram fill/accumulate/persist structure, the array-storage
//! interface, and the shared error types.
//!
//! # Example
//!
//! ```rust
//! use ndbin::{Axis, FillPolicy, Histogram, MemoryStore};
//!
//! let mut hist = Histogram::from_axes(
//!     vec![
//!         Axis::new("x", 2, 0.0, 2.0, "m"),
//!         Axis::new("y", 3, 0.0, 3.0, "s"),
//!     ],
//!     FillPolicy::empty(),
//! )
//! .unwrap();
//!
//! hist.fill_weighted([0.5, 0.5], 2.0).unwrap();
//! hist.fill([1.5, 2.5]).unwrap();
//!
//! let mut store = MemoryStore::new();
//! hist.write_to(&mut store, "counts", 7).unwrap();
//! assert_eq!(store.get("counts").unwrap().spec.shape, vec![4, 5]);
//! ```

pub use ndbin_core::{Error, Result};

pub use ndbin_hist::{
    histogram_1d, histogram_nd, validate_axes, Axis, Binning, Coordinates, FillPolicy,
    GridIndexer, Histogram, LinearBins, DEFAULT_AXIS_NAME,
};

pub use ndbin_store::{ArraySpec, ArrayStore, AttrValue, MemoryStore, StoredArray};
