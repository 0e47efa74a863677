//! N-dimensional binned accumulation
//!
//! This crate bins streams of continuous, possibly multi-dimensional,
//! weighted samples into a regular grid, accumulates per-bin weighted sums,
//! and persists the result as one dense array with per-axis metadata.
//!
//! # Key Features
//!
//! - **Arbitrary dimensionality**: one flat buffer indexed by mixed-radix
//!   composition, last-declared axis fastest-varying
//! - **Sentinel capture**: out-of-range and non-finite coordinates land in
//!   per-axis underflow/overflow slots, never errors
//! - **Flexible fill inputs**: ordered tuples, name-keyed maps, or a bare
//!   scalar for the one-dimensional case
//! - **Absorption**: malformed fills can be counted instead of rejected
//! - **Self-describing output**: persisted through any
//!   [`ArrayStore`](ndbin_store::ArrayStore) backend with bin counts,
//!   bounds, and unit labels attached
//!
//! # Examples
//!
//! ## One-dimensional fill and inspect
//!
//! ```rust
//! use ndbin_hist::{FillPolicy, Histogram};
//!
//! let mut hist = Histogram::new_1d(10, 0.0, 1.0, "m", FillPolicy::empty()).unwrap();
//! hist.fill(0.05).unwrap();
//! hist.fill_weighted(0.95, 2.0).unwrap();
//! hist.fill(7.0).unwrap(); // overflow slot, not an error
//!
//! assert_eq!(hist.value_at(&[1]), Some(1.0));
//! assert_eq!(hist.value_at(&[10]), Some(2.0));
//! assert_eq!(hist.value_at(&[11]), Some(1.0));
//! ```
//!
//! ## Two axes, persisted to a store
//!
//! ```rust
//! use ndbin_hist::{Axis, FillPolicy, Histogram};
//! use ndbin_store::MemoryStore;
//!
//! let mut hist = Histogram::from_axes(
//!     vec![
//!         Axis::new("x", 2, 0.0, 2.0, "m"),
//!         Axis::new("y", 3, 0.0, 3.0, "s"),
//!     ],
//!     FillPolicy::empty(),
//! )
//! .unwrap();
//! hist.fill_weighted([0.5, 0.5], 2.0).unwrap();
//!
//! let mut store = MemoryStore::new();
//! hist.write_to(&mut store, "counts", 7).unwrap();
//!
//! let stored = store.get("counts").unwrap();
//! assert_eq!(stored.spec.shape, vec![4, 5]);
//! assert_eq!(stored.attr("y_units").unwrap().as_text(), Some("s"));
//! ```
//!
//! ## Absorbing malformed input
//!
//! ```rust
//! use ndbin_hist::{Axis, FillPolicy, Histogram};
//!
//! let mut hist = Histogram::from_axes(
//!     vec![Axis::new("x", 2, 0.0, 1.0, ""), Axis::new("y", 2, 0.0, 1.0, "")],
//!     FillPolicy::ABSORB_INVALID,
//! )
//! .unwrap();
//!
//! // wrong coordinate count: counted, weight discarded
//! hist.fill([0.5]).unwrap();
//! assert_eq!(hist.n_absorbed(), 1);
//! assert_eq!(hist.sum(), 0.0);
//! ```

pub mod axis;
pub mod binning;
pub mod histogram;

// Re-export main types and traits
pub use axis::{validate_axes, Axis};
pub use binning::{Binning, Coordinates, GridIndexer, LinearBins};
pub use histogram::{FillPolicy, Histogram, DEFAULT_AXIS_NAME};

// Convenience functions
/// Create a one-dimensional histogram that propagates malformed fills
pub fn histogram_1d(
    n_bins: usize,
    low: f64,
    high: f64,
    units: impl Into<String>,
) -> crate::Result<Histogram> {
    Histogram::new_1d(n_bins, low, high, units, FillPolicy::empty())
}

/// Create an N-dimensional histogram that propagates malformed fills
pub fn histogram_nd(axes: Vec<Axis>) -> crate::Result<Histogram> {
    Histogram::from_axes(axes, FillPolicy::empty())
}

pub use ndbin_core::{Error, Result};
