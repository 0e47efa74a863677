//! The accumulation structure: construct, fill, persist

use crate::axis::{validate_axes, Axis};
use crate::binning::{Coordinates, GridIndexer};
use log::debug;
use ndbin_core::Result;
use ndbin_store::{ArraySpec, ArrayStore, AttrValue};
use std::fmt;

bitflags::bitflags! {
    /// Construction-time flags selecting fill behavior
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FillPolicy: u32 {
        /// Count malformed fill inputs instead of returning an error
        const ABSORB_INVALID = 1 << 0;
    }
}

/// Name given to the axis of the one-dimensional constructor
pub const DEFAULT_AXIS_NAME: &str = "x";

/// An N-dimensional grid of weighted-sum accumulators
///
/// Owns an ordered axis sequence, the composed coordinate-to-index mapping,
/// and a flat `f64` buffer of length `prod(n_bins_i + 2)`. Slots 0 and
/// `n_bins + 1` along each axis accumulate underflow and overflow. The
/// buffer is allocated once at construction and only ever mutated by fill.
///
/// A clone is fully independent: axes, per-axis binning state, buffer, and
/// counters are all deep-copied.
#[derive(Debug, Clone)]
pub struct Histogram {
    axes: Vec<Axis>,
    indexer: GridIndexer,
    values: Vec<f64>,
    n_absorbed: u64,
    policy: FillPolicy,
}

impl Histogram {
    /// Build an N-dimensional histogram from an ordered axis sequence
    ///
    /// Fails with a configuration error if the sequence is empty, an axis
    /// name is empty or repeated, or an axis has `low > high`.
    pub fn from_axes(axes: Vec<Axis>, policy: FillPolicy) -> Result<Self> {
        validate_axes(&axes)?;
        let indexer = GridIndexer::from_axes(&axes);
        let values = vec![0.0; indexer.flat_len()];
        debug!(
            "built {}-dim histogram with {} accumulators",
            axes.len(),
            values.len()
        );
        Ok(Self {
            axes,
            indexer,
            values,
            n_absorbed: 0,
            policy,
        })
    }

    /// Build a one-dimensional histogram with the default axis name
    pub fn new_1d(
        n_bins: usize,
        low: f64,
        high: f64,
        units: impl Into<String>,
        policy: FillPolicy,
    ) -> Result<Self> {
        Self::from_axes(
            vec![Axis::new(DEFAULT_AXIS_NAME, n_bins, low, high, units)],
            policy,
        )
    }

    /// Accumulate a weight of 1.0 at the given coordinates
    pub fn fill<C: Coordinates>(&mut self, coords: C) -> Result<()> {
        self.fill_weighted(coords, 1.0)
    }

    /// Accumulate `weight` at the given coordinates
    ///
    /// Coordinates may be an ordered tuple (slice, array, vector), a
    /// name-keyed map, or a bare scalar for the one-dimensional case.
    /// Out-of-range values are not errors; they accumulate in the sentinel
    /// slots. A malformed input (wrong coordinate count, missing axis name)
    /// either increments the absorbed counter (with
    /// [`FillPolicy::ABSORB_INVALID`]) or propagates, leaving the buffer
    /// untouched in both cases.
    pub fn fill_weighted<C: Coordinates>(&mut self, coords: C, weight: f64) -> Result<()> {
        match coords.flat_index(&self.indexer) {
            Ok(index) => {
                self.values[index] += weight;
                Ok(())
            }
            Err(err) if err.is_coordinate_error() && self.policy.contains(FillPolicy::ABSORB_INVALID) => {
                self.n_absorbed += 1;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// The axis sequence, in declaration order
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of dimensions
    pub fn n_dims(&self) -> usize {
        self.axes.len()
    }

    /// Per-axis extents including sentinels, in declaration order
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Axis::extent).collect()
    }

    /// The flat accumulator buffer, last axis fastest-varying
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Accumulator at the given per-axis slot indices (sentinels included)
    ///
    /// Returns `None` if the index count or any index is out of shape.
    pub fn value_at(&self, slots: &[usize]) -> Option<f64> {
        if slots.len() != self.axes.len() {
            return None;
        }
        let mut flat = 0;
        for (&slot, axis) in slots.iter().zip(&self.axes) {
            if slot >= axis.extent() {
                return None;
            }
            flat = flat * axis.extent() + slot;
        }
        self.values.get(flat).copied()
    }

    /// Total accumulated weight across all slots
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Number of malformed fills absorbed so far
    pub fn n_absorbed(&self) -> u64 {
        self.n_absorbed
    }

    /// The fill policy fixed at construction
    pub fn policy(&self) -> FillPolicy {
        self.policy
    }

    /// Persist the grid as one dense shaped array with axis metadata
    ///
    /// Writes the flat buffer unreordered with shape `[n_bins_i + 2]` in
    /// declaration order, chunking at the full per-axis extent, compressed
    /// at `compression`. Attaches per axis the scalar attributes
    /// `{name}_axis`, `{name}_bins`, `{name}_min`, `{name}_max`,
    /// `{name}_units`, plus one scalar `nan` holding the absorbed count.
    pub fn write_to<S: ArrayStore>(
        &self,
        store: &mut S,
        name: &str,
        compression: u8,
    ) -> Result<()> {
        let shape = self.shape();
        let chunks: Vec<usize> = shape.iter().map(|&extent| chunk_extent(extent)).collect();
        let total: usize = shape.iter().product();
        assert_eq!(
            self.values.len(),
            total,
            "value buffer does not match grid shape"
        );
        debug!("writing dataset {name}: shape {shape:?}, deflate {compression}");

        let spec = ArraySpec {
            shape,
            chunks,
            compression,
        };
        store.put_array(name, spec, &self.values)?;

        for (position, axis) in self.axes.iter().enumerate() {
            store.put_attr(
                name,
                &format!("{}_axis", axis.name),
                AttrValue::Uint(position as u64),
            )?;
            store.put_attr(
                name,
                &format!("{}_bins", axis.name),
                AttrValue::Int(axis.n_bins as i64),
            )?;
            store.put_attr(name, &format!("{}_min", axis.name), AttrValue::Float(axis.low))?;
            store.put_attr(name, &format!("{}_max", axis.name), AttrValue::Float(axis.high))?;
            store.put_attr(
                name,
                &format!("{}_units", axis.name),
                AttrValue::Text(axis.units.clone()),
            )?;
        }
        store.put_attr(name, "nan", AttrValue::Uint(self.n_absorbed))?;
        Ok(())
    }
}

// Chunk extent along one axis. The default policy is no sub-chunking.
fn chunk_extent(extent: usize) -> usize {
    extent
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} dims, {} accumulators, total={})",
            self.n_dims(),
            self.values.len(),
            self.sum()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn xy_hist(policy: FillPolicy) -> Histogram {
        Histogram::from_axes(
            vec![
                Axis::new("x", 2, 0.0, 2.0, "m"),
                Axis::new("y", 3, 0.0, 3.0, "s"),
            ],
            policy,
        )
        .unwrap()
    }

    #[test]
    fn test_construction_sizes_buffer() {
        let hist = xy_hist(FillPolicy::empty());
        assert_eq!(hist.n_dims(), 2);
        assert_eq!(hist.shape(), vec![4, 5]);
        assert_eq!(hist.values().len(), 20);
        assert_relative_eq!(hist.sum(), 0.0);
    }

    #[test]
    fn test_construction_rejects_bad_axes() {
        let err = Histogram::from_axes(vec![], FillPolicy::empty()).unwrap_err();
        assert!(!err.is_coordinate_error());

        let err = Histogram::from_axes(
            vec![
                Axis::new("x", 2, 0.0, 1.0, ""),
                Axis::new("x", 2, 0.0, 1.0, ""),
            ],
            FillPolicy::empty(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("used twice"));
    }

    #[test]
    fn test_fill_accumulates() {
        let mut hist = xy_hist(FillPolicy::empty());
        hist.fill([0.5, 0.5]).unwrap();
        hist.fill_weighted([0.5, 0.5], 2.5).unwrap();
        hist.fill_weighted([1.5, 2.5], 3.0).unwrap();

        assert_relative_eq!(hist.value_at(&[1, 1]).unwrap(), 3.5);
        assert_relative_eq!(hist.value_at(&[2, 3]).unwrap(), 3.0);
        assert_relative_eq!(hist.sum(), 6.5);
    }

    #[test]
    fn test_fill_out_of_range_goes_to_sentinels() {
        let mut hist = xy_hist(FillPolicy::empty());
        hist.fill([-1.0, 0.5]).unwrap();
        hist.fill([9.0, f64::NAN]).unwrap();

        assert_relative_eq!(hist.value_at(&[0, 1]).unwrap(), 1.0);
        assert_relative_eq!(hist.value_at(&[3, 0]).unwrap(), 1.0);
        assert_eq!(hist.n_absorbed(), 0);
    }

    #[test]
    fn test_fill_named() {
        let mut hist = xy_hist(FillPolicy::empty());
        let mut coords = HashMap::new();
        coords.insert("x".to_string(), 0.5);
        coords.insert("y".to_string(), 2.5);
        hist.fill_weighted(&coords, 4.0).unwrap();
        assert_relative_eq!(hist.value_at(&[1, 3]).unwrap(), 4.0);
    }

    #[test]
    fn test_scalar_fill_on_1d() {
        let mut hist = Histogram::new_1d(4, 0.0, 2.0, "m", FillPolicy::empty()).unwrap();
        assert_eq!(hist.axes()[0].name, DEFAULT_AXIS_NAME);
        hist.fill(0.25).unwrap();
        hist.fill_weighted(1.75, 2.0).unwrap();
        assert_relative_eq!(hist.value_at(&[1]).unwrap(), 1.0);
        assert_relative_eq!(hist.value_at(&[4]).unwrap(), 2.0);
    }

    #[test]
    fn test_malformed_fill_propagates_without_absorption() {
        let mut hist = xy_hist(FillPolicy::empty());
        hist.fill_weighted([0.5, 0.5], 2.0).unwrap();
        let before = hist.sum();

        let err = hist.fill([0.5]).unwrap_err();
        assert!(err.is_coordinate_error());
        assert_relative_eq!(hist.sum(), before);
        assert_eq!(hist.n_absorbed(), 0);
    }

    #[test]
    fn test_malformed_fill_absorbed_with_absorption() {
        let mut hist = xy_hist(FillPolicy::ABSORB_INVALID);
        hist.fill_weighted([0.5, 0.5], 2.0).unwrap();
        let before = hist.sum();

        hist.fill([0.5]).unwrap();
        assert_eq!(hist.n_absorbed(), 1);
        assert_relative_eq!(hist.sum(), before);

        let empty: HashMap<String, f64> = HashMap::new();
        hist.fill(&empty).unwrap();
        assert_eq!(hist.n_absorbed(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = xy_hist(FillPolicy::ABSORB_INVALID);
        original.fill_weighted([0.5, 0.5], 2.0).unwrap();

        let mut copy = original.clone();
        copy.fill_weighted([0.5, 0.5], 5.0).unwrap();
        copy.fill([9.9]).unwrap();

        assert_relative_eq!(original.sum(), 2.0);
        assert_eq!(original.n_absorbed(), 0);
        assert_relative_eq!(copy.sum(), 7.0);
        assert_eq!(copy.n_absorbed(), 1);
    }

    #[test]
    fn test_display() {
        let hist = xy_hist(FillPolicy::empty());
        assert_eq!(hist.to_string(), "Histogram(2 dims, 20 accumulators, total=0)");
    }
}
