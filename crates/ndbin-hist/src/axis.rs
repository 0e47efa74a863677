//! Axis descriptors and whole-set validation

use ndbin_core::{Error, Result};
use std::collections::HashSet;
use std::fmt;

/// One dimension's binning specification
///
/// An axis covers the half-open range `[low, high)` with `n_bins` equal-width
/// bins. Values below `low` (and non-finite values) land in an underflow
/// slot, values at or above `high` in an overflow slot, so the full extent
/// along the axis is `n_bins + 2`.
///
/// Axes are immutable once built. Constraints (non-empty name, unique names,
/// `low <= high`) are checked over the whole axis set when a histogram is
/// constructed, not per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Axis name, unique within one histogram
    pub name: String,
    /// Number of interior bins
    pub n_bins: usize,
    /// Inclusive lower bound of the binned range
    pub low: f64,
    /// Exclusive upper bound of the binned range
    pub high: f64,
    /// Unit label recorded with persisted output
    pub units: String,
}

impl Axis {
    /// Create a new axis
    pub fn new(
        name: impl Into<String>,
        n_bins: usize,
        low: f64,
        high: f64,
        units: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            n_bins,
            low,
            high,
            units: units.into(),
        }
    }

    /// Extent along this axis including the two sentinel slots
    pub fn extent(&self) -> usize {
        self.n_bins + 2
    }

    /// Width of one interior bin
    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.n_bins as f64
    }

    /// Interior bin boundaries, `n_bins + 1` values from `low` to `high`
    pub fn edges(&self) -> Vec<f64> {
        let width = self.bin_width();
        let mut edges = Vec::with_capacity(self.n_bins + 1);
        for i in 0..self.n_bins {
            edges.push(self.low + i as f64 * width);
        }
        edges.push(self.high);
        edges
    }

    /// Interior bin centers
    pub fn centers(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..self.n_bins)
            .map(|i| self.low + (i as f64 + 0.5) * width)
            .collect()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} bins in [{}, {}) {}",
            self.name, self.n_bins, self.low, self.high, self.units
        )
    }
}

/// Validate a whole axis set for histogram construction
///
/// Rejects an empty set, empty names, repeated names, and inverted bounds.
/// Nothing else is constrained: zero bins or a zero-width range are accepted
/// and bin degenerately (everything lands in the sentinel slots).
pub fn validate_axes(axes: &[Axis]) -> Result<()> {
    if axes.is_empty() {
        return Err(Error::config("tried to initialize with no axes"));
    }
    let mut names = HashSet::new();
    for axis in axes {
        if axis.name.is_empty() {
            return Err(Error::config("unnamed axis"));
        }
        if !names.insert(axis.name.as_str()) {
            return Err(Error::config(format!(
                "axis name {} was used twice",
                axis.name
            )));
        }
        if axis.low > axis.high {
            return Err(Error::config(format!(
                "axis {} has high bound below low bound",
                axis.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_geometry() {
        let axis = Axis::new("pt", 4, 0.0, 2.0, "GeV");
        assert_eq!(axis.extent(), 6);
        assert_relative_eq!(axis.bin_width(), 0.5);
        assert_eq!(axis.edges(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(axis.centers(), vec![0.25, 0.75, 1.25, 1.75]);
        assert_eq!(axis.to_string(), "pt: 4 bins in [0, 2) GeV");
    }

    #[test]
    fn test_validate_accepts_degenerate_axes() {
        // zero bins, zero-width range, negative bounds: all allowed
        let axes = vec![
            Axis::new("a", 0, 0.0, 1.0, ""),
            Axis::new("b", 3, 2.0, 2.0, ""),
            Axis::new("c", 3, -5.0, -1.0, ""),
        ];
        assert!(validate_axes(&axes).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_set() {
        let err = validate_axes(&[]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let axes = vec![Axis::new("", 2, 0.0, 1.0, "")];
        let err = validate_axes(&axes).unwrap_err();
        assert!(err.to_string().contains("unnamed axis"));
    }

    #[test]
    fn test_validate_rejects_duplicate_name() {
        let axes = vec![
            Axis::new("x", 2, 0.0, 1.0, ""),
            Axis::new("x", 3, 0.0, 1.0, ""),
        ];
        let err = validate_axes(&axes).unwrap_err();
        assert!(err.to_string().contains("used twice"));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let axes = vec![Axis::new("x", 2, 1.0, 0.0, "")];
        let err = validate_axes(&axes).unwrap_err();
        assert!(err.to_string().contains("high bound below low bound"));
    }
}
