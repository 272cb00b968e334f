//! Structured grid description: per-axis node counts and domain extents.

use crate::error::GridError;
use smallvec::SmallVec;

/// Per-axis node counts, first axis (x) first.
pub type NodeCounts = SmallVec<[u32; 3]>;

/// Per-axis domain extents, first axis (x) first.
pub type Extents = SmallVec<[AxisExtent; 3]>;

/// Physical bounds of one grid axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisExtent {
    /// Lower bound (coordinate of the first node plane).
    pub min: f64,
    /// Upper bound (coordinate of the last node plane).
    pub max: f64,
}

impl AxisExtent {
    /// Create an extent from its bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Physical length of the axis.
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

/// An axis-aligned structured grid of nodes.
///
/// The grid is implicit: it stores per-axis node counts and extents, not
/// node coordinates. Nodes are addressed by integer grid coordinates and
/// flattened row-major with the first axis varying fastest, so the node
/// at `(x, y)` has flat index `x + y·nx` and `(x, y, z)` has
/// `x + y·nx + z·nx·ny`.
///
/// Construction validates every structural invariant; a `GridSpec` that
/// exists is always internally consistent.
///
/// # Examples
///
/// ```
/// use regrid_core::{AxisExtent, GridSpec};
/// use smallvec::smallvec;
///
/// let spec = GridSpec::new(
///     smallvec![5, 5],
///     smallvec![AxisExtent::new(0.0, 4.0), AxisExtent::new(0.0, 4.0)],
/// )
/// .unwrap();
///
/// assert_eq!(spec.ndim(), 2);
/// assert_eq!(spec.node_count(), 25);
/// assert_eq!(spec.element_count(), 16);
/// assert_eq!(spec.node_index(&[2, 3]), 17);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    counts: NodeCounts,
    extents: Extents,
}

impl GridSpec {
    /// Largest representable total node count: connectivity stores vertex
    /// indices as `u32`.
    pub const MAX_NODES: u64 = u32::MAX as u64;

    /// Create a grid description from per-axis node counts and extents.
    ///
    /// Returns an error if the axis lists disagree in length, the
    /// dimensionality is not 2 or 3, any count is zero, any extent is
    /// non-finite or inverted, or the total node count overflows the
    /// `u32` index space.
    pub fn new(counts: NodeCounts, extents: Extents) -> Result<Self, GridError> {
        if counts.len() != extents.len() {
            return Err(GridError::AxisCountMismatch {
                counts: counts.len(),
                extents: extents.len(),
            });
        }
        if !(2..=3).contains(&counts.len()) {
            return Err(GridError::UnsupportedDimensionality {
                found: counts.len(),
            });
        }
        for (axis, &count) in counts.iter().enumerate() {
            if count == 0 {
                return Err(GridError::InvalidNodeCount { axis, count });
            }
        }
        for (axis, extent) in extents.iter().enumerate() {
            if !extent.min.is_finite() || !extent.max.is_finite() || extent.min > extent.max {
                return Err(GridError::InvalidExtent {
                    axis,
                    min: extent.min,
                    max: extent.max,
                });
            }
        }
        let total = counts
            .iter()
            .try_fold(1u64, |acc, &c| acc.checked_mul(c as u64));
        match total {
            Some(t) if t <= Self::MAX_NODES => {}
            _ => return Err(GridError::TooManyNodes { counts }),
        }
        Ok(Self { counts, extents })
    }

    /// Number of axes (2 or 3).
    pub fn ndim(&self) -> usize {
        self.counts.len()
    }

    /// Per-axis node counts.
    pub fn counts(&self) -> &NodeCounts {
        &self.counts
    }

    /// Per-axis domain extents.
    pub fn extents(&self) -> &Extents {
        &self.extents
    }

    /// Total number of nodes (product of the per-axis counts).
    pub fn node_count(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).product()
    }

    /// Total number of elements: the product of `count − 1` per axis.
    ///
    /// An axis with a single node plane contributes zero elements.
    pub fn element_count(&self) -> usize {
        self.counts
            .iter()
            .map(|&c| (c as usize).saturating_sub(1))
            .product()
    }

    /// Vertices referenced by each element: 4 for quads, 8 for hexahedra.
    pub fn verts_per_element(&self) -> usize {
        1 << self.ndim()
    }

    /// Per-axis flat-index strides: `[1, nx]` or `[1, nx, nx·ny]`.
    pub fn strides(&self) -> SmallVec<[usize; 3]> {
        let mut strides = SmallVec::new();
        let mut stride = 1usize;
        for &count in &self.counts {
            strides.push(stride);
            stride *= count as usize;
        }
        strides
    }

    /// Flat node index of a grid coordinate (first axis fastest).
    ///
    /// # Panics
    ///
    /// Panics if `coord` has the wrong rank or any component is out of
    /// range — grid coordinates are internal, never user input.
    pub fn node_index(&self, coord: &[u32]) -> usize {
        assert_eq!(coord.len(), self.ndim(), "coordinate rank mismatch");
        let mut index = 0usize;
        let mut stride = 1usize;
        for (axis, (&c, &count)) in coord.iter().zip(self.counts.iter()).enumerate() {
            assert!(c < count, "axis {axis} coordinate {c} out of range {count}");
            index += c as usize * stride;
            stride *= count as usize;
        }
        index
    }

    /// Derive a grid at different node counts over the same extents.
    pub fn with_counts(&self, counts: NodeCounts) -> Result<Self, GridError> {
        Self::new(counts, self.extents.clone())
    }
}
