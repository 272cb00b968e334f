//! Node-aligned scalar field storage.

use crate::error::GridError;
use crate::grid::GridSpec;

/// One floating-point value per grid node, stored flat in node ordering.
///
/// The value sequence must have exactly one entry per node of the grid;
/// the constructor enforces this, so a `ScalarField` is always
/// index-aligned with any mesh regenerated from the same [`GridSpec`].
///
/// # Examples
///
/// ```
/// use regrid_core::{AxisExtent, GridSpec, ScalarField};
/// use smallvec::smallvec;
///
/// let spec = GridSpec::new(
///     smallvec![3, 2],
///     smallvec![AxisExtent::new(0.0, 2.0), AxisExtent::new(0.0, 1.0)],
/// )
/// .unwrap();
/// let field = ScalarField::new(spec, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]).unwrap();
///
/// // x varies fastest: node (1, 1) is the fifth entry.
/// assert_eq!(field.value(&[1, 1]), 11.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    spec: GridSpec,
    values: Vec<f64>,
}

impl ScalarField {
    /// Pair a value sequence with its grid.
    ///
    /// Returns [`GridError::LengthMismatch`] unless `values.len()` equals
    /// the grid's node count.
    pub fn new(spec: GridSpec, values: Vec<f64>) -> Result<Self, GridError> {
        if values.len() != spec.node_count() {
            return Err(GridError::LengthMismatch {
                expected: spec.node_count(),
                actual: values.len(),
            });
        }
        Ok(Self { spec, values })
    }

    /// The grid this field is sampled on.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Flat values in node ordering (first axis fastest).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at a grid coordinate.
    ///
    /// # Panics
    ///
    /// Panics on out-of-range coordinates, like [`GridSpec::node_index`].
    pub fn value(&self, coord: &[u32]) -> f64 {
        self.values[self.spec.node_index(coord)]
    }

    /// Decompose into the grid description and the raw values.
    pub fn into_parts(self) -> (GridSpec, Vec<f64>) {
        (self.spec, self.values)
    }
}
