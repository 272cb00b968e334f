//! Whole-field resampling onto a different node count.

use crate::error::ResampleError;
use crate::spline::CubicSpline;
use regrid_core::{NodeCounts, ScalarField};

/// Resample a field onto `target` node counts over the same extents.
///
/// Applies the natural cubic spline axis by axis (tensor product). Both
/// upsampling and downsampling are supported; the per-axis scale factor
/// need not be integral. A target count equal to the current count
/// reproduces the input to floating-point precision; a source axis with a
/// single node plane replicates its values across the new axis.
///
/// # Errors
///
/// - [`ResampleError::DimensionalityMismatch`] if `target` has a
///   different number of axes than the field.
/// - [`ResampleError::InvalidTargetCount`] if any target count is zero.
/// - [`ResampleError::Grid`] if the target grid fails validation (for
///   example, overflowing the index space).
///
/// # Examples
///
/// ```
/// use regrid_core::{AxisExtent, GridSpec, ScalarField};
/// use regrid_resample::resample;
/// use smallvec::smallvec;
///
/// let spec = GridSpec::new(
///     smallvec![3, 3],
///     smallvec![AxisExtent::new(0.0, 2.0), AxisExtent::new(0.0, 2.0)],
/// )
/// .unwrap();
/// let ramp: Vec<f64> = (0..9).map(f64::from).collect();
/// let field = ScalarField::new(spec, ramp).unwrap();
///
/// let fine = resample(&field, &smallvec![5, 5]).unwrap();
/// assert_eq!(fine.values().len(), 25);
/// // Corners survive exactly.
/// assert_eq!(fine.value(&[0, 0]), 0.0);
/// assert_eq!(fine.value(&[4, 4]), 8.0);
/// ```
pub fn resample(field: &ScalarField, target: &NodeCounts) -> Result<ScalarField, ResampleError> {
    let source = field.spec();
    if target.len() != source.ndim() {
        return Err(ResampleError::DimensionalityMismatch {
            source: source.ndim(),
            target: target.len(),
        });
    }
    for (axis, &count) in target.iter().enumerate() {
        if count == 0 {
            return Err(ResampleError::InvalidTargetCount { axis, count });
        }
    }
    let target_spec = source.with_counts(target.clone())?;

    let mut shape: Vec<usize> = source.counts().iter().map(|&c| c as usize).collect();
    let mut data = field.values().to_vec();
    for axis in 0..shape.len() {
        let new_count = target[axis] as usize;
        data = resample_axis(&data, &shape, axis, new_count);
        shape[axis] = new_count;
    }

    Ok(ScalarField::new(target_spec, data)?)
}

/// Spline positions for one axis: output node `k` maps to source
/// parameter `k · (n_old − 1)/(n_new − 1)`, so endpoints align.
fn sample_positions(old_count: usize, new_count: usize) -> Vec<f64> {
    if new_count == 1 {
        return vec![0.0];
    }
    let scale = (old_count - 1) as f64 / (new_count - 1) as f64;
    (0..new_count).map(|k| k as f64 * scale).collect()
}

/// Resample one axis of a flat x-fastest array.
///
/// `shape` is the current per-axis size, first axis first. The axis with
/// index `a` has stride `shape[0]·…·shape[a−1]`; each 1-D line along it
/// is gathered, splined, and scattered into the output at the same
/// surrounding coordinates.
fn resample_axis(data: &[f64], shape: &[usize], axis: usize, new_count: usize) -> Vec<f64> {
    let old_count = shape[axis];
    let inner: usize = shape[..axis].iter().product();
    let outer: usize = shape[axis + 1..].iter().product();

    let positions = sample_positions(old_count, new_count);
    let mut out = vec![0.0; inner * new_count * outer];
    let mut line = vec![0.0; old_count];

    for o in 0..outer {
        for i in 0..inner {
            let base_in = o * old_count * inner + i;
            for (k, sample) in line.iter_mut().enumerate() {
                *sample = data[base_in + k * inner];
            }
            let spline = CubicSpline::fit(&line);
            let base_out = o * new_count * inner + i;
            for (k, &t) in positions.iter().enumerate() {
                out[base_out + k * inner] = spline.eval(t);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use regrid_core::{AxisExtent, Extents, GridSpec};
    use smallvec::smallvec;

    const TOL: f64 = 1e-9;

    fn unit_extents(ndim: usize) -> Extents {
        (0..ndim).map(|_| AxisExtent::new(0.0, 1.0)).collect()
    }

    /// The 5×5 ramp `x + 5·y` over [0,4]×[0,4].
    fn ramp_5x5() -> ScalarField {
        let spec = GridSpec::new(
            smallvec![5, 5],
            smallvec![AxisExtent::new(0.0, 4.0), AxisExtent::new(0.0, 4.0)],
        )
        .unwrap();
        let values: Vec<f64> = (0..25).map(f64::from).collect();
        ScalarField::new(spec, values).unwrap()
    }

    #[test]
    fn upsamples_ramp_to_9x9() {
        let fine = resample(&ramp_5x5(), &smallvec![9, 9]).unwrap();
        assert_eq!(fine.values().len(), 81);

        // Corner samples survive exactly.
        assert_eq!(fine.value(&[0, 0]), 0.0);
        assert_eq!(fine.value(&[8, 0]), 4.0);
        assert_eq!(fine.value(&[0, 8]), 20.0);
        assert_eq!(fine.value(&[8, 8]), 24.0);

        // The ramp is linear in index space, so every resampled node
        // lands on the plane x/2 + 5·(y/2).
        for y in 0..9u32 {
            for x in 0..9u32 {
                let want = x as f64 * 0.5 + 5.0 * (y as f64 * 0.5);
                assert!((fine.value(&[x, y]) - want).abs() < TOL);
            }
        }

        // Extents are untouched by resampling.
        assert_eq!(fine.spec().extents(), ramp_5x5().spec().extents());
    }

    #[test]
    fn identity_resample_reproduces_values() {
        let field = ramp_5x5();
        let same = resample(&field, &smallvec![5, 5]).unwrap();
        for (a, b) in same.values().iter().zip(field.values()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn downsample_of_linear_field_is_exact() {
        let spec = GridSpec::new(smallvec![9, 9], unit_extents(2)).unwrap();
        let values: Vec<f64> = (0..81).map(|i| (i % 9 + i / 9) as f64).collect();
        let field = ScalarField::new(spec, values).unwrap();

        let coarse = resample(&field, &smallvec![5, 5]).unwrap();
        for y in 0..5u32 {
            for x in 0..5u32 {
                // Node (x, y) maps onto source node (2x, 2y).
                let want = (2 * x + 2 * y) as f64;
                assert!((coarse.value(&[x, y]) - want).abs() < TOL);
            }
        }
    }

    #[test]
    fn resamples_3d_ramp() {
        let spec = GridSpec::new(smallvec![3, 3, 3], unit_extents(3)).unwrap();
        let mut values = Vec::with_capacity(27);
        for z in 0..3 {
            for y in 0..3 {
                for x in 0..3 {
                    values.push((x + y + z) as f64);
                }
            }
        }
        let field = ScalarField::new(spec, values).unwrap();

        let fine = resample(&field, &smallvec![5, 5, 5]).unwrap();
        assert_eq!(fine.values().len(), 125);
        for z in 0..5u32 {
            for y in 0..5u32 {
                for x in 0..5u32 {
                    let want = (x + y + z) as f64 * 0.5;
                    assert!((fine.value(&[x, y, z]) - want).abs() < TOL);
                }
            }
        }
    }

    #[test]
    fn single_plane_source_axis_replicates() {
        let spec = GridSpec::new(smallvec![3, 1], unit_extents(2)).unwrap();
        let field = ScalarField::new(spec, vec![1.0, 2.0, 3.0]).unwrap();

        let grown = resample(&field, &smallvec![3, 4]).unwrap();
        for y in 0..4u32 {
            for x in 0..3u32 {
                assert!((grown.value(&[x, y]) - (x + 1) as f64).abs() < TOL);
            }
        }
    }

    #[test]
    fn single_plane_target_axis_is_allowed() {
        let spec = GridSpec::new(smallvec![3, 3], unit_extents(2)).unwrap();
        let values: Vec<f64> = (0..9).map(f64::from).collect();
        let field = ScalarField::new(spec, values).unwrap();

        // Collapsing to one plane evaluates at the axis origin.
        let flat = resample(&field, &smallvec![3, 1]).unwrap();
        assert_eq!(flat.values(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn rejects_zero_target_count() {
        let err = resample(&ramp_5x5(), &smallvec![5, 0]);
        assert_eq!(
            err,
            Err(ResampleError::InvalidTargetCount { axis: 1, count: 0 })
        );
    }

    #[test]
    fn rejects_rank_mismatch() {
        let err = resample(&ramp_5x5(), &smallvec![5, 5, 5]);
        assert_eq!(
            err,
            Err(ResampleError::DimensionalityMismatch {
                source: 2,
                target: 3
            })
        );
    }

    fn arb_field_2d() -> impl Strategy<Value = ScalarField> {
        (2u32..9, 2u32..9)
            .prop_flat_map(|(nx, ny)| {
                let len = (nx * ny) as usize;
                (
                    Just(nx),
                    Just(ny),
                    prop::collection::vec(-1000.0f64..1000.0, len),
                )
            })
            .prop_map(|(nx, ny, values)| {
                let spec = GridSpec::new(smallvec![nx, ny], unit_extents(2)).unwrap();
                ScalarField::new(spec, values).unwrap()
            })
    }

    proptest! {
        /// Resampling any field to its own node counts is the identity.
        #[test]
        fn identity_property(field in arb_field_2d()) {
            let counts = field.spec().counts().clone();
            let same = resample(&field, &counts).unwrap();
            for (a, b) in same.values().iter().zip(field.values()) {
                prop_assert!((a - b).abs() < 1e-9);
            }
        }

        /// Corner nodes survive arbitrary up- and downsampling exactly.
        #[test]
        fn corners_survive_resampling(
            field in arb_field_2d(),
            tx in 2u32..12,
            ty in 2u32..12,
        ) {
            let out = resample(&field, &smallvec![tx, ty]).unwrap();
            let counts = field.spec().counts().clone();
            let (sx, sy) = (counts[0] - 1, counts[1] - 1);
            prop_assert!((out.value(&[0, 0]) - field.value(&[0, 0])).abs() < 1e-9);
            prop_assert!((out.value(&[tx - 1, 0]) - field.value(&[sx, 0])).abs() < 1e-9);
            prop_assert!((out.value(&[0, ty - 1]) - field.value(&[0, sy])).abs() < 1e-9);
            prop_assert!(
                (out.value(&[tx - 1, ty - 1]) - field.value(&[sx, sy])).abs() < 1e-9
            );
        }
    }
}
