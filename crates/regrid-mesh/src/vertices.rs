//! Uniform vertex lattice generation.

use regrid_core::{AxisExtent, GridSpec};

/// `count` coordinates uniformly spaced over an axis extent.
///
/// Both endpoints are emitted exactly as given — interior coordinates are
/// derived from the step size, but the first and last entries are the
/// extent bounds themselves, so domain extents survive any resolution
/// change bit-for-bit. A single-node axis yields just the lower bound.
pub fn axis_coordinates(extent: &AxisExtent, count: u32) -> Vec<f64> {
    if count == 1 {
        return vec![extent.min];
    }
    let step = extent.length() / (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i == 0 {
                extent.min
            } else if i == count - 1 {
                extent.max
            } else {
                extent.min + i as f64 * step
            }
        })
        .collect()
}

/// Flat vertex coordinates for a grid: one d-tuple per node, node ordering.
///
/// The vertex list is the Cartesian product of the per-axis coordinate
/// sequences with the first axis varying fastest, matching the flat
/// ordering of [`ScalarField`](regrid_core::ScalarField) values exactly.
pub fn vertex_lattice(spec: &GridSpec) -> Vec<f64> {
    let axes: Vec<Vec<f64>> = spec
        .extents()
        .iter()
        .zip(spec.counts().iter())
        .map(|(extent, &count)| axis_coordinates(extent, count))
        .collect();

    let mut vertices = Vec::with_capacity(spec.node_count() * spec.ndim());
    match axes.as_slice() {
        [xs, ys] => {
            for &y in ys {
                for &x in xs {
                    vertices.push(x);
                    vertices.push(y);
                }
            }
        }
        [xs, ys, zs] => {
            for &z in zs {
                for &y in ys {
                    for &x in xs {
                        vertices.push(x);
                        vertices.push(y);
                        vertices.push(z);
                    }
                }
            }
        }
        // GridSpec construction guarantees 2 or 3 axes.
        _ => unreachable!("GridSpec is always 2-D or 3-D"),
    }
    vertices
}
