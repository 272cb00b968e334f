//! Element connectivity generation.

use regrid_core::GridSpec;

/// Quad connectivity for a 2-D grid: `(nx−1)·(ny−1)` elements of 4 indices.
///
/// Each cell `(x, y)` winds counter-clockwise from its lower-left corner:
/// `(x,y), (x+1,y), (x+1,y+1), (x,y+1)`.
pub fn quad_connectivity(nx: u32, ny: u32) -> Vec<u32> {
    let cells = (nx.saturating_sub(1) as usize) * (ny.saturating_sub(1) as usize);
    let mut conn = Vec::with_capacity(cells * 4);
    for y in 0..ny.saturating_sub(1) {
        for x in 0..nx.saturating_sub(1) {
            let n = y * nx + x;
            conn.extend_from_slice(&[n, n + 1, n + 1 + nx, n + nx]);
        }
    }
    conn
}

/// Hexahedron connectivity for a 3-D grid: 8 indices per cell.
///
/// Each cell lists its bottom quad (wound as in [`quad_connectivity`],
/// within the cell's z-plane) followed by the corresponding top quad one
/// z-plane up. Corner k of the bottom face pairs with corner k+4 of the
/// top face.
pub fn hex_connectivity(nx: u32, ny: u32, nz: u32) -> Vec<u32> {
    let plane = nx * ny;
    let cells = (nx.saturating_sub(1) as usize)
        * (ny.saturating_sub(1) as usize)
        * (nz.saturating_sub(1) as usize);
    let mut conn = Vec::with_capacity(cells * 8);
    for z in 0..nz.saturating_sub(1) {
        for y in 0..ny.saturating_sub(1) {
            for x in 0..nx.saturating_sub(1) {
                let n = z * plane + y * nx + x;
                let bottom = [n, n + 1, n + 1 + nx, n + nx];
                conn.extend_from_slice(&bottom);
                conn.extend_from_slice(&bottom.map(|v| v + plane));
            }
        }
    }
    conn
}

/// Connectivity for any supported grid, dispatching on dimensionality.
pub fn element_connectivity(spec: &GridSpec) -> Vec<u32> {
    let counts = spec.counts();
    match counts.as_slice() {
        [nx, ny] => quad_connectivity(*nx, *ny),
        [nx, ny, nz] => hex_connectivity(*nx, *ny, *nz),
        _ => unreachable!("GridSpec is always 2-D or 3-D"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_2x2_single_cell() {
        // 2x2 nodes: one quad, counter-clockwise from the lower left.
        assert_eq!(quad_connectivity(2, 2), vec![0, 1, 3, 2]);
    }

    #[test]
    fn quad_3x2_two_cells() {
        //  3  4  5
        //  0  1  2
        assert_eq!(
            quad_connectivity(3, 2),
            vec![0, 1, 4, 3, /* cell (1,0) */ 1, 2, 5, 4]
        );
    }

    #[test]
    fn hex_2x2x2_single_cell() {
        // Bottom quad in the z=0 plane, top quad directly above.
        assert_eq!(hex_connectivity(2, 2, 2), vec![0, 1, 3, 2, 4, 5, 7, 6]);
    }

    #[test]
    fn hex_top_face_mirrors_bottom() {
        let conn = hex_connectivity(4, 3, 3);
        let plane = 4 * 3;
        for hex in conn.chunks_exact(8) {
            for k in 0..4 {
                assert_eq!(hex[k + 4], hex[k] + plane);
            }
        }
    }

    #[test]
    fn single_plane_axis_yields_no_cells() {
        assert!(hex_connectivity(3, 3, 1).is_empty());
        assert!(quad_connectivity(3, 1).is_empty());
    }
}
