//! Per-cell minimum mismatch distance against the selected set.

use rayon::prelude::*;

use quadrex_core::{AddressCode, Depth};
use quadrex_grid::AddressMatrix;

use crate::select::SelectedSet;

/// The grid of nearest-match distances, parallel to the address matrix.
///
/// Cell values are mismatch counts in `[0, depth]`: the minimum number
/// of differing digit positions between the cell's own address and any
/// selected address. A selected cell is at distance 0; when nothing
/// matched the pattern, every cell sits at the ceiling `depth`.
///
/// This is the render's hot path — `O(cells × selected)` digit
/// comparisons in the worst case. Cells are independent, so the scan
/// runs as a parallel map over explicit row chunks; pairing each output
/// row with its input row keeps every result bound to its originating
/// index under any parallel schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    depth: Depth,
    side: u32,
    values: Vec<u8>,
}

impl DistanceField {
    /// Compute the distance field for `matrix` against `selected`.
    ///
    /// Infallible: the only failing stage (pattern compilation) has
    /// already run by the time a [`SelectedSet`] exists.
    pub fn compute(matrix: &AddressMatrix, selected: &SelectedSet) -> Self {
        let depth = matrix.depth();
        let ceiling = depth.get();
        let side = matrix.side() as usize;
        let mut values = vec![0u8; matrix.codes().len()];

        values
            .par_chunks_mut(side)
            .zip(matrix.codes().par_chunks(side))
            .for_each(|(out_row, code_row)| {
                for (out, &code) in out_row.iter_mut().zip(code_row) {
                    *out = min_mismatch(code, selected, ceiling);
                }
            });

        Self {
            depth,
            side: matrix.side(),
            values,
        }
    }

    /// The depth of the matrix this field was computed from.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Canvas side length.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// All distances, row-major, parallel to the matrix's codes.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The distance of cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the canvas.
    pub fn get(&self, row: u32, col: u32) -> u8 {
        assert!(row < self.side && col < self.side, "cell out of bounds");
        self.values[(row * self.side + col) as usize]
    }
}

/// Minimum mismatch count from `code` to any selected address, with the
/// empty set defined as the ceiling (maximal) distance.
///
/// The O(1) membership probe is the "own address matched" early exit:
/// addresses are distinct, so a mismatch count of 0 can only come from
/// the cell's own address, and the scan below can never improve on a
/// miss below 1.
fn min_mismatch(code: AddressCode, selected: &SelectedSet, ceiling: u8) -> u8 {
    if selected.contains(code) {
        return 0;
    }
    let mut min = ceiling;
    for candidate in selected.iter() {
        let edits = code.mismatch(candidate);
        if edits < min {
            min = edits;
            if min == 1 {
                break;
            }
        }
    }
    min
}
