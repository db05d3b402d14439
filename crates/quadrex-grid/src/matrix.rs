//! The immutable grid of quad-tree address codes.

use quadrex_core::{AddressCode, Depth, GridError};

use crate::quadrant::Quadrant;

/// The `2^depth × 2^depth` grid of quad-tree address codes, stored flat
/// in row-major order.
///
/// Built once by [`AddressMatrix::build`] via recursive quadrant
/// subdivision and immutable thereafter. Building is a pure function of
/// the depth: no randomness, no I/O, identical output on every call.
///
/// # Examples
///
/// ```
/// use quadrex_core::{AddressCode, Depth};
/// use quadrex_grid::AddressMatrix;
///
/// let matrix = AddressMatrix::build(Depth::new(1).unwrap()).unwrap();
/// assert_eq!(matrix.side(), 2);
/// assert_eq!(matrix.get(0, 0), AddressCode(1));
/// assert_eq!(matrix.get(0, 1), AddressCode(2));
/// assert_eq!(matrix.get(1, 0), AddressCode(3));
/// assert_eq!(matrix.get(1, 1), AddressCode(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressMatrix {
    depth: Depth,
    side: u32,
    codes: Vec<AddressCode>,
}

impl AddressMatrix {
    /// Allocation ceiling: at most `2^26` cells (depth 13, an
    /// 8192 × 8192 canvas). Keeps a worst-case render comfortably under
    /// a gigabyte across the code, distance, and pixel buffers.
    pub const CELL_LIMIT: u64 = 1 << 26;

    /// Build the address matrix for `depth`.
    ///
    /// Returns `Err(GridError::CapacityExceeded)` before any allocation
    /// is attempted if the canvas would exceed [`Self::CELL_LIMIT`].
    pub fn build(depth: Depth) -> Result<Self, GridError> {
        let cells = depth.cell_count();
        if cells > Self::CELL_LIMIT {
            return Err(GridError::CapacityExceeded {
                cells,
                limit: Self::CELL_LIMIT,
            });
        }
        let side = depth.side();
        let mut codes = vec![AddressCode(0); cells as usize];
        subdivide(&mut codes, side as usize, 0, 0, side as usize);
        Ok(Self { depth, side, codes })
    }

    /// The depth this matrix was built for.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Canvas side length, `2^depth`.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// All codes, row-major: cell `(r, c)` is at index `r * side + c`.
    pub fn codes(&self) -> &[AddressCode] {
        &self.codes
    }

    /// The code of cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the canvas.
    pub fn get(&self, row: u32, col: u32) -> AddressCode {
        assert!(row < self.side && col < self.side, "cell out of bounds");
        self.codes[(row * self.side + col) as usize]
    }
}

/// Apply one subdivision level to the quadrant whose top-left cell is
/// `(row0, col0)` and whose extent is `size`, then recurse into its four
/// sub-quadrants. `stride` is the full canvas side.
///
/// Every cell in the quadrant gets `code = code * 10 + digit` for the
/// sub-quadrant it falls into, so digits accumulate coarsest-level
/// first. Recursion stops at unit cells, after exactly `depth` levels.
fn subdivide(codes: &mut [AddressCode], stride: usize, row0: usize, col0: usize, size: usize) {
    if size <= 1 {
        return;
    }
    let half = size / 2;
    for r in 0..size {
        for c in 0..size {
            let digit = Quadrant::containing(r, c, half).digit();
            let cell = &mut codes[(row0 + r) * stride + col0 + c];
            cell.0 = cell.0 * 10 + u64::from(digit);
        }
    }
    subdivide(codes, stride, row0, col0, half);
    subdivide(codes, stride, row0, col0 + half, half);
    subdivide(codes, stride, row0 + half, col0, half);
    subdivide(codes, stride, row0 + half, col0 + half, half);
}
