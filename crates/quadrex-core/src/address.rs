//! Quad-tree address codes and the digit-wise mismatch metric.

use smallvec::SmallVec;
use std::fmt;

use crate::depth::Depth;

/// Digit buffer for one address, bounded by [`Depth::MAX`] levels.
pub type Digits = SmallVec<[u8; Depth::MAX as usize]>;

/// A quad-tree address: one decimal digit per subdivision level, read
/// most-significant-first as the path from the root quadrant down to
/// the unit cell.
///
/// Each digit is drawn from the quadrant alphabet `{1, 2, 3, 4}`
/// (top-left = 1, top-right = 2, bottom-left = 3, bottom-right = 4).
/// A depth-`n` canvas assigns every cell a code of exactly `n` digits;
/// no digit is ever 0, so the decimal form is unambiguous. The
/// degenerate depth-0 canvas has the single empty address, code 0.
///
/// # Examples
///
/// ```
/// use quadrex_core::{AddressCode, Depth};
///
/// let depth = Depth::new(3).unwrap();
/// let code = AddressCode(142);
/// assert_eq!(code.to_text(depth), "142");
/// assert_eq!(code.digit_count(), 3);
///
/// // One differing digit (the middle level).
/// assert_eq!(code.mismatch(AddressCode(132)), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressCode(pub u64);

impl AddressCode {
    /// Number of decimal digits in this code. The empty (depth-0)
    /// address has 0 digits.
    pub fn digit_count(self) -> u8 {
        let mut n = self.0;
        let mut count = 0;
        while n != 0 {
            count += 1;
            n /= 10;
        }
        count
    }

    /// The code's digits, most-significant-first, padded to `depth`
    /// entries. For codes produced by the matrix builder the padding
    /// never fires — every code has exactly `depth` nonzero digits.
    pub fn digits(self, depth: Depth) -> Digits {
        let mut out: Digits = SmallVec::from_elem(0, depth.get() as usize);
        let mut n = self.0;
        for slot in out.iter_mut().rev() {
            *slot = (n % 10) as u8;
            n /= 10;
        }
        out
    }

    /// The zero-padded `depth`-digit decimal text form used for pattern
    /// matching. Depth 0 yields the empty string.
    pub fn to_text(self, depth: Depth) -> String {
        let width = depth.get() as usize;
        if width == 0 {
            return String::new();
        }
        format!("{:0width$}", self.0)
    }

    /// Count digit positions where `self` and `other` differ, comparing
    /// least-significant-first and stopping once `self` has no digits
    /// left.
    ///
    /// The early stop is only correct because both operands carry the
    /// same digit count — every address on a single canvas does. Mixed
    /// digit counts would silently ignore the longer operand's extra
    /// digits, so that assumption is asserted rather than relied on.
    pub fn mismatch(self, other: AddressCode) -> u8 {
        debug_assert_eq!(
            self.digit_count(),
            other.digit_count(),
            "mismatch is only defined for equal-depth addresses"
        );
        let mut q = self.0;
        let mut s = other.0;
        let mut edits = 0;
        while q != 0 {
            if q % 10 != s % 10 {
                edits += 1;
            }
            q /= 10;
            s /= 10;
        }
        edits
    }
}

impl fmt::Display for AddressCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AddressCode {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
