//! Regex selection of address codes.

use indexmap::IndexSet;
use rayon::prelude::*;
use regex::Regex;

use quadrex_core::{AddressCode, Depth};
use quadrex_grid::AddressMatrix;

use crate::error::FieldError;

/// The subset of a matrix's address codes whose text form matches the
/// user's pattern.
///
/// Constructed once per render by [`SelectedSet::select`] and immutable
/// thereafter: exactly one owner, shared by reference across all
/// distance workers. Iteration order is the matrix's canonical
/// row-major order, so downstream scans are deterministic regardless of
/// how the parallel filter scheduled its chunks.
///
/// Matching uses the regex engine's default *search* semantics — a
/// pattern matches if it is found anywhere in the address text, not
/// only when it spans the whole string. Anchor with `^`/`$` to match
/// whole addresses.
///
/// # Examples
///
/// ```
/// use quadrex_core::{AddressCode, Depth};
/// use quadrex_grid::AddressMatrix;
/// use quadrex_field::SelectedSet;
///
/// let matrix = AddressMatrix::build(Depth::new(2).unwrap()).unwrap();
/// // Addresses whose deepest quadrant is bottom-right.
/// let selected = SelectedSet::select(&matrix, "4$").unwrap();
/// assert_eq!(selected.len(), 4);
/// assert!(selected.contains(AddressCode(14)));
/// ```
#[derive(Debug, Clone)]
pub struct SelectedSet {
    depth: Depth,
    codes: IndexSet<AddressCode>,
}

impl SelectedSet {
    /// Compile `pattern` and select the matching codes from `matrix`.
    ///
    /// A malformed pattern fails with [`FieldError::InvalidPattern`]
    /// here, before any distance computation begins. The filter itself
    /// cannot fail, so an error from this stage is the only way a
    /// render aborts between matrix construction and image encoding.
    pub fn select(matrix: &AddressMatrix, pattern: &str) -> Result<Self, FieldError> {
        let re = Regex::new(pattern).map_err(|source| FieldError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let depth = matrix.depth();
        // Membership is order-free, but the gather below keeps canonical
        // order anyway: rayon's indexed collect preserves input order.
        let matched: Vec<AddressCode> = matrix
            .codes()
            .par_iter()
            .copied()
            .filter(|code| re.is_match(&code.to_text(depth)))
            .collect();
        Ok(Self {
            depth,
            codes: matched.into_iter().collect(),
        })
    }

    /// The depth of the matrix this set was selected from.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Number of selected codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether nothing matched the pattern.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// O(1) membership test.
    pub fn contains(&self, code: AddressCode) -> bool {
        self.codes.contains(&code)
    }

    /// Iterate the selected codes in canonical row-major order.
    pub fn iter(&self) -> impl Iterator<Item = AddressCode> + '_ {
        self.codes.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(depth: u32) -> AddressMatrix {
        AddressMatrix::build(Depth::new(depth).unwrap()).unwrap()
    }

    #[test]
    fn malformed_pattern_is_rejected() {
        let err = SelectedSet::select(&matrix(1), "(").unwrap_err();
        let FieldError::InvalidPattern { pattern, .. } = err;
        assert_eq!(pattern, "(");
    }

    #[test]
    fn match_everything_selects_every_cell() {
        let m = matrix(2);
        let selected = SelectedSet::select(&m, ".*").unwrap();
        assert_eq!(selected.len(), m.codes().len());
    }

    #[test]
    fn match_nothing_selects_no_cell() {
        // 5 is outside the quadrant alphabet.
        let selected = SelectedSet::select(&matrix(2), "5").unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn search_semantics_match_anywhere_in_the_text() {
        // Unanchored "2" hits any address containing the digit, not
        // only those equal to "2".
        let selected = SelectedSet::select(&matrix(2), "2").unwrap();
        assert_eq!(selected.len(), 7);
        assert!(selected.contains(AddressCode(12)));
        assert!(selected.contains(AddressCode(21)));
        assert!(!selected.contains(AddressCode(11)));
    }

    #[test]
    fn iteration_follows_canonical_order() {
        let m = matrix(2);
        let selected = SelectedSet::select(&m, "^1").unwrap();
        let expected: Vec<AddressCode> = m
            .codes()
            .iter()
            .copied()
            .filter(|c| c.to_text(m.depth()).starts_with('1'))
            .collect();
        assert_eq!(selected.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn empty_pattern_matches_the_empty_address() {
        let m = matrix(0);
        let selected = SelectedSet::select(&m, ".*").unwrap();
        assert_eq!(selected.len(), 1);
        assert!(selected.contains(AddressCode(0)));
    }
}
