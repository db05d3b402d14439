//! Error types for grid construction.

use std::fmt;

/// Errors arising from depth validation or canvas allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The requested depth exceeds what an address code can encode.
    DepthTooLarge {
        /// The requested depth.
        depth: u32,
        /// Maximum supported depth.
        max: u8,
    },
    /// The canvas would exceed the cell allocation ceiling.
    CapacityExceeded {
        /// Number of cells the canvas would require.
        cells: u64,
        /// The configured ceiling.
        limit: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthTooLarge { depth, max } => {
                write!(f, "depth {depth} exceeds maximum supported depth {max}")
            }
            Self::CapacityExceeded { cells, limit } => {
                write!(
                    f,
                    "canvas of {cells} cells exceeds allocation ceiling of {limit}"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
