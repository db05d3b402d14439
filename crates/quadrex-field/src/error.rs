//! Error types for pattern selection.

use std::fmt;

/// Errors arising from the selection stage.
#[derive(Debug, Clone)]
pub enum FieldError {
    /// The selection pattern failed to compile.
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The underlying regex compilation error.
        source: regex::Error,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, .. } => {
                write!(f, "invalid selection pattern {pattern:?}")
            }
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
        }
    }
}
