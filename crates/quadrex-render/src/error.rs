//! Error type for the render pipeline, annotated with the failing stage.

use std::fmt;
use std::path::PathBuf;

use quadrex_core::GridError;
use quadrex_field::FieldError;

/// Error from any stage of a render.
///
/// All errors are terminal for the render: there is no partial output
/// and no retry. The variant names the stage that failed so callers can
/// diagnose without string matching.
#[derive(Debug)]
pub enum RenderError {
    /// Matrix construction failed (depth or capacity validation).
    Grid(GridError),
    /// Pattern selection failed.
    Field(FieldError),
    /// The image encoder failed to write the output file. The computed
    /// pixels are discarded; nothing is partially written by us.
    ImageWrite {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying encoder or I/O error.
        source: image::ImageError,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "matrix construction failed: {e}"),
            Self::Field(e) => write!(f, "selection failed: {e}"),
            Self::ImageWrite { path, .. } => {
                write!(f, "failed to write image to {}", path.display())
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Field(e) => Some(e),
            Self::ImageWrite { source, .. } => Some(source),
        }
    }
}

impl From<GridError> for RenderError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<FieldError> for RenderError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}
