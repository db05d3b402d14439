//! Quadrex: gradient images from regular expressions over quad-tree
//! addresses.
//!
//! Every pixel of a `2^depth × 2^depth` canvas carries a quad-tree
//! address — one digit per subdivision level, from the alphabet
//! `{1, 2, 3, 4}`. A regular expression selects a subset of addresses;
//! each pixel is then colored by how many digits separate its own
//! address from the nearest selected one, mapped through a two-color
//! gradient. The result is a self-similar field of the pattern's
//! structure.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all quadrex sub-crates. For most users, adding `quadrex` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quadrex::prelude::*;
//!
//! // A 2x2 canvas where only the top-left address "1" matches.
//! let config = RenderConfig::new(Depth::new(1).unwrap(), "1");
//! let result = render(&config).unwrap();
//!
//! assert_eq!(result.pixels.side(), 2);
//! assert_eq!(result.pixels.get(0, 0), Rgb::BLACK);
//! assert_eq!(result.pixels.get(1, 1), Rgb::WHITE);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quadrex-core` | Depth, address codes, colors, gradients |
//! | [`grid`] | `quadrex-grid` | Address matrix construction |
//! | [`field`] | `quadrex-field` | Regex selection and distance fields |
//! | [`render`] | `quadrex-render` | Colorization, PNG output, pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: depth, address codes, colors (`quadrex-core`).
pub use quadrex_core as types;

/// Address matrix construction (`quadrex-grid`).
pub use quadrex_grid as grid;

/// Regex selection and distance fields (`quadrex-field`).
pub use quadrex_field as field;

/// Colorization, PNG output, and the render pipeline (`quadrex-render`).
pub use quadrex_render as render;

/// Common imports for typical quadrex usage.
///
/// ```rust
/// use quadrex::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use quadrex_core::{AddressCode, Depth, Gradient, Rgb};

    // Errors
    pub use quadrex_core::GridError;
    pub use quadrex_field::FieldError;
    pub use quadrex_render::RenderError;

    // Stages
    pub use quadrex_field::{DistanceField, SelectedSet};
    pub use quadrex_grid::AddressMatrix;

    // Pipeline
    pub use quadrex_render::{
        render, render_to_file, PixelBuffer, RenderConfig, RenderResult, RenderStats,
    };
}
