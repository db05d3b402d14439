//! Benchmark profiles for the quadrex renderer.
//!
//! Provides pre-built configurations shared by the criterion benches:
//!
//! - [`reference_config`]: depth 8 (256 × 256, 64K cells), a sparse
//!   pattern — the default profile for end-to-end timing
//! - [`dense_config`]: depth 6 with a pattern matching a quarter of the
//!   canvas, stressing the `O(cells × selected)` distance scan

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quadrex_core::Depth;
use quadrex_render::RenderConfig;

/// Reference profile: 256 × 256 canvas, sparse selection.
pub fn reference_config() -> RenderConfig {
    RenderConfig::new(Depth::new(8).unwrap(), "^1+4$")
}

/// Dense-selection profile: 64 × 64 canvas where a quarter of all
/// addresses match, maximizing the distance scan's candidate set.
pub fn dense_config() -> RenderConfig {
    RenderConfig::new(Depth::new(6).unwrap(), "4$")
}
