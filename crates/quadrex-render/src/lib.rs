//! Colorization and image output for quadrex renders.
//!
//! The distance field's normalized values are mapped through the
//! two-color gradient into a row-major [`PixelBuffer`], which is then
//! encoded as a PNG. [`pipeline::render`] orchestrates the whole
//! chain — matrix, selection, distance, colorization — and
//! [`pipeline::render_to_file`] adds the terminal image write.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod colorize;
pub mod error;
pub mod pipeline;
pub mod png;

pub use colorize::PixelBuffer;
pub use error::RenderError;
pub use pipeline::{render, render_to_file, RenderConfig, RenderResult, RenderStats};
