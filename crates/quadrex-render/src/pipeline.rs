//! End-to-end render orchestration.

use std::path::Path;
use std::time::{Duration, Instant};

use quadrex_core::{Depth, Gradient};
use quadrex_field::{DistanceField, SelectedSet};
use quadrex_grid::AddressMatrix;

use crate::colorize::PixelBuffer;
use crate::error::RenderError;
use crate::png::write_png;

/// Everything a render needs, made explicit.
///
/// The gradient defaults to black→white when not overridden; there is
/// no positional sniffing of optional parameters — construct the
/// config, then assign the fields you want to change.
///
/// # Examples
///
/// ```
/// use quadrex_core::{Depth, Gradient, Rgb};
/// use quadrex_render::RenderConfig;
///
/// let mut config = RenderConfig::new(Depth::new(4).unwrap(), "2*3");
/// config.gradient = Gradient::new(Rgb::new(143, 143, 236), Rgb::new(255, 220, 0));
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas recursion depth; image side is `2^depth`.
    pub depth: Depth,
    /// The address selection pattern (regex, search semantics).
    pub pattern: String,
    /// Gradient endpoints: start at distance 0, end at the ceiling.
    pub gradient: Gradient,
}

impl RenderConfig {
    /// A config with the default black→white gradient.
    pub fn new(depth: Depth, pattern: impl Into<String>) -> Self {
        Self {
            depth,
            pattern: pattern.into(),
            gradient: Gradient::default(),
        }
    }
}

/// Wall-clock timings and counters for one render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStats {
    /// Number of addresses the pattern selected.
    pub selected: usize,
    /// Matrix construction time.
    pub build: Duration,
    /// Selection (regex filter) time.
    pub select: Duration,
    /// Distance field computation time.
    pub distance: Duration,
    /// Colorization time.
    pub colorize: Duration,
    /// Image encode + write time; `None` when no file was written.
    pub write: Option<Duration>,
}

/// A finished render: the pixel buffer plus its stage timings.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The colorized canvas, row-major.
    pub pixels: PixelBuffer,
    /// Per-stage wall times and the selected-set size.
    pub stats: RenderStats,
}

/// Run the full pipeline: matrix → selection → distance → colorize.
///
/// Stages run strictly in order and any failure aborts the whole
/// render; there is no partial result. With a valid config the only
/// failure points are depth capacity (before any allocation) and
/// pattern compilation (before any distance work).
pub fn render(config: &RenderConfig) -> Result<RenderResult, RenderError> {
    let mut stats = RenderStats::default();

    let t = Instant::now();
    let matrix = AddressMatrix::build(config.depth)?;
    stats.build = t.elapsed();

    let t = Instant::now();
    let selected = SelectedSet::select(&matrix, &config.pattern)?;
    stats.select = t.elapsed();
    stats.selected = selected.len();

    let t = Instant::now();
    let field = DistanceField::compute(&matrix, &selected);
    stats.distance = t.elapsed();

    let t = Instant::now();
    let pixels = PixelBuffer::colorize(&field, &config.gradient);
    stats.colorize = t.elapsed();

    Ok(RenderResult { pixels, stats })
}

/// [`render`], then encode the result as a PNG at `path`.
///
/// The file is written only after the full pixel buffer exists and is
/// overwritten if it already exists.
pub fn render_to_file(config: &RenderConfig, path: &Path) -> Result<RenderStats, RenderError> {
    let RenderResult { pixels, mut stats } = render(config)?;

    let t = Instant::now();
    write_png(&pixels, path)?;
    stats.write = Some(t.elapsed());

    Ok(stats)
}
