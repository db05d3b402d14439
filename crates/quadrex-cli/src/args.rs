//! Command-line argument definitions and color parsing.

use std::path::PathBuf;

use clap::Parser;
use quadrex::prelude::Rgb;

/// Render a gradient image from a regular expression.
///
/// Every pixel of the 2^depth x 2^depth canvas carries a quad-tree
/// address over the digits 1-4. Pixels whose address matches PATTERN
/// render in the start color; everything else shades toward the end
/// color with its digit distance to the nearest match.
#[derive(Parser, Debug)]
#[command(name = "quadrex", version, about, long_about)]
pub struct Args {
    /// Output PNG path (overwritten if it exists).
    pub output: PathBuf,

    /// Recursion depth; the image side is 2^depth (10 gives 1024).
    #[arg(short, long)]
    pub depth: u32,

    /// Address selection pattern (regex, unanchored search semantics).
    #[arg(short, long)]
    pub pattern: String,

    /// Gradient color at distance 0, as `r,g,b`. Defaults to black.
    #[arg(long, value_name = "R,G,B", value_parser = parse_rgb)]
    pub grad0: Option<Rgb>,

    /// Gradient color at maximal distance, as `r,g,b`. Defaults to white.
    #[arg(long, value_name = "R,G,B", value_parser = parse_rgb)]
    pub grad1: Option<Rgb>,

    /// Worker threads for the parallel stages. Defaults to all cores.
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Parse a `r,g,b` triple of 8-bit channel values.
fn parse_rgb(s: &str) -> Result<Rgb, String> {
    let parts: Vec<&str> = s.split(',').collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected `r,g,b`, got {s:?}"));
    };
    let channel = |name: &str, v: &str| {
        v.trim()
            .parse::<u8>()
            .map_err(|e| format!("bad {name} channel {v:?}: {e}"))
    };
    Ok(Rgb::new(
        channel("red", r)?,
        channel("green", g)?,
        channel("blue", b)?,
    ))
}
