//! Command-line entry point for the quadrex renderer.

mod args;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use quadrex::prelude::*;

use crate::args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the worker thread pool")?;
    }

    let depth = Depth::new(args.depth).context("invalid depth")?;
    let mut config = RenderConfig::new(depth, &args.pattern);
    config.gradient = Gradient::new(
        args.grad0.unwrap_or(Rgb::BLACK),
        args.grad1.unwrap_or(Rgb::WHITE),
    );

    info!(
        "rendering {side}x{side} canvas for pattern {pattern:?}",
        side = depth.side(),
        pattern = args.pattern,
    );

    let stats = render_to_file(&config, &args.output)
        .with_context(|| format!("render to {} failed", args.output.display()))?;

    debug!("pattern selected {} addresses", stats.selected);
    info!(
        "done in {:?} (build {:?}, select {:?}, distance {:?}, colorize {:?}, write {:?})",
        stats.build + stats.select + stats.distance + stats.colorize
            + stats.write.unwrap_or_default(),
        stats.build,
        stats.select,
        stats.distance,
        stats.colorize,
        stats.write.unwrap_or_default(),
    );
    info!("wrote {}", args.output.display());

    Ok(())
}
