//! End-to-end render scenarios over small canvases.
//!
//! Each test drives the public pipeline exactly as the CLI does:
//! build a config, render, inspect pixels (or the written PNG).

use quadrex_core::{Depth, Gradient, GridError, Rgb};
use quadrex_render::{render, render_to_file, RenderConfig, RenderError};

fn config(depth: u32, pattern: &str) -> RenderConfig {
    RenderConfig::new(Depth::new(depth).unwrap(), pattern)
}

#[test]
fn single_digit_match_at_depth_one() {
    // Addresses {1, 2, 3, 4}; pattern "1" selects only the top-left
    // cell, which renders pure black; the rest are one mismatch away
    // and render pure white.
    let result = render(&config(1, "1")).unwrap();
    assert_eq!(result.stats.selected, 1);
    assert_eq!(result.pixels.get(0, 0), Rgb::BLACK);
    assert_eq!(result.pixels.get(0, 1), Rgb::WHITE);
    assert_eq!(result.pixels.get(1, 0), Rgb::WHITE);
    assert_eq!(result.pixels.get(1, 1), Rgb::WHITE);
}

#[test]
fn deepest_quadrant_pattern_selects_a_quarter() {
    // ".*4$" picks every address whose deepest quadrant is
    // bottom-right: exactly a quarter of the canvas.
    let result = render(&config(2, ".*4$")).unwrap();
    assert_eq!(result.stats.selected, 4);
}

#[test]
fn match_everything_renders_flat_start_color() {
    let result = render(&config(3, ".*")).unwrap();
    assert_eq!(result.stats.selected, 64);
    assert!(result.pixels.pixels().iter().all(|&p| p == Rgb::BLACK));
}

#[test]
fn match_nothing_renders_flat_end_color() {
    let result = render(&config(2, "9")).unwrap();
    assert_eq!(result.stats.selected, 0);
    assert!(result.pixels.pixels().iter().all(|&p| p == Rgb::WHITE));
}

#[test]
fn depth_zero_renders_one_start_pixel() {
    let result = render(&config(0, "whatever")).unwrap();
    assert_eq!(result.pixels.side(), 1);
    assert_eq!(result.pixels.get(0, 0), Rgb::BLACK);
}

#[test]
fn channel_interpolation_direction_is_independent() {
    // Blue descends (236 → 0) while red and green ascend; every
    // endpoint must still be hit exactly.
    let mut cfg = config(1, "1");
    cfg.gradient = Gradient::new(Rgb::new(143, 143, 236), Rgb::new(255, 220, 0));
    let result = render(&cfg).unwrap();
    assert_eq!(result.pixels.get(0, 0), Rgb::new(143, 143, 236));
    assert_eq!(result.pixels.get(1, 1), Rgb::new(255, 220, 0));
}

#[test]
fn invalid_pattern_aborts_before_any_distance_work() {
    let err = render(&config(2, "(")).unwrap_err();
    assert!(matches!(err, RenderError::Field(_)));
}

#[test]
fn oversized_depth_aborts_before_allocation() {
    let err = render(&config(14, ".*")).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Grid(GridError::CapacityExceeded { .. })
    ));
}

#[test]
fn written_png_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    let stats = render_to_file(&config(2, "^11$"), &path).unwrap();
    assert_eq!(stats.selected, 1);
    assert!(stats.write.is_some());

    let img = image::open(&path).unwrap().into_rgb8();
    assert_eq!(img.dimensions(), (4, 4));
    // Only "11" matched: distance 0 at (0, 0), one level off at its
    // quadrant sibling, both levels off at the far corner. image
    // indexes (x, y).
    assert_eq!(img.get_pixel(0, 0), &image::Rgb([0, 0, 0]));
    assert_eq!(img.get_pixel(1, 1), &image::Rgb([127, 127, 127]));
    assert_eq!(img.get_pixel(3, 3), &image::Rgb([255, 255, 255]));
}

#[test]
fn existing_output_file_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    render_to_file(&config(1, "1"), &path).unwrap();
    render_to_file(&config(1, "9"), &path).unwrap();

    // The second render matched nothing, so the file now holds the
    // all-white canvas.
    let img = image::open(&path).unwrap().into_rgb8();
    assert_eq!(img.get_pixel(0, 0), &image::Rgb([255, 255, 255]));
}

#[test]
fn unwritable_path_fails_with_the_image_stage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-subdir").join("out.png");

    let err = render_to_file(&config(1, "1"), &path).unwrap_err();
    assert!(matches!(err, RenderError::ImageWrite { .. }));
}
