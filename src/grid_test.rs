#![allow(clippy::float_cmp)]

use super::*;
use crate::recorder::{DrawCommand, RecordingContext};

fn settings(size: f64) -> GridSettings {
    GridSettings { enabled: true, size }
}

fn lines(width: u32, height: u32, size: f64, viewport: Viewport) -> GridLines {
    grid_lines(SurfaceSize::new(width, height), &settings(size), &viewport)
        .unwrap()
        .unwrap()
}

// --- spacing ---

#[test]
fn spacing_scales_with_zoom() {
    assert_eq!(spacing(&settings(20.0), &Viewport::new(2.0, 0.0, 0.0)).unwrap(), 40.0);
    assert_eq!(spacing(&settings(20.0), &Viewport::new(0.1, 0.0, 0.0)).unwrap(), 2.0);
}

#[test]
fn spacing_rejects_non_positive_size() {
    for size in [0.0, -20.0, f64::NAN] {
        let err = spacing(&settings(size), &Viewport::default());
        assert!(matches!(err, Err(RenderError::InvalidState(_))), "size {size}");
    }
}

#[test]
fn spacing_rejects_infinite_size() {
    assert!(spacing(&settings(f64::INFINITY), &Viewport::default()).is_err());
}

// --- grid_lines ---

#[test]
fn disabled_grid_has_no_lines() {
    let grid = GridSettings { enabled: false, size: 20.0 };
    assert_eq!(grid_lines(SurfaceSize::new(200, 200), &grid, &Viewport::default()).unwrap(), None);
}

#[test]
fn disabled_grid_skips_validation() {
    let grid = GridSettings { enabled: false, size: -1.0 };
    assert!(grid_lines(SurfaceSize::new(200, 200), &grid, &Viewport::default()).is_ok());
}

#[test]
fn ten_vertical_lines_on_200px_at_zoom_one() {
    let l = lines(200, 100, 20.0, Viewport::default());
    let expected: Vec<f64> = (0..10).map(|i| f64::from(i) * 20.0).collect();
    assert_eq!(l.vertical, expected);
    assert!(l.vertical.iter().all(|x| *x < 200.0));
}

#[test]
fn horizontal_lines_bounded_by_height() {
    let l = lines(200, 100, 20.0, Viewport::default());
    assert_eq!(l.horizontal, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
}

#[test]
fn pan_offsets_first_line() {
    let l = lines(200, 100, 20.0, Viewport::new(1.0, 15.0, 0.0));
    assert_eq!(l.vertical.first(), Some(&15.0));
    assert_eq!(l.vertical.last(), Some(&195.0));
    assert_eq!(l.vertical.len(), 10);
}

#[test]
fn pan_larger_than_spacing_wraps() {
    let l = lines(100, 100, 20.0, Viewport::new(1.0, 47.0, 65.0));
    assert_eq!(l.vertical.first(), Some(&7.0));
    assert_eq!(l.horizontal.first(), Some(&5.0));
}

#[test]
fn negative_pan_keeps_sign_of_remainder() {
    let l = lines(100, 100, 20.0, Viewport::new(1.0, -5.0, 0.0));
    assert_eq!(l.vertical.first(), Some(&-5.0));
    assert_eq!(l.vertical[1], 15.0);
}

#[test]
fn zoom_changes_rendered_spacing() {
    let l = lines(200, 10, 20.0, Viewport::new(2.5, 0.0, 0.0));
    assert_eq!(l.vertical, vec![0.0, 50.0, 100.0, 150.0]);
}

#[test]
fn empty_surface_has_no_lines() {
    let l = lines(0, 0, 20.0, Viewport::default());
    assert!(l.vertical.is_empty());
    assert!(l.horizontal.is_empty());
}

#[test]
fn too_dense_grid_is_dropped() {
    let res = grid_lines(SurfaceSize::new(4000, 10), &settings(0.001), &Viewport::new(0.1, 0.0, 0.0));
    assert_eq!(res.unwrap(), None);
}

#[test]
fn non_finite_offset_yields_no_positions() {
    assert!(positions(f64::NAN, 20.0, 200.0).is_empty());
    assert!(positions(f64::INFINITY, 20.0, 200.0).is_empty());
}

// --- draw_grid ---

#[test]
fn draw_grid_disabled_draws_nothing() {
    let mut ctx = RecordingContext::new();
    let grid = GridSettings { enabled: false, size: 20.0 };
    draw_grid(&mut ctx, SurfaceSize::new(200, 200), &grid, &Viewport::default()).unwrap();
    assert!(ctx.commands().is_empty());
}

#[test]
fn draw_grid_strokes_full_length_lines() {
    let mut ctx = RecordingContext::new();
    draw_grid(&mut ctx, SurfaceSize::new(40, 30), &settings(20.0), &Viewport::default()).unwrap();

    let segments: Vec<(f64, f64, f64, f64)> = ctx
        .commands()
        .windows(2)
        .filter_map(|w| match (&w[0], &w[1]) {
            (DrawCommand::MoveTo { x: x0, y: y0 }, DrawCommand::LineTo { x: x1, y: y1 }) => Some((*x0, *y0, *x1, *y1)),
            _ => None,
        })
        .collect();
    assert_eq!(
        segments,
        vec![(0.0, 0.0, 0.0, 30.0), (20.0, 0.0, 20.0, 30.0), (0.0, 0.0, 40.0, 0.0), (0.0, 20.0, 40.0, 20.0)]
    );
}

#[test]
fn draw_grid_uses_light_gray_one_pixel() {
    let mut ctx = RecordingContext::new();
    draw_grid(&mut ctx, SurfaceSize::new(20, 20), &settings(20.0), &Viewport::default()).unwrap();
    assert!(ctx.commands().contains(&DrawCommand::SetStrokeStyle { color: "#e0e0e0".into() }));
    assert!(ctx.commands().contains(&DrawCommand::SetLineWidth { width: 1.0 }));
}

#[test]
fn draw_grid_invalid_size_draws_nothing() {
    let mut ctx = RecordingContext::new();
    let res = draw_grid(&mut ctx, SurfaceSize::new(20, 20), &settings(0.0), &Viewport::default());
    assert!(res.is_err());
    assert!(ctx.commands().is_empty());
}
