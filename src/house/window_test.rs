#![allow(clippy::float_cmp)]

use super::*;
use crate::recorder::{DrawCommand, RecordingContext};

// --- Window ---

#[test]
fn snap_within_distance_moves_both_axes() {
    let mut w = Window::new(103.0, 48.0, 10.0, 10.0);
    assert!(w.snap_to_wall(100.0, 50.0));
    assert_eq!((w.x, w.y), (100.0, 50.0));
}

#[test]
fn snap_axes_are_independent() {
    let mut w = Window::new(95.0, 0.0, 10.0, 10.0);
    assert!(w.snap_to_wall(100.0, 40.0));
    assert_eq!((w.x, w.y), (100.0, 0.0));
}

#[test]
fn snap_at_exact_distance_does_not_move() {
    let mut w = Window::new(90.0, 60.0, 10.0, 10.0);
    assert!(!w.snap_to_wall(100.0, 50.0));
    assert_eq!((w.x, w.y), (90.0, 60.0));
}

#[test]
fn snap_already_aligned_reports_no_change() {
    let mut w = Window::new(100.0, 50.0, 10.0, 10.0);
    assert!(!w.snap_to_wall(100.0, 50.0));
}

// --- WindowLayer ---

#[test]
fn create_move_resize() {
    let mut layer = WindowLayer::new();
    let id = layer.create(0.0, 0.0, 1.2, 1.0);
    assert!(layer.move_to(id, 4.0, 5.0));
    assert!(layer.resize(id, 2.0, 1.5));
    let w = layer.get(id).unwrap();
    assert_eq!((w.x, w.y, w.width, w.height), (4.0, 5.0, 2.0, 1.5));
}

#[test]
fn unknown_id_is_reported() {
    let mut layer = WindowLayer::new();
    let stray = Uuid::new_v4();
    assert!(!layer.move_to(stray, 0.0, 0.0));
    assert!(!layer.resize(stray, 1.0, 1.0));
    assert_eq!(layer.snap_to_wall(stray, 0.0, 0.0), None);
}

#[test]
fn layer_snap_delegates() {
    let mut layer = WindowLayer::new();
    let id = layer.create(2.0, 2.0, 1.0, 1.0);
    assert_eq!(layer.snap_to_wall(id, 0.0, 0.0), Some(true));
    assert_eq!(layer.windows()[0].x, 0.0);
}

#[test]
fn empty_layer_draws_nothing() {
    let mut ctx = RecordingContext::new();
    WindowLayer::new().draw_all(&mut ctx, &Viewport::default()).unwrap();
    assert!(ctx.commands().is_empty());
}

#[test]
fn window_draws_pane_and_mullions() {
    let mut layer = WindowLayer::new();
    layer.create(10.0, 10.0, 20.0, 10.0);
    let mut ctx = RecordingContext::new();
    layer.draw_all(&mut ctx, &Viewport::default()).unwrap();

    let cmds = ctx.commands();
    assert!(cmds.contains(&DrawCommand::FillRect { x: 10.0, y: 10.0, width: 20.0, height: 10.0 }));
    // Vertical mullion at x = 20, horizontal at y = 15.
    assert!(cmds.contains(&DrawCommand::MoveTo { x: 20.0, y: 10.0 }));
    assert!(cmds.contains(&DrawCommand::LineTo { x: 20.0, y: 20.0 }));
    assert!(cmds.contains(&DrawCommand::MoveTo { x: 10.0, y: 15.0 }));
    assert!(cmds.contains(&DrawCommand::LineTo { x: 30.0, y: 15.0 }));
}
