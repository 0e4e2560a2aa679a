#![allow(clippy::float_cmp)]

use super::*;
use crate::recorder::{DrawCommand, RecordingContext};

fn steel() -> Material {
    Material::new("corrugated steel", "#7a8793")
}

#[test]
fn wall_length() {
    let wall = Wall::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 0.2, steel());
    assert_eq!(wall.length(), 5.0);
}

#[test]
fn add_returns_index() {
    let mut layer = WallLayer::new();
    assert_eq!(layer.add(Wall::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.2, steel())), 0);
    assert_eq!(layer.add(Wall::new(Point::new(1.0, 0.0), Point::new(1.0, 1.0), 0.2, steel())), 1);
}

#[test]
fn apply_material_replaces_color() {
    let mut layer = WallLayer::new();
    let i = layer.add(Wall::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.2, steel()));
    assert!(layer.apply_material(i, Material::new("timber", "#a0703c")));
    assert_eq!(layer.walls()[i].material.color, "#a0703c");
    assert!(!layer.apply_material(9, steel()));
}

#[test]
fn empty_layer_draws_nothing() {
    let mut ctx = RecordingContext::new();
    WallLayer::new().draw_all(&mut ctx, &Viewport::default()).unwrap();
    assert!(ctx.commands().is_empty());
}

#[test]
fn wall_drawn_in_screen_space_with_scaled_width() {
    let mut layer = WallLayer::new();
    layer.add(Wall::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0, steel()));
    let mut ctx = RecordingContext::new();
    layer.draw_all(&mut ctx, &Viewport::new(3.0, 5.0, 5.0)).unwrap();
    assert_eq!(
        ctx.commands(),
        &[
            DrawCommand::SetStrokeStyle { color: "#7a8793".into() },
            DrawCommand::SetLineWidth { width: 6.0 },
            DrawCommand::BeginPath,
            DrawCommand::MoveTo { x: 5.0, y: 5.0 },
            DrawCommand::LineTo { x: 35.0, y: 5.0 },
            DrawCommand::Stroke,
        ]
    );
}

#[test]
fn thin_wall_keeps_minimum_stroke() {
    let mut layer = WallLayer::new();
    layer.add(Wall::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.1, steel()));
    let mut ctx = RecordingContext::new();
    layer.draw_all(&mut ctx, &Viewport::new(0.1, 0.0, 0.0)).unwrap();
    assert!(ctx.commands().contains(&DrawCommand::SetLineWidth { width: 1.0 }));
}
