//! Drawing primitives shared by the grid and every layer.
//!
//! [`DrawContext`] is the slice of a 2D canvas context the renderer needs. The
//! browser host implements it for `CanvasRenderingContext2d`; tests use
//! [`crate::recorder::RecordingContext`].
//!
//! Each helper sets every style attribute it paints with before painting, so
//! callers must never rely on style left behind by a previous call.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH, DEFAULT_TEXT_COLOR,
};
use crate::error::DrawError;

/// Minimal immediate-mode 2D drawing context.
pub trait DrawContext {
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);

    /// Add an arc to the current path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the arc (e.g. a negative radius).
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Result<(), DrawError>;

    fn fill(&mut self);
    fn stroke(&mut self);

    /// Paint `text` with its baseline origin at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), DrawError>;
}

/// Fill and stroke style for closed shapes.
///
/// `fill: None` means the shape is outlined only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill: Option<String>,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self { fill: None, stroke: DEFAULT_STROKE.to_owned(), stroke_width: DEFAULT_STROKE_WIDTH }
    }
}

impl ShapeStyle {
    /// Filled shape with the default outline.
    #[must_use]
    pub fn filled(fill: &str) -> Self {
        Self { fill: Some(fill.to_owned()), ..Self::default() }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: &str, stroke_width: f64) -> Self {
        self.stroke = stroke.to_owned();
        self.stroke_width = stroke_width;
        self
    }
}

/// Stroke style for open paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub stroke: String,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { stroke: DEFAULT_STROKE.to_owned(), width: DEFAULT_STROKE_WIDTH }
    }
}

impl LineStyle {
    #[must_use]
    pub fn new(stroke: &str, width: f64) -> Self {
        Self { stroke: stroke.to_owned(), width }
    }
}

/// Text color and font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: String,
    pub font_size: f64,
    pub font_family: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_TEXT_COLOR.to_owned(),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
        }
    }
}

impl TextStyle {
    /// CSS font shorthand, e.g. `12px Arial`.
    #[must_use]
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

/// Draw an axis-aligned rectangle with its top-left corner at `(x, y)`.
pub fn rectangle<C: DrawContext + ?Sized>(ctx: &mut C, x: f64, y: f64, width: f64, height: f64, style: &ShapeStyle) {
    if let Some(fill) = &style.fill {
        ctx.set_fill_style(fill);
        ctx.fill_rect(x, y, width, height);
    }
    apply_stroke(ctx, &style.stroke, style.stroke_width);
    ctx.stroke_rect(x, y, width, height);
}

/// Draw a full circle centred on `(cx, cy)`.
///
/// # Errors
///
/// Returns `Err` if the backend rejects the arc.
pub fn circle<C: DrawContext + ?Sized>(
    ctx: &mut C,
    cx: f64,
    cy: f64,
    radius: f64,
    style: &ShapeStyle,
) -> Result<(), DrawError> {
    ctx.begin_path();
    ctx.arc(cx, cy, radius, 0.0, TAU)?;

    if let Some(fill) = &style.fill {
        ctx.set_fill_style(fill);
        ctx.fill();
    }

    apply_stroke(ctx, &style.stroke, style.stroke_width);
    ctx.stroke();
    Ok(())
}

/// Draw a straight segment from `(x0, y0)` to `(x1, y1)`.
pub fn line<C: DrawContext + ?Sized>(ctx: &mut C, x0: f64, y0: f64, x1: f64, y1: f64, style: &LineStyle) {
    apply_stroke(ctx, &style.stroke, style.width);
    ctx.begin_path();
    ctx.move_to(x0, y0);
    ctx.line_to(x1, y1);
    ctx.stroke();
}

/// Draw `content` with its baseline origin at `(x, y)`.
///
/// # Errors
///
/// Returns `Err` if the backend rejects the call.
pub fn text<C: DrawContext + ?Sized>(
    ctx: &mut C,
    content: &str,
    x: f64,
    y: f64,
    style: &TextStyle,
) -> Result<(), DrawError> {
    ctx.set_fill_style(&style.color);
    ctx.set_font(&style.font());
    ctx.fill_text(content, x, y)
}

fn apply_stroke<C: DrawContext + ?Sized>(ctx: &mut C, color: &str, width: f64) {
    ctx.set_stroke_style(color);
    ctx.set_line_width(width);
}
