//! A [`DrawContext`] that records every call instead of painting.
//!
//! Used for headless rendering and for asserting exactly what a frame drew.

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;

use serde::Serialize;

use crate::draw::DrawContext;
use crate::error::DrawError;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetFillStyle { color: String },
    SetStrokeStyle { color: String },
    SetLineWidth { width: f64 },
    SetFont { font: String },
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    Fill,
    Stroke,
    FillText { text: String, x: f64, y: f64 },
}

/// In-memory drawing context.
///
/// Mirrors the canvas rule that a negative arc radius is an error.
#[derive(Debug, Default, Clone)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded calls, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Serialize the recorded calls as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a command cannot be represented as JSON (non-finite numbers
    /// are written as `null`, so this does not happen in practice).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl DrawContext for RecordingContext {
    fn set_fill_style(&mut self, color: &str) {
        self.push(DrawCommand::SetFillStyle { color: color.to_owned() });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(DrawCommand::SetStrokeStyle { color: color.to_owned() });
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::SetLineWidth { width });
    }

    fn set_font(&mut self, font: &str) {
        self.push(DrawCommand::SetFont { font: font.to_owned() });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCommand::StrokeRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Result<(), DrawError> {
        if radius < 0.0 {
            return Err(DrawError::Backend { call: "arc", reason: format!("negative radius {radius}") });
        }
        self.push(DrawCommand::Arc { x, y, radius, start_angle, end_angle });
        Ok(())
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), DrawError> {
        self.push(DrawCommand::FillText { text: text.to_owned(), x, y });
        Ok(())
    }
}
