//! Windows: framed panes that can snap onto wall positions.

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::WINDOW_SNAP_DISTANCE;
use crate::draw::{self, DrawContext, LineStyle, ShapeStyle};
use crate::error::DrawError;
use crate::layers::Layer;
use crate::viewport::Viewport;

const GLASS: &str = "#cde8ff";
const FRAME: &str = "#3a78b5";
const FRAME_WIDTH: f64 = 2.0;
const MULLION_WIDTH: f64 = 1.0;

/// A window. `x`/`y` is the top-left corner in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Window {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { id: Uuid::new_v4(), x, y, width, height }
    }

    /// Snap each axis onto the wall point independently when it is closer than
    /// [`WINDOW_SNAP_DISTANCE`]. Returns whether anything moved.
    pub fn snap_to_wall(&mut self, wall_x: f64, wall_y: f64) -> bool {
        let mut snapped = false;
        if (self.x - wall_x).abs() < WINDOW_SNAP_DISTANCE {
            snapped |= self.x != wall_x;
            self.x = wall_x;
        }
        if (self.y - wall_y).abs() < WINDOW_SNAP_DISTANCE {
            snapped |= self.y != wall_y;
            self.y = wall_y;
        }
        snapped
    }
}

#[derive(Debug, Default, Clone)]
pub struct WindowLayer {
    windows: Vec<Window>,
}

impl WindowLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a window and return its id.
    pub fn create(&mut self, x: f64, y: f64, width: f64, height: f64) -> Uuid {
        let window = Window::new(x, y, width, height);
        let id = window.id;
        self.windows.push(window);
        id
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn move_to(&mut self, id: Uuid, x: f64, y: f64) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.x = x;
        window.y = y;
        true
    }

    pub fn resize(&mut self, id: Uuid, width: f64, height: f64) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.width = width;
        window.height = height;
        true
    }

    /// Snap one window onto a wall point. `None` for an unknown id.
    pub fn snap_to_wall(&mut self, id: Uuid, wall_x: f64, wall_y: f64) -> Option<bool> {
        self.get_mut(id).map(|w| w.snap_to_wall(wall_x, wall_y))
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }
}

impl Layer for WindowLayer {
    fn draw_all(&self, ctx: &mut dyn DrawContext, viewport: &Viewport) -> Result<(), DrawError> {
        let pane = ShapeStyle::filled(GLASS).with_stroke(FRAME, FRAME_WIDTH);
        let mullion = LineStyle::new(FRAME, MULLION_WIDTH);

        for window in &self.windows {
            let (x, y, w, h) = super::screen_rect(viewport, window.x, window.y, window.width, window.height);
            draw::rectangle(ctx, x, y, w, h, &pane);
            // Cross bars through the centre.
            draw::line(ctx, x + w / 2.0, y, x + w / 2.0, y + h, &mullion);
            draw::line(ctx, x, y + h / 2.0, x + w, y + h / 2.0, &mullion);
        }
        Ok(())
    }
}
