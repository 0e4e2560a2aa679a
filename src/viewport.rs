#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera transform mapping world space onto the surface.
///
/// `pan_x` / `pan_y` are in surface pixels.
/// `zoom` is a scale factor (1.0 = no zoom), always within [`MIN_ZOOM`, `MAX_ZOOM`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

impl Viewport {
    /// Build a viewport, clamping `zoom` into range.
    #[must_use]
    pub fn new(zoom: f64, pan_x: f64, pan_y: f64) -> Self {
        let mut viewport = Self::default();
        viewport.set_zoom(zoom);
        viewport.set_pan(pan_x, pan_y);
        viewport
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Set the zoom factor, clamped to [`MIN_ZOOM`, `MAX_ZOOM`].
    ///
    /// Out-of-range values are clamped silently. NaN is ignored.
    pub fn set_zoom(&mut self, level: f64) {
        if level.is_nan() {
            tracing::warn!("ignoring NaN zoom level");
            return;
        }
        self.zoom = level.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Set the absolute pan offset in surface pixels.
    ///
    /// Non-finite offsets are ignored and the previous pan is kept.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!(x, y, "ignoring non-finite pan offset");
            return;
        }
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Convert a screen-space point (surface pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (surface pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x.mul_add(self.zoom, self.pan_x),
            y: world.y.mul_add(self.zoom, self.pan_y),
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Convert a world-space distance to screen-space distance (pixels).
    #[must_use]
    pub fn world_dist_to_screen(&self, world_dist: f64) -> f64 {
        world_dist * self.zoom
    }
}
