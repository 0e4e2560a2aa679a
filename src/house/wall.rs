//! Walls drawn as thick segments in their material's color.

#[cfg(test)]
#[path = "wall_test.rs"]
mod wall_test;

use serde::{Deserialize, Serialize};

use crate::draw::{self, DrawContext, LineStyle};
use crate::error::DrawError;
use crate::layers::Layer;
use crate::viewport::{Point, Viewport};

/// Thinnest on-screen wall stroke, so zoomed-out walls stay visible.
const MIN_STROKE_PX: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// CSS color the wall is painted with.
    pub color: String,
}

impl Material {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { name: name.into(), color: color.into() }
    }
}

/// A straight wall between two world points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Point,
    pub end: Point,
    /// Thickness in world units.
    pub thickness: f64,
    pub material: Material,
}

impl Wall {
    #[must_use]
    pub fn new(start: Point, end: Point, thickness: f64, material: Material) -> Self {
        Self { start, end, thickness, material }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

#[derive(Debug, Default, Clone)]
pub struct WallLayer {
    walls: Vec<Wall>,
}

impl WallLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wall and return its index.
    pub fn add(&mut self, wall: Wall) -> usize {
        self.walls.push(wall);
        self.walls.len() - 1
    }

    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Replace the material of the wall at `index`. Returns `false` if out of range.
    pub fn apply_material(&mut self, index: usize, material: Material) -> bool {
        let Some(wall) = self.walls.get_mut(index) else {
            return false;
        };
        wall.material = material;
        true
    }
}

impl Layer for WallLayer {
    fn draw_all(&self, ctx: &mut dyn DrawContext, viewport: &Viewport) -> Result<(), DrawError> {
        for wall in &self.walls {
            let a = viewport.world_to_screen(wall.start);
            let b = viewport.world_to_screen(wall.end);
            let width = viewport.world_dist_to_screen(wall.thickness).max(MIN_STROKE_PX);
            draw::line(ctx, a.x, a.y, b.x, b.y, &LineStyle::new(&wall.material.color, width));
        }
        Ok(())
    }
}
