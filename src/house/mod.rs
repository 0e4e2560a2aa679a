//! House layers: containers, walls, and windows.
//!
//! Geometry is stored in world units and converted through the frame's
//! [`crate::viewport::Viewport`] at draw time, so every layer pans and zooms
//! with the grid. Doors, foundation, and roofing are left to external layers.

pub mod container;
pub mod wall;
pub mod window;

pub use container::{Container, ContainerLayer};
pub use wall::{Material, Wall, WallLayer};
pub use window::{Window, WindowLayer};

use crate::viewport::{Point, Viewport};

/// Screen-space rectangle `(x, y, width, height)` for a world-space box.
fn screen_rect(viewport: &Viewport, x: f64, y: f64, width: f64, height: f64) -> (f64, f64, f64, f64) {
    let origin = viewport.world_to_screen(Point::new(x, y));
    (origin.x, origin.y, viewport.world_dist_to_screen(width), viewport.world_dist_to_screen(height))
}
