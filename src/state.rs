//! Snapshot of the engine's rendering state.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BACKGROUND;
use crate::grid::GridSettings;
use crate::viewport::Viewport;

/// Copy of the values that drive a frame.
///
/// Returned by value from [`crate::engine::Engine::state`]; mutating it has no
/// effect on the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderingState {
    pub is_running: bool,
    pub background_color: String,
    pub grid_enabled: bool,
    pub grid_size: f64,
    pub zoom_level: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for RenderingState {
    fn default() -> Self {
        Self::capture(false, DEFAULT_BACKGROUND, &GridSettings::default(), &Viewport::default())
    }
}

impl RenderingState {
    #[must_use]
    pub fn capture(is_running: bool, background_color: &str, grid: &GridSettings, viewport: &Viewport) -> Self {
        Self {
            is_running,
            background_color: background_color.to_owned(),
            grid_enabled: grid.enabled,
            grid_size: grid.size,
            zoom_level: viewport.zoom(),
            pan_x: viewport.pan_x(),
            pan_y: viewport.pan_y(),
        }
    }

    /// The viewport described by this snapshot.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.zoom_level, self.pan_x, self.pan_y)
    }
}
