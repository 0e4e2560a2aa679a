//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config. The
//! initial zoom is clamped like any other zoom; only values the engine cannot
//! run with (empty element id, non-positive grid size) are rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BACKGROUND, DEFAULT_ELEMENT_ID, DEFAULT_GRID_SIZE};
use crate::error::RenderError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Id of the drawing element the host should bind to.
    pub element_id: String,
    /// CSS color used to clear the surface each frame.
    pub background_color: String,
    pub grid_enabled: bool,
    /// Grid cell size in world units.
    pub grid_size: f64,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_owned(),
            background_color: DEFAULT_BACKGROUND.to_owned(),
            grid_enabled: true,
            grid_size: DEFAULT_GRID_SIZE,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ConfigParse`] for malformed JSON and
    /// [`RenderError::InvalidConfig`] for values rejected by [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the engine can run with these values.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.element_id.trim().is_empty() {
            return Err(RenderError::InvalidConfig("element_id must not be empty".into()));
        }
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "grid_size must be a positive number, got {}",
                self.grid_size
            )));
        }
        if !self.pan_x.is_finite() || !self.pan_y.is_finite() {
            return Err(RenderError::InvalidConfig("pan offsets must be finite".into()));
        }
        Ok(())
    }
}
