//! Layer capability and the fixed-order layer registry.
//!
//! Slot order is the paint order: containers first, roofing last, so later
//! layers paint over earlier ones. Slots are optional. An empty slot is
//! skipped without error, and a layer that fails is logged and skipped so one
//! broken layer never stalls the frame loop.

#[cfg(test)]
#[path = "layers_test.rs"]
mod layers_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::draw::DrawContext;
use crate::error::{DrawError, RenderError};
use crate::viewport::Viewport;

/// Something that paints itself once per frame.
///
/// A layer with nothing to show must return `Ok(())` without drawing.
pub trait Layer {
    /// Draw every item this layer owns.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the layer could not draw; the registry logs it and moves on.
    fn draw_all(&self, ctx: &mut dyn DrawContext, viewport: &Viewport) -> Result<(), DrawError>;
}

impl<F> Layer for F
where
    F: Fn(&mut dyn DrawContext, &Viewport) -> Result<(), DrawError>,
{
    fn draw_all(&self, ctx: &mut dyn DrawContext, viewport: &Viewport) -> Result<(), DrawError> {
        self(ctx, viewport)
    }
}

/// Registry slots, declared in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerSlot {
    Container,
    Walls,
    Windows,
    Doors,
    Foundation,
    Roofing,
}

impl LayerSlot {
    /// Every slot in draw order.
    pub const ALL: [Self; 6] = [Self::Container, Self::Walls, Self::Windows, Self::Doors, Self::Foundation, Self::Roofing];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Walls => "walls",
            Self::Windows => "windows",
            Self::Doors => "doors",
            Self::Foundation => "foundation",
            Self::Roofing => "roofing",
        }
    }
}

impl fmt::Display for LayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerSlot {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RenderError::UnknownLayer(s.to_owned()))
    }
}

/// Ordered set of registered layers.
#[derive(Default)]
pub struct LayerRegistry {
    layers: BTreeMap<LayerSlot, Box<dyn Layer>>,
}

impl fmt::Debug for LayerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerRegistry")
            .field("slots", &self.layers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl LayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `layer` in `slot`, returning whatever was there before.
    pub fn register(&mut self, slot: LayerSlot, layer: Box<dyn Layer>) -> Option<Box<dyn Layer>> {
        tracing::debug!(layer = %slot, "layer registered");
        self.layers.insert(slot, layer)
    }

    /// Register by slot name (`"walls"`, `"Roofing"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownLayer`] if `name` is not a slot.
    pub fn register_named(&mut self, name: &str, layer: Box<dyn Layer>) -> Result<Option<Box<dyn Layer>>, RenderError> {
        let slot = name.parse::<LayerSlot>()?;
        Ok(self.register(slot, layer))
    }

    pub fn unregister(&mut self, slot: LayerSlot) -> Option<Box<dyn Layer>> {
        self.layers.remove(&slot)
    }

    #[must_use]
    pub fn contains(&self, slot: LayerSlot) -> bool {
        self.layers.contains_key(&slot)
    }

    /// Occupied slots in draw order.
    #[must_use]
    pub fn slots(&self) -> Vec<LayerSlot> {
        self.layers.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Invoke every registered layer in slot order.
    ///
    /// Returns how many layers drew successfully.
    pub fn draw_all(&self, ctx: &mut dyn DrawContext, viewport: &Viewport) -> usize {
        let mut drawn = 0;
        for (slot, layer) in &self.layers {
            match layer.draw_all(ctx, viewport) {
                Ok(()) => drawn += 1,
                Err(e) => tracing::warn!(layer = %slot, error = %e, "layer failed to draw; skipping"),
            }
        }
        drawn
    }
}
