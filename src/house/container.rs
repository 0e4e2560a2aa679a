//! Shipping containers placed on the plan.

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draw::{self, DrawContext, ShapeStyle, TextStyle};
use crate::error::DrawError;
use crate::layers::Layer;
use crate::viewport::Viewport;

const FILL: &str = "#dfe8f1";
const STROKE: &str = "#2b4c6f";
const STROKE_WIDTH: f64 = 2.0;
const LABEL_COLOR: &str = "#1b2a3a";
const LABEL_FONT_SIZE: f64 = 12.0;

/// One container footprint. `x`/`y` is the top-left corner in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: Uuid,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
}

impl Container {
    #[must_use]
    pub fn new(label: impl Into<String>, x: f64, y: f64, width: f64, depth: f64) -> Self {
        Self { id: Uuid::new_v4(), label: label.into(), x, y, width, depth }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ContainerLayer {
    containers: Vec<Container>,
}

impl ContainerLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container and return its id.
    pub fn add(&mut self, container: Container) -> Uuid {
        let id = container.id;
        self.containers.push(container);
        id
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Container> {
        let index = self.containers.iter().position(|c| c.id == id)?;
        Some(self.containers.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Move a container's top-left corner. Returns `false` for an unknown id.
    pub fn move_to(&mut self, id: Uuid, x: f64, y: f64) -> bool {
        let Some(container) = self.get_mut(id) else {
            return false;
        };
        container.x = x;
        container.y = y;
        true
    }

    /// Turn a container a quarter turn about its top-left corner.
    pub fn rotate(&mut self, id: Uuid) -> bool {
        let Some(container) = self.get_mut(id) else {
            return false;
        };
        std::mem::swap(&mut container.width, &mut container.depth);
        true
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }
}

impl Layer for ContainerLayer {
    fn draw_all(&self, ctx: &mut dyn DrawContext, viewport: &Viewport) -> Result<(), DrawError> {
        let style = ShapeStyle::filled(FILL).with_stroke(STROKE, STROKE_WIDTH);
        let label_style = TextStyle { color: LABEL_COLOR.to_owned(), font_size: LABEL_FONT_SIZE, ..TextStyle::default() };

        for container in &self.containers {
            let (x, y, w, h) = super::screen_rect(viewport, container.x, container.y, container.width, container.depth);
            draw::rectangle(ctx, x, y, w, h, &style);
            if !container.label.is_empty() {
                draw::text(ctx, &container.label, x + 4.0, y + LABEL_FONT_SIZE + 2.0, &label_style)?;
            }
        }
        Ok(())
    }
}
