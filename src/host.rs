//! Host bindings the engine is constructed with.
//!
//! The engine never reaches for ambient globals. Everything it needs from the
//! environment (the drawing element, a 2D context, frame pacing, resize
//! notification) comes through these two traits, so a browser, a native
//! window, or a test fake can drive the same engine.

#[cfg(test)]
#[path = "host_test.rs"]
pub(crate) mod host_test;

use serde::{Deserialize, Serialize};

use crate::draw::DrawContext;
use crate::error::RenderError;

/// Integer pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the surface has no drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Identifier of one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Access to the drawing element and its container.
///
/// Resize notifications flow the other way: after [`SurfaceHost::subscribe_resize`]
/// the host calls [`crate::engine::Engine::handle_resize`] on every resize event.
pub trait SurfaceHost {
    type Context: DrawContext;

    /// Find the drawing element by id and remember it. Returns `false` if absent.
    fn locate(&mut self, element_id: &str) -> bool;

    /// Create a 2D drawing context for the located element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element cannot provide a 2D context.
    fn create_context(&mut self) -> Result<Self::Context, RenderError>;

    /// Content-box size of the element's container.
    fn container_size(&self) -> SurfaceSize;

    /// Resize the element's backing store.
    fn set_surface_size(&mut self, size: SurfaceSize);

    /// Start delivering resize notifications. Called at most once per engine.
    fn subscribe_resize(&mut self);
}

/// The host's frame-pacing primitive: schedule or cancel one future frame.
///
/// When a scheduled frame fires, the host calls
/// [`crate::engine::Engine::on_frame`] with the handle it returned here.
pub trait FramePacer {
    /// Schedule one frame callback.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FramePacing`] if the host cannot schedule frames.
    fn request_frame(&mut self) -> Result<FrameHandle, RenderError>;

    /// Cancel a scheduled frame. Cancelling a handle that already fired is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
