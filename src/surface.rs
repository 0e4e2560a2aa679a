//! Surface manager: owns the drawing context and the surface's pixel size.
//!
//! Initialization is all-or-nothing. If the element is missing, no context is
//! created and no resize subscription is made. Once initialized, every resize
//! notification re-reads the container size and applies it immediately.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::error::RenderError;
use crate::host::{SurfaceHost, SurfaceSize};

pub struct SurfaceManager<H: SurfaceHost> {
    host: H,
    element_id: String,
    context: Option<H::Context>,
    size: SurfaceSize,
    resize_subscribed: bool,
}

impl<H: SurfaceHost> SurfaceManager<H> {
    #[must_use]
    pub fn new(host: H, element_id: impl Into<String>) -> Self {
        Self {
            host,
            element_id: element_id.into(),
            context: None,
            size: SurfaceSize::default(),
            resize_subscribed: false,
        }
    }

    /// Bind to the drawing element, create its context, and size it to its container.
    ///
    /// Re-initializing replaces the context but never adds a second resize
    /// subscription. If re-initializing fails, the manager is left unready.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotFound`] if the element does not exist, or the
    /// host's error if it cannot create a context.
    pub fn initialize(&mut self) -> Result<(), RenderError> {
        // A failed re-init must not leave the previous binding usable.
        self.context = None;
        if !self.host.locate(&self.element_id) {
            tracing::warn!(element_id = %self.element_id, "drawing element not found");
            return Err(RenderError::NotFound { element_id: self.element_id.clone() });
        }

        let context = self.host.create_context()?;
        self.context = Some(context);
        self.apply_container_size();

        if !self.resize_subscribed {
            self.host.subscribe_resize();
            self.resize_subscribed = true;
        }

        tracing::info!(
            element_id = %self.element_id,
            width = self.size.width,
            height = self.size.height,
            "surface initialized"
        );
        Ok(())
    }

    /// Re-apply container sizing. Ignored until initialized.
    pub fn handle_resize(&mut self) {
        if self.context.is_none() {
            return;
        }
        self.apply_container_size();
        tracing::debug!(width = self.size.width, height = self.size.height, "surface resized");
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.context.is_some()
    }

    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    #[must_use]
    pub fn dimensions(&self) -> SurfaceSize {
        self.size
    }

    /// The drawing context, once initialized.
    #[must_use]
    pub fn context(&self) -> Option<&H::Context> {
        self.context.as_ref()
    }

    pub fn context_mut(&mut self) -> Option<&mut H::Context> {
        self.context.as_mut()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn apply_container_size(&mut self) {
        let size = self.host.container_size();
        self.host.set_surface_size(size);
        self.size = size;
    }
}
