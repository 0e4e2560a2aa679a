//! The canvas engine: surface, viewport, grid, layers, and the frame loop.
//!
//! One [`Engine`] replaces the editor's global canvas module. Host bindings
//! are injected at construction, so several engines can coexist and tests can
//! drive frames by hand with a fake pacer.
//!
//! A frame is: clear to the background color, draw the grid, then invoke the
//! registered layers in slot order. Frames that cannot be drawn (zero-area
//! surface, degenerate grid) are skipped and logged; the loop keeps running.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::EngineConfig;
use crate::draw::{self, DrawContext, LineStyle, ShapeStyle, TextStyle};
use crate::error::RenderError;
use crate::grid::{self, GridSettings};
use crate::host::{FrameHandle, FramePacer, SurfaceHost, SurfaceSize};
use crate::layers::{Layer, LayerRegistry, LayerSlot};
use crate::scheduler::FrameScheduler;
use crate::state::RenderingState;
use crate::surface::SurfaceManager;
use crate::viewport::{Point, Viewport};

pub struct Engine<H: SurfaceHost, P: FramePacer> {
    surface: SurfaceManager<H>,
    pacer: P,
    scheduler: FrameScheduler,
    layers: LayerRegistry,
    viewport: Viewport,
    grid: GridSettings,
    background_color: String,
}

impl<H: SurfaceHost, P: FramePacer> Engine<H, P> {
    /// Build an engine. Nothing touches the host until [`Self::init`].
    #[must_use]
    pub fn new(config: EngineConfig, host: H, pacer: P) -> Self {
        Self {
            surface: SurfaceManager::new(host, config.element_id),
            pacer,
            scheduler: FrameScheduler::new(),
            layers: LayerRegistry::new(),
            viewport: Viewport::new(config.zoom, config.pan_x, config.pan_y),
            grid: GridSettings { enabled: config.grid_enabled, size: config.grid_size },
            background_color: config.background_color,
        }
    }

    // --- Lifecycle ---

    /// Bind to the drawing element and size the surface.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotFound`] if the element is missing. The engine
    /// stays unusable until a later `init` succeeds.
    pub fn init(&mut self) -> Result<(), RenderError> {
        self.surface.initialize()
    }

    /// Start the frame loop: render one frame now and schedule the next.
    ///
    /// Calling this while already running does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Uninitialized`] before a successful [`Self::init`].
    pub fn start_rendering(&mut self) -> Result<(), RenderError> {
        if !self.surface.is_ready() {
            return Err(RenderError::Uninitialized);
        }
        if !self.scheduler.start() {
            return Ok(());
        }
        tracing::info!("render loop started");
        self.run_frame();
        Ok(())
    }

    /// Stop the frame loop and cancel the pending frame. Idempotent.
    pub fn stop_rendering(&mut self) {
        if self.scheduler.stop(&mut self.pacer) {
            tracing::info!(frames = self.scheduler.frames_rendered(), "render loop stopped");
        }
    }

    /// Host callback: the frame scheduled as `handle` is due.
    ///
    /// Frames that are no longer pending (stopped, superseded) are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if !self.scheduler.accept(handle) {
            tracing::debug!(?handle, "ignoring stale frame callback");
            return;
        }
        self.run_frame();
    }

    /// Host callback: the surface's container was resized.
    pub fn handle_resize(&mut self) {
        self.surface.handle_resize();
    }

    /// Draw one frame immediately, outside the loop.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Uninitialized`] before init, or
    /// [`RenderError::InvalidState`] if the frame had to be skipped.
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        if !self.surface.is_ready() {
            return Err(RenderError::Uninitialized);
        }
        let size = self.surface.dimensions();
        if size.is_empty() {
            return Err(RenderError::InvalidState(format!(
                "surface has no drawable area ({}x{})",
                size.width, size.height
            )));
        }
        // Validate before clearing so a skipped frame leaves the previous one visible.
        if self.grid.enabled {
            grid::spacing(&self.grid, &self.viewport)?;
        }

        let ctx = self.surface.context_mut().ok_or(RenderError::Uninitialized)?;
        clear(ctx, size, &self.background_color);
        grid::draw_grid(ctx, size, &self.grid, &self.viewport)?;
        let drawn = self.layers.draw_all(ctx, &self.viewport);

        self.scheduler.mark_rendered();
        tracing::trace!(layers = drawn, frame = self.scheduler.frames_rendered(), "frame rendered");
        Ok(())
    }

    fn run_frame(&mut self) {
        if let Err(e) = self.render_frame() {
            tracing::warn!(error = %e, "frame skipped");
        }
        self.scheduler.schedule(&mut self.pacer);
    }

    // --- Queries ---

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    #[must_use]
    pub fn dimensions(&self) -> SurfaceSize {
        self.surface.dimensions()
    }

    /// A copy of the current rendering state.
    #[must_use]
    pub fn state(&self) -> RenderingState {
        RenderingState::capture(self.scheduler.is_running(), &self.background_color, &self.grid, &self.viewport)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Frames rendered since construction.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.scheduler.frames_rendered()
    }

    /// The drawing context, once initialized.
    pub fn drawing_context(&mut self) -> Option<&mut H::Context> {
        self.surface.context_mut()
    }

    #[must_use]
    pub fn surface_host(&self) -> &H {
        self.surface.host()
    }

    pub fn surface_host_mut(&mut self) -> &mut H {
        self.surface.host_mut()
    }

    #[must_use]
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    // --- Viewport / grid setters ---

    /// Set zoom, clamped to the allowed range.
    pub fn set_zoom(&mut self, level: f64) {
        self.viewport.set_zoom(level);
    }

    /// Set the absolute pan offset in surface pixels.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.viewport.set_pan(x, y);
    }

    /// Flip grid visibility.
    pub fn toggle_grid(&mut self) {
        self.grid.enabled = !self.grid.enabled;
    }

    /// Set the grid cell size in world units.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidState`] unless `size` is a positive finite number.
    pub fn set_grid_size(&mut self, size: f64) -> Result<(), RenderError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(RenderError::InvalidState(format!("grid size must be positive, got {size}")));
        }
        self.grid.size = size;
        Ok(())
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.background_color = color.into();
    }

    // --- Coordinates ---

    #[must_use]
    pub fn screen_to_world(&self, x: f64, y: f64) -> Point {
        self.viewport.screen_to_world(Point::new(x, y))
    }

    #[must_use]
    pub fn world_to_screen(&self, x: f64, y: f64) -> Point {
        self.viewport.world_to_screen(Point::new(x, y))
    }

    // --- Layers ---

    /// Register `layer` in `slot`, replacing any previous occupant.
    pub fn register_layer(&mut self, slot: LayerSlot, layer: Box<dyn Layer>) -> Option<Box<dyn Layer>> {
        self.layers.register(slot, layer)
    }

    /// Register `layer` by slot name.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownLayer`] if `name` is not a slot.
    pub fn register_named_layer(&mut self, name: &str, layer: Box<dyn Layer>) -> Result<(), RenderError> {
        self.layers.register_named(name, layer).map(|_| ())
    }

    pub fn unregister_layer(&mut self, slot: LayerSlot) -> Option<Box<dyn Layer>> {
        self.layers.unregister(slot)
    }

    #[must_use]
    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    // --- Primitives on the engine's own context ---

    /// # Errors
    ///
    /// Returns [`RenderError::Uninitialized`] before init.
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &ShapeStyle) -> Result<(), RenderError> {
        draw::rectangle(self.context()?, x, y, width, height, style);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`RenderError::Uninitialized`] before init, or the backend error.
    pub fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, style: &ShapeStyle) -> Result<(), RenderError> {
        draw::circle(self.context()?, cx, cy, radius, style)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`RenderError::Uninitialized`] before init.
    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, style: &LineStyle) -> Result<(), RenderError> {
        draw::line(self.context()?, x0, y0, x1, y1, style);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`RenderError::Uninitialized`] before init, or the backend error.
    pub fn draw_text(&mut self, content: &str, x: f64, y: f64, style: &TextStyle) -> Result<(), RenderError> {
        draw::text(self.context()?, content, x, y, style)?;
        Ok(())
    }

    fn context(&mut self) -> Result<&mut H::Context, RenderError> {
        self.surface.context_mut().ok_or(RenderError::Uninitialized)
    }
}

/// Fill the whole surface with the background color.
fn clear<C: DrawContext + ?Sized>(ctx: &mut C, size: SurfaceSize, color: &str) {
    ctx.set_fill_style(color);
    ctx.fill_rect(0.0, 0.0, f64::from(size.width), f64::from(size.height));
}
