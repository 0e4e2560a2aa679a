//! Browser host bindings (`web` feature).
//!
//! This module is the only place that touches `web_sys`. It provides:
//! - [`DrawContext`] for `CanvasRenderingContext2d`
//! - [`BrowserSurface`]: canvas lookup, parent-sized backing store, window resize events
//! - [`AnimationFramePacer`]: `requestAnimationFrame` / `cancelAnimationFrame`
//! - [`mount`]: wire both into an [`Engine`] behind `Rc<RefCell<_>>`
//!
//! Browser callbacks reach the engine through a shared hook installed by
//! [`mount`]. The hook holds only a weak reference, so dropping the returned
//! engine handle detaches it.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Date;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, HtmlElement, Window};

use crate::config::EngineConfig;
use crate::draw::DrawContext;
use crate::engine::Engine;
use crate::error::{DrawError, RenderError};
use crate::host::{FrameHandle, FramePacer, SurfaceHost, SurfaceSize};

/// Something the browser wants the engine to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Frame(FrameHandle),
    Resize,
}

type Hook = Rc<RefCell<Option<Box<dyn Fn(HostEvent)>>>>;

/// Engine driven by the browser.
pub type BrowserEngine = Engine<BrowserSurface, AnimationFramePacer>;

fn dispatch(hook: &Hook, event: HostEvent) {
    if let Some(handler) = hook.borrow().as_ref() {
        handler(event);
    }
}

fn backend(call: &'static str, err: &JsValue) -> DrawError {
    DrawError::Backend { call, reason: format!("{err:?}") }
}

// =============================================================
// DrawContext
// =============================================================

impl DrawContext for CanvasRenderingContext2d {
    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, width, height);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Result<(), DrawError> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start_angle, end_angle).map_err(|e| backend("arc", &e))
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), DrawError> {
        CanvasRenderingContext2d::fill_text(self, text, x, y).map_err(|e| backend("fill_text", &e))
    }
}

// =============================================================
// Surface
// =============================================================

/// A `<canvas>` element sized to its parent element.
pub struct BrowserSurface {
    window: Window,
    canvas: Option<HtmlCanvasElement>,
    hook: Hook,
}

impl BrowserSurface {
    fn new(window: Window, hook: Hook) -> Self {
        Self { window, canvas: None, hook }
    }

    #[must_use]
    pub fn canvas(&self) -> Option<&HtmlCanvasElement> {
        self.canvas.as_ref()
    }
}

impl SurfaceHost for BrowserSurface {
    type Context = CanvasRenderingContext2d;

    fn locate(&mut self, element_id: &str) -> bool {
        let Some(element) = self.window.document().and_then(|d| d.get_element_by_id(element_id)) else {
            return false;
        };
        match element.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => {
                self.canvas = Some(canvas);
                true
            }
            Err(_) => {
                tracing::warn!(element_id, "element is not a canvas");
                false
            }
        }
    }

    fn create_context(&mut self) -> Result<Self::Context, RenderError> {
        let canvas = self.canvas.as_ref().ok_or(RenderError::Uninitialized)?;
        let value = canvas
            .get_context("2d")
            .map_err(|e| RenderError::InvalidState(format!("getContext failed: {e:?}")))?
            .ok_or_else(|| RenderError::InvalidState("canvas has no 2d context".into()))?;
        value
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::InvalidState("2d context has unexpected type".into()))
    }

    fn container_size(&self) -> SurfaceSize {
        let Some(parent) = self.canvas.as_ref().and_then(|c| c.parent_element()) else {
            return SurfaceSize::default();
        };
        let Ok(parent) = parent.dyn_into::<HtmlElement>() else {
            return SurfaceSize::default();
        };
        SurfaceSize::new(
            u32::try_from(parent.offset_width()).unwrap_or(0),
            u32::try_from(parent.offset_height()).unwrap_or(0),
        )
    }

    fn set_surface_size(&mut self, size: SurfaceSize) {
        if let Some(canvas) = &self.canvas {
            canvas.set_width(size.width);
            canvas.set_height(size.height);
        }
    }

    fn subscribe_resize(&mut self) {
        let hook = Rc::clone(&self.hook);
        let cb = Closure::wrap(Box::new(move |_ev: Event| {
            dispatch(&hook, HostEvent::Resize);
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) = self.window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref()) {
            tracing::warn!(error = ?e, "failed to subscribe to window resize");
            return;
        }
        // Lives as long as the page.
        cb.forget();
    }
}

// =============================================================
// Frame pacing
// =============================================================

struct PendingFrame {
    handle: FrameHandle,
    raf_id: i32,
    // Kept alive until the callback fires or is cancelled.
    _callback: Closure<dyn FnMut(f64)>,
}

/// Frame pacing via `requestAnimationFrame`. At most one frame is outstanding.
pub struct AnimationFramePacer {
    window: Window,
    hook: Hook,
    next: u64,
    pending: Rc<RefCell<Option<PendingFrame>>>,
}

impl AnimationFramePacer {
    fn new(window: Window, hook: Hook) -> Self {
        Self { window, hook, next: 0, pending: Rc::default() }
    }
}

impl FramePacer for AnimationFramePacer {
    fn request_frame(&mut self) -> Result<FrameHandle, RenderError> {
        self.next += 1;
        let handle = FrameHandle(self.next);

        let hook = Rc::clone(&self.hook);
        let holder = Rc::clone(&self.pending);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            // Take our own slot first; the engine may request the next frame during dispatch.
            let fired = {
                let mut slot = holder.borrow_mut();
                if slot.as_ref().is_some_and(|p| p.handle == handle) { slot.take() } else { None }
            };
            dispatch(&hook, HostEvent::Frame(handle));
            drop(fired);
        }) as Box<dyn FnMut(f64)>);

        let raf_id = self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| RenderError::FramePacing(format!("{e:?}")))?;
        *self.pending.borrow_mut() = Some(PendingFrame { handle, raf_id, _callback: cb });
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut slot = self.pending.borrow_mut();
        if slot.as_ref().is_none_or(|p| p.handle != handle) {
            return;
        }
        if let Some(frame) = slot.take() {
            if let Err(e) = self.window.cancel_animation_frame(frame.raf_id) {
                tracing::warn!(?handle, error = ?e, "cancelAnimationFrame failed");
            }
        }
    }
}

// =============================================================
// Mount
// =============================================================

/// Build an engine bound to the browser window and initialize it.
///
/// Call `start_rendering` on the returned engine to begin the loop.
///
/// # Errors
///
/// Returns [`RenderError::InvalidState`] outside a browser window, or any
/// error from [`Engine::init`] (typically [`RenderError::NotFound`]).
pub fn mount(config: EngineConfig) -> Result<Rc<RefCell<BrowserEngine>>, RenderError> {
    let window = web_sys::window().ok_or_else(|| RenderError::InvalidState("no global window".into()))?;
    let hook: Hook = Rc::default();

    let surface = BrowserSurface::new(window.clone(), Rc::clone(&hook));
    let pacer = AnimationFramePacer::new(window, Rc::clone(&hook));
    let engine = Rc::new(RefCell::new(Engine::new(config, surface, pacer)));

    let weak = Rc::downgrade(&engine);
    *hook.borrow_mut() = Some(Box::new(move |event: HostEvent| {
        let Some(strong) = weak.upgrade() else {
            return;
        };
        let Ok(mut engine) = strong.try_borrow_mut() else {
            tracing::debug!(?event, "engine busy, dropping host event");
            return;
        };
        match event {
            HostEvent::Frame(handle) => {
                let started_ms = Date::now();
                engine.on_frame(handle);
                tracing::debug!(elapsed_ms = (Date::now() - started_ms).max(0.0), "frame callback");
            }
            HostEvent::Resize => engine.handle_resize(),
        }
    }));

    engine.borrow_mut().init()?;
    Ok(engine)
}
