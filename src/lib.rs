//! Design-canvas renderer for the container house layout editor.
//!
//! This crate owns the drawing surface, the pan/zoom viewport, the frame loop,
//! and the fixed order in which the house layers (containers, walls, windows,
//! doors, foundation, roofing) paint each frame. Everything environment
//! specific is injected: the engine talks to a [`host::SurfaceHost`] for the
//! drawing element and a [`host::FramePacer`] for frame scheduling, so the same
//! engine runs in the browser (`web` feature) and headless under test.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] composing every component below |
//! | [`surface`] | Surface manager: element lookup, context, sizing, resize |
//! | [`viewport`] | Zoom/pan state and screen/world conversions |
//! | [`grid`] | Zoom/pan-aware reference grid |
//! | [`draw`] | [`draw::DrawContext`] trait and the primitive drawing helpers |
//! | [`scheduler`] | Start/stop-able frame loop state machine |
//! | [`layers`] | Layer capability and the ordered layer registry |
//! | [`house`] | Container, wall and window layers |
//! | [`host`] | Host binding traits and shared value types |
//! | [`recorder`] | In-memory [`draw::DrawContext`] that records draw calls |
//! | [`config`] | Engine configuration |
//! | [`state`] | Rendering state snapshot |
//! | [`error`] | Error types |
//! | [`consts`] | Shared defaults and limits |
//! | `web` | Browser host bindings (`web` feature) |

pub mod config;
pub mod consts;
pub mod draw;
pub mod engine;
pub mod error;
pub mod grid;
pub mod host;
pub mod house;
pub mod layers;
pub mod recorder;
pub mod scheduler;
pub mod state;
pub mod surface;
pub mod viewport;
#[cfg(feature = "web")]
pub mod web;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{DrawError, RenderError};
pub use layers::{Layer, LayerSlot};
pub use state::RenderingState;
pub use viewport::{Point, Viewport};
