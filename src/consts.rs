//! Shared constants for the canvas crate.

// ── Viewport ────────────────────────────────────────────────────

/// Smallest zoom factor the viewport accepts.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor the viewport accepts.
pub const MAX_ZOOM: f64 = 5.0;

// ── Surface ─────────────────────────────────────────────────────

/// Id of the canvas element the browser host binds to by default.
pub const DEFAULT_ELEMENT_ID: &str = "design-canvas";

/// Surface clear color.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

// ── Grid ────────────────────────────────────────────────────────

/// Grid cell size in world units at zoom 1.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Grid line color.
pub const GRID_STROKE: &str = "#e0e0e0";

/// Grid line width in pixels.
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Upper bound on lines per axis in one grid pass.
pub const MAX_GRID_LINES: u32 = 10_000;

// ── Primitives ──────────────────────────────────────────────────

pub const DEFAULT_STROKE: &str = "#000";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_TEXT_COLOR: &str = "#000";
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

// ── House layers ────────────────────────────────────────────────

/// A window closer than this (world units, per axis) to a wall point snaps onto it.
pub const WINDOW_SNAP_DISTANCE: f64 = 10.0;
