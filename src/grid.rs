//! Reference grid that pans and zooms with the viewport.
//!
//! Rendered spacing is always `size * zoom`. Line positions start at the pan
//! offset modulo that spacing, so the grid moves with the world rather than
//! staying glued to the surface.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRID_SIZE, GRID_LINE_WIDTH, GRID_STROKE, MAX_GRID_LINES};
use crate::draw::{self, DrawContext, LineStyle};
use crate::error::RenderError;
use crate::host::SurfaceSize;
use crate::viewport::Viewport;

/// Grid visibility and cell size (world units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    pub enabled: bool,
    pub size: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { enabled: true, size: DEFAULT_GRID_SIZE }
    }
}

/// Screen-space positions of the lines one grid pass will draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    /// X of each vertical line, ascending.
    pub vertical: Vec<f64>,
    /// Y of each horizontal line, ascending.
    pub horizontal: Vec<f64>,
}

/// Effective on-screen spacing between grid lines.
///
/// # Errors
///
/// Returns [`RenderError::InvalidState`] if the grid size is not positive or the
/// resulting spacing is not a finite positive number.
pub fn spacing(grid: &GridSettings, viewport: &Viewport) -> Result<f64, RenderError> {
    if grid.size.is_nan() || grid.size <= 0.0 {
        return Err(RenderError::InvalidState(format!("grid size must be positive, got {}", grid.size)));
    }
    let spacing = grid.size * viewport.zoom();
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(RenderError::InvalidState(format!("degenerate grid spacing {spacing}")));
    }
    Ok(spacing)
}

/// Compute where grid lines fall on a surface of `size`.
///
/// Returns `Ok(None)` when the grid is disabled, or when a single axis would
/// need more than [`MAX_GRID_LINES`] lines (the grid pass is dropped, the rest
/// of the frame still draws).
///
/// # Errors
///
/// Returns [`RenderError::InvalidState`] for degenerate spacing (see [`spacing`]).
pub fn grid_lines(size: SurfaceSize, grid: &GridSettings, viewport: &Viewport) -> Result<Option<GridLines>, RenderError> {
    if !grid.enabled {
        return Ok(None);
    }
    let step = spacing(grid, viewport)?;
    let span = f64::from(size.width.max(size.height));
    if span / step > f64::from(MAX_GRID_LINES) {
        tracing::warn!(spacing = step, span, "grid too dense to draw; skipping grid pass");
        return Ok(None);
    }
    Ok(Some(GridLines {
        vertical: positions(viewport.pan_x() % step, step, f64::from(size.width)),
        horizontal: positions(viewport.pan_y() % step, step, f64::from(size.height)),
    }))
}

/// Draw the grid onto `ctx`. No-op when the grid is disabled.
///
/// # Errors
///
/// Returns [`RenderError::InvalidState`] for degenerate spacing (see [`spacing`]).
pub fn draw_grid<C: DrawContext + ?Sized>(
    ctx: &mut C,
    size: SurfaceSize,
    grid: &GridSettings,
    viewport: &Viewport,
) -> Result<(), RenderError> {
    let Some(lines) = grid_lines(size, grid, viewport)? else {
        return Ok(());
    };

    let style = LineStyle::new(GRID_STROKE, GRID_LINE_WIDTH);
    let width = f64::from(size.width);
    let height = f64::from(size.height);

    for x in &lines.vertical {
        draw::line(ctx, *x, 0.0, *x, height, &style);
    }
    for y in &lines.horizontal {
        draw::line(ctx, 0.0, *y, width, *y, &style);
    }
    Ok(())
}

/// `offset, offset + step, ...` while below `limit`.
///
/// Each position is computed from its index so long runs do not accumulate
/// floating-point drift.
fn positions(offset: f64, step: f64, limit: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut i = 0_u32;
    loop {
        let p = f64::from(i).mul_add(step, offset);
        if !p.is_finite() || p >= limit {
            break;
        }
        out.push(p);
        i += 1;
    }
    out
}
