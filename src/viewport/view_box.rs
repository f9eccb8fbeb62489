use crate::flow::Position;
use crate::layout::ContentBounds;
use serde::{Deserialize, Serialize};

/// Tunables for the viewport. Defaults match the diagram view of the monitoring UI.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Smallest visible width in graph units (maximum zoom-in).
    pub min_width: f64,
    /// Smallest visible height in graph units.
    pub min_height: f64,
    /// How many content extents may be visible at once (maximum zoom-out).
    pub max_zoom_out: f64,
    pub min_zoom_factor: f64,
    pub max_zoom_factor: f64,
    /// Factor applied for a forward/down wheel step.
    pub wheel_forward_factor: f64,
    /// Factor applied for a backward/up wheel step.
    pub wheel_backward_factor: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_width: 160.0,
            min_height: 120.0,
            max_zoom_out: 8.0,
            min_zoom_factor: 0.12,
            max_zoom_factor: 8.0,
            wheel_forward_factor: 1.12,
            wheel_backward_factor: 0.89,
            zoom_in_factor: 0.84,
            zoom_out_factor: 1.18,
        }
    }
}

impl ViewportConfig {
    /// Clamps a zoom factor into the allowed range. Non-finite factors become a no-op.
    pub fn clamp_factor(&self, factor: f64) -> f64 {
        if factor.is_nan() {
            return 1.0;
        }
        factor.clamp(self.min_zoom_factor, self.max_zoom_factor)
    }
}

/// The rectangle of graph space currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Fractional position of `point` within the box, `(0, 0)` being the top-left corner.
    pub fn fraction_of(&self, point: Position) -> (f64, f64) {
        (
            fraction(point.x - self.x, self.w),
            fraction(point.y - self.y, self.h),
        )
    }
}

impl From<ContentBounds> for ViewBox {
    fn from(bounds: ContentBounds) -> Self {
        Self::new(bounds.x, bounds.y, bounds.w, bounds.h)
    }
}

fn fraction(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 { offset / extent } else { 0.5 }
}

/// Limits each axis of `view` to `[floor, max(bounds × max_zoom_out, floor)]`.
pub fn clamp_view(view: ViewBox, bounds: &ContentBounds, config: &ViewportConfig) -> ViewBox {
    let (w, h) = clamp_size(view.w, view.h, bounds, config);
    ViewBox { w, h, ..view }
}

pub(crate) fn clamp_size(
    w: f64,
    h: f64,
    bounds: &ContentBounds,
    config: &ViewportConfig,
) -> (f64, f64) {
    (
        clamp_axis(w, bounds.w, config.min_width, config.max_zoom_out),
        clamp_axis(h, bounds.h, config.min_height, config.max_zoom_out),
    )
}

fn clamp_axis(value: f64, content: f64, floor: f64, max_zoom_out: f64) -> f64 {
    let min = floor.max(0.0);
    let max = (content * max_zoom_out).max(min);
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}
