use crate::flow::FlowNode;
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

/// Fixed size of a rendered node box in graph units.
pub const NODE_WIDTH: f64 = 180.0;
pub const NODE_HEIGHT: f64 = 64.0;
/// Margin added around the node boxes on every side.
pub const CONTENT_PADDING: f64 = 60.0;

/// Extent used when there is nothing to draw.
const EMPTY_WIDTH: f64 = 800.0;
const EMPTY_HEIGHT: f64 = 600.0;

/// The padded rectangle enclosing every node box of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentBounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Default for ContentBounds {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: EMPTY_WIDTH,
            h: EMPTY_HEIGHT,
        }
    }
}

/// Computes the content extent of `nodes`, or the default bounds for an empty slice.
pub fn compute_bounds(nodes: &[FlowNode]) -> ContentBounds {
    let xs = nodes.iter().map(|n| n.position.x).minmax_by(f64::total_cmp);
    let ys = nodes.iter().map(|n| n.position.y).minmax_by(f64::total_cmp);

    match (span(xs), span(ys)) {
        (Some((min_x, max_x)), Some((min_y, max_y))) => ContentBounds {
            x: min_x - CONTENT_PADDING,
            y: min_y - CONTENT_PADDING,
            w: (max_x + NODE_WIDTH - min_x) + 2.0 * CONTENT_PADDING,
            h: (max_y + NODE_HEIGHT - min_y) + 2.0 * CONTENT_PADDING,
        },
        _ => ContentBounds::default(),
    }
}

fn span(result: MinMaxResult<f64>) -> Option<(f64, f64)> {
    match result {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}
