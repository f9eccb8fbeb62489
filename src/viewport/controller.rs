use super::gesture::{ActivePointers, Gesture, PointerId};
use super::surface::{ClientPoint, SurfaceRect, client_to_graph};
use super::view_box::{ViewBox, ViewportConfig, clamp_size, clamp_view};
use crate::flow::Position;
use crate::layout::ContentBounds;
use tracing::trace;

/// Pinch distances below this many pixels are treated as a single touch point.
const MIN_PINCH_DISTANCE: f64 = 1e-6;

/// Owns the visible rectangle of a diagram and applies every pan/zoom interaction to it.
///
/// The controller is framework-agnostic: a rendering layer forwards its pointer
/// and wheel events, then redraws with [`ViewportController::view`] whenever a
/// handler reports a change.
pub struct ViewportController<S: SurfaceRect> {
    surface: S,
    config: ViewportConfig,
    bounds: ContentBounds,
    view: ViewBox,
    pointers: ActivePointers,
    gesture: Option<Gesture>,
}

impl<S: SurfaceRect> ViewportController<S> {
    pub fn new(surface: S, bounds: ContentBounds) -> Self {
        Self::with_config(surface, bounds, ViewportConfig::default())
    }

    pub fn with_config(surface: S, bounds: ContentBounds, config: ViewportConfig) -> Self {
        Self {
            surface,
            config,
            bounds,
            view: ViewBox::from(bounds),
            pointers: ActivePointers::default(),
            gesture: None,
        }
    }

    pub fn view(&self) -> ViewBox {
        self.view
    }

    pub fn bounds(&self) -> ContentBounds {
        self.bounds
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn active_pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Installs the bounds of a (possibly new) diagram. The view resets only when they differ.
    pub fn set_bounds(&mut self, bounds: ContentBounds) -> bool {
        if bounds == self.bounds {
            return false;
        }
        self.bounds = bounds;
        self.reset();
        true
    }

    /// Shows the whole content again and abandons any gesture in progress.
    pub fn reset(&mut self) {
        self.view = ViewBox::from(self.bounds);
        self.pointers.clear();
        self.gesture = None;
    }

    pub fn recenter(&mut self) -> ViewBox {
        self.view = ViewBox::from(self.bounds);
        self.view
    }

    pub fn zoom_in(&mut self) -> ViewBox {
        let center = self.view.center();
        self.zoom_at(center, self.config.zoom_in_factor, None)
    }

    pub fn zoom_out(&mut self) -> ViewBox {
        let center = self.view.center();
        self.zoom_at(center, self.config.zoom_out_factor, None)
    }

    /// Scales the view by `factor` around `anchor`, keeping the anchor's fractional
    /// position within the box fixed. `base` defaults to the current view.
    pub fn zoom_at(&mut self, anchor: Position, factor: f64, base: Option<ViewBox>) -> ViewBox {
        let base = base.unwrap_or(self.view);
        let factor = self.config.clamp_factor(factor);
        let (fx, fy) = base.fraction_of(anchor);
        let (w, h) = clamp_size(base.w * factor, base.h * factor, &self.bounds, &self.config);

        self.view = ViewBox::new(anchor.x - fx * w, anchor.y - fy * h, w, h);
        self.view
    }

    /// Moves the view by a pixel delta, converted to graph units at the current zoom.
    /// `base` defaults to the current view.
    pub fn pan_by(&mut self, dx_px: f64, dy_px: f64, base: Option<ViewBox>) -> ViewBox {
        let base = base.unwrap_or(self.view);
        let rect = self.surface.rect();
        let dx = dx_px * base.w / rect.safe_width();
        let dy = dy_px * base.h / rect.safe_height();

        let moved = ViewBox::new(base.x - dx, base.y - dy, base.w, base.h);
        self.view = clamp_view(moved, &self.bounds, &self.config);
        self.view
    }

    /// Wheel step at `client`. Positive `delta_y` (forward/down) zooms out.
    pub fn wheel(&mut self, delta_y: f64, client: ClientPoint) -> bool {
        if delta_y == 0.0 || delta_y.is_nan() {
            return false;
        }
        let factor = if delta_y > 0.0 {
            self.config.wheel_forward_factor
        } else {
            self.config.wheel_backward_factor
        };
        let anchor = self.client_to_graph(&self.view, client);
        self.zoom_at(anchor, factor, None);
        true
    }

    pub fn pointer_down(&mut self, id: PointerId, client: ClientPoint) {
        self.pointers.insert(id, client);

        if self.pointers.len() == 1 {
            trace!(pointer = id, "pan gesture started");
            self.gesture = Some(Gesture::Pan {
                start_view: self.view,
                start_client: client,
            });
        } else if let Some((a, b)) = self.pointers.first_pair() {
            let start_client = a.midpoint(b);
            let anchor = self.client_to_graph(&self.view, start_client);
            trace!(pointers = self.pointers.len(), "pinch gesture started");
            self.gesture = Some(Gesture::Pinch {
                start_view: self.view,
                start_client,
                start_dist: a.distance(b),
                anchor,
            });
        }
    }

    /// Returns `true` when the view changed.
    pub fn pointer_move(&mut self, id: PointerId, client: ClientPoint) -> bool {
        if !self.pointers.update(id, client) {
            return false;
        }

        match self.gesture {
            Some(Gesture::Pan {
                start_view,
                start_client,
            }) => {
                self.pan_by(
                    client.x - start_client.x,
                    client.y - start_client.y,
                    Some(start_view),
                );
                true
            }
            Some(Gesture::Pinch {
                start_view,
                start_dist,
                anchor,
                ..
            }) => {
                let Some((a, b)) = self.pointers.first_pair() else {
                    return false;
                };
                let dist = a.distance(b);
                if start_dist < MIN_PINCH_DISTANCE || dist < MIN_PINCH_DISTANCE {
                    return false;
                }
                self.zoom_at(anchor, start_dist / dist, Some(start_view));
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self, id: PointerId) {
        self.pointers.remove(id);
        if self.pointers.is_empty() {
            trace!(pointer = id, "gesture ended");
            self.gesture = None;
        }
    }

    pub fn pointer_cancel(&mut self, id: PointerId) {
        self.pointer_up(id);
    }

    fn client_to_graph(&self, view: &ViewBox, client: ClientPoint) -> Position {
        client_to_graph(view, &self.surface.rect(), client)
    }
}
