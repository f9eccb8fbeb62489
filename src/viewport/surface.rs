use super::view_box::ViewBox;
use crate::flow::Position;

/// A point in client (screen pixel) space, as delivered by pointer and wheel events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: ClientPoint) -> ClientPoint {
        ClientPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(self, other: ClientPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Position and size of the drawing surface on screen, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Width with degenerate (zero, negative, NaN) sizes replaced by one pixel.
    pub fn safe_width(&self) -> f64 {
        if self.width > 0.0 { self.width } else { 1.0 }
    }

    pub fn safe_height(&self) -> f64 {
        if self.height > 0.0 { self.height } else { 1.0 }
    }
}

/// Supplies the current on-screen rectangle of the drawing surface.
///
/// Rendering layers implement this over their real element; tests and headless
/// callers use [`FixedSurface`].
pub trait SurfaceRect {
    fn rect(&self) -> PixelRect;
}

/// A surface whose rectangle never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSurface(pub PixelRect);

impl FixedSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self(PixelRect::new(0.0, 0.0, width, height))
    }
}

impl SurfaceRect for FixedSurface {
    fn rect(&self) -> PixelRect {
        self.0
    }
}

/// Maps a client point to the graph-space point drawn under it.
pub fn client_to_graph(view: &ViewBox, rect: &PixelRect, client: ClientPoint) -> Position {
    Position::new(
        view.x + (client.x - rect.left) / rect.safe_width() * view.w,
        view.y + (client.y - rect.top) / rect.safe_height() * view.h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_corners_and_center() {
        let view = ViewBox::new(100.0, 50.0, 400.0, 200.0);
        let rect = PixelRect::new(10.0, 20.0, 800.0, 400.0);

        assert_eq!(
            client_to_graph(&view, &rect, ClientPoint::new(10.0, 20.0)),
            Position::new(100.0, 50.0)
        );
        assert_eq!(
            client_to_graph(&view, &rect, ClientPoint::new(410.0, 220.0)),
            Position::new(300.0, 150.0)
        );
    }

    #[test]
    fn zero_sized_rect_does_not_divide_by_zero() {
        let view = ViewBox::new(0.0, 0.0, 100.0, 100.0);
        let rect = PixelRect::new(0.0, 0.0, 0.0, 0.0);
        let p = client_to_graph(&view, &rect, ClientPoint::new(1.0, 1.0));
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
