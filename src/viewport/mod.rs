//! Interactive 2D viewport over a laid-out diagram.
//!
//! [`ViewportController`] owns the single piece of state that outlives a render:
//! the [`ViewBox`]. Everything else here is geometry helpers and the pointer
//! bookkeeping behind pan and pinch gestures.

pub mod controller;
pub mod gesture;
pub mod surface;
pub mod view_box;

pub use controller::ViewportController;
pub use gesture::{ActivePointers, Gesture, PointerId};
pub use surface::{ClientPoint, FixedSurface, PixelRect, SurfaceRect, client_to_graph};
pub use view_box::{ViewBox, ViewportConfig, clamp_view};
