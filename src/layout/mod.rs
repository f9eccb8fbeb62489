pub mod bounds;

pub use bounds::{CONTENT_PADDING, ContentBounds, NODE_HEIGHT, NODE_WIDTH, compute_bounds};
