//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions of the
//! flowscope crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowscope::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let root = FlowDefinition::from_file("flows/main.json")?;
//! let library = FlowLibrary::from_file("flows/library.json")?;
//!
//! let diagram = build_diagram(&root, &library, &DiagramOptions::default(), None);
//! let mut viewport = ViewportController::new(FixedSurface::new(1280.0, 720.0), diagram.bounds);
//! viewport.zoom_in();
//! println!("{:?}", viewport.view());
//! # Ok(())
//! # }
//! ```

// Flow model
pub use crate::flow::{FlowDefinition, FlowEdge, FlowLibrary, FlowNode, IntoFlow, Position};

// Graph transformation
pub use crate::graph::{
    FlowMerger, KeepPolicy, MergeLimits, MergedGraph, SimplifyOptions, is_execution_edge,
    is_plumbing_type, merge, simplify,
};
pub use crate::pipeline::{Diagram, DiagramCache, DiagramOptions, build_diagram};

// Layout and viewport
pub use crate::layout::{ContentBounds, compute_bounds};
pub use crate::viewport::{
    ClientPoint, FixedSurface, PixelRect, SurfaceRect, ViewBox, ViewportConfig,
    ViewportController,
};

// Runtime status highlighting
pub use crate::highlight::{HighlightState, StatusFeed, VisualMapper};

// Error types
pub use crate::error::{FlowConversionError, FlowLoadError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
