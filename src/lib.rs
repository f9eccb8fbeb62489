//! # flowscope - Nested Workflow Diagram Core
//!
//! **flowscope** turns a tree of workflow definitions into a single diagram a
//! human can monitor: subflow call-sites are inlined, data-shaping "plumbing"
//! nodes can be collapsed, and an interactive viewport handles panning and
//! zooming over the result. It performs no drawing itself; a rendering layer
//! consumes the positioned graph and the current view rectangle.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Flows**: Parse flow JSON with [`FlowDefinition::from_json_str`] and
//!     [`FlowLibrary::from_json_str`], or implement [`IntoFlow`] for your own format.
//! 2.  **Merge**: [`FlowMerger`] inlines every `subflow` node whose target flow can be
//!     resolved, namespacing the child ids as `call::child`. Depth and size caps keep
//!     the result bounded even for self-referencing flows.
//! 3.  **Simplify** (optional): [`graph::simplify`] drops plumbing nodes while
//!     contracting execution paths through them, so reachability between the
//!     remaining nodes is preserved.
//! 4.  **View**: [`compute_bounds`] measures the content and a
//!     [`ViewportController`] owns the visible rectangle, reacting to pointer and
//!     wheel events.
//! 5.  **Highlight**: [`VisualMapper`] projects runtime status ids onto the nodes
//!     that are actually visible.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowscope::prelude::*;
//!
//! let root = FlowDefinition::new(
//!     "main",
//!     vec![
//!         FlowNode::new("start", "on_flow_start", 0.0, 0.0),
//!         FlowNode::new("call", "subflow", 240.0, 0.0).with_subflow("tools:child"),
//!         FlowNode::new("end", "on_flow_end", 480.0, 0.0),
//!     ],
//!     vec![FlowEdge::exec("start", "call"), FlowEdge::exec("call", "end")],
//! );
//! let child = FlowDefinition::new(
//!     "child",
//!     vec![
//!         FlowNode::new("entry", "on_flow_start", 0.0, 0.0),
//!         FlowNode::new("text", "literal_string", 200.0, 0.0),
//!         FlowNode::new("exit", "on_flow_end", 400.0, 0.0),
//!     ],
//!     vec![FlowEdge::exec("entry", "text"), FlowEdge::exec("text", "exit")],
//! );
//! let library: FlowLibrary = vec![child].into_iter().collect();
//!
//! let options = DiagramOptions { simplify: true, ..DiagramOptions::default() };
//! let diagram = build_diagram(&root, &library, &options, None);
//! assert!(diagram.graph.node("call::entry").is_some());
//! assert!(diagram.graph.node("call::text").is_none());
//!
//! let mut viewport = ViewportController::new(FixedSurface::new(1280.0, 720.0), diagram.bounds);
//! viewport.zoom_in();
//! assert!(viewport.view().w < diagram.bounds.w);
//! ```

pub mod error;
pub mod flow;
pub mod graph;
pub mod highlight;
pub mod layout;
pub mod outline;
pub mod pipeline;
pub mod prelude;
pub mod viewport;

pub use flow::{FlowDefinition, FlowLibrary, IntoFlow};
pub use graph::{FlowMerger, MergedGraph};
pub use highlight::VisualMapper;
pub use layout::compute_bounds;
pub use viewport::ViewportController;
