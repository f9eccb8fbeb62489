use crate::flow::{FlowDefinition, FlowLibrary};
use crate::graph::{KeepPolicy, MergeLimits, MergedGraph, SimplifyOptions, merge, simplify};
use crate::layout::{ContentBounds, compute_bounds};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Switches and caps for turning flow definitions into a drawable diagram.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagramOptions {
    /// Inline subflow call-sites.
    pub expand: bool,
    /// Collapse plumbing nodes.
    pub simplify: bool,
    pub limits: MergeLimits,
    pub simplify_options: SimplifyOptions,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            expand: true,
            simplify: false,
            limits: MergeLimits::default(),
            simplify_options: SimplifyOptions::default(),
        }
    }
}

/// A positioned graph ready for rendering, with the extent the viewport clamps to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub graph: MergedGraph,
    pub bounds: ContentBounds,
}

/// Runs merge, optional simplification and bounds computation.
///
/// This is a pure function of its arguments; see [`DiagramCache`] for reuse across frames.
pub fn build_diagram(
    root: &FlowDefinition,
    library: &FlowLibrary,
    options: &DiagramOptions,
    active_id: Option<&str>,
) -> Diagram {
    let merged = merge(root, library, options.expand, options.limits);

    let graph = if options.simplify {
        let policy = KeepPolicy::new(&merged.nodes, active_id);
        simplify(
            &merged.nodes,
            &merged.edges,
            |id| policy.keeps(id),
            options.simplify_options.max_edges,
        )
    } else {
        merged
    };

    let bounds = compute_bounds(&graph.nodes);
    Diagram { graph, bounds }
}

type CacheKey = (FlowDefinition, FlowLibrary, DiagramOptions, Option<String>);

/// Remembers the last diagram built and returns it while the inputs stay the same.
///
/// The key holds owned copies of the root flow and the library, so a miss clones both
/// and a hit compares them field by field. Both costs scale with the library size;
/// callers with very large libraries should keep one cache per library and call
/// [`DiagramCache::invalidate`] when it is edited.
#[derive(Default)]
pub struct DiagramCache {
    entry: Option<(CacheKey, Diagram)>,
}

impl DiagramCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(
        &mut self,
        root: &FlowDefinition,
        library: &FlowLibrary,
        options: &DiagramOptions,
        active_id: Option<&str>,
    ) -> &Diagram {
        let cached = self.entry.take().filter(|((r, l, o, a), _)| {
            r == root && l == library && o == options && a.as_deref() == active_id
        });

        let entry = cached.unwrap_or_else(|| {
            trace!(root = %root.id, "rebuilding diagram");
            let diagram = build_diagram(root, library, options, active_id);
            let key = (
                root.clone(),
                library.clone(),
                *options,
                active_id.map(str::to_string),
            );
            (key, diagram)
        });

        &self.entry.insert(entry).1
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
