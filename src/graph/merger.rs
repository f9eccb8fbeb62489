use super::edge_filter::{EXEC_IN_HANDLE, EXEC_OUT_HANDLE, is_execution_edge};
use super::{MergedGraph, prefixed_id};
use crate::flow::{FlowDefinition, FlowEdge, FlowLibrary, FlowNode, Position};
use ahash::AHashSet;
use serde::Deserialize;
use tracing::debug;

/// Horizontal distance between a subflow call-site and the entry node of the flow it inlines.
pub const SUBFLOW_GAP_X: f64 = 240.0;
pub const SUBFLOW_GAP_Y: f64 = 0.0;

/// Hard caps bounding the merged graph regardless of subflow topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MergeLimits {
    pub max_depth: usize,
    pub max_nodes: usize,
    pub max_edges: usize,
}

impl Default for MergeLimits {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_nodes: 600,
            max_edges: 1200,
        }
    }
}

/// Inlines subflow call-sites into one flat, uniquely-namespaced graph.
pub struct FlowMerger<'a> {
    root: &'a FlowDefinition,
    library: &'a FlowLibrary,
    expand: bool,
    limits: MergeLimits,
}

pub struct FlowMergerBuilder<'a> {
    root: &'a FlowDefinition,
    library: &'a FlowLibrary,
    expand: bool,
    limits: MergeLimits,
}

impl<'a> FlowMergerBuilder<'a> {
    pub fn new(root: &'a FlowDefinition, library: &'a FlowLibrary) -> Self {
        Self {
            root,
            library,
            expand: true,
            limits: MergeLimits::default(),
        }
    }
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }
    pub fn limits(mut self, limits: MergeLimits) -> Self {
        self.limits = limits;
        self
    }
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.limits.max_depth = max_depth;
        self
    }
    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.limits.max_nodes = max_nodes;
        self
    }
    pub fn max_edges(mut self, max_edges: usize) -> Self {
        self.limits.max_edges = max_edges;
        self
    }
    pub fn build(self) -> FlowMerger<'a> {
        FlowMerger {
            root: self.root,
            library: self.library,
            expand: self.expand,
            limits: self.limits,
        }
    }
}

/// Accumulates the merged output across the whole recursion so caps apply globally.
struct MergeState {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
    seen: AHashSet<String>,
}

impl<'a> FlowMerger<'a> {
    pub fn builder(root: &'a FlowDefinition, library: &'a FlowLibrary) -> FlowMergerBuilder<'a> {
        FlowMergerBuilder::new(root, library)
    }

    /// Produces the merged graph. With expansion disabled the root flow is returned as-is.
    pub fn merge(&self) -> MergedGraph {
        if !self.expand {
            return MergedGraph::from(self.root);
        }

        let mut state = MergeState {
            nodes: Vec::new(),
            edges: Vec::new(),
            seen: AHashSet::new(),
        };
        self.add_flow(&mut state, self.root, "", Position::default(), 0);

        debug!(
            root = %self.root.id,
            nodes = state.nodes.len(),
            edges = state.edges.len(),
            "merged flow"
        );
        MergedGraph {
            nodes: state.nodes,
            edges: state.edges,
        }
    }

    fn add_flow(
        &self,
        state: &mut MergeState,
        flow: &FlowDefinition,
        prefix: &str,
        offset: Position,
        depth: usize,
    ) {
        let limits = &self.limits;

        for node in &flow.nodes {
            if state.nodes.len() >= limits.max_nodes {
                debug!(max_nodes = limits.max_nodes, "node cap reached");
                break;
            }
            let id = prefixed_id(prefix, &node.id);
            if !state.seen.insert(id.clone()) {
                continue;
            }
            state.nodes.push(FlowNode {
                id,
                position: node.position + offset,
                ..node.clone()
            });
        }

        for edge in flow.edges.iter().filter(|e| is_execution_edge(e)) {
            if state.edges.len() >= limits.max_edges {
                debug!(max_edges = limits.max_edges, "edge cap reached");
                break;
            }
            let source = prefixed_id(prefix, &edge.source);
            let target = prefixed_id(prefix, &edge.target);
            if !state.seen.contains(&source) || !state.seen.contains(&target) {
                continue;
            }
            let id = if edge.id.is_empty() {
                format!("{}->{}", source, target)
            } else {
                prefixed_id(prefix, &edge.id)
            };
            state.edges.push(FlowEdge {
                id,
                source,
                target,
                ..edge.clone()
            });
        }

        if depth >= limits.max_depth {
            return;
        }

        for node in flow.nodes.iter().filter(|n| n.is_subflow()) {
            if state.nodes.len() >= limits.max_nodes || state.edges.len() >= limits.max_edges {
                break;
            }
            let node_id = prefixed_id(prefix, &node.id);
            if !state.seen.contains(&node_id) {
                continue;
            }
            let Some((child, entry)) = self.resolve_child(node) else {
                continue;
            };

            let anchor = node.position + offset;
            let child_offset = Position::new(
                anchor.x + SUBFLOW_GAP_X - entry.position.x,
                anchor.y + SUBFLOW_GAP_Y - entry.position.y,
            );
            let entry_id = prefixed_id(&node_id, &entry.id);

            let link_index = state.edges.len();
            state.edges.push(FlowEdge {
                id: format!("{}->{}", node_id, entry_id),
                source: node_id.clone(),
                target: entry_id.clone(),
                source_handle: EXEC_OUT_HANDLE.to_string(),
                target_handle: EXEC_IN_HANDLE.to_string(),
            });

            self.add_flow(state, child, &node_id, child_offset, depth + 1);

            // The caps may have stopped the child's entry node from being added.
            if !state.seen.contains(&entry_id) {
                state.edges.remove(link_index);
            }
        }
    }

    /// Finds the child flow a subflow node calls, together with its entry node.
    fn resolve_child(&self, node: &FlowNode) -> Option<(&'a FlowDefinition, &'a FlowNode)> {
        let reference = node.subflow_id.as_deref().unwrap_or_default();
        let Some(child) = self.library.resolve(reference) else {
            debug!(node = %node.id, reference, "subflow not found, leaving unexpanded");
            return None;
        };
        let Some(entry_id) = child.entry_node_id() else {
            debug!(node = %node.id, flow = %child.id, "subflow has no entry node");
            return None;
        };
        let Some(entry) = child.node(entry_id) else {
            debug!(node = %node.id, flow = %child.id, entry_id, "subflow entry node missing");
            return None;
        };
        Some((child, entry))
    }
}

/// Convenience wrapper over [`FlowMerger`].
pub fn merge(
    root: &FlowDefinition,
    library: &FlowLibrary,
    expand: bool,
    limits: MergeLimits,
) -> MergedGraph {
    FlowMerger::builder(root, library)
        .expand(expand)
        .limits(limits)
        .build()
        .merge()
}
