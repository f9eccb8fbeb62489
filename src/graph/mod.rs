use crate::flow::{FlowDefinition, FlowEdge, FlowNode};
use serde::Serialize;

pub mod edge_filter;
pub mod merger;
pub mod simplifier;

pub use edge_filter::is_execution_edge;
pub use merger::{FlowMerger, FlowMergerBuilder, MergeLimits, merge};
pub use simplifier::{KeepPolicy, SimplifyOptions, is_plumbing_type, simplify};

/// Separator joining a subflow call-site id and the ids of the nodes it inlines.
pub const ID_SEPARATOR: &str = "::";

/// A flat, renderable graph derived from one or more flow definitions.
///
/// Produced by the merger (and, in contracted form, by the simplifier). Node ids
/// are globally unique; edges only reference nodes present in `nodes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergedGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl MergedGraph {
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl From<&FlowDefinition> for MergedGraph {
    fn from(flow: &FlowDefinition) -> Self {
        Self {
            nodes: flow.nodes.clone(),
            edges: flow.edges.clone(),
        }
    }
}

/// Joins a prefix and a local id with [`ID_SEPARATOR`]. An empty prefix yields the id unchanged.
pub fn prefixed_id(prefix: &str, id: &str) -> String {
    if prefix.is_empty() {
        id.to_string()
    } else {
        format!("{}{}{}", prefix, ID_SEPARATOR, id)
    }
}
