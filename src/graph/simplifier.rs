use super::MergedGraph;
use super::edge_filter::{EXEC_IN_HANDLE, EXEC_OUT_HANDLE, is_execution_edge};
use crate::flow::{FLOW_END_TYPE, FLOW_START_TYPE, FlowEdge, FlowNode, SUBFLOW_TYPE};
use ahash::{AHashMap, AHashSet};
use serde::Deserialize;
use tracing::debug;

/// Node types that only shape data and carry no decision-relevant structure.
const PLUMBING_TYPES: &[&str] = &[
    // string building
    "string_concat",
    "concat",
    "string_join",
    "join",
    // casts
    "cast",
    "to_string",
    "to_number",
    "to_boolean",
    "to_integer",
    // (de)serialization
    "json_parse",
    "json_stringify",
    "parse_json",
    "stringify_json",
    // object decomposition
    "break_object",
    "object_break",
    "destructure",
    "split_object",
    // accessors
    "get_property",
    "set_property",
    "get_variable",
    "set_variable",
    // schemas
    "schema",
    "define_schema",
    "json_schema",
];

/// Families of plumbing types identified by prefix (`literal_string`, `cast_number`, ...).
const PLUMBING_PREFIXES: &[&str] = &["literal_", "cast_"];

/// Returns `true` for node types classified as plumbing.
pub fn is_plumbing_type(node_type: &str) -> bool {
    PLUMBING_TYPES.contains(&node_type)
        || PLUMBING_PREFIXES.iter().any(|p| node_type.starts_with(p))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimplifyOptions {
    pub max_edges: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self { max_edges: 2400 }
    }
}

/// The standard retention policy: keep the active node, flow boundaries,
/// subflow call-sites and every node that is not plumbing.
pub struct KeepPolicy<'a> {
    node_types: AHashMap<&'a str, &'a str>,
    active_id: Option<&'a str>,
}

impl<'a> KeepPolicy<'a> {
    pub fn new(nodes: &'a [FlowNode], active_id: Option<&'a str>) -> Self {
        Self {
            node_types: nodes
                .iter()
                .map(|n| (n.id.as_str(), n.node_type.as_str()))
                .collect(),
            active_id: active_id.filter(|id| !id.is_empty()),
        }
    }

    pub fn keeps(&self, id: &str) -> bool {
        if self.active_id == Some(id) {
            return true;
        }
        match self.node_types.get(id) {
            Some(&node_type) => {
                node_type == FLOW_START_TYPE
                    || node_type == FLOW_END_TYPE
                    || node_type == SUBFLOW_TYPE
                    || !is_plumbing_type(node_type)
            }
            None => false,
        }
    }
}

/// Removes nodes rejected by `keep` while preserving reachability between the kept ones.
///
/// For every kept node `A`, execution edges are followed through chains of dropped
/// nodes; each kept node `B` reached that way yields one contracted edge `A -> B`.
/// A direct `A -> B` edge is carried over with its original id and handles.
pub fn simplify(
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    keep: impl Fn(&str) -> bool,
    max_edges: usize,
) -> MergedGraph {
    let kept_nodes: Vec<FlowNode> = nodes
        .iter()
        .filter(|n| keep(n.id.as_str()))
        .cloned()
        .collect();
    let kept_ids: AHashSet<&str> = kept_nodes.iter().map(|n| n.id.as_str()).collect();

    let mut outgoing: AHashMap<&str, Vec<&FlowEdge>> = AHashMap::new();
    for edge in edges.iter().filter(|e| is_execution_edge(e)) {
        outgoing.entry(edge.source.as_str()).or_default().push(edge);
    }

    let mut contracted: Vec<FlowEdge> = Vec::new();
    // "A->B" key -> (index into `contracted`, whether that edge is an original one)
    let mut emitted: AHashMap<String, (usize, bool)> = AHashMap::new();

    'sources: for source in &kept_nodes {
        let mut visited: AHashSet<&str> = AHashSet::new();
        // (node, edge that reached it directly from `source`, if any)
        let mut stack: Vec<(&str, Option<&FlowEdge>)> = outgoing
            .get(source.id.as_str())
            .map(|out| {
                out.iter()
                    .rev()
                    .map(|e| (e.target.as_str(), Some(*e)))
                    .collect()
            })
            .unwrap_or_default();

        while let Some((current, direct)) = stack.pop() {
            if kept_ids.contains(current) {
                let key = format!("{}->{}", source.id, current);
                match emitted.get_mut(&key) {
                    // A direct edge wins over a contracted one found earlier.
                    Some((index, is_direct)) => {
                        if let (Some(edge), false) = (direct, *is_direct) {
                            contracted[*index] = edge.clone();
                            *is_direct = true;
                        }
                    }
                    None => {
                        if contracted.len() >= max_edges {
                            debug!(max_edges, "contracted edge cap reached");
                            break 'sources;
                        }
                        emitted.insert(key.clone(), (contracted.len(), direct.is_some()));
                        contracted.push(match direct {
                            Some(edge) => edge.clone(),
                            None => FlowEdge {
                                id: key,
                                source: source.id.clone(),
                                target: current.to_string(),
                                source_handle: EXEC_OUT_HANDLE.to_string(),
                                target_handle: EXEC_IN_HANDLE.to_string(),
                            },
                        });
                    }
                }
                continue;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(out) = outgoing.get(current) {
                stack.extend(out.iter().rev().map(|e| (e.target.as_str(), None)));
            }
        }
    }

    debug!(
        nodes_in = nodes.len(),
        nodes_out = kept_nodes.len(),
        edges_out = contracted.len(),
        "simplified graph"
    );
    MergedGraph {
        nodes: kept_nodes,
        edges: contracted,
    }
}
