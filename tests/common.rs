//! Common test utilities for building flow definitions.
use flowscope::prelude::*;

/// Root flow: `start -> call(subflow child) -> end`.
#[allow(dead_code)]
pub fn create_root_flow() -> FlowDefinition {
    FlowDefinition::new(
        "main",
        vec![
            FlowNode::new("start", "on_flow_start", 0.0, 0.0),
            FlowNode::new("call", "subflow", 240.0, 0.0).with_subflow("child"),
            FlowNode::new("end", "on_flow_end", 480.0, 0.0),
        ],
        vec![FlowEdge::exec("start", "call"), FlowEdge::exec("call", "end")],
    )
}

/// Child flow: `c_entry -> c_mid(literal_string) -> c_exit`.
#[allow(dead_code)]
pub fn create_child_flow() -> FlowDefinition {
    FlowDefinition::new(
        "child",
        vec![
            FlowNode::new("c_entry", "on_flow_start", 10.0, 20.0),
            FlowNode::new("c_mid", "literal_string", 210.0, 20.0),
            FlowNode::new("c_exit", "on_flow_end", 410.0, 20.0),
        ],
        vec![
            FlowEdge::exec("c_entry", "c_mid"),
            FlowEdge::exec("c_mid", "c_exit"),
        ],
    )
}

#[allow(dead_code)]
pub fn create_library() -> FlowLibrary {
    vec![create_child_flow()].into_iter().collect()
}

/// A flow whose only subflow node calls the flow itself.
#[allow(dead_code)]
pub fn create_recursive_flow() -> FlowDefinition {
    FlowDefinition::new(
        "loop",
        vec![
            FlowNode::new("start", "on_flow_start", 0.0, 0.0),
            FlowNode::new("again", "subflow", 200.0, 0.0).with_subflow("bundle:loop"),
            FlowNode::new("done", "on_flow_end", 400.0, 0.0),
        ],
        vec![FlowEdge::exec("start", "again"), FlowEdge::exec("again", "done")],
    )
}

/// `A(kept) -> X(plumbing) -> Y(plumbing) -> B(kept)`.
#[allow(dead_code)]
pub fn create_plumbing_chain() -> MergedGraph {
    MergedGraph {
        nodes: vec![
            FlowNode::new("A", "http_request", 0.0, 0.0),
            FlowNode::new("X", "literal_string", 100.0, 0.0),
            FlowNode::new("Y", "json_parse", 200.0, 0.0),
            FlowNode::new("B", "send_email", 300.0, 0.0),
        ],
        edges: vec![
            FlowEdge::exec("A", "X"),
            FlowEdge::exec("X", "Y"),
            FlowEdge::exec("Y", "B"),
        ],
    }
}

/// Sorted `(source, target)` pairs, for order-independent edge assertions.
#[allow(dead_code)]
pub fn edge_pairs(graph: &MergedGraph) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = graph
        .edges
        .iter()
        .map(|e| (e.source.clone(), e.target.clone()))
        .collect();
    pairs.sort();
    pairs
}

#[allow(dead_code)]
pub fn pair(source: &str, target: &str) -> (String, String) {
    (source.to_string(), target.to_string())
}
