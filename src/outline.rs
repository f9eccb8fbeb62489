use crate::graph::MergedGraph;
use crate::layout::ContentBounds;
use itertools::Itertools;

/// Formats a graph into a deterministic, human-readable listing for debugging.
///
/// Nodes are sorted by id and shown with their type and position; edges are
/// sorted by `(source, target)`.
pub fn format_graph(graph: &MergedGraph, title: &str) -> String {
    let mut output = format!("======== FLOW GRAPH: {} ========\n", title);

    output.push_str(&format!("\n--- NODES ({}) ---\n", graph.nodes.len()));
    for node in graph.nodes.iter().sorted_by(|a, b| a.id.cmp(&b.id)) {
        let kind = if node.node_type.is_empty() {
            "?"
        } else {
            node.node_type.as_str()
        };
        output.push_str(&format!(
            "{:<40} {:<20} @ ({}, {})\n",
            node.id,
            kind,
            format_coord(node.position.x),
            format_coord(node.position.y)
        ));
    }

    output.push_str(&format!("\n--- EDGES ({}) ---\n", graph.edges.len()));
    for edge in graph
        .edges
        .iter()
        .sorted_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)))
    {
        output.push_str(&format!("{} -> {}\n", edge.source, edge.target));
    }

    output.push_str("\n================ END OF GRAPH ================\n");
    output
}

/// One-line summary of content bounds.
pub fn format_bounds(bounds: &ContentBounds) -> String {
    format!(
        "bounds: x={} y={} w={} h={}",
        format_coord(bounds.x),
        format_coord(bounds.y),
        format_coord(bounds.w),
        format_coord(bounds.h)
    )
}

/// Whole numbers print without a fractional part.
fn format_coord(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}
