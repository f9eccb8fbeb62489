use crate::flow::FlowEdge;

pub const EXEC_IN_HANDLE: &str = "exec-in";
pub const EXEC_OUT_HANDLE: &str = "exec-out";

/// Returns `true` if the edge carries control flow rather than a data value.
///
/// Data and control wiring share one edge list; only control-flow edges define
/// traversal order, so every graph algorithm in this crate filters through here.
pub fn is_execution_edge(edge: &FlowEdge) -> bool {
    edge.target_handle == EXEC_IN_HANDLE
        || edge.source_handle == EXEC_OUT_HANDLE
        || edge.source_handle.contains("exec")
        || edge.target_handle.contains("exec")
}
