use serde::Serialize;
use std::ops::Add;

/// Node type marking where execution of a flow begins.
pub const FLOW_START_TYPE: &str = "on_flow_start";
/// Node type marking where execution of a flow ends.
pub const FLOW_END_TYPE: &str = "on_flow_end";
/// Node type of a call-site referencing another flow.
pub const SUBFLOW_TYPE: &str = "subflow";

/// A point in graph coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// One authored workflow graph, including subflow-library members.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDefinition {
    pub id: String,
    pub name: String,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_node: Option<String>,
}

/// A single node of a flow. Ids are unique within their own `FlowDefinition` only.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub label: String,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subflow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A connection between two node handles. Carries either control flow or data.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: String,
    pub target_handle: String,
}

impl FlowNode {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>, x: f64, y: f64) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            node_type: node_type.into(),
            position: Position::new(x, y),
            subflow_id: None,
            color: None,
        }
    }

    /// Builder-style helper for call-site nodes.
    pub fn with_subflow(mut self, subflow_id: impl Into<String>) -> Self {
        self.subflow_id = Some(subflow_id.into());
        self
    }

    pub fn is_subflow(&self) -> bool {
        self.node_type == SUBFLOW_TYPE
    }
}

impl FlowEdge {
    /// Creates a control-flow edge wired `exec-out -> exec-in`.
    pub fn exec(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::with_handles(source, target, "exec-out", "exec-in")
    }

    pub fn with_handles(
        source: impl Into<String>,
        target: impl Into<String>,
        source_handle: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{}->{}", source, target),
            source,
            target,
            source_handle: source_handle.into(),
            target_handle: target_handle.into(),
        }
    }
}

impl FlowDefinition {
    pub fn new(id: impl Into<String>, nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            nodes,
            edges,
            entry_node: None,
        }
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Resolves the node where execution begins: the explicit `entry_node`,
    /// else the first `on_flow_start` node.
    pub fn entry_node_id(&self) -> Option<&str> {
        match self.entry_node.as_deref() {
            Some(id) if !id.is_empty() => Some(id),
            _ => self
                .nodes
                .iter()
                .find(|n| n.node_type == FLOW_START_TYPE)
                .map(|n| n.id.as_str()),
        }
    }
}
