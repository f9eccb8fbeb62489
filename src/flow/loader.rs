//! Defensive conversion of loosely-shaped JSON into flow definitions.
//!
//! Flow files come from an editor that has changed its field naming over time,
//! so every field is looked up under both its camelCase and snake_case name and
//! coerced to the expected type. Anything missing or malformed falls back to an
//! empty string, zero or an empty list.

use super::definition::{FlowDefinition, FlowEdge, FlowNode, Position};
use super::library::FlowLibrary;
use crate::error::FlowLoadError;
use serde_json::{Map, Value};
use std::fs;

impl FlowDefinition {
    /// Parses a single flow from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, FlowLoadError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Loads a single flow from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, FlowLoadError> {
        Self::from_json_str(&read_file(path)?)
    }

    /// Coerces an arbitrary JSON value into a flow. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let nodes = array_field(obj, &["nodes"])
            .iter()
            .filter_map(Value::as_object)
            .map(node_from_object)
            .collect();
        let edges = array_field(obj, &["edges"])
            .iter()
            .filter_map(Value::as_object)
            .map(edge_from_object)
            .collect();
        let entry_node = Some(string_field(obj, &["entryNode", "entry_node"]))
            .filter(|id| !id.is_empty());

        Self {
            id: string_field(obj, &["id"]),
            name: string_field(obj, &["name"]),
            nodes,
            edges,
            entry_node,
        }
    }
}

impl FlowLibrary {
    /// Parses a flow library from JSON text.
    ///
    /// Accepted shapes: an array of flows, an object `{"flows": [...]}`, or an
    /// object mapping flow id to flow (the key fills in a missing `id`).
    pub fn from_json_str(json: &str) -> Result<Self, FlowLoadError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Loads a flow library from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, FlowLoadError> {
        Self::from_json_str(&read_file(path)?)
    }

    /// Coerces an arbitrary JSON value into a library. Never fails.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => flows_from_array(items),
            Value::Object(obj) => {
                if let Some(Value::Array(items)) = obj.get("flows") {
                    return flows_from_array(items);
                }
                obj.iter()
                    .filter(|(_, v)| v.is_object())
                    .map(|(key, v)| {
                        let mut flow = FlowDefinition::from_value(v);
                        if flow.id.is_empty() {
                            flow.id = key.clone();
                        }
                        flow
                    })
                    .collect()
            }
            _ => Self::default(),
        }
    }
}

fn flows_from_array(items: &[Value]) -> FlowLibrary {
    items
        .iter()
        .filter(|v| v.is_object())
        .map(FlowDefinition::from_value)
        .collect()
}

fn read_file(path: &str) -> Result<String, FlowLoadError> {
    fs::read_to_string(path).map_err(|e| FlowLoadError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn node_from_object(obj: &Map<String, Value>) -> FlowNode {
    // Editors that follow the React Flow layout nest node attributes under `data`.
    let data = obj.get("data").and_then(Value::as_object);
    let lookup = |keys: &[&str]| {
        let direct = string_field(obj, keys);
        match data {
            Some(data) if direct.is_empty() => string_field(data, keys),
            _ => direct,
        }
    };

    let position = obj
        .get("position")
        .and_then(Value::as_object)
        .map(|p| Position::new(number_field(p, &["x"]), number_field(p, &["y"])))
        .unwrap_or_default();

    FlowNode {
        id: string_field(obj, &["id"]),
        node_type: lookup(&["type", "nodeType", "node_type"]),
        label: lookup(&["label"]),
        position,
        subflow_id: Some(lookup(&["subflowId", "subflow_id"])).filter(|s| !s.is_empty()),
        color: Some(lookup(&["color"])).filter(|s| !s.is_empty()),
    }
}

fn edge_from_object(obj: &Map<String, Value>) -> FlowEdge {
    FlowEdge {
        id: string_field(obj, &["id"]),
        source: string_field(obj, &["source"]),
        target: string_field(obj, &["target"]),
        source_handle: string_field(obj, &["sourceHandle", "source_handle"]),
        target_handle: string_field(obj, &["targetHandle", "target_handle"]),
    }
}

/// Returns the first present key coerced to a string, or an empty string.
fn string_field(obj: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|k| match obj.get(*k)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Returns the first present key coerced to a finite number, or zero.
fn number_field(obj: &Map<String, Value>, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|k| match obj.get(*k)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn array_field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_string_numbers_and_missing_fields() {
        let flow = FlowDefinition::from_value(&json!({
            "id": "main",
            "nodes": [
                { "id": "a", "type": "on_flow_start", "position": { "x": "12.5", "y": null } },
                { "id": 7 },
                "not a node"
            ],
            "edges": [{ "source": "a", "target": "7", "sourceHandle": null }]
        }));

        assert_eq!(flow.nodes.len(), 2);
        assert_eq!(flow.nodes[0].position, Position::new(12.5, 0.0));
        assert_eq!(flow.nodes[1].id, "7");
        assert_eq!(flow.nodes[1].node_type, "");
        assert_eq!(flow.edges[0].source_handle, "");
        assert_eq!(flow.entry_node, None);
    }

    #[test]
    fn reads_react_flow_data_block() {
        let flow = FlowDefinition::from_value(&json!({
            "nodes": [{
                "id": "call",
                "type": "subflow",
                "data": { "label": "Call child", "subflowId": "bundle:child" }
            }]
        }));
        assert_eq!(flow.nodes[0].label, "Call child");
        assert_eq!(flow.nodes[0].subflow_id.as_deref(), Some("bundle:child"));
    }

    #[test]
    fn non_object_root_yields_empty_flow() {
        assert_eq!(FlowDefinition::from_value(&json!(42)), FlowDefinition::default());
    }

    #[test]
    fn library_keyed_object_fills_missing_ids() {
        let library = FlowLibrary::from_value(&json!({
            "child": { "nodes": [] },
            "other": { "id": "explicit", "nodes": [] }
        }));
        assert!(library.get("child").is_some());
        assert!(library.get("explicit").is_some());
        assert!(library.get("other").is_none());
    }
}
