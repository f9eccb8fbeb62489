//! Tests for converting custom workflow models through `IntoFlow`.
mod common;
use common::*;
use flowscope::error::FlowConversionError;
use flowscope::flow::{FlowDefinition, FlowEdge, FlowNode, IntoFlow};
use flowscope::pipeline::{DiagramOptions, build_diagram};

struct Step {
    name: &'static str,
    kind: &'static str,
    calls: Option<&'static str>,
}

struct Workflow {
    title: &'static str,
    steps: Vec<Step>,
}

impl IntoFlow for Workflow {
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
        if self.steps.is_empty() {
            return Err(FlowConversionError::Validation(format!(
                "workflow '{}' has no steps",
                self.title
            )));
        }

        let edges = self
            .steps
            .windows(2)
            .map(|pair| FlowEdge::exec(pair[0].name, pair[1].name))
            .collect();
        let nodes = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let node = FlowNode::new(step.name, step.kind, i as f64 * 240.0, 0.0);
                match step.calls {
                    Some(flow) => node.with_subflow(flow),
                    None => node,
                }
            })
            .collect();
        Ok(FlowDefinition::new(self.title, nodes, edges))
    }
}

fn step(name: &'static str, kind: &'static str, calls: Option<&'static str>) -> Step {
    Step { name, kind, calls }
}

fn create_workflow() -> Workflow {
    Workflow {
        title: "checkout",
        steps: vec![
            step("begin", "on_flow_start", None),
            step("call", "subflow", Some("child")),
            step("finish", "on_flow_end", None),
        ],
    }
}

#[test]
fn test_converted_flow_builds_a_diagram() {
    let root = create_workflow().into_flow().expect("Conversion should succeed");
    assert_eq!(root.entry_node_id(), Some("begin"));

    let diagram = build_diagram(&root, &create_library(), &DiagramOptions::default(), None);

    assert!(diagram.graph.node("call::c_entry").is_some());
    assert!(
        edge_pairs(&diagram.graph).contains(&pair("call", "call::c_entry")),
        "subflow call should link into the inlined child"
    );
    assert_eq!(diagram.graph.nodes.len(), 6);
}

#[test]
fn test_conversion_reports_validation_error() {
    let empty = Workflow {
        title: "empty",
        steps: Vec::new(),
    };
    let err = empty.into_flow().unwrap_err();
    assert!(matches!(err, FlowConversionError::Validation(_)));
    assert!(err.to_string().contains("'empty' has no steps"));
}
