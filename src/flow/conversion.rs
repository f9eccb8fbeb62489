use super::definition::FlowDefinition;
use crate::error::FlowConversionError;

/// A trait for custom data models that can be converted into a `FlowDefinition`.
///
/// This is the extension point for editors whose on-disk format differs from the
/// JSON shape accepted by [`FlowDefinition::from_json_str`]. Implement it on your
/// own structs to hand their graphs to the merger.
///
/// # Example
///
/// ```rust,no_run
/// use flowscope::error::FlowConversionError;
/// use flowscope::flow::{FlowDefinition, FlowEdge, FlowNode, IntoFlow};
///
/// struct MyStep { name: String, kind: String, next: Option<String> }
/// struct MyWorkflow { title: String, steps: Vec<MyStep> }
///
/// impl IntoFlow for MyWorkflow {
///     fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
///         let mut nodes = Vec::new();
///         let mut edges = Vec::new();
///         for (i, step) in self.steps.into_iter().enumerate() {
///             if let Some(next) = &step.next {
///                 edges.push(FlowEdge::exec(step.name.clone(), next.clone()));
///             }
///             nodes.push(FlowNode::new(step.name, step.kind, i as f64 * 220.0, 0.0));
///         }
///         Ok(FlowDefinition::new(self.title, nodes, edges))
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a flow definition.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}
