use super::definition::FlowDefinition;
use ahash::AHashMap;

/// The set of flows available for subflow resolution, keyed by flow id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowLibrary {
    flows: AHashMap<String, FlowDefinition>,
}

impl FlowLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flow under its own id, replacing any previous flow with that id.
    pub fn insert(&mut self, flow: FlowDefinition) {
        self.flows.insert(flow.id.clone(), flow);
    }

    pub fn get(&self, id: &str) -> Option<&FlowDefinition> {
        self.flows.get(id)
    }

    /// Looks up the flow a subflow node points at. Bundle-qualified references
    /// (`"bundle:flow"`) resolve through their local flow id only.
    pub fn resolve(&self, reference: &str) -> Option<&FlowDefinition> {
        self.flows.get(local_flow_id(reference))
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowDefinition> {
        self.flows.values()
    }
}

impl FromIterator<FlowDefinition> for FlowLibrary {
    fn from_iter<I: IntoIterator<Item = FlowDefinition>>(iter: I) -> Self {
        let mut library = FlowLibrary::new();
        for flow in iter {
            library.insert(flow);
        }
        library
    }
}

impl From<AHashMap<String, FlowDefinition>> for FlowLibrary {
    fn from(flows: AHashMap<String, FlowDefinition>) -> Self {
        Self { flows }
    }
}

/// Strips an optional `"bundle:"` namespace from a flow reference.
pub fn local_flow_id(reference: &str) -> &str {
    reference
        .rsplit_once(':')
        .map_or(reference, |(_, local)| local)
}
