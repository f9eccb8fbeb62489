//! Projects runtime status ids onto the nodes that are actually drawn.
//!
//! Status feeds report ids such as `call::child_call::step` even when the diagram
//! shows only `call` (subflows collapsed) or when `step` was simplified away.
//! Each id is walked up its `::` ancestry until a visible node is found.

use crate::flow::FlowNode;
use crate::graph::ID_SEPARATOR;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

/// One snapshot of the runtime status feed, keyed in the pre-merge namespace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusFeed {
    pub active_node_id: Option<String>,
    /// Node id to highlight-expiry timestamp.
    pub recent_nodes: AHashMap<String, u64>,
    /// Node id to first-visit timestamp.
    pub visited_nodes: AHashMap<String, u64>,
}

/// A status snapshot re-keyed onto visible node ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HighlightState {
    pub active: Option<String>,
    pub recent: AHashMap<String, u64>,
    pub visited: AHashMap<String, u64>,
}

pub struct VisualMapper {
    visible: AHashSet<String>,
}

impl VisualMapper {
    pub fn new(nodes: &[FlowNode]) -> Self {
        Self {
            visible: nodes.iter().map(|n| n.id.clone()).collect(),
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// Longest `::`-prefix of `id` that names a visible node, or an empty string.
    pub fn to_visible_id(&self, id: &str) -> String {
        let mut candidate = id;
        loop {
            if self.visible.contains(candidate) {
                return candidate.to_string();
            }
            match candidate.rsplit_once(ID_SEPARATOR) {
                Some((parent, _)) => candidate = parent,
                None => return String::new(),
            }
        }
    }

    /// Re-keys expiry timestamps. Colliding ids keep the latest expiry.
    pub fn map_recent(&self, recent: &AHashMap<String, u64>) -> AHashMap<String, u64> {
        self.remap(recent, u64::max)
    }

    /// Re-keys first-visit timestamps. Colliding ids keep the earliest visit.
    pub fn map_visited(&self, visited: &AHashMap<String, u64>) -> AHashMap<String, u64> {
        self.remap(visited, u64::min)
    }

    pub fn map_status(&self, feed: &StatusFeed) -> HighlightState {
        let active = feed
            .active_node_id
            .as_deref()
            .map(|id| self.to_visible_id(id))
            .filter(|id| !id.is_empty());

        HighlightState {
            active,
            recent: self.map_recent(&feed.recent_nodes),
            visited: self.map_visited(&feed.visited_nodes),
        }
    }

    fn remap(
        &self,
        source: &AHashMap<String, u64>,
        merge: impl Fn(u64, u64) -> u64,
    ) -> AHashMap<String, u64> {
        let mut out: AHashMap<String, u64> = AHashMap::new();
        for (id, &stamp) in source {
            let visible = self.to_visible_id(id);
            if visible.is_empty() {
                continue;
            }
            match out.entry(visible) {
                Entry::Occupied(mut e) => {
                    let merged = merge(*e.get(), stamp);
                    e.insert(merged);
                }
                Entry::Vacant(e) => {
                    e.insert(stamp);
                }
            }
        }
        out
    }
}
