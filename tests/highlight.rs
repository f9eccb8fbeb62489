//! Tests for projecting runtime status ids onto visible nodes.
use ahash::AHashMap;
use flowscope::prelude::*;

fn mapper(ids: &[&str]) -> VisualMapper {
    let nodes: Vec<FlowNode> = ids.iter().map(|id| FlowNode::new(*id, "x", 0.0, 0.0)).collect();
    VisualMapper::new(&nodes)
}

fn stamps(entries: &[(&str, u64)]) -> AHashMap<String, u64> {
    entries
        .iter()
        .map(|(id, ts)| (id.to_string(), *ts))
        .collect()
}

#[test]
fn test_to_visible_id_longest_prefix() {
    let vm = mapper(&["A", "A::B"]);
    assert_eq!(vm.to_visible_id("A::B::C::D"), "A::B");
    assert_eq!(vm.to_visible_id("A::X"), "A");
    assert_eq!(vm.to_visible_id("A::B"), "A::B");
    assert_eq!(vm.to_visible_id("Z"), "");
    assert_eq!(vm.to_visible_id(""), "");
}

#[test]
fn test_recent_keeps_latest_expiry() {
    let vm = mapper(&["call"]);
    let recent = vm.map_recent(&stamps(&[
        ("call::a", 100),
        ("call::b", 300),
        ("call", 200),
        ("elsewhere", 999),
    ]));
    assert_eq!(recent.len(), 1);
    assert_eq!(recent.get("call"), Some(&300));
}

#[test]
fn test_visited_keeps_earliest_visit() {
    let vm = mapper(&["call", "end"]);
    let visited = vm.map_visited(&stamps(&[
        ("call::a", 100),
        ("call::b", 30),
        ("end", 500),
    ]));
    assert_eq!(visited.get("call"), Some(&30));
    assert_eq!(visited.get("end"), Some(&500));
}

#[test]
fn test_map_status_snapshot() {
    let vm = mapper(&["start", "call"]);
    let feed = StatusFeed {
        active_node_id: Some("call::inner::step".to_string()),
        recent_nodes: stamps(&[("start", 10)]),
        visited_nodes: stamps(&[("call::inner", 5), ("gone", 1)]),
    };

    let state = vm.map_status(&feed);
    assert_eq!(state.active.as_deref(), Some("call"));
    assert_eq!(state.recent.get("start"), Some(&10));
    assert_eq!(state.visited.len(), 1);
    assert_eq!(state.visited.get("call"), Some(&5));

    let hidden = StatusFeed {
        active_node_id: Some("gone".to_string()),
        ..StatusFeed::default()
    };
    assert_eq!(vm.map_status(&hidden).active, None);
}

#[test]
fn test_status_feed_from_json() {
    let feed: StatusFeed = serde_json::from_str(
        r#"{ "activeNodeId": "call::x", "recentNodes": { "call::x": 42 } }"#,
    )
    .unwrap();
    assert_eq!(feed.active_node_id.as_deref(), Some("call::x"));
    assert_eq!(feed.recent_nodes.get("call::x"), Some(&42));
    assert!(feed.visited_nodes.is_empty());
}
