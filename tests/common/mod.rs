#![allow(dead_code)]

use std::collections::BTreeMap;

use rowdag::graph::Graph;
use rowdag::level::LeveledGraph;

pub use rowdag_test_utils::init_tracing;

/// `name -> row` for every node, `None` where no row was assigned.
pub fn rows(leveled: &LeveledGraph) -> BTreeMap<String, Option<u32>> {
    leveled
        .nodes
        .iter()
        .map(|node| (node.name.clone(), node.row.map(|row| row.get())))
        .collect()
}

/// Panics unless every edge with two rowed endpoints points strictly down.
pub fn assert_edges_point_down(graph: &Graph, leveled: &LeveledGraph) {
    for edge in graph.edges() {
        let source = leveled.row_of(&edge.source);
        let target = leveled.row_of(&edge.target);
        if let (Some(s), Some(t)) = (source, target) {
            assert!(
                s > t,
                "edge {} -> {} has rows {} -> {}",
                edge.source,
                edge.target,
                s,
                t
            );
        }
    }
}
