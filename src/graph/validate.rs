// src/graph/validate.rs

use std::collections::HashMap;

use tracing::debug;

use crate::errors::{Result, RowdagError};
use crate::graph::index::EdgeIndex;
use crate::graph::model::{Edge, Graph, Node, NodeName, RawGraph};

/// Attribute written by the leveler; never passed through from input.
pub const ROW_ATTR: &str = "row";

impl TryFrom<RawGraph> for Graph {
    type Error = RowdagError;

    fn try_from(raw: RawGraph) -> std::result::Result<Self, Self::Error> {
        let RawGraph { nodes, edges } = raw;

        let nodes = strip_stale_rows(nodes);
        let lookup = build_lookup(&nodes)?;

        let mut endpoints = Vec::with_capacity(edges.len());
        for edge in edges.iter() {
            let source = resolve(&lookup, &edge.source, edge)?;
            let target = resolve(&lookup, &edge.target, edge)?;
            endpoints.push((source, target));
        }

        let index = EdgeIndex::build(nodes.len(), endpoints);

        debug!(nodes = nodes.len(), edges = edges.len(), "graph validated");

        Ok(Graph::new_unchecked(nodes, edges, lookup, index))
    }
}

/// Rows from a previous leveling are recomputed, never trusted.
fn strip_stale_rows(mut nodes: Vec<Node>) -> Vec<Node> {
    for node in nodes.iter_mut() {
        if node.attrs.remove(ROW_ATTR).is_some() {
            debug!(node = %node.name, "dropping stale row attribute from input");
        }
    }
    nodes
}

fn build_lookup(nodes: &[Node]) -> Result<HashMap<NodeName, usize>> {
    let mut lookup = HashMap::with_capacity(nodes.len());
    for (idx, node) in nodes.iter().enumerate() {
        if lookup.insert(node.name.clone(), idx).is_some() {
            return Err(RowdagError::DuplicateNode(node.name.clone()));
        }
    }
    Ok(lookup)
}

fn resolve(lookup: &HashMap<NodeName, usize>, name: &str, edge: &Edge) -> Result<usize> {
    lookup
        .get(name)
        .copied()
        .ok_or_else(|| RowdagError::DanglingEdge {
            from: edge.source.clone(),
            to: edge.target.clone(),
            missing: name.to_string(),
        })
}
