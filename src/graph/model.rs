// src/graph/model.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::graph::index::EdgeIndex;

pub type NodeName = String;

/// A named node plus whatever attributes the caller attached to it.
///
/// ```json
/// { "name": "design", "label": "Design", "weight": 3 }
/// ```
///
/// Everything except `name` lands in `attrs` and is handed back untouched
/// after leveling.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Node {
    pub name: NodeName,

    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl Node {
    pub fn new(name: impl Into<NodeName>) -> Self {
        Self {
            name: name.into(),
            attrs: Map::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// Directed edge: `source` sits one or more rows above `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeName,
    pub target: NodeName,
}

impl Edge {
    pub fn new(source: impl Into<NodeName>, target: impl Into<NodeName>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Graph exactly as deserialized from input; nothing has been checked yet.
///
/// Use `Graph::try_from(raw)` to validate it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Validated graph.
///
/// Invariants:
/// - node names are unique
/// - every edge endpoint names a node in `nodes`
/// - no node carries a `row` attribute (stale rows are dropped on validation)
///
/// Node and edge order are kept exactly as supplied; the seed pass depends
/// on edge order.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    lookup: HashMap<NodeName, usize>,
    index: EdgeIndex,
}

impl Graph {
    /// Build a graph whose invariants have already been checked by
    /// `validate`.
    pub(crate) fn new_unchecked(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        lookup: HashMap<NodeName, usize>,
        index: EdgeIndex,
    ) -> Self {
        Self {
            nodes,
            edges,
            lookup,
            index,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Dense index of the node called `name`.
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub fn index(&self) -> &EdgeIndex {
        &self.index
    }
}
