// src/level/leveled.rs

use serde_json::{json, Map, Value};

use crate::graph::validate::ROW_ATTR;
use crate::graph::{Edge, Graph, NodeName};
use crate::level::row::Row;
use crate::types::RowFormat;

/// A node after leveling: the input node plus its row, if it got one.
#[derive(Debug, Clone, PartialEq)]
pub struct LeveledNode {
    pub name: NodeName,
    /// `None` for nodes that cannot reach the root.
    pub row: Option<Row>,
    /// Caller attributes, untouched.
    pub attrs: Map<String, Value>,
}

impl LeveledNode {
    /// Serialize as `{ "name": ..., <attrs>..., "row": ... }`.
    ///
    /// `row` is left out entirely when the node has none.
    pub fn to_value(&self, format: RowFormat) -> Value {
        let mut obj = self.attrs.clone();
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(row) = self.row {
            let encoded = match format {
                RowFormat::Integer => Value::from(row.get()),
                RowFormat::Label => Value::String(row.label()),
            };
            obj.insert(ROW_ATTR.to_string(), encoded);
        }
        Value::Object(obj)
    }
}

/// Counters from one leveling call, mostly for logs and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Nodes that received a row in the seed pass.
    pub seeded: usize,
    /// Row increases made by the repair pass.
    pub corrections: usize,
}

/// Result of [`Leveler::level`](crate::level::Leveler::level).
///
/// Nodes and edges come back in input order. Nodes without a row are also
/// listed by name in `unreachable`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeveledGraph {
    pub nodes: Vec<LeveledNode>,
    pub edges: Vec<Edge>,
    pub unreachable: Vec<NodeName>,
    pub stats: LevelStats,
}

impl LeveledGraph {
    pub(crate) fn from_rows(graph: &Graph, rows: Vec<Option<Row>>, stats: LevelStats) -> Self {
        let mut unreachable = Vec::new();
        let nodes = graph
            .nodes()
            .iter()
            .zip(rows)
            .map(|(node, row)| {
                if row.is_none() {
                    unreachable.push(node.name.clone());
                }
                LeveledNode {
                    name: node.name.clone(),
                    row,
                    attrs: node.attrs.clone(),
                }
            })
            .collect();

        Self {
            nodes,
            edges: graph.edges().to_vec(),
            unreachable,
            stats,
        }
    }

    pub fn row_of(&self, name: &str) -> Option<Row> {
        self.nodes
            .iter()
            .find(|node| node.name == name)
            .and_then(|node| node.row)
    }

    /// Highest row in the result, i.e. the number of rows a renderer needs.
    pub fn depth(&self) -> Option<Row> {
        self.nodes.iter().filter_map(|node| node.row).max()
    }

    /// `{ "nodes": [...], "edges": [...] }`, plus an `"unreachable"` list
    /// when some nodes got no row.
    ///
    /// The result has the same shape as the input graph, so it can be fed
    /// back in; the rows it carries are dropped on load.
    pub fn to_value(&self, format: RowFormat) -> Value {
        let nodes: Vec<Value> = self.nodes.iter().map(|n| n.to_value(format)).collect();
        let mut value = json!({ "nodes": nodes, "edges": self.edges });
        if !self.unreachable.is_empty() {
            value["unreachable"] = json!(self.unreachable);
        }
        value
    }
}
