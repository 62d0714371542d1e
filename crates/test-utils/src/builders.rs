#![allow(dead_code)]

use serde_json::Value;
use rowdag::config::{ConfigFile, LevelSection, OutputSection, RawConfigFile};
use rowdag::graph::{Edge, Graph, Node, RawGraph};
use rowdag::types::{RepairStrategy, RowFormat, UnreachablePolicy};

/// Builder for `Graph` to simplify test setup.
///
/// Nodes and edges keep the order they were added in.
pub struct GraphBuilder {
    graph: RawGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: RawGraph::default(),
        }
    }

    pub fn node(mut self, name: &str) -> Self {
        self.graph.nodes.push(Node::new(name));
        self
    }

    pub fn nodes(mut self, names: &[&str]) -> Self {
        for name in names {
            self.graph.nodes.push(Node::new(*name));
        }
        self
    }

    pub fn node_with(mut self, name: &str, attrs: &[(&str, Value)]) -> Self {
        let mut node = Node::new(name);
        for (key, value) in attrs {
            node = node.with_attr(*key, value.clone());
        }
        self.graph.nodes.push(node);
        self
    }

    /// `source` must end up on a higher row than `target`.
    pub fn edge(mut self, source: &str, target: &str) -> Self {
        self.graph.edges.push(Edge::new(source, target));
        self
    }

    pub fn edges(mut self, edges: &[(&str, &str)]) -> Self {
        for (source, target) in edges {
            self.graph.edges.push(Edge::new(*source, *target));
        }
        self
    }

    pub fn raw(self) -> RawGraph {
        self.graph
    }

    pub fn build(self) -> Graph {
        Graph::try_from(self.graph).expect("Failed to build valid graph from builder")
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ConfigFile`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                level: LevelSection::default(),
                output: OutputSection::default(),
            },
        }
    }

    pub fn root(mut self, root: &str) -> Self {
        self.config.level.root = Some(root.to_string());
        self
    }

    pub fn strategy(mut self, strategy: RepairStrategy) -> Self {
        self.config.level.strategy = strategy;
        self
    }

    pub fn unreachable(mut self, policy: UnreachablePolicy) -> Self {
        self.config.level.unreachable = policy;
        self
    }

    pub fn correction_budget(mut self, budget: usize) -> Self {
        self.config.level.correction_budget = Some(budget);
        self
    }

    pub fn row_format(mut self, format: RowFormat) -> Self {
        self.config.output.row_format = format;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
