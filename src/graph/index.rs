// src/graph/index.rs

//! Edge adjacency resolved to node indices.

/// Edges resolved to node indices, grouped by target.
///
/// Built once per [`Graph`](crate::graph::Graph) so the seed walk never
/// re-filters the edge list.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    /// `(source, target)` node indices for each edge, in edge order.
    endpoints: Vec<(usize, usize)>,
    /// For each node: indices of edges whose target is that node, in edge
    /// order.
    incoming: Vec<Vec<usize>>,
}

impl EdgeIndex {
    /// `endpoints` must only reference nodes `< node_count`.
    pub(crate) fn build(node_count: usize, endpoints: Vec<(usize, usize)>) -> Self {
        let mut incoming = vec![Vec::new(); node_count];
        for (edge, &(_, target)) in endpoints.iter().enumerate() {
            incoming[target].push(edge);
        }
        Self {
            endpoints,
            incoming,
        }
    }

    /// `(source, target)` of edge `edge`.
    pub fn endpoints(&self, edge: usize) -> (usize, usize) {
        self.endpoints[edge]
    }

    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Edges pointing at `node`, in the caller's edge order. Duplicates are
    /// kept.
    pub fn incoming(&self, node: usize) -> &[usize] {
        self.incoming
            .get(node)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over all `(source, target)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.endpoints.iter().copied()
    }
}
