// src/level/leveler.rs

use tracing::{debug, info, warn};

use crate::errors::{Result, RowdagError};
use crate::graph::Graph;
use crate::level::leveled::{LevelStats, LeveledGraph};
use crate::level::repair::{default_budget, repair_rows};
use crate::level::seed::seed_rows;
use crate::types::{RepairStrategy, UnreachablePolicy};

/// Knobs for a [`Leveler`]. `Default` matches the config file defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelOptions {
    pub strategy: RepairStrategy,
    /// Maximum number of repair corrections; `None` means nodes × edges.
    pub correction_budget: Option<usize>,
    pub unreachable: UnreachablePolicy,
}

/// Assigns rows to the nodes of a [`Graph`].
///
/// Stateless apart from its options; the same leveler can be reused for
/// any number of graphs and never touches the input.
#[derive(Debug, Clone, Default)]
pub struct Leveler {
    options: LevelOptions,
}

impl Leveler {
    pub fn new(options: LevelOptions) -> Self {
        Self { options }
    }

    /// Level `graph` starting from the node named `root` (row 1).
    ///
    /// Errors:
    /// - [`RowdagError::RootNotFound`] if `root` is not a node of `graph`
    /// - [`RowdagError::CyclicGraph`] if the repair pass runs out of budget,
    ///   which happens whenever the rowed nodes contain a cycle
    /// - [`RowdagError::UnreachableNodes`] if some node got no row and the
    ///   policy is [`UnreachablePolicy::Deny`]
    pub fn level(&self, graph: &Graph, root: &str) -> Result<LeveledGraph> {
        let root_idx = graph
            .node_index(root)
            .ok_or_else(|| RowdagError::RootNotFound(root.to_string()))?;

        let mut rows = seed_rows(graph, root_idx);
        let seeded = rows.iter().filter(|row| row.is_some()).count();
        debug!(root = %root, seeded, "seed pass complete");

        let budget = self
            .options
            .correction_budget
            .unwrap_or_else(|| default_budget(graph));
        let corrections = repair_rows(graph, &mut rows, self.options.strategy, budget)?;
        debug!(
            corrections,
            budget,
            strategy = ?self.options.strategy,
            "repair pass complete"
        );

        let leveled = LeveledGraph::from_rows(graph, rows, LevelStats { seeded, corrections });

        if !leveled.unreachable.is_empty() {
            match self.options.unreachable {
                UnreachablePolicy::Report => {
                    warn!(
                        count = leveled.unreachable.len(),
                        nodes = ?leveled.unreachable,
                        "some nodes cannot reach the root and have no row"
                    );
                }
                UnreachablePolicy::Deny => {
                    return Err(RowdagError::UnreachableNodes(leveled.unreachable));
                }
            }
        }

        info!(
            root = %root,
            nodes = graph.node_count(),
            depth = leveled.depth().map(|row| row.get()).unwrap_or(0),
            "graph leveled"
        );

        Ok(leveled)
    }
}

/// Level `graph` from `root` with default options.
pub fn level(graph: &Graph, root: &str) -> Result<LeveledGraph> {
    Leveler::default().level(graph, root)
}
