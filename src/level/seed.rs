// src/level/seed.rs

//! Seed pass: first-visit-wins depth-first walk from the root.

use tracing::trace;

use crate::graph::Graph;
use crate::level::row::Row;

/// Assign initial rows by walking edges backwards (target to source) from
/// `root`.
///
/// A node keeps the row of the first path that reaches it; sources of a
/// node are explored in the caller's edge order, each subtree fully before
/// the next. The result is not guaranteed to satisfy the row ordering when
/// paths of different length meet; the repair pass fixes that.
///
/// Uses an explicit stack. Sources are pushed in reverse so that they pop
/// in edge order, and the "already visited" check happens on pop, which
/// gives the same visiting order as the recursive formulation.
pub fn seed_rows(graph: &Graph, root: usize) -> Vec<Option<Row>> {
    let index = graph.index();
    let mut rows: Vec<Option<Row>> = vec![None; graph.node_count()];
    let mut stack: Vec<(usize, Row)> = vec![(root, Row::ROOT)];

    while let Some((node, row)) = stack.pop() {
        if rows[node].is_some() {
            continue;
        }
        rows[node] = Some(row);
        trace!(node = %graph.node(node).name, %row, "seeded");

        let next = row.next();
        for &edge in index.incoming(node).iter().rev() {
            let (source, _) = index.endpoints(edge);
            if rows[source].is_none() {
                stack.push((source, next));
            }
        }
    }

    rows
}
