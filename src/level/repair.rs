// src/level/repair.rs

//! Repair pass: raise rows until every edge points strictly downwards.

use std::collections::VecDeque;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{trace, warn};

use crate::errors::{Result, RowdagError};
use crate::graph::Graph;
use crate::level::row::Row;
use crate::types::RepairStrategy;

/// Default number of corrections allowed before giving up: nodes × edges.
///
/// On an acyclic rowed subgraph with `R` nodes every row stays within
/// `1..=R`, so no node is raised more than `R - 1` times, and the rowed
/// subgraph has at least `R - 1` edges.
pub fn default_budget(graph: &Graph) -> usize {
    graph
        .node_count()
        .saturating_mul(graph.edge_count())
        .max(1)
}

/// Raise `rows` in place until `row(source) > row(target)` for every edge
/// whose endpoints both have a row. Returns the number of corrections made.
///
/// Each correction sets `row(source) = row(target) + 1`. Both strategies
/// only ever raise a row to the smallest value an edge demands, so they end
/// at the same assignment.
///
/// Fails with [`RowdagError::CyclicGraph`] once `budget` corrections have
/// been spent and another one is still needed.
pub fn repair_rows(
    graph: &Graph,
    rows: &mut [Option<Row>],
    strategy: RepairStrategy,
    budget: usize,
) -> Result<usize> {
    match strategy {
        RepairStrategy::Worklist => repair_worklist(graph, rows, budget),
        RepairStrategy::Rescan => repair_rescan(graph, rows, budget),
    }
}

/// `Some((source, target_row))` if `edge` is violated.
fn violation(graph: &Graph, rows: &[Option<Row>], edge: usize) -> Option<(usize, Row)> {
    let (source, target) = graph.index().endpoints(edge);
    match (rows[source], rows[target]) {
        (Some(source_row), Some(target_row)) if source_row <= target_row => {
            Some((source, target_row))
        }
        _ => None,
    }
}

fn correct(
    graph: &Graph,
    rows: &mut [Option<Row>],
    source: usize,
    target_row: Row,
    corrections: &mut usize,
    budget: usize,
) -> Result<()> {
    if *corrections >= budget {
        return Err(cycle_error(graph, rows, *corrections));
    }
    *corrections += 1;

    let raised = target_row.next();
    trace!(
        node = %graph.node(source).name,
        from = ?rows[source],
        to = %raised,
        "raising row"
    );
    rows[source] = Some(raised);
    Ok(())
}

fn repair_worklist(graph: &Graph, rows: &mut [Option<Row>], budget: usize) -> Result<usize> {
    let index = graph.index();
    let mut queue: VecDeque<usize> = (0..index.edge_count()).collect();
    let mut queued = vec![true; index.edge_count()];
    let mut corrections = 0;

    while let Some(edge) = queue.pop_front() {
        queued[edge] = false;

        let Some((source, target_row)) = violation(graph, rows, edge) else {
            continue;
        };
        correct(graph, rows, source, target_row, &mut corrections, budget)?;

        // Raising `source` can only break edges that point at it.
        for &upstream in index.incoming(source) {
            if !queued[upstream] {
                queued[upstream] = true;
                queue.push_back(upstream);
            }
        }
    }

    Ok(corrections)
}

fn repair_rescan(graph: &Graph, rows: &mut [Option<Row>], budget: usize) -> Result<usize> {
    let edge_count = graph.edge_count();
    let mut corrections = 0;

    'scan: loop {
        for edge in 0..edge_count {
            if let Some((source, target_row)) = violation(graph, rows, edge) {
                correct(graph, rows, source, target_row, &mut corrections, budget)?;
                continue 'scan;
            }
        }
        return Ok(corrections);
    }
}

/// Build the budget-exhausted error, naming a node on a cycle among the
/// rowed nodes if there is one.
fn cycle_error(graph: &Graph, rows: &[Option<Row>], corrections: usize) -> RowdagError {
    let mut rowed: DiGraphMap<usize, ()> = DiGraphMap::new();
    for (source, target) in graph.index().iter() {
        if rows[source].is_some() && rows[target].is_some() {
            rowed.add_edge(source, target, ());
        }
    }

    let node = match toposort(&rowed, None) {
        Err(cycle) => Some(graph.node(cycle.node_id()).name.clone()),
        Ok(_) => {
            warn!(
                corrections,
                "correction budget exhausted but no cycle found; budget is too small for this graph"
            );
            None
        }
    };

    RowdagError::CyclicGraph { node, corrections }
}
