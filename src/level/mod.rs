// src/level/mod.rs

//! Row assignment for a directed graph anchored at a root node.
//!
//! Every node that can reach the root by following edges forward gets a
//! [`Row`]; afterwards `row(source) > row(target)` holds for every edge
//! whose endpoints both have one.
//!
//! - [`seed`] walks edges backwards from the root, depth-first, giving each
//!   node the row of the first path that reaches it.
//! - [`repair`] raises rows until no edge is violated, with a correction
//!   budget so that cycles fail instead of spinning.
//! - [`leveler`] ties both passes together behind [`Leveler::level`].
//! - [`leveled`] is the result type handed back to callers.

pub mod leveled;
pub mod leveler;
pub mod repair;
pub mod row;
pub mod seed;

pub use leveled::{LevelStats, LeveledGraph, LeveledNode};
pub use leveler::{level, LevelOptions, Leveler};
pub use row::Row;
