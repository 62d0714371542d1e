// src/graph/mod.rs

//! Graph input: data model, loading and structural validation.
//!
//! - [`model`] holds the serde-facing node/edge types and the validated
//!   [`Graph`].
//! - [`index`] resolves edges to dense node indices once, grouped by target.
//! - [`validate`] turns a [`RawGraph`] into a [`Graph`] (unique names, no
//!   dangling edges).
//! - [`loader`] reads JSON or TOML graph files from disk.

pub mod index;
pub mod loader;
pub mod model;
pub mod validate;

pub use index::EdgeIndex;
pub use loader::{load_and_validate_graph, load_graph_from_path, GraphFormat};
pub use model::{Edge, Graph, Node, NodeName, RawGraph};
