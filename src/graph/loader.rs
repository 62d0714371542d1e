// src/graph/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::graph::model::{Graph, RawGraph};

/// On-disk encoding of a graph file.
///
/// Both encodings share one shape: a `nodes` list of objects with a `name`
/// and an `edges` list of `{ source, target }` objects. In TOML that is
/// `[[nodes]]` / `[[edges]]` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Toml,
}

impl GraphFormat {
    /// Pick a format from the file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => GraphFormat::Toml,
            _ => GraphFormat::Json,
        }
    }
}

/// Parse graph text without validating it.
pub fn parse_graph(contents: &str, format: GraphFormat) -> Result<RawGraph> {
    let raw = match format {
        GraphFormat::Json => serde_json::from_str(contents)?,
        GraphFormat::Toml => toml::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a graph file and return the raw, unvalidated [`RawGraph`].
pub fn load_graph_from_path(path: impl AsRef<Path>) -> Result<RawGraph> {
    let path = path.as_ref();
    let format = GraphFormat::from_path(path);
    let contents = fs::read_to_string(path)?;

    debug!(path = %path.display(), ?format, "loading graph");
    parse_graph(&contents, format)
}

/// Load a graph file and check it for duplicate names and dangling edges.
///
/// This is what the binary uses; library callers holding an in-memory
/// [`RawGraph`] can go through `Graph::try_from` directly.
pub fn load_and_validate_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let raw = load_graph_from_path(path)?;
    Graph::try_from(raw)
}
