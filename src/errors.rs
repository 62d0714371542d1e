// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Root node not found: {0}")]
    RootNotFound(String),

    // Fields are not called `source`/`target`: thiserror treats a `source`
    // field as the underlying error.
    #[error("Dangling edge ({from} -> {to}): unknown node '{missing}'")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Duplicate node name: {0}")]
    DuplicateNode(String),

    /// Repair budget exhausted. `node` is set when a cycle through it was
    /// found among the leveled nodes.
    #[error(
        "Repair pass did not converge after {corrections} corrections{}",
        .node.as_deref().map(|n| format!(" (cycle through '{n}')")).unwrap_or_default()
    )]
    CyclicGraph {
        node: Option<String>,
        corrections: usize,
    },

    #[error("Nodes unreachable from root: {}", .0.join(", "))]
    UnreachableNodes(Vec<String>),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RowdagError>;
