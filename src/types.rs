use std::str::FromStr;
use serde::Deserialize;

/// How the repair pass looks for edges that still violate the row ordering.
///
/// - `Worklist`: start with every edge queued; when a node is raised, only
///   the edges pointing at it are queued again (default).
/// - `Rescan`: scan the edge list from the start after every correction.
///   Quadratic, but it is the historical behaviour and useful for
///   cross-checking.
///
/// Both produce the same rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairStrategy {
    Worklist,
    Rescan,
}

impl Default for RepairStrategy {
    fn default() -> Self {
        RepairStrategy::Worklist
    }
}

impl FromStr for RepairStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "worklist" => Ok(RepairStrategy::Worklist),
            "rescan" => Ok(RepairStrategy::Rescan),
            other => Err(format!(
                "invalid strategy: {other} (expected \"worklist\" or \"rescan\")"
            )),
        }
    }
}

/// How rows are written in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowFormat {
    /// `"row": 3`
    Integer,
    /// `"row": "row3"`, for renderers that key their layout on the label.
    Label,
}

impl Default for RowFormat {
    fn default() -> Self {
        RowFormat::Integer
    }
}

impl FromStr for RowFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "integer" | "int" => Ok(RowFormat::Integer),
            "label" => Ok(RowFormat::Label),
            other => Err(format!(
                "invalid row_format: {other} (expected \"integer\" or \"label\")"
            )),
        }
    }
}

/// What to do with nodes that never received a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreachablePolicy {
    /// Keep them (without a row), list them in the result and log a warning.
    Report,
    /// Fail the whole call with `RowdagError::UnreachableNodes`.
    Deny,
}

impl Default for UnreachablePolicy {
    fn default() -> Self {
        UnreachablePolicy::Report
    }
}

impl FromStr for UnreachablePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "report" => Ok(UnreachablePolicy::Report),
            "deny" => Ok(UnreachablePolicy::Deny),
            other => Err(format!(
                "invalid unreachable policy: {other} (expected \"report\" or \"deny\")"
            )),
        }
    }
}
