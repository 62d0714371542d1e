// src/config/model.rs

use serde::Deserialize;

use crate::level::LevelOptions;
use crate::types::{RepairStrategy, RowFormat, UnreachablePolicy};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [level]
/// root = "lead_time"
/// strategy = "worklist"
/// unreachable = "report"
/// correction_budget = 10000
///
/// [output]
/// row_format = "label"
/// pretty = true
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub level: LevelSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub level: LevelSection,
    pub output: OutputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(level: LevelSection, output: OutputSection) -> Self {
        Self { level, output }
    }

    /// Leveler options described by `[level]`.
    pub fn level_options(&self) -> LevelOptions {
        LevelOptions {
            strategy: self.level.strategy,
            correction_budget: self.level.correction_budget,
            unreachable: self.level.unreachable,
        }
    }
}

/// `[level]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelSection {
    /// Name of the node that gets row 1.
    ///
    /// May be left out here and given with `--root` instead; one of the two
    /// is required.
    #[serde(default)]
    pub root: Option<String>,

    /// `"worklist"` (default) or `"rescan"`.
    #[serde(default)]
    pub strategy: RepairStrategy,

    /// `"report"` (default) or `"deny"`.
    #[serde(default)]
    pub unreachable: UnreachablePolicy,

    /// Maximum number of repair corrections before the graph is declared
    /// cyclic. Defaults to nodes × edges.
    #[serde(default)]
    pub correction_budget: Option<usize>,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// `"integer"` (default) or `"label"` (`"row3"`).
    #[serde(default)]
    pub row_format: RowFormat,

    /// Pretty-print the JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            row_format: RowFormat::default(),
            pretty: default_pretty(),
        }
    }
}
