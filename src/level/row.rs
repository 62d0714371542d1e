// src/level/row.rs

use std::fmt;

/// Prefix of the textual row label, e.g. `row12`.
pub const ROW_LABEL_PREFIX: &str = "row";

/// A node's level, counted in hops from the root. The root is row 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Row(u32);

impl Row {
    pub const ROOT: Row = Row(1);

    /// `None` for 0; rows are 1-indexed.
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Row(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The row directly above this one.
    pub fn next(self) -> Self {
        Row(self.0.saturating_add(1))
    }

    /// Historical string encoding: `row` followed by the number.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ROW_LABEL_PREFIX}{}", self.0)
    }
}
