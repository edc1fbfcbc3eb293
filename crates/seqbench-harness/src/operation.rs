//! The timed operation vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One timed operation. Declaration order fixes both the timing slot index and
/// the report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Traverse,
    Insert,
    Sort,
    SmartInsert,
    LinearSearch,
    BinarySearch,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Traverse,
        Operation::Insert,
        Operation::Sort,
        Operation::SmartInsert,
        Operation::LinearSearch,
        Operation::BinarySearch,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Column header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Traverse => "TRAVERSE",
            Self::Insert => "INSERT",
            Self::Sort => "SORT",
            Self::SmartInsert => "SMART_INSERT",
            Self::LinearSearch => "LINEAR_SEARCH",
            Self::BinarySearch => "BINARY_SEARCH",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
