//! Implementation selector.

use std::fmt;

use crate::error::SeqError;
use crate::seq::{ContiguousSeq, DynamicSeq, SequenceOps};

/// Which sequence implementation a measurement targets.
///
/// Declaration order is significant: it fixes the row order of every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeqKind {
    /// [`ContiguousSeq`].
    Contiguous,
    /// [`DynamicSeq`].
    Dynamic,
}

impl SeqKind {
    /// All kinds in declaration order.
    pub const ALL: [SeqKind; 2] = [SeqKind::Contiguous, SeqKind::Dynamic];

    /// Number of kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position in [`SeqKind::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Contiguous => 0,
            Self::Dynamic => 1,
        }
    }

    /// Report label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contiguous => "CONTIGUOUS",
            Self::Dynamic => "DYNAMIC",
        }
    }

    /// Build a fresh instance of this kind holding `size` random values.
    pub fn instantiate(self, size: usize) -> Result<Box<dyn SequenceOps>, SeqError> {
        Ok(match self {
            Self::Contiguous => Box::new(ContiguousSeq::new(size)?),
            Self::Dynamic => Box::new(DynamicSeq::new(size)?),
        })
    }
}

impl TryFrom<usize> for SeqKind {
    type Error = SeqError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or(SeqError::InvalidImplementationKind { value })
    }
}

impl fmt::Display for SeqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
