//! Error kinds raised by sequence construction and mutation.

use thiserror::Error;

/// Failure raised by a sequence operation or by implementation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    /// Construction requested a non-positive number of elements.
    #[error("invalid size: {size} (must be positive)")]
    InvalidSize { size: usize },
    /// `insert` outside `[0, len]` or `delete` outside `[0, len)`.
    #[error("index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// An implementation ordinal that names no [`crate::SeqKind`].
    #[error("invalid implementation kind: {value}")]
    InvalidImplementationKind { value: usize },
    /// The sequence has no elements left to read.
    #[error("sequence is empty")]
    EmptySequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            SeqError::InvalidSize { size: 0 }.to_string(),
            "invalid size: 0 (must be positive)"
        );
        assert_eq!(
            SeqError::IndexOutOfRange { index: 7, len: 3 }.to_string(),
            "index out of range: 7 (len 3)"
        );
        assert_eq!(
            SeqError::InvalidImplementationKind { value: 9 }.to_string(),
            "invalid implementation kind: 9"
        );
    }
}
