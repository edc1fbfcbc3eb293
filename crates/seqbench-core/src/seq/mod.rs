//! Sequence capability contract and its two implementations.
//!
//! Each implementation carries a `sorted` flag: set by `sort` and `smart_insert`,
//! cleared by `insert`, untouched by `delete`. While set, `sort` does no work.

use std::io::{self, Write};

use crate::error::SeqError;

mod contiguous;
mod dynamic;

pub use contiguous::{ContiguousSeq, HEADROOM};
pub use dynamic::DynamicSeq;

/// Operations the harness times against every implementation.
pub trait SequenceOps {
    /// Write every element, in order, to `out`.
    fn traverse(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Visit every element in order without producing output.
    fn suppressed_traverse(&self);

    /// Place `value` at `index`, shifting later elements right.
    fn insert(&mut self, index: usize, value: i32) -> Result<(), SeqError>;

    /// Remove the element at `index`, shifting later elements left.
    fn delete(&mut self, index: usize) -> Result<(), SeqError>;

    /// Establish non-decreasing order.
    fn sort(&mut self);

    /// Sort if needed, then insert `value` before the first element not less than it.
    fn smart_insert(&mut self, value: i32);

    /// Position of the first element equal to `value`.
    fn linear_search(&self, value: i32) -> Option<usize>;

    /// Position of an element equal to `value`; sorts first when the flag is clear.
    fn binary_search(&mut self, value: i32) -> Option<usize>;

    /// Element at the last position.
    fn final_value(&self) -> Option<i32>;

    /// Logical number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current state of the sorted flag.
    fn is_sorted(&self) -> bool;

    /// Live elements in order.
    fn as_slice(&self) -> &[i32];

    fn element_at(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }
}

/// Shared body of both `traverse` implementations.
fn write_elements(values: &[i32], out: &mut dyn Write) -> io::Result<()> {
    for v in values {
        write!(out, "{v} ")?;
    }
    writeln!(out)
}

/// Shared body of both `suppressed_traverse` implementations.
fn visit_elements(values: &[i32]) {
    for v in values {
        std::hint::black_box(v);
    }
}

/// Index of the first element not less than `value` in an already-sorted slice,
/// found by walking from the front.
fn scan_insertion_point(values: &[i32], value: i32) -> usize {
    let mut i = 0;
    while i < values.len() && values[i] < value {
        i += 1;
    }
    i
}

fn linear_scan(values: &[i32], value: i32) -> Option<usize> {
    values.iter().position(|&v| v == value)
}
