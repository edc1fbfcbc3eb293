//! Fixed-capacity contiguous sequence.
//!
//! Storage is a boxed slice whose physical capacity runs ahead of the logical
//! length by [`HEADROOM`] slots at construction. Slots at or past `len` are kept
//! zeroed. When an insertion would overflow the buffer, a new buffer
//! `HEADROOM` slots larger is allocated and the live prefix copied across.

use std::io::{self, Write};

use super::{SequenceOps, linear_scan, scan_insertion_point, visit_elements, write_elements};
use crate::error::SeqError;
use crate::rng;

/// Spare slots reserved at construction, and the additive growth step.
pub const HEADROOM: usize = 100;

#[derive(Debug, Clone)]
pub struct ContiguousSeq {
    buf: Box<[i32]>,
    len: usize,
    sorted: bool,
}

impl ContiguousSeq {
    /// Create a sequence of `size` values drawn uniformly from `[0, 100)`.
    pub fn new(size: usize) -> Result<Self, SeqError> {
        if size == 0 {
            return Err(SeqError::InvalidSize { size });
        }
        let mut buf = vec![0; size + HEADROOM].into_boxed_slice();
        rng::fill_values(&mut buf[..size]);
        Ok(Self {
            buf,
            len: size,
            sorted: false,
        })
    }

    /// Create a sequence holding exactly `values`. The sorted flag starts clear.
    pub fn from_values(values: Vec<i32>) -> Result<Self, SeqError> {
        if values.is_empty() {
            return Err(SeqError::InvalidSize { size: 0 });
        }
        let len = values.len();
        let mut buf = values;
        buf.resize(len + HEADROOM, 0);
        Ok(Self {
            buf: buf.into_boxed_slice(),
            len,
            sorted: false,
        })
    }

    /// Physical number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn live(&self) -> &[i32] {
        &self.buf[..self.len]
    }

    fn grow(&mut self) {
        let mut next = vec![0; self.buf.len() + HEADROOM].into_boxed_slice();
        next[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = next;
    }

    /// Shift `[index, len)` one slot right and write `value` at `index`.
    /// `index <= len` must already hold.
    fn shift_in(&mut self, index: usize, value: i32) {
        if self.len == self.buf.len() {
            self.grow();
        }
        self.buf.copy_within(index..self.len, index + 1);
        self.buf[index] = value;
        self.len += 1;
    }

    /// First index whose element is not less than `value`, or `len`.
    fn lower_bound(&self, value: i32) -> usize {
        let (mut lo, mut hi) = (0, self.len);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.buf[mid] < value {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

impl SequenceOps for ContiguousSeq {
    fn traverse(&self, out: &mut dyn Write) -> io::Result<()> {
        write_elements(self.live(), out)
    }

    fn suppressed_traverse(&self) {
        visit_elements(self.live());
    }

    fn insert(&mut self, index: usize, value: i32) -> Result<(), SeqError> {
        if index > self.len {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.shift_in(index, value);
        self.sorted = false;
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<(), SeqError> {
        if index >= self.len {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.buf[self.len] = 0;
        Ok(())
    }

    fn sort(&mut self) {
        if self.sorted {
            return;
        }
        self.buf[..self.len].sort_unstable();
        self.sorted = true;
    }

    fn smart_insert(&mut self, value: i32) {
        self.sort();
        let index = scan_insertion_point(self.live(), value);
        self.shift_in(index, value);
        self.sorted = true;
    }

    fn linear_search(&self, value: i32) -> Option<usize> {
        linear_scan(self.live(), value)
    }

    fn binary_search(&mut self, value: i32) -> Option<usize> {
        self.sort();
        let index = self.lower_bound(value);
        (index < self.len && self.buf[index] == value).then_some(index)
    }

    fn final_value(&self) -> Option<i32> {
        self.live().last().copied()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_sorted(&self) -> bool {
        self.sorted
    }

    fn as_slice(&self) -> &[i32] {
        self.live()
    }
}
