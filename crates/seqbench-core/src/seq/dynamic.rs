//! Growable sequence backed by `Vec<i32>`.

use std::io::{self, Write};

use super::{SequenceOps, linear_scan, scan_insertion_point, visit_elements, write_elements};
use crate::error::SeqError;
use crate::rng;

#[derive(Debug, Clone)]
pub struct DynamicSeq {
    values: Vec<i32>,
    sorted: bool,
}

impl DynamicSeq {
    /// Create a sequence of `size` values drawn uniformly from `[0, 100)`.
    pub fn new(size: usize) -> Result<Self, SeqError> {
        if size == 0 {
            return Err(SeqError::InvalidSize { size });
        }
        Ok(Self {
            values: rng::sample_values(size),
            sorted: false,
        })
    }

    /// Create a sequence holding exactly `values`. The sorted flag starts clear.
    pub fn from_values(values: Vec<i32>) -> Result<Self, SeqError> {
        if values.is_empty() {
            return Err(SeqError::InvalidSize { size: 0 });
        }
        Ok(Self {
            values,
            sorted: false,
        })
    }
}

impl SequenceOps for DynamicSeq {
    fn traverse(&self, out: &mut dyn Write) -> io::Result<()> {
        write_elements(&self.values, out)
    }

    fn suppressed_traverse(&self) {
        visit_elements(&self.values);
    }

    fn insert(&mut self, index: usize, value: i32) -> Result<(), SeqError> {
        if index > self.values.len() {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        self.values.insert(index, value);
        self.sorted = false;
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<(), SeqError> {
        if index >= self.values.len() {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        self.values.remove(index);
        Ok(())
    }

    fn sort(&mut self) {
        if self.sorted {
            return;
        }
        self.values.sort();
        self.sorted = true;
    }

    fn smart_insert(&mut self, value: i32) {
        self.sort();
        let index = scan_insertion_point(&self.values, value);
        self.values.insert(index, value);
        self.sorted = true;
    }

    fn linear_search(&self, value: i32) -> Option<usize> {
        linear_scan(&self.values, value)
    }

    fn binary_search(&mut self, value: i32) -> Option<usize> {
        self.sort();
        self.values.binary_search(&value).ok()
    }

    fn final_value(&self) -> Option<i32> {
        self.values.last().copied()
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn is_sorted(&self) -> bool {
        self.sorted
    }

    fn as_slice(&self) -> &[i32] {
        &self.values
    }
}
