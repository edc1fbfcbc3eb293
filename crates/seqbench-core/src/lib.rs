//! # seqbench-core
//!
//! Integer sequence implementations measured by the seqbench harness.
//!
//! Two storage strategies share one capability contract, [`SequenceOps`]:
//! - [`ContiguousSeq`]: a fixed-capacity contiguous buffer with explicit headroom
//!   and additive growth.
//! - [`DynamicSeq`]: a growable vector that leaves capacity management to the
//!   allocator.
//!
//! Instances are filled from a process-global uniform source over `[0, 100)`
//! (see [`rng`]). No `unsafe` code is permitted in this crate.

#![deny(unsafe_code)]

pub mod error;
pub mod kind;
pub mod rng;
pub mod seq;

pub use error::SeqError;
pub use kind::SeqKind;
pub use seq::{ContiguousSeq, DynamicSeq, HEADROOM, SequenceOps};
