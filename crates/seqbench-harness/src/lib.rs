//! Measurement and reporting harness for seqbench.
//!
//! This crate provides:
//! - [`UnitTest`]: one (size, implementation) cell that times the operation suite
//!   on fresh instances and averages the samples
//! - [`Comparison`]: the size x implementation matrix of cells and its report
//! - Report rendering: ANSI-styled and plain tables, plus a JSON document
//! - Structured JSONL logging of measurement progress
//! - [`HarnessConfig`]: compiled-in test sizes and run count

#![forbid(unsafe_code)]

pub mod comparison;
pub mod config;
pub mod error;
pub mod operation;
pub mod report;
pub mod structured_log;
pub mod style;

pub use comparison::Comparison;
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use operation::Operation;
pub use report::BenchReport;
pub use unit_test::UnitTest;
