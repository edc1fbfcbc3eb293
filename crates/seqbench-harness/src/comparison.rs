//! The size x implementation results matrix.
//!
//! `results[i][j]` is the cell for `sizes[i]` and `SeqKind::ALL[j]`. Cells are
//! measured outer-by-size, inner-by-implementation, strictly one after another.
//! Nothing is printed until every cell has finished.

use std::io::Write;
use std::time::Instant;

use seqbench_core::SeqKind;

use crate::error::HarnessError;
use crate::report::BenchReport;
use crate::structured_log::{LogEmitter, LogEntry, LogLevel};
use crate::style::Palette;
use crate::unit_test::UnitTest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    results: Vec<Vec<UnitTest>>,
}

impl Comparison {
    /// Build the matrix for `sizes` and measure every cell.
    pub fn new(sizes: &[usize], runs: u32) -> Result<Self, HarnessError> {
        Self::build(sizes, runs, None)
    }

    /// Like [`Comparison::new`], logging progress to `log`.
    pub fn new_logged(
        sizes: &[usize],
        runs: u32,
        log: &mut LogEmitter,
    ) -> Result<Self, HarnessError> {
        Self::build(sizes, runs, Some(log))
    }

    /// Wrap an already-measured matrix.
    #[must_use]
    pub fn from_results(results: Vec<Vec<UnitTest>>) -> Self {
        Self { results }
    }

    fn build(
        sizes: &[usize],
        runs: u32,
        log: Option<&mut LogEmitter>,
    ) -> Result<Self, HarnessError> {
        let mut comparison = Self {
            results: sizes
                .iter()
                .map(|&size| {
                    SeqKind::ALL
                        .iter()
                        .map(|&kind| UnitTest::new(size, runs, kind))
                        .collect()
                })
                .collect(),
        };
        comparison.execute(log)?;
        Ok(comparison)
    }

    /// Re-measure every cell, replacing the previous averages.
    pub fn run(&mut self) -> Result<&mut Self, HarnessError> {
        self.execute(None)?;
        Ok(self)
    }

    fn execute(&mut self, mut log: Option<&mut LogEmitter>) -> Result<(), HarnessError> {
        let started = Instant::now();
        if let Some(log) = log.as_deref_mut() {
            let sizes: Vec<usize> = self.sizes().collect();
            log.emit_entry(
                LogEntry::new("", LogLevel::Info, "comparison_start")
                    .with_details(serde_json::json!({ "sizes": sizes, "cells": self.cell_count() })),
            )?;
        }

        for row in &mut self.results {
            for cell in row.iter_mut() {
                let cell_started = Instant::now();
                cell.run()?;
                if let Some(log) = log.as_deref_mut() {
                    log.emit_entry(
                        LogEntry::new("", LogLevel::Debug, "cell_complete")
                            .with_cell(cell)
                            .with_duration_ms(elapsed_ms(cell_started)),
                    )?;
                }
            }
        }

        if let Some(log) = log {
            log.emit_entry(
                LogEntry::new("", LogLevel::Info, "comparison_complete")
                    .with_duration_ms(elapsed_ms(started)),
            )?;
            log.flush()?;
        }
        Ok(())
    }

    /// The `[size][implementation]` matrix.
    #[must_use]
    pub fn results(&self) -> &[Vec<UnitTest>] {
        &self.results
    }

    /// Sizes in row order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.results
            .iter()
            .filter_map(|row| row.first().map(UnitTest::size))
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.results.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn to_report(&self) -> BenchReport {
        BenchReport::from_results(&self.results)
    }

    /// Render the text report with `palette`.
    #[must_use]
    pub fn render(&self, palette: Palette) -> String {
        self.to_report().render(palette)
    }

    /// Write the ANSI-styled report to `out`.
    pub fn write_report(&self, out: &mut impl Write) -> std::io::Result<()> {
        out.write_all(self.to_report().render_ansi().as_bytes())?;
        out.flush()
    }

    /// Write the ANSI-styled report to standard output.
    pub fn print(&self) -> std::io::Result<()> {
        self.write_report(&mut std::io::stdout().lock())
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}
