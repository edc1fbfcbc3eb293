//! Report generation for comparison results.
//!
//! One block per size: a header row of operation labels, one row of mean
//! nanoseconds per implementation, then a `DELTA` row holding `|max - min|` for
//! each column. The column minimum is styled as fastest (first row wins ties);
//! a delta is styled significant when `min * 2 < max`.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::operation::Operation;
use crate::style::Palette;
use crate::unit_test::UnitTest;

/// Field width of every column, labels included.
pub const COLUMN_WIDTH: usize = 15;

pub const REPORT_TITLE: &str = "Test Results";

/// Index of the first minimum in `column`.
#[must_use]
pub fn fastest_index(column: &[i64]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, &v) in column.iter().enumerate() {
        match best {
            Some((_, b)) if v >= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// `(min, max)` of `column`.
#[must_use]
pub fn column_bounds(column: &[i64]) -> Option<(i64, i64)> {
    let min = column.iter().copied().min()?;
    let max = column.iter().copied().max()?;
    Some((min, max))
}

/// `|max - min|` of `column`, `0` when empty.
#[must_use]
pub fn column_delta(column: &[i64]) -> i64 {
    column_bounds(column).map_or(0, |(min, max)| max.saturating_sub(min).saturating_abs())
}

/// True when the fastest time is more than twice as fast as the slowest.
#[must_use]
pub fn is_significant(min: i64, max: i64) -> bool {
    min.saturating_mul(2) < max
}

/// Machine-readable comparison report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchReport {
    pub title: String,
    pub blocks: Vec<SizeBlock>,
}

/// All rows measured at one size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBlock {
    pub size: usize,
    pub runs: u32,
    pub rows: Vec<ReportRow>,
    pub columns: Vec<ColumnSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub implementation: String,
    /// Mean nanoseconds, one entry per operation in column order.
    pub mean_ns: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub operation: Operation,
    /// Row index of the fastest implementation.
    pub fastest: Option<usize>,
    pub delta_ns: i64,
    pub significant: bool,
}

impl SizeBlock {
    /// Summarize one row of the results matrix. Returns `None` for an empty row.
    #[must_use]
    pub fn from_cells(cells: &[UnitTest]) -> Option<Self> {
        let first = cells.first()?;
        let rows = cells
            .iter()
            .map(|cell| ReportRow {
                implementation: cell.kind().label().to_string(),
                mean_ns: cell.timings().to_vec(),
            })
            .collect();
        let columns = Operation::ALL
            .iter()
            .map(|&op| {
                let column: Vec<i64> = cells.iter().map(|cell| cell.timing(op)).collect();
                let significant =
                    column_bounds(&column).is_some_and(|(min, max)| is_significant(min, max));
                ColumnSummary {
                    operation: op,
                    fastest: fastest_index(&column),
                    delta_ns: column_delta(&column),
                    significant,
                }
            })
            .collect();
        Some(Self {
            size: first.size(),
            runs: first.runs(),
            rows,
            columns,
        })
    }

    fn render_into(&self, out: &mut String, palette: Palette) {
        let p = palette;
        let title = format!("Size: {}", self.size);
        let _ = write!(
            out,
            "  {}{:<w$}{}",
            p.size_label,
            title,
            p.label,
            w = COLUMN_WIDTH
        );
        for op in Operation::ALL {
            let _ = write!(out, "{:<w$}", op.label(), w = COLUMN_WIDTH);
        }
        let _ = writeln!(out, "{}", p.reset);

        for (j, row) in self.rows.iter().enumerate() {
            let _ = write!(
                out,
                "  {}{:<w$}{}",
                p.label,
                row.implementation,
                p.reset,
                w = COLUMN_WIDTH
            );
            for (column, ns) in self.columns.iter().zip(&row.mean_ns) {
                let style = if column.fastest == Some(j) {
                    p.fastest
                } else {
                    p.reset
                };
                let _ = write!(out, "{style}{ns:<w$}{}", p.reset, w = COLUMN_WIDTH);
            }
            out.push('\n');
        }

        let _ = write!(
            out,
            "  {}{:<w$}{}",
            p.label,
            "DELTA",
            p.reset,
            w = COLUMN_WIDTH
        );
        for column in &self.columns {
            let style = if column.significant {
                p.significant
            } else {
                p.reset
            };
            let _ = write!(
                out,
                "{style}{:<w$}{}",
                column.delta_ns,
                p.reset,
                w = COLUMN_WIDTH
            );
        }
        out.push_str("\n\n");
    }
}

impl BenchReport {
    /// Build a report from a `[size][implementation]` matrix.
    #[must_use]
    pub fn from_results(results: &[Vec<UnitTest>]) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            blocks: results
                .iter()
                .filter_map(|cells| SizeBlock::from_cells(cells))
                .collect(),
        }
    }

    /// Render the text table using `palette` for style tokens.
    #[must_use]
    pub fn render(&self, palette: Palette) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{}", self.title);
        for block in &self.blocks {
            block.render_into(&mut out, palette);
        }
        out
    }

    /// Render with ANSI style tokens.
    #[must_use]
    pub fn render_ansi(&self) -> String {
        self.render(Palette::ANSI)
    }

    /// Render without style tokens.
    #[must_use]
    pub fn render_plain(&self) -> String {
        self.render(Palette::PLAIN)
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
