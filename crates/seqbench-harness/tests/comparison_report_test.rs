//! Integration test: measured comparisons render into well-formed reports.
//!
//! Validates that:
//! 1. A single-size comparison renders exactly one block.
//! 2. Each DELTA cell equals the absolute difference of the implementation rows.
//! 3. The fastest style lands on the column minimum, first row on ties.
//! 4. The significant style marks deltas where `min * 2 < max`.
//!
//! Run: cargo test -p seqbench-harness --test comparison_report_test

use seqbench_core::SeqKind;
use seqbench_harness::style::{GREEN, RED, RESET};
use seqbench_harness::{Comparison, Operation, UnitTest};

fn parse_row(line: &str) -> (String, Vec<i64>) {
    let mut fields = line.split_whitespace();
    let label = fields.next().expect("row label").to_string();
    let values = fields
        .map(|f| f.parse::<i64>().expect("numeric cell"))
        .collect();
    (label, values)
}

/// Split an ANSI row into its styled fields: `(style, text)` pairs after the label.
fn styled_cells(line: &str) -> Vec<(String, String)> {
    let after_label = line.split_once(RESET).expect("label reset").1;
    after_label
        .split(RESET)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let (style, text) = if let Some(rest) = chunk.strip_prefix(GREEN) {
                (GREEN, rest)
            } else if let Some(rest) = chunk.strip_prefix(RED) {
                (RED, rest)
            } else {
                ("", chunk)
            };
            (style.to_string(), text.trim().to_string())
        })
        .collect()
}

#[test]
fn single_size_report_has_one_block_with_exact_deltas() {
    let comparison = Comparison::new(&[10], 1).unwrap();
    let text = comparison.to_report().render_plain();

    assert_eq!(text.matches("Size: 10").count(), 1);
    assert_eq!(text.matches("DELTA").count(), 1);

    let rows: Vec<(String, Vec<i64>)> = text
        .lines()
        .filter(|l| {
            let t = l.trim_start();
            t.starts_with("CONTIGUOUS") || t.starts_with("DYNAMIC") || t.starts_with("DELTA")
        })
        .map(parse_row)
        .collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].0, "CONTIGUOUS");
    assert_eq!(rows[1].0, "DYNAMIC");
    assert_eq!(rows[2].0, "DELTA");

    for k in 0..Operation::COUNT {
        assert_eq!(rows[2].1[k], (rows[0].1[k] - rows[1].1[k]).abs());
    }

    let cells = &comparison.results()[0];
    for op in Operation::ALL {
        assert_eq!(rows[0].1[op.ordinal()], cells[0].timing(op));
        assert_eq!(rows[1].1[op.ordinal()], cells[1].timing(op));
    }
}

#[test]
fn faster_contiguous_cell_carries_the_fastest_style() {
    let comparison = Comparison::from_results(vec![vec![
        UnitTest::with_timings(100, 1, SeqKind::Contiguous, [10, 40, 7, 7, 1, 90]),
        UnitTest::with_timings(100, 1, SeqKind::Dynamic, [25, 30, 7, 15, 3, 40]),
    ]]);
    let text = comparison.render(seqbench_harness::style::Palette::ANSI);
    let line = |label: &str| {
        text.lines()
            .find(|l| l.contains(label))
            .unwrap_or_else(|| panic!("missing {label} row"))
            .to_string()
    };

    let contiguous = styled_cells(&line("CONTIGUOUS"));
    let dynamic = styled_cells(&line("DYNAMIC"));
    let delta = styled_cells(&line("DELTA"));
    assert_eq!(contiguous.len(), Operation::COUNT);
    assert_eq!(dynamic.len(), Operation::COUNT);
    assert_eq!(delta.len(), Operation::COUNT);

    let fastest_contiguous: Vec<bool> = contiguous.iter().map(|(s, _)| s == GREEN).collect();
    let fastest_dynamic: Vec<bool> = dynamic.iter().map(|(s, _)| s == GREEN).collect();
    // SORT ties at 7: the first row wins.
    assert_eq!(
        fastest_contiguous,
        vec![true, false, true, true, true, false]
    );
    assert_eq!(
        fastest_dynamic,
        vec![false, true, false, false, false, true]
    );

    let delta_values: Vec<&str> = delta.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(delta_values, vec!["15", "10", "0", "8", "2", "50"]);
    let significant: Vec<bool> = delta.iter().map(|(s, _)| s == RED).collect();
    assert_eq!(
        significant,
        vec![true, false, false, true, true, true]
    );
}

#[test]
fn blocks_follow_input_size_order() {
    let comparison = Comparison::new(&[40, 5, 20], 2).unwrap();
    let text = comparison.to_report().render_plain();
    let positions: Vec<usize> = ["Size: 40", "Size: 5 ", "Size: 20"]
        .iter()
        .map(|needle| text.find(needle).expect("block present"))
        .collect();
    assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    assert_eq!(text.matches("\n\n").count(), 3);
}
