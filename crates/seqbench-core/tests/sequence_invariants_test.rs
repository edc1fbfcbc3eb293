//! Property tests: ordering, insertion and search laws hold for every
//! sequence implementation.
//!
//! Run: cargo test -p seqbench-core --test sequence_invariants_test

use proptest::prelude::*;
use seqbench_core::{ContiguousSeq, DynamicSeq, SeqError, SeqKind, SequenceOps};

fn build(kind: SeqKind, values: &[i32]) -> Box<dyn SequenceOps> {
    match kind {
        SeqKind::Contiguous => Box::new(ContiguousSeq::from_values(values.to_vec()).unwrap()),
        SeqKind::Dynamic => Box::new(DynamicSeq::from_values(values.to_vec()).unwrap()),
    }
}

fn arb_kind() -> impl Strategy<Value = SeqKind> {
    prop_oneof![Just(SeqKind::Contiguous), Just(SeqKind::Dynamic)]
}

fn arb_values() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(0i32..100, 1..300)
}

fn non_decreasing(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn sort_yields_non_decreasing_order(kind in arb_kind(), values in arb_values()) {
        let mut seq = build(kind, &values);
        seq.sort();
        prop_assert!(seq.is_sorted());
        prop_assert!(non_decreasing(seq.as_slice()));
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(seq.as_slice(), expected.as_slice());
    }

    #[test]
    fn smart_insert_keeps_order_and_adds_value(
        kind in arb_kind(),
        values in arb_values(),
        pre_index in any::<prop::sample::Index>(),
        pre_value in -10i32..110,
        value in -10i32..110
    ) {
        let mut seq = build(kind, &values);
        // Start from an arbitrary state: an unsorted insert somewhere.
        let at = pre_index.index(seq.len() + 1);
        seq.insert(at, pre_value).unwrap();
        let before = seq.len();
        seq.smart_insert(value);
        prop_assert_eq!(seq.len(), before + 1);
        prop_assert!(seq.is_sorted());
        prop_assert!(non_decreasing(seq.as_slice()));
        prop_assert!(seq.as_slice().contains(&value));
    }

    #[test]
    fn insert_places_value_and_shifts_tail(
        kind in arb_kind(),
        values in arb_values(),
        index in any::<prop::sample::Index>(),
        value in any::<i32>()
    ) {
        let mut seq = build(kind, &values);
        let i = index.index(values.len() + 1);
        seq.insert(i, value).unwrap();
        prop_assert_eq!(seq.len(), values.len() + 1);
        prop_assert_eq!(seq.element_at(i), Some(value));
        prop_assert_eq!(&seq.as_slice()[..i], &values[..i]);
        prop_assert_eq!(&seq.as_slice()[i + 1..], &values[i..]);
        prop_assert!(!seq.is_sorted());
    }

    #[test]
    fn insert_beyond_len_is_rejected(kind in arb_kind(), values in arb_values(), extra in 1usize..50) {
        let mut seq = build(kind, &values);
        let index = values.len() + extra;
        prop_assert_eq!(
            seq.insert(index, 0),
            Err(SeqError::IndexOutOfRange { index, len: values.len() })
        );
    }

    #[test]
    fn linear_search_reports_presence(kind in arb_kind(), values in arb_values(), probe in -5i32..105) {
        let seq = build(kind, &values);
        match seq.linear_search(probe) {
            Some(i) => {
                prop_assert_eq!(seq.element_at(i), Some(probe));
                prop_assert!(!values[..i].contains(&probe));
            }
            None => prop_assert!(!values.contains(&probe)),
        }
    }

    #[test]
    fn binary_search_agrees_with_linear_on_sorted_input(
        kind in arb_kind(),
        values in arb_values(),
        probe in -5i32..105
    ) {
        let mut seq = build(kind, &values);
        seq.sort();
        let linear = seq.linear_search(probe);
        let binary = seq.binary_search(probe);
        prop_assert_eq!(linear.is_some(), binary.is_some());
        if let Some(i) = binary {
            prop_assert_eq!(seq.element_at(i), Some(probe));
        }
    }

    #[test]
    fn delete_preserves_flag_and_order(kind in arb_kind(), values in arb_values(), index in any::<prop::sample::Index>()) {
        let mut seq = build(kind, &values);
        seq.sort();
        let i = index.index(values.len());
        seq.delete(i).unwrap();
        prop_assert!(seq.is_sorted());
        prop_assert!(non_decreasing(seq.as_slice()));
        prop_assert_eq!(seq.len(), values.len() - 1);
    }
}

#[test]
fn contiguous_binary_search_returns_first_match() {
    let mut seq = ContiguousSeq::from_values(vec![7, 7, 7, 1, 7]).unwrap();
    assert_eq!(seq.binary_search(7), Some(1));
    assert_eq!(seq.linear_search(7), Some(1));
}

#[test]
fn construction_validation_for_every_kind() {
    assert_eq!(
        ContiguousSeq::new(0).unwrap_err(),
        SeqError::InvalidSize { size: 0 }
    );
    assert_eq!(
        DynamicSeq::new(0).unwrap_err(),
        SeqError::InvalidSize { size: 0 }
    );
}

#[test]
fn contiguous_insert_scenario() {
    let mut seq = ContiguousSeq::from_values(vec![10, 20, 30]).unwrap();
    seq.insert(1, 99).unwrap();
    assert_eq!(seq.as_slice(), &[10, 99, 20, 30]);
    assert!(!seq.is_sorted());
}
