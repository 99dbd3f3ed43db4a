//! Property-based tests for BTreeIndex.
//!
//! Each property is checked across orders 3 through 8 with `BTreeSet` as
//! the oracle where one is needed.

use mwaytree::BTreeIndex;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
//  Strategies
// ============================================================================

fn order() -> impl Strategy<Value = usize> {
    3usize..=8
}

/// Distinct keys in insertion order.
fn distinct_keys(max_count: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::hash_set(-500i64..500, 0..=max_count)
        .prop_map(|set| set.into_iter().collect())
        .prop_shuffle()
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    Delete(i64),
}

fn operations(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => (-100i64..100).prop_map(Op::Insert),
            2 => (-100i64..100).prop_map(Op::Delete),
        ],
        0..=max_ops,
    )
}

// ============================================================================
//  Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_round_trip_membership(order in order(), keys in distinct_keys(300), probes in prop::collection::vec(-600i64..600, 0..50)) {
        let tree = BTreeIndex::build(order, keys.iter().copied()).unwrap();
        let inserted: BTreeSet<i64> = keys.iter().copied().collect();

        for key in &keys {
            prop_assert!(tree.search(key));
        }
        for probe in &probes {
            prop_assert_eq!(tree.search(probe), inserted.contains(probe));
        }
    }

    #[test]
    fn prop_insert_is_idempotent(order in order(), keys in distinct_keys(200), pick in any::<prop::sample::Index>()) {
        prop_assume!(!keys.is_empty());
        let mut tree = BTreeIndex::build(order, keys.iter().copied()).unwrap();
        let before_keys: Vec<i64> = tree.keys_in_order().into_iter().copied().collect();
        let before_render = tree.render();

        let again = keys[pick.index(keys.len())];
        prop_assert!(!tree.insert(again));

        let after_keys: Vec<i64> = tree.keys_in_order().into_iter().copied().collect();
        prop_assert_eq!(after_keys, before_keys);
        prop_assert_eq!(tree.render(), before_render);
    }

    #[test]
    fn prop_delete_then_absent(order in order(), keys in distinct_keys(200), victims in prop::collection::vec(-600i64..600, 0..100)) {
        let mut tree = BTreeIndex::build(order, keys.iter().copied()).unwrap();
        let mut oracle: BTreeSet<i64> = keys.iter().copied().collect();

        for victim in &victims {
            let before = tree.render();
            let present = oracle.remove(victim);
            prop_assert_eq!(tree.delete(victim), present);
            prop_assert!(!tree.search(victim));
            if !present {
                prop_assert_eq!(tree.render(), before);
            }
        }
        prop_assert_eq!(tree.len(), oracle.len());
    }

    #[test]
    fn prop_invariants_hold_after_every_operation(order in order(), ops in operations(400)) {
        let mut tree = BTreeIndex::new(order).unwrap();
        let mut oracle = BTreeSet::new();

        for op in &ops {
            match *op {
                Op::Insert(key) => {
                    prop_assert_eq!(tree.insert(key), oracle.insert(key));
                }
                Op::Delete(key) => {
                    prop_assert_eq!(tree.delete(&key), oracle.remove(&key));
                }
            }
            if let Err(e) = tree.check_invariants_detailed() {
                return Err(TestCaseError::fail(format!("{e}\n{tree}")));
            }
        }

        let keys: Vec<i64> = tree.keys_in_order().into_iter().copied().collect();
        let expected: Vec<i64> = oracle.into_iter().collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn prop_internal_delete_keeps_separators_ordered(keys in distinct_keys(150)) {
        let mut tree = BTreeIndex::build(3, keys.iter().copied()).unwrap();
        prop_assume!(tree.height() > 1);

        let root_key = tree.node(tree.root()).unwrap().keys()[0];
        prop_assert!(tree.delete(&root_key));

        let in_order: Vec<i64> = tree.keys_in_order().into_iter().copied().collect();
        prop_assert!(in_order.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(!in_order.contains(&root_key));
        prop_assert!(tree.check_invariants());
    }
}
