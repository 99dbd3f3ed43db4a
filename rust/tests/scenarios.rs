use mwaytree::{BTreeError, BTreeIndex, MIN_ORDER};

const DRAIN_KEYS: [i64; 10] = [41, 44, 96, 46, 42, 20, 43, 3, 77, 99];

/// Collect the keys of every node in the subtree rooted at `id`.
fn subtree_keys(tree: &BTreeIndex<i64>, id: u32) -> Vec<i64> {
    let node = tree.node(id).expect("live node");
    let mut keys = node.keys().to_vec();
    for &child in node.children() {
        keys.extend(subtree_keys(tree, child));
    }
    keys
}

#[test]
fn test_full_drain_scenario() {
    let mut tree = BTreeIndex::build(3, DRAIN_KEYS).unwrap();
    assert_eq!(tree.len(), DRAIN_KEYS.len());

    let order = [41, 43, 46, 77, 20, 3, 44, 99, 42, 96];
    for (step, value) in order.iter().enumerate() {
        assert!(tree.delete(value), "delete {value} at step {step}");
        assert!(!tree.search(value));
        tree.check_invariants_detailed()
            .unwrap_or_else(|e| panic!("after deleting {value}: {e}\n{tree}"));
        assert_eq!(tree.len(), DRAIN_KEYS.len() - step - 1);

        if step == 4 {
            assert!(!tree.delete(&7), "7 was never inserted");
        }
    }

    assert!(tree.is_empty());
    let root = tree.node(tree.root()).unwrap();
    assert_eq!(root.len(), 0);
    assert!(root.is_leaf());
    assert_eq!(tree.render(), "([leaf] )");
}

#[test]
fn test_split_growth_scenario() {
    let mut tree = BTreeIndex::new(3).unwrap();
    for value in [41, 44, 96, 46, 42, 20, 43] {
        assert!(tree.insert(value));
    }

    assert_eq!(tree.height(), 2);
    let root = tree.node(tree.root()).unwrap();
    assert_eq!(root.keys(), &[41, 44]);
    assert_eq!(root.children().len(), 3);

    // Each child subtree sits strictly between its separators.
    let keys = root.keys();
    for (i, &child) in root.children().iter().enumerate() {
        for key in subtree_keys(&tree, child) {
            if i > 0 {
                assert!(key > keys[i - 1]);
            }
            if i < keys.len() {
                assert!(key < keys[i]);
            }
        }
    }
}

#[test]
fn test_first_root_split_has_one_key_and_two_children() {
    let tree = BTreeIndex::build(3, [41, 44, 96, 46, 42]).unwrap();
    let root = tree.node(tree.root()).unwrap();
    assert_eq!(root.keys(), &[44]);
    assert_eq!(root.children().len(), 2);
    assert_eq!(subtree_keys(&tree, root.children()[0]), vec![41, 42]);
    assert_eq!(subtree_keys(&tree, root.children()[1]), vec![46, 96]);
}

#[test]
fn test_successor_replacement() {
    let mut tree = BTreeIndex::build(3, DRAIN_KEYS).unwrap();
    // 44 is the root key; its successor is the smallest key on the right.
    assert_eq!(tree.node(tree.root()).unwrap().keys(), &[44]);
    assert!(tree.delete(&44));

    let root = tree.node(tree.root()).unwrap();
    let replacement = root.keys()[0];
    assert_eq!(replacement, 46);

    let left = subtree_keys(&tree, root.children()[0]);
    let right = subtree_keys(&tree, root.children()[1]);
    assert!(left.iter().all(|&k| k < replacement));
    assert!(right.iter().all(|&k| k > replacement));
    assert!(!right.contains(&44));
    assert!(tree.check_invariants());
}

#[test]
fn test_probe_delete_leaves_tree_unchanged() {
    let mut tree = BTreeIndex::build(3, DRAIN_KEYS).unwrap();
    let before = tree.render();
    assert!(!tree.delete(&7));
    assert_eq!(tree.render(), before);
    assert_eq!(tree.len(), DRAIN_KEYS.len());
}

#[test]
fn test_order_is_validated_at_construction() {
    for order in 0..MIN_ORDER {
        assert_eq!(
            BTreeIndex::<i64>::new(order).unwrap_err(),
            BTreeError::InvalidOrder { order, min: MIN_ORDER }
        );
    }
    assert!(BTreeIndex::<i64>::new(MIN_ORDER).is_ok());
}

#[test]
fn test_reinsert_after_drain() {
    let mut tree = BTreeIndex::build(3, DRAIN_KEYS).unwrap();
    for value in DRAIN_KEYS {
        tree.delete(&value);
    }
    tree.extend(DRAIN_KEYS);
    assert_eq!(tree.len(), DRAIN_KEYS.len());
    assert_eq!(
        tree.render(),
        BTreeIndex::build(3, DRAIN_KEYS).unwrap().render()
    );
    assert!(tree.check_invariants());
}

#[test]
fn test_checked_operations() {
    let mut tree = BTreeIndex::new(4).unwrap();
    for value in 0..64 {
        assert_eq!(tree.try_insert(value), Ok(true));
    }
    for value in (0..64).step_by(2) {
        assert_eq!(tree.try_delete(&value), Ok(()));
    }
    assert_eq!(tree.try_delete(&0), Err(BTreeError::KeyNotFound));
    assert_eq!(tree.len(), 32);
}
