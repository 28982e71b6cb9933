//! Integration tests for RedBlackTreeMap.
//!
//! Every mutating scenario checks the red-black invariants after each
//! single operation, not only at the end.

use redblack::tree::{Color, KeyExists, RedBlackTreeMap, WalkOrder};
use rstest::rstest;

fn assert_valid<K, V>(map: &RedBlackTreeMap<K, V>, step: &str)
where
    K: Ord,
{
    if let Err(violation) = map.check() {
        panic!("invariant violated after {step}: {violation}");
    }
}

fn in_order_keys<K: Clone, V>(map: &RedBlackTreeMap<K, V>) -> Vec<K> {
    map.nodes(WalkOrder::InOrder)
        .map(|node| node.key().clone())
        .collect()
}

/// A permutation of `0..size` that is neither sorted nor reverse sorted.
fn scrambled(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_map() {
    let map: RedBlackTreeMap<i32, String> = RedBlackTreeMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.root().is_none());
    assert_eq!(map.height(), 0);
}

#[rstest]
fn test_default_creates_empty_map() {
    let map: RedBlackTreeMap<i32, String> = RedBlackTreeMap::default();
    assert!(map.is_empty());
    assert!(map.validate());
}

// =============================================================================
// Insert and Find Tests
// =============================================================================

#[rstest]
fn test_insert_multiple_entries() {
    let mut map = RedBlackTreeMap::new();
    map.insert(2, "two".to_string()).unwrap();
    map.insert(1, "one".to_string()).unwrap();
    map.insert(3, "three".to_string()).unwrap();

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&1), Some(&"one".to_string()));
    assert_eq!(map.get(&2), Some(&"two".to_string()));
    assert_eq!(map.get(&3), Some(&"three".to_string()));
}

#[rstest]
fn test_find_returns_handle_with_value() {
    let map: RedBlackTreeMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
    let node = map.find(&2).unwrap();
    assert_eq!(node.key(), &2);
    assert_eq!(node.value(), &"two");
    assert!(map.find(&3).is_none());
}

#[rstest]
fn test_find_with_borrowed_key() {
    let map: RedBlackTreeMap<String, i32> =
        [("alpha".to_string(), 1), ("beta".to_string(), 2)].into_iter().collect();
    assert_eq!(map.get("beta"), Some(&2));
    assert!(map.contains_key("alpha"));
    assert!(!map.contains_key("gamma"));
}

#[rstest]
fn test_insert_duplicate_returns_key_exists() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one").unwrap();

    let result = map.insert(1, "ONE");
    assert_eq!(result.map(|node| *node.value()), Err(KeyExists { key: 1, value: "ONE" }));
    assert_eq!(map.get(&1), Some(&"one"));
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_duplicate_rejection_keeps_structure() {
    let mut map: RedBlackTreeMap<i32, i32> = scrambled(100).into_iter().map(|key| (key, key)).collect();
    let shape = |map: &RedBlackTreeMap<i32, i32>| -> Vec<(i32, Color)> {
        map.nodes(WalkOrder::PreOrder)
            .map(|node| (*node.key(), node.color()))
            .collect()
    };
    let before = shape(&map);

    for key in [0, 50, 99] {
        assert!(map.insert(key, -1).is_err());
        assert_valid(&map, "duplicate insert");
    }

    assert_eq!(shape(&map), before);
    assert_eq!(map.len(), 100);
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_existing_key() {
    let mut map: RedBlackTreeMap<i32, &str> =
        [(1, "one"), (2, "two"), (3, "three")].into_iter().collect();
    assert!(map.remove(&2));

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&2), None);
    assert_eq!(map.get(&1), Some(&"one"));
    assert_eq!(map.get(&3), Some(&"three"));
    assert_valid(&map, "remove");
}

#[rstest]
fn test_remove_absent_key_returns_false() {
    let mut map: RedBlackTreeMap<i32, i32> = scrambled(50).into_iter().map(|key| (key, key)).collect();
    let before = in_order_keys(&map);

    assert!(!map.remove(&1000));
    assert!(!map.remove(&-1));

    assert_eq!(in_order_keys(&map), before);
    assert_eq!(map.len(), 50);
    assert_valid(&map, "absent remove");
}

#[rstest]
fn test_remove_on_empty_map() {
    let mut map: RedBlackTreeMap<i32, i32> = RedBlackTreeMap::new();
    assert!(!map.remove(&1));
    assert!(map.is_empty());
}

#[rstest]
fn test_take_returns_entry() {
    let mut map: RedBlackTreeMap<i32, String> =
        (0..10).map(|key| (key, format!("v{key}"))).collect();
    assert_eq!(map.take(&4), Some((4, "v4".to_string())));
    assert_eq!(map.take(&4), None);
    assert_valid(&map, "take");
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[rstest]
fn test_stress_scenario_insert_then_remove_same_order() {
    let keys = [4, 2, 6, 1, 3, 5, 15, 7, 16, 14];
    let mut map = RedBlackTreeMap::new();

    for key in keys {
        map.insert(key, key).unwrap();
        assert_valid(&map, &format!("insert {key}"));
    }
    assert_eq!(map.len(), keys.len());

    for key in keys {
        assert!(map.remove(&key));
        assert_valid(&map, &format!("remove {key}"));
    }
    assert!(map.is_empty());
    assert!(map.root().is_none());
}

#[rstest]
fn test_height_stays_within_balance_bound() {
    let mut map = RedBlackTreeMap::new();
    for key in 1..=9 {
        map.insert(key, ()).unwrap();
        assert_valid(&map, &format!("insert {key}"));

        let entries = map.len() as f64;
        let bound = 2.0 * (entries + 1.0).log2();
        assert!(
            map.height() as f64 <= bound,
            "height {} exceeds {bound} with {} entries",
            map.height(),
            map.len()
        );
    }
}

#[rstest]
#[case::ascending((0..300).collect())]
#[case::descending((0..300).rev().collect())]
#[case::scrambled(scrambled(300))]
#[case::zigzag((0..150).flat_map(|index| [index, 299 - index]).collect())]
fn test_invariants_hold_after_every_operation(#[case] keys: Vec<i32>) {
    let mut map = RedBlackTreeMap::new();
    for &key in &keys {
        map.insert(key, key * 2).unwrap();
        assert_valid(&map, &format!("insert {key}"));
    }

    let mut expected: Vec<i32> = keys.clone();
    expected.sort_unstable();
    assert_eq!(in_order_keys(&map), expected);

    for (position, &key) in keys.iter().enumerate() {
        if position % 2 == 0 {
            assert!(map.remove(&key));
            assert_valid(&map, &format!("remove {key}"));
        }
    }
    for (position, &key) in keys.iter().enumerate() {
        assert_eq!(map.get(&key).is_some(), position % 2 == 1);
    }

    for &key in keys.iter().rev() {
        map.remove(&key);
        assert_valid(&map, &format!("remove {key}"));
    }
    assert!(map.is_empty());
}

#[rstest]
fn test_round_trip_ten_thousand_keys() {
    let keys = scrambled(10_000);
    let mut map = RedBlackTreeMap::new();
    for &key in &keys {
        map.insert(key, i64::from(key) * 3).unwrap();
    }
    assert!(map.validate());
    assert_eq!(map.len(), 10_000);

    for &key in &keys {
        assert_eq!(map.get(&key), Some(&(i64::from(key) * 3)));
    }

    for &key in &keys {
        assert!(map.remove(&key));
    }
    assert!(map.validate());
    for &key in &keys {
        assert!(map.find(&key).is_none());
    }
}

// =============================================================================
// Walk Tests
// =============================================================================

#[rstest]
fn test_in_order_walk_is_strictly_ascending() {
    let mut map: RedBlackTreeMap<i32, ()> = scrambled(200).into_iter().map(|key| (key, ())).collect();
    for key in (0..200).step_by(3) {
        map.remove(&key);
    }
    let keys = in_order_keys(&map);
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(keys.len(), map.len());
}

#[rstest]
fn test_pre_order_walk_starts_at_root() {
    let map: RedBlackTreeMap<i32, ()> = (0..31).map(|key| (key, ())).collect();
    let first = map.nodes(WalkOrder::PreOrder).next().map(|node| node.id());
    assert_eq!(first, map.root().map(|root| root.id()));
}

#[rstest]
fn test_post_order_visits_children_before_parents() {
    let map: RedBlackTreeMap<i32, ()> = scrambled(64).into_iter().map(|key| (key, ())).collect();
    let mut seen = std::collections::HashSet::new();
    map.walk(WalkOrder::PostOrder, |node| {
        for child in [node.left(), node.right()].into_iter().flatten() {
            assert!(seen.contains(&child.id()), "child visited after parent");
        }
        seen.insert(node.id());
    });
    assert_eq!(seen.len(), 64);
}

#[rstest]
fn test_walk_restarts_from_root() {
    let map: RedBlackTreeMap<i32, ()> = (0..10).map(|key| (key, ())).collect();
    let mut walk = map.nodes(WalkOrder::InOrder);
    walk.next();
    walk.next();
    let restarted: Vec<i32> = map.nodes(WalkOrder::InOrder).map(|node| *node.key()).collect();
    assert_eq!(restarted, (0..10).collect::<Vec<_>>());
}

#[rstest]
fn test_node_handles_navigate_tree() {
    let map: RedBlackTreeMap<i32, ()> = (1..=7).map(|key| (key, ())).collect();
    let root = map.root().unwrap();
    for child in [root.left(), root.right()].into_iter().flatten() {
        assert_eq!(child.parent(), Some(root));
    }
}

// =============================================================================
// Logging Tests
// =============================================================================

#[rstest]
fn test_operations_emit_under_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut map = RedBlackTreeMap::new();
        for key in 0..16 {
            map.insert(key, key).unwrap();
        }
        assert!(map.insert(3, 3).is_err());
        for key in 0..16 {
            assert!(map.remove(&key));
        }
        assert!(map.validate());
    });
}
