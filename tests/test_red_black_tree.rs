extern crate ordered_containers;
extern crate rand;
extern crate simplelog;

use ordered_containers::red_black_tree::{
    Cursor, Error, LessEqual, RedBlackMap, RedBlackMultiSet, RedBlackSet, RedBlackTree,
};
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{Config, LevelFilter, TestLogger};
use std::collections::{BTreeMap, BTreeSet};
use std::vec::Vec;

const NUM_OF_OPERATIONS: usize = 4000;

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn seeded_rng() -> XorShiftRng {
    SeedableRng::from_seed([1, 2, 3, 4])
}

#[test]
fn int_test_tree_matches_btreeset() {
    init_logger();
    let mut rng = seeded_rng();
    let mut tree: RedBlackTree<u32> = RedBlackTree::with_chunk_size(16);
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 512);
        if rng.gen::<bool>() {
            let (cursor, inserted) = tree.insert(key);
            assert_eq!(inserted, expected.insert(key));
            assert_eq!(tree.get(cursor), Some(&key));
        } else {
            let cursor = tree.find(&key);
            match tree.erase(cursor) {
                Ok(value) => {
                    assert_eq!(value, key);
                    assert!(expected.remove(&key));
                },
                Err(error) => {
                    assert_eq!(error, Error::InvalidCursor);
                    assert!(!expected.contains(&key));
                },
            }
        }
        tree.assert_invariants();
        assert_eq!(tree.len(), expected.len());
    }

    assert_eq!(
        tree.iter().cloned().collect::<Vec<u32>>(),
        expected.iter().cloned().collect::<Vec<u32>>(),
    );
}

#[test]
fn int_test_non_strict_tree_matches_counts() {
    init_logger();
    let mut rng = seeded_rng();
    let mut tree: RedBlackTree<u32, LessEqual> = RedBlackTree::with_comparator(LessEqual);
    let mut expected: BTreeMap<u32, usize> = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 64);
        if rng.gen_range(0, 3) > 0 {
            assert!(tree.insert(key).1);
            *expected.entry(key).or_insert(0) += 1;
        } else {
            let removed = tree.remove(&key);
            match expected.get_mut(&key) {
                Some(count) => {
                    assert_eq!(removed, Some(key));
                    *count -= 1;
                },
                None => assert_eq!(removed, None),
            }
            if expected.get(&key) == Some(&0) {
                expected.remove(&key);
            }
        }
        tree.assert_invariants();
        assert_eq!(tree.count(&key), expected.get(&key).cloned().unwrap_or(0));
    }

    let total: usize = expected.values().sum();
    assert_eq!(tree.len(), total);
}

#[test]
fn int_test_erase_all_in_random_order() {
    init_logger();
    let mut rng = seeded_rng();
    let mut keys: Vec<u32> = (0..1000).collect();
    rng.shuffle(&mut keys);

    let mut tree: RedBlackTree<u32> = keys.iter().cloned().collect();
    tree.assert_invariants();
    assert_eq!(tree.len(), 1000);

    rng.shuffle(&mut keys);
    for key in &keys {
        let cursor = tree.find(key);
        assert_eq!(tree.erase(cursor), Ok(*key));
        tree.assert_invariants();
    }

    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.begin(), tree.end());
}

#[test]
fn int_test_cursors_survive_unrelated_erases() {
    let mut rng = seeded_rng();
    let mut tree: RedBlackTree<u32> = RedBlackTree::with_chunk_size(8);
    let cursors: Vec<(u32, Cursor)> = (0..300u32).map(|key| (key, tree.insert(key).0)).collect();

    let mut erased = BTreeSet::new();
    for _ in 0..150 {
        let (key, cursor) = cursors[rng.gen_range(0, cursors.len())];
        if erased.insert(key) {
            assert_eq!(tree.erase(cursor), Ok(key));
        } else {
            assert_eq!(tree.erase(cursor), Err(Error::InvalidCursor));
        }
    }

    // Recycled arena slots must not resurrect erased cursors.
    for key in 1000..1100u32 {
        tree.insert(key);
    }
    tree.assert_invariants();

    for (key, cursor) in &cursors {
        if erased.contains(key) {
            assert_eq!(tree.get(*cursor), None);
        } else {
            assert_eq!(tree.get(*cursor), Some(key));
        }
    }
}

#[test]
fn int_test_bounds_match_btreeset() {
    let mut rng = seeded_rng();
    let mut tree: RedBlackTree<u32> = RedBlackTree::new();
    let mut expected = BTreeSet::new();
    for _ in 0..200 {
        let key = rng.gen_range(0, 1000) * 2;
        tree.insert(key);
        expected.insert(key);
    }

    for key in 0..2001u32 {
        let lower = expected.range(key..).next();
        let upper = expected.range(key + 1..).next();
        assert_eq!(tree.get(tree.lower_bound(&key)), lower);
        assert_eq!(tree.get(tree.upper_bound(&key)), upper);
        assert_eq!(tree.count(&key), if expected.contains(&key) { 1 } else { 0 });
    }
}

#[test]
fn int_test_cursor_walk_matches_iteration() {
    let mut rng = seeded_rng();
    let tree: RedBlackTree<u32> = (0..500).map(|_| rng.gen::<u32>()).collect();

    let mut forward = Vec::new();
    let mut cursor = tree.begin();
    while cursor != tree.end() {
        forward.push(*tree.get(cursor).unwrap());
        cursor = tree.next(cursor);
    }
    assert_eq!(forward.len(), tree.len());
    assert_eq!(forward, tree.iter().cloned().collect::<Vec<u32>>());

    let mut backward = Vec::new();
    let mut cursor = tree.prev(tree.end());
    while cursor != tree.end() {
        backward.push(*tree.get(cursor).unwrap());
        cursor = tree.prev(cursor);
    }
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn int_test_map_matches_btreemap() {
    let mut rng = seeded_rng();
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 256);
        let value = rng.next_u32();
        match rng.gen_range(0, 3) {
            0 => {
                map.insert_or_assign(key, value);
                expected.insert(key, value);
            },
            1 => {
                let inserted = map.insert(key, value).1;
                assert_eq!(inserted, !expected.contains_key(&key));
                expected.entry(key).or_insert(value);
            },
            _ => {
                assert_eq!(map.remove(&key), expected.remove(&key).map(|value| (key, value)));
            },
        }
        assert_eq!(map.at(&key).ok(), expected.get(&key));
    }

    assert_eq!(
        map.into_iter().collect::<Vec<(u32, u32)>>(),
        expected.into_iter().collect::<Vec<(u32, u32)>>(),
    );
}

#[test]
fn int_test_multiset_merge() {
    let mut rng = seeded_rng();
    let mut a = RedBlackMultiSet::new();
    let mut b = RedBlackMultiSet::new();
    let mut a_keys = Vec::new();
    let mut b_keys = Vec::new();
    for _ in 0..500 {
        let key = rng.gen_range(0, 50);
        if rng.gen::<bool>() {
            a.insert(key);
            a_keys.push(key);
        } else {
            b.insert(key);
            b_keys.push(key);
        }
    }

    a.merge(&b);
    let mut expected = a_keys.clone();
    expected.extend(b_keys.iter().cloned());
    expected.sort();
    b_keys.sort();

    assert_eq!(a.iter().cloned().collect::<Vec<u32>>(), expected);
    assert_eq!(b.iter().cloned().collect::<Vec<u32>>(), b_keys);
    for key in 0..50 {
        let copies = expected.iter().filter(|k| **k == key).count();
        assert_eq!(a.count(&key), copies);
        assert_eq!(a.equal_range(&key).count(), copies);
    }
}

#[test]
fn int_test_set_merge_leaves_other() {
    let mut rng = seeded_rng();
    let mut a = RedBlackSet::new();
    let mut b = RedBlackSet::new();
    let mut a_keys = BTreeSet::new();
    let mut b_keys = BTreeSet::new();
    for _ in 0..500 {
        let key = rng.gen_range(0, 200);
        if rng.gen::<bool>() {
            a.insert(key);
            a_keys.insert(key);
        } else {
            b.insert(key);
            b_keys.insert(key);
        }
    }

    a.merge(&b);

    let union: Vec<u32> = a_keys.union(&b_keys).cloned().collect();
    assert_eq!(a.iter().cloned().collect::<Vec<u32>>(), union);
    assert_eq!(
        b.iter().cloned().collect::<Vec<u32>>(),
        b_keys.iter().cloned().collect::<Vec<u32>>(),
    );
}
