use crate::SeqTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn basic_insert() {
    let mut tree: SeqTree<char, 2> = SeqTree::new();
    tree.insert_at(0, 'a');
    tree.insert_at(0, 'b');
    tree.insert_at(2, 'c');
    tree.insert_at(1, 'd');
    tree.insert_at(1, 'e');
    tree.insert_at(5, 'f');
    tree.validate();

    assert_eq!(tree.to_vec(), ['b', 'e', 'd', 'a', 'c', 'f']);
    assert_eq!(tree.size(), 6);
    assert!(tree.height() >= 3);
}

#[test]
fn insert_out_of_bounds_panics() {
    assert!(std::panic::catch_unwind(|| {
        let mut tree: SeqTree<u32> = (0..10).collect();
        tree.insert_at(11, 0);
    })
    .is_err());
}

#[test]
fn delete_out_of_bounds_is_none() {
    let mut tree: SeqTree<u32, 3> = (0..10).collect();
    assert_eq!(tree.delete_at(10), None);
    assert_eq!(tree.delete_at(usize::MAX), None);
    assert_eq!(tree.size(), 10);

    let mut empty: SeqTree<u32> = SeqTree::new();
    assert_eq!(empty.delete_at(0), None);
    assert_eq!(empty.pop_back(), None);
    assert_eq!(empty.pop_front(), None);
}

#[test]
fn build_round_trip() {
    for n in [0, 1, 2, 3, 4, 5, 7, 8, 9, 26, 27, 28, 100, 1000] {
        let values: Vec<u32> = (0..n).collect();
        let tree: SeqTree<u32, 3> = SeqTree::build_from(values.clone());
        tree.validate();
        assert_eq!(tree.to_vec(), values);
        assert_eq!(tree.size(), n as usize);
    }

    let tree: SeqTree<u32> = SeqTree::build_from((0..20_000).collect());
    tree.validate();
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.to_vec(), (0..20_000).collect::<Vec<_>>());
}

#[test]
fn roll_half_of_256() {
    let mut tree: SeqTree<u32, 128> = SeqTree::build_from((0..256).collect());
    tree.roll(256, 128);
    tree.validate();

    let expected: Vec<u32> = (128..256).chain(0..128).collect();
    assert_eq!(tree.to_vec(), expected);
}

#[test]
fn roll_edge_cases() {
    let mut tree: SeqTree<u32, 4> = (0..30).collect();
    let original = tree.to_vec();

    // no-ops
    tree.roll(0, 5);
    tree.roll(31, 5);
    tree.roll(10, 0);
    tree.roll(10, 20);
    tree.roll(10, -10);
    assert_eq!(tree.to_vec(), original);

    // in place, within the last leaf holder
    tree.roll(2, 1);
    tree.validate();
    let mut expected = original.clone();
    expected[28..].rotate_right(1);
    assert_eq!(tree.to_vec(), expected);

    // whole tree, negative count
    tree.roll(30, -7);
    tree.validate();
    expected.rotate_left(7);
    assert_eq!(tree.to_vec(), expected);
}

#[test]
fn random_insert_then_delete_300k() {
    const COUNT: usize = 300_000;

    let mut rng = StdRng::seed_from_u64(1);
    let mut tree: SeqTree<usize> = SeqTree::new();

    for i in 0..COUNT {
        let at = rng.gen_range(0..=tree.size());
        tree.insert_at(at, i);
        assert_eq!(tree.size(), i + 1);
    }
    tree.validate();

    for remaining in (0..COUNT).rev() {
        let at = rng.gen_range(0..tree.size());
        assert!(tree.delete_at(at).is_some());
        assert_eq!(tree.size(), remaining);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn search_matches_to_vec() {
    let mut tree: SeqTree<u32, 3> = (0..200).map(|i| i * 3).collect();
    let values = tree.to_vec();

    for (i, v) in values.iter().enumerate() {
        assert!(tree.search_at(i));
        assert_eq!(tree.get_data(), Some(v));
        assert_eq!(tree.get(i), Some(v));
        assert_eq!(tree[i], *v);

        let cursor = tree.cursor().expect("search succeeded");
        assert_eq!(cursor.index(), i);
        assert_eq!(cursor.path().len(), tree.height() - 1);
    }

    assert!(!tree.search_at(200));
    assert_eq!(tree.get_data(), None);
    assert!(!tree.set_data(0));
}

#[test]
fn cursor_invalidated_by_mutation() {
    let mut tree: SeqTree<u32, 4> = (0..50).collect();
    assert!(tree.search_at(10));
    assert!(tree.set_data(100));
    assert_eq!(tree.get_data(), Some(&100));
    assert_eq!(tree.get(10), Some(&100));

    tree.insert_at(0, 7);
    assert_eq!(tree.get_data(), None);
    assert!(!tree.set_data(5));
    assert_eq!(tree.get(11), Some(&100));

    assert!(tree.search_at(0));
    tree.push_back(1);
    assert!(tree.cursor().is_none());
}

#[test]
fn set_and_index_mut() {
    let mut tree: SeqTree<String, 3> = (0..20).map(|i| i.to_string()).collect();
    assert_eq!(tree.set(5, "five".to_string()), Some("5".to_string()));
    assert_eq!(tree.set(20, "nope".to_string()), None);
    tree[6].push('!');
    *tree.get_mut(7).expect("in bounds") = "seven".into();

    assert_eq!(&tree[5], "five");
    assert_eq!(&tree[6], "6!");
    assert_eq!(&tree[7], "seven");
    assert_eq!(tree.first().map(String::as_str), Some("0"));
    assert_eq!(tree.last().map(String::as_str), Some("19"));
}

#[test]
fn index_out_of_bounds_panics() {
    assert!(std::panic::catch_unwind(|| {
        let tree: SeqTree<u32> = (0..3).collect();
        tree[3]
    })
    .is_err());
}

#[test]
fn push_and_pop_at_both_ends() {
    let mut tree: SeqTree<i32, 2> = SeqTree::new();
    for i in 0..100 {
        tree.push_back(i);
        tree.push_front(-i - 1);
        tree.validate();
    }

    let expected: Vec<i32> = (-100..100).collect();
    assert_eq!(tree.to_vec(), expected);

    for i in (0..100).rev() {
        assert_eq!(tree.pop_back(), Some(i));
        assert_eq!(tree.pop_front(), Some(-i - 1));
        tree.validate();
    }

    assert!(tree.is_empty());
}

#[test]
fn merge_trees_of_different_heights() {
    for (l, r) in [(0, 5), (1, 1), (1, 300), (300, 1), (17, 250), (250, 17), (128, 128)] {
        let left: SeqTree<u32, 3> = (0..l).collect();
        let right: SeqTree<u32, 3> = (l..l + r).collect();

        let merged = SeqTree::merge(left, right);
        merged.validate();
        assert_eq!(merged.to_vec(), (0..l + r).collect::<Vec<_>>());
    }
}

#[test]
fn split_at_every_position() {
    let values: Vec<u32> = (0..150).collect();
    let tree: SeqTree<u32, 4> = SeqTree::build_from(values.clone());

    for at in 0..=values.len() {
        let (left, right) = tree.clone().split(at);
        left.validate();
        right.validate();
        assert_eq!(left.to_vec(), values[..at]);
        assert_eq!(right.to_vec(), values[at..]);

        let joined = SeqTree::merge(left, right);
        joined.validate();
        assert_eq!(joined.to_vec(), values);
    }
}

#[test]
fn split_out_of_bounds_panics() {
    assert!(std::panic::catch_unwind(|| {
        let tree: SeqTree<u32> = (0..3).collect();
        tree.split(4)
    })
    .is_err());
}

#[test]
fn split_off_and_append() {
    let mut tree: SeqTree<u32, 3> = (0..40).collect();
    let mut tail = tree.split_off(25);
    assert_eq!(tree.size(), 25);
    assert_eq!(tail.size(), 15);

    tail.append(&mut tree);
    tail.validate();
    assert!(tree.is_empty());

    let expected: Vec<u32> = (25..40).chain(0..25).collect();
    assert_eq!(tail.to_vec(), expected);

    tree.extend(0..5);
    tree.extend(5..10);
    assert_eq!(tree.to_vec(), (0..10).collect::<Vec<_>>());
}

#[test]
fn trait_impls() {
    let a: SeqTree<u32, 3> = (0..10).collect();
    let b: SeqTree<u32, 3> = SeqTree::from((0..10).collect::<Vec<_>>());
    let mut c = b.clone();
    assert_eq!(a, b);
    assert_eq!(a, c);

    c.set(0, 1);
    assert_ne!(a, c);
    assert_eq!(format!("{:?}", SeqTree::<u32>::from(vec![1, 2, 3])), "[1, 2, 3]");
    assert!(SeqTree::<u8>::default().is_empty());

    let summed: u32 = (&a).into_iter().sum();
    assert_eq!(summed, 45);
}

#[test]
fn capacity_constants() {
    assert_eq!(SeqTree::<u8>::CAPACITY, 128);
    assert_eq!(SeqTree::<u8>::HALF_CAPACITY, 64);
    assert_eq!(SeqTree::<u8, 2>::HALF_CAPACITY, 1);
    assert_eq!(SeqTree::<u8, 3>::HALF_CAPACITY, 2);
    assert_eq!(SeqTree::<u8, 255>::HALF_CAPACITY, 128);
}

#[test]
fn debug_output_traces_restructuring() {
    enable_debug!();
    let mut tree: SeqTree<u32, 2> = (0..8).collect();
    tree.insert_at(3, 100);
    tree.roll(5, 2);
    disable_debug!();

    tree.validate();
    assert_eq!(tree.size(), 9);
}
