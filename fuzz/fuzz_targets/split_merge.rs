#![no_main]
use hyperion::SeqTree;
use libfuzzer_sys::fuzz_target;

type Tree = SeqTree<u8, 3>;

fuzz_target!(|input: (Tree, Tree, usize)| {
    let (left, right, at) = input;
    let expected: Vec<u8> = left.iter().chain(right.iter()).copied().collect();

    let merged = SeqTree::merge(left, right);
    assert!(merged.is_valid());
    assert_eq!(merged.to_vec(), expected);

    let at = at % (expected.len() + 1);
    let (left, right) = merged.split(at);
    assert!(left.is_valid());
    assert!(right.is_valid());
    assert_eq!(left.to_vec(), expected[..at]);
    assert_eq!(right.to_vec(), expected[at..]);
});
