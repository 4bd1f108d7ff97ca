use crate::SeqTree;

type FuzzTree<const C: usize = 3> = SeqTree<char, C>;

#[test]
fn split_past_end_panics() {
    let mut tree_0: FuzzTree = SeqTree::new();
    tree_0.insert_at(0, 'K');
    tree_0.insert_at(1, 'B');
    assert!(std::panic::catch_unwind(move || {
        tree_0.split_off(3)
    }).is_err());
}

#[test]
fn insert_past_end_panics() {
    let mut tree_0: FuzzTree = SeqTree::new();
    tree_0.insert_at(0, 'A');
    assert_eq!(tree_0.get(1), None);
    assert!(std::panic::catch_unwind(move || {
        tree_0.insert_at(2, 'B')
    }).is_err());
}

#[test]
fn roll_across_leaves_then_pop() {
    let mut tree_0: FuzzTree = SeqTree::new();
    tree_0.push_back('A');
    tree_0.push_back('B');
    tree_0.push_back('C');
    tree_0.push_back('D');
    tree_0.push_back('E');
    tree_0.push_back('F');
    tree_0.roll(5, 2);
    assert_eq!(tree_0.get(1), Some(&'E'));
    assert_eq!(tree_0.delete_at(3), Some('B'));
    tree_0.roll(5, -1);
    assert_eq!(tree_0.pop_front(), Some('E'));
    assert_eq!(tree_0.pop_back(), Some('A'));
    assert_eq!(tree_0.search_at(2), true);
    assert_eq!(tree_0.get_data(), Some(&'D'));
}

#[test]
fn self_append_then_split() {
    let mut tree_0: FuzzTree = SeqTree::new();
    tree_0.insert_at(0, 'Q');
    tree_0.insert_at(0, 'R');
    tree_0.insert_at(1, 'S');
    tree_0.append(&mut tree_0.clone());
    let mut tree_1 = tree_0.split_off(4);
    assert_eq!(tree_1.search_at(1), true);
    assert_eq!(tree_1.get_data(), Some(&'Q'));
    tree_1.append(&mut tree_0);
    assert_eq!(tree_0.pop_back(), None);
    assert_eq!(tree_1.set(5, 'Z'), Some('R'));
    assert_eq!(tree_1.get(6), None);
    assert_eq!(tree_1.get(2), Some(&'R'));
}

#[test]
fn delete_to_empty_then_reuse() {
    let mut tree_0: FuzzTree = SeqTree::new();
    tree_0.push_front('M');
    tree_0.push_front('N');
    tree_0.push_back('O');
    assert_eq!(tree_0.delete_at(3), None);
    assert_eq!(tree_0.delete_at(1), Some('M'));
    assert_eq!(tree_0.delete_at(0), Some('N'));
    assert_eq!(tree_0.delete_at(0), Some('O'));
    assert_eq!(tree_0.search_at(0), false);
    assert_eq!(tree_0.get_data(), None);
    tree_0.roll(1, 5);
    tree_0.insert_at(0, 'P');
    assert_eq!(tree_0.get(0), Some(&'P'));
}

#[test]
fn split_at_both_ends() {
    let mut tree_0: FuzzTree = SeqTree::new();
    tree_0.push_back('A');
    tree_0.push_back('B');
    tree_0.push_back('C');
    tree_0.push_back('D');
    tree_0.push_back('E');
    tree_0.push_back('F');
    tree_0.push_back('G');
    let mut tree_1 = tree_0.split_off(0);
    let mut tree_2 = tree_1.split_off(7);
    tree_2.append(&mut tree_1);
    assert_eq!(tree_1.pop_front(), None);
    tree_2.roll(7, 3);
    assert_eq!(tree_2.get(0), Some(&'E'));
    assert_eq!(tree_2.get(6), Some(&'D'));
    drop(tree_0);
    assert_eq!(tree_2.delete_at(2), Some('G'));
    assert_eq!(tree_2.pop_back(), Some('D'));
    assert_eq!(tree_2.set(4, 'X'), Some('C'));
}

#[test]
fn insert_in_middle_of_full_leaves() {
    let mut tree_0: FuzzTree = SeqTree::new();
    tree_0.insert_at(0, 'H');
    tree_0.insert_at(1, 'J');
    tree_0.insert_at(1, 'I');
    tree_0.insert_at(3, 'L');
    tree_0.insert_at(3, 'K');
    tree_0.insert_at(0, 'G');
    tree_0.insert_at(6, 'M');
    tree_0.insert_at(2, 'Z');
    assert_eq!(tree_0.delete_at(2), Some('Z'));
    assert_eq!(tree_0.search_at(6), true);
    assert_eq!(tree_0.get_data(), Some(&'M'));
    assert_eq!(tree_0.get(3), Some(&'J'));
    tree_0.roll(2, 1);
    assert_eq!(tree_0.pop_back(), Some('L'));
    assert_eq!(tree_0.pop_back(), Some('M'));
}
