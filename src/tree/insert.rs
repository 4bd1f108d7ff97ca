//! Single-value insertion

use super::node::{split_insert, Internal, Leaf, Node};

impl<T, const C: usize> Node<T, C> {
    /// Inserts `value` at `idx` within the subtree, returning the overflow node if `self` had to
    /// be split
    ///
    /// The overflow node (if any) has the same height as `self` and belongs immediately after it.
    /// `idx` must not be greater than `self.size()`.
    pub(super) fn insert(&mut self, idx: usize, value: T) -> Option<Self> {
        match self {
            Node::Leaf(leaf) => leaf.insert(idx, value).map(Node::Leaf),
            Node::Internal(node) => node.insert(idx, value).map(Node::Internal),
        }
    }
}

impl<T, const C: usize> Leaf<T, C> {
    fn insert(&mut self, idx: usize, value: T) -> Option<Self> {
        weak_assert!(idx <= self.items.len());

        if self.items.len() < C {
            self.items.insert(idx, value);
            return None;
        }

        debug_println!("splitting full leaf holder at offset {idx}");
        let items = split_insert::<T, C>(&mut self.items, idx, value);
        Some(Leaf { items })
    }
}

impl<T, const C: usize> Internal<T, C> {
    fn insert(&mut self, idx: usize, value: T) -> Option<Self> {
        let (pos, rem) = self.locate_insert(idx);

        match self.children[pos].insert(rem, value) {
            None => {
                self.grow_counts(pos, 1);
                None
            }
            Some(overflow) => self.absorb(pos + 1, overflow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::{grow_root, half};

    fn collect<const C: usize>(node: &Node<u32, C>) -> Vec<u32> {
        let mut out = Vec::new();
        node.extend_vec(&mut out);
        out
    }

    #[test]
    fn full_leaf_splits_evenly() {
        for at in 0..=4 {
            let mut node: Node<u32, 4> = Node::Leaf(Leaf {
                items: vec![0, 1, 2, 3],
            });
            let overflow = node.insert(at, 9).expect("full leaf should split");
            assert_eq!(node.len(), half(4));
            assert_eq!(overflow.len(), 5 - half(4));

            let mut expected = vec![0, 1, 2, 3];
            expected.insert(at, 9);
            let mut got = collect(&node);
            got.extend(collect(&overflow));
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn counts_follow_insertions() {
        let mut root: Node<u32, 3> = Node::Leaf(Leaf::single(0));
        let mut expected = vec![0];
        for v in 1..40 {
            let at = (v as usize * 7) % (expected.len() + 1);
            expected.insert(at, v);
            if let Some(overflow) = root.insert(at, v) {
                grow_root(&mut root, overflow);
            }

            assert_eq!(root.size(), expected.len());
            assert_eq!(collect(&root), expected);
        }

        assert!(root.height() > 2);
    }
}
