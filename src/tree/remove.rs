//! Single-value removal

use super::node::{half, rebalance, Internal, Node};

impl<T, const C: usize> Node<T, C> {
    /// Removes and returns the value at `idx` within the subtree
    ///
    /// Afterwards, `self` may be left with fewer than `half(C)` entries (or none at all); it's up
    /// to the caller to check [`is_underfull`] and fix it. `idx` must be less than `self.size()`.
    ///
    /// [`is_underfull`]: Node::is_underfull
    pub(super) fn remove(&mut self, idx: usize) -> T {
        match self {
            Node::Leaf(leaf) => {
                weak_assert!(idx < leaf.items.len());
                leaf.items.remove(idx)
            }
            Node::Internal(node) => node.remove(idx),
        }
    }
}

impl<T, const C: usize> Internal<T, C> {
    fn remove(&mut self, idx: usize) -> T {
        let (pos, rem) = self.locate(idx);
        let value = self.children[pos].remove(rem);
        self.shrink_counts(pos, 1);

        if self.children[pos].is_underfull() {
            self.fix_underfull(pos);
        }

        value
    }

    /// Restores the minimum length of the child at `pos` by merging it with (or borrowing from) an
    /// adjacent sibling
    fn fix_underfull(&mut self, pos: usize) {
        if self.children.len() == 1 {
            // Only reachable when `half(C) == 1`: the lone child is empty, so we drop it and let
            // our parent deal with us instead.
            weak_assert!(half(C) == 1);
            self.children.clear();
            self.counts.clear();
            return;
        }

        let left = pos.saturating_sub(1);
        let (before, after) = self.children.split_at_mut(left + 1);
        let merged = rebalance(&mut before[left], &mut after[0]);

        if merged {
            debug_println!("merged children {left} and {} at height {}", left + 1, self.height);
            self.children.remove(left + 1);
            self.counts.remove(left);
        } else {
            debug_println!("redistributed children {left} and {}", left + 1);
            self.counts[left] = self.prev_count(left) + self.children[left].size();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::build::build;
    use crate::tree::node::collapse;

    #[test]
    fn remove_everything_from_the_middle() {
        let mut values: Vec<u32> = (0..100).collect();
        let mut root = build::<u32, 4>(values.clone());

        while let Some(node) = root.as_mut() {
            let at = values.len() / 2;
            assert_eq!(node.remove(at), values.remove(at));
            root = collapse(root);

            let size = root.as_ref().map(|r| r.size()).unwrap_or(0);
            assert_eq!(size, values.len());
        }

        assert!(values.is_empty());
    }
}
