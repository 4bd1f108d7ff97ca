//! Whole-tree concatenation

use super::node::{collapse, grow_root, rebalance, Node};
use std::mem;

/// Concatenates two trees, returning the root of the result
///
/// The shorter tree is attached along the adjoining edge of the taller one, at the level where
/// their heights match. Any node that overflows on the way back up is handled like an overflow from
/// insertion; an overflow at the top adds a new root.
pub(super) fn concat<T, const C: usize>(
    left: Option<Node<T, C>>,
    right: Option<Node<T, C>>,
) -> Option<Node<T, C>> {
    let (mut left, mut right) = match (left, right) {
        (None, r) => return collapse(r),
        (l, None) => return collapse(l),
        (Some(l), Some(r)) => (l, r),
    };

    debug_println!(
        "concat: left height {}, right height {}",
        left.height(),
        right.height()
    );

    let root = if left.height() >= right.height() {
        if let Some(overflow) = left.append(right) {
            grow_root(&mut left, overflow);
        }
        left
    } else {
        if let Some(overflow) = right.prepend(left) {
            let old = mem::replace(&mut right, overflow);
            grow_root(&mut right, old);
        }
        right
    };

    collapse(Some(root))
}

impl<T, const C: usize> Node<T, C> {
    /// Attaches `other` after the last value in `self`, returning an overflow node that belongs
    /// after `self`
    ///
    /// `other` may not be taller than `self`.
    fn append(&mut self, mut other: Self) -> Option<Self> {
        weak_assert!(self.height() >= other.height());

        if self.height() == other.height() {
            return match rebalance(self, &mut other) {
                true => None,
                false => Some(other),
            };
        }

        let node = match self {
            Node::Internal(n) => n,
            Node::Leaf(_) => unreachable!("leaf holder taller than another node"),
        };

        let pos = node.children.len() - 1;
        let added = other.size();
        match node.children[pos].append(other) {
            None => {
                node.grow_counts(pos, added);
                None
            }
            Some(overflow) => node.absorb(pos + 1, overflow).map(Node::Internal),
        }
    }

    /// Attaches `other` before the first value in `self`, returning an overflow node that belongs
    /// before `self`
    ///
    /// `other` may not be taller than `self`.
    fn prepend(&mut self, mut other: Self) -> Option<Self> {
        weak_assert!(self.height() >= other.height());

        if self.height() == other.height() {
            return match rebalance(&mut other, self) {
                true => {
                    *self = other;
                    None
                }
                false => Some(other),
            };
        }

        let node = match self {
            Node::Internal(n) => n,
            Node::Leaf(_) => unreachable!("leaf holder taller than another node"),
        };

        let added = other.size();
        match node.children[0].prepend(other) {
            None => {
                node.grow_counts(0, added);
                None
            }
            // `absorb` splits off the upper half, so we keep that one and pass the lower half up
            Some(overflow) => node.absorb(0, overflow).map(|upper| {
                let lower = mem::replace(node, upper);
                Node::Internal(lower)
            }),
        }
    }
}
