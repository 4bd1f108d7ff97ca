//! Whole-tree splitting

use super::merge::concat;
use super::node::{collapse, Internal, Leaf, Node};

/// Splits the tree rooted at `node` so that the left side contains the first `at` values and the
/// right side contains the rest
///
/// `at` must not be greater than `node.size()`. Either side is `None` if it would be empty.
pub(super) fn split<T, const C: usize>(
    node: Node<T, C>,
    at: usize,
) -> (Option<Node<T, C>>, Option<Node<T, C>>) {
    if at == 0 {
        return (None, Some(node));
    } else if at >= node.size() {
        return (Some(node), None);
    }

    let (left, right) = match node {
        Node::Leaf(mut leaf) => {
            let items = leaf.items.split_off(at);
            let right = Node::Leaf(Leaf { items });
            (Some(Node::Leaf(leaf)), Some(right))
        }
        Node::Internal(mut node) => {
            let (pos, rem) = node.locate(at);
            let mut right = node.split_off(pos);

            if rem == 0 {
                // The boundary falls between two children; `pos` can't be zero here, because
                // then `rem` would be equal to `at`.
                debug_println!("split: cutting at child boundary {pos}");
                (Some(Node::Internal(node)), Some(Node::Internal(right)))
            } else {
                debug_println!("split: descending into child {pos} at offset {rem}");
                let middle = right.take_first();
                let (mid_left, mid_right) = split(middle, rem);
                (
                    concat(non_empty(node), mid_left),
                    concat(mid_right, non_empty(right)),
                )
            }
        }
    };

    (collapse(left), collapse(right))
}

fn non_empty<T, const C: usize>(node: Internal<T, C>) -> Option<Node<T, C>> {
    match node.children.is_empty() {
        true => None,
        false => Some(Node::Internal(node)),
    }
}
