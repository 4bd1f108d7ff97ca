//! Cyclic rotation of the tail of the tree

use super::merge::concat;
use super::node::{half, Leaf};
use super::split::split;
use super::SeqTree;

impl<T, const C: usize> SeqTree<T, C> {
    /// Rotates the last `depth` values of the tree so that the final `count` of them move in front
    /// of the other `depth - count`
    ///
    /// `count` is taken modulo `depth`, so a negative `count` rotates the other way: with a `depth`
    /// of 5, a `count` of -1 is the same as 4. This method does nothing if `depth` is zero or
    /// greater than [`self.size()`](Self::size).
    ///
    /// Short rotations that fit within the final leaf holder are done in place. Anything longer is
    /// done by splitting off the affected range and merging the two pieces back in swapped order,
    /// so the cost is O(log n) either way.
    ///
    /// ## Examples
    ///
    /// ```
    /// use hyperion::SeqTree;
    ///
    /// let mut tree: SeqTree<u32> = (0..6).collect();
    /// tree.roll(4, 1);
    /// assert_eq!(tree.to_vec(), [0, 1, 5, 2, 3, 4]);
    /// tree.roll(4, -1);
    /// assert_eq!(tree.to_vec(), [0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn roll(&mut self, depth: usize, count: isize) {
        if depth == 0 || depth > self.size() {
            return;
        }

        let count = normalize_count(count, depth);
        if count == 0 {
            return;
        }

        self.cursor = None;

        let root = match self.root.take() {
            Some(r) => r,
            None => return,
        };

        // The last leaf holder of a valid tree always has at least `min(half(C), size)` values,
        // so any rotation no deeper than that stays within it.
        if depth <= half(C) {
            debug_println!("roll: rotating {depth} by {count} within the last leaf holder");
            let mut root = root;
            rotate_tail(root.last_leaf_mut(), depth, count);
            self.root = Some(root);
            return;
        }

        debug_println!("roll: rotating {depth} by {count} with split and merge");
        let size = root.size();
        let (base, block) = split(root, size - depth);
        let (front, back) = match block {
            Some(b) => split(b, depth - count),
            None => (None, None),
        };

        self.root = concat(base, concat(back, front));
    }
}

/// Maps `count` into `0..depth`
fn normalize_count(count: isize, depth: usize) -> usize {
    let magnitude = count.unsigned_abs() % depth;
    match count < 0 && magnitude != 0 {
        true => depth - magnitude,
        false => magnitude,
    }
}

/// Rotates the last `depth` items of the leaf holder right by `count`, with three reversals
fn rotate_tail<T, const C: usize>(leaf: &mut Leaf<T, C>, depth: usize, count: usize) {
    let n = leaf.items.len();
    weak_assert!(depth <= n);

    leaf.items[n - depth..n - count].reverse();
    leaf.items[n - count..].reverse();
    leaf.items[n - depth..].reverse();
}

#[cfg(test)]
mod tests {
    use super::normalize_count;

    #[test]
    fn counts_wrap_around() {
        assert_eq!(normalize_count(0, 5), 0);
        assert_eq!(normalize_count(3, 5), 3);
        assert_eq!(normalize_count(5, 5), 0);
        assert_eq!(normalize_count(12, 5), 2);
        assert_eq!(normalize_count(-1, 5), 4);
        assert_eq!(normalize_count(-5, 5), 0);
        assert_eq!(normalize_count(-7, 5), 3);
        assert_eq!(normalize_count(isize::MIN, 3), 1);
    }
}
