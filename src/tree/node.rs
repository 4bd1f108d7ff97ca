//! Node types and the primitive operations shared by the structural algorithms
//!
//! A tree is made of two kinds of nodes: [`Leaf`]s (the "leaf holders"), which store up to `C`
//! values directly, and [`Internal`] nodes, which store up to `C` children alongside a running
//! total of their sizes. Every node is owned by exactly one parent, so restructuring is done by
//! moving nodes between `Vec`s, never by patching pointers.
//!
//! All of the size bookkeeping lives here: the rank index ([`Internal::locate`]), incremental count
//! updates, and the merge-or-redistribute rule ([`rebalance`]) that both deletion and whole-tree
//! merging rely on.

use std::mem;

/// Minimum length of any non-root node with capacity `cap`
///
/// Equal to `ceil(cap / 2)`. Full nodes split into halves of `half(C)` and `C + 1 - half(C)`, and
/// both of those are at least `half(C)`, so this is the largest minimum we can guarantee.
pub(super) const fn half(cap: usize) -> usize {
    (cap + 1) / 2
}

/// A node in the tree: either internal, or a leaf holder
#[derive(Debug, Clone)]
pub(super) enum Node<T, const C: usize> {
    Internal(Internal<T, C>),
    Leaf(Leaf<T, C>),
}

/// An internal node, with between `half(C)` and `C` children (the root may have fewer)
#[derive(Debug, Clone)]
pub(super) struct Internal<T, const C: usize> {
    /// Height of the node, where leaf holders have height 1
    pub(super) height: usize,
    pub(super) children: Vec<Node<T, C>>,
    /// Prefix sums of the children's sizes: `counts[i]` is the total size of `children[..=i]`
    pub(super) counts: Vec<usize>,
}

/// A leaf holder: a flat batch of up to `C` values
#[derive(Debug, Clone)]
pub(super) struct Leaf<T, const C: usize> {
    pub(super) items: Vec<T>,
}

impl<T, const C: usize> Node<T, C> {
    /// Total number of values stored in the subtree
    pub(super) fn size(&self) -> usize {
        match self {
            Node::Internal(node) => node.size(),
            Node::Leaf(leaf) => leaf.items.len(),
        }
    }

    pub(super) fn height(&self) -> usize {
        match self {
            Node::Internal(node) => node.height,
            Node::Leaf(_) => 1,
        }
    }

    /// Number of children (for internal nodes) or values (for leaf holders)
    pub(super) fn len(&self) -> usize {
        match self {
            Node::Internal(node) => node.children.len(),
            Node::Leaf(leaf) => leaf.items.len(),
        }
    }

    pub(super) fn is_underfull(&self) -> bool {
        self.len() < half(C)
    }

    /// Returns a reference to the value at `idx` within this subtree
    ///
    /// `idx` must be less than `self.size()`.
    pub(super) fn get(&self, mut idx: usize) -> &T {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return &leaf.items[idx],
                Node::Internal(n) => {
                    let (pos, rem) = n.locate(idx);
                    node = &n.children[pos];
                    idx = rem;
                }
            }
        }
    }

    pub(super) fn get_mut(&mut self, mut idx: usize) -> &mut T {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return &mut leaf.items[idx],
                Node::Internal(n) => {
                    let (pos, rem) = n.locate(idx);
                    node = &mut n.children[pos];
                    idx = rem;
                }
            }
        }
    }

    /// Returns the rightmost leaf holder in the subtree
    pub(super) fn last_leaf_mut(&mut self) -> &mut Leaf<T, C> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf,
                Node::Internal(n) => match n.children.last_mut() {
                    Some(child) => node = child,
                    None => panic!("internal node at height {} has no children", n.height),
                },
            }
        }
    }

    /// Appends clones of every value in the subtree to `out`, in order
    pub(super) fn extend_vec(&self, out: &mut Vec<T>)
    where
        T: Clone,
    {
        match self {
            Node::Leaf(leaf) => out.extend_from_slice(&leaf.items),
            Node::Internal(n) => n.children.iter().for_each(|c| c.extend_vec(out)),
        }
    }

    /// Moves every value in the subtree into `out`, in order
    pub(super) fn drain_into(self, out: &mut Vec<T>) {
        match self {
            Node::Leaf(mut leaf) => out.append(&mut leaf.items),
            Node::Internal(n) => n.children.into_iter().for_each(|c| c.drain_into(out)),
        }
    }
}

impl<T, const C: usize> Leaf<T, C> {
    pub(super) fn single(value: T) -> Self {
        let mut items = Vec::with_capacity(C);
        items.push(value);
        Leaf { items }
    }
}

impl<T, const C: usize> Internal<T, C> {
    /// Creates a new internal node from a non-empty list of children with the same height
    pub(super) fn from_children(children: Vec<Node<T, C>>) -> Self {
        weak_assert!(!children.is_empty(), "internal node created without children");

        let height = children.first().map(|c| c.height()).unwrap_or(1) + 1;
        let mut counts = Vec::with_capacity(children.len());
        let mut total = 0;
        for c in &children {
            total += c.size();
            counts.push(total);
        }

        Internal {
            height,
            children,
            counts,
        }
    }

    pub(super) fn size(&self) -> usize {
        self.counts.last().copied().unwrap_or(0)
    }

    /// Total size of the children before `pos`
    pub(super) fn prev_count(&self, pos: usize) -> usize {
        match pos {
            0 => 0,
            _ => self.counts[pos - 1],
        }
    }

    /// Finds the child containing the global index `idx`, returning the child's index and the
    /// position of `idx` within that child
    ///
    /// `idx` must be less than `self.size()`.
    pub(super) fn locate(&self, idx: usize) -> (usize, usize) {
        weak_assert!(
            idx < self.size(),
            "index {idx} out of bounds for node of size {}",
            self.size(),
        );

        let pos = self.counts.partition_point(|&c| c <= idx);
        (pos, idx - self.prev_count(pos))
    }

    /// Like [`locate`](Self::locate), but additionally maps `idx == self.size()` to the end of the
    /// last child
    pub(super) fn locate_insert(&self, idx: usize) -> (usize, usize) {
        if idx < self.size() {
            return self.locate(idx);
        }

        let pos = self.children.len() - 1;
        (pos, idx - self.prev_count(pos))
    }

    /// Adds `amount` to every count from `from` onwards
    pub(super) fn grow_counts(&mut self, from: usize, amount: usize) {
        self.counts[from..].iter_mut().for_each(|c| *c += amount);
    }

    /// Subtracts `amount` from every count from `from` onwards
    pub(super) fn shrink_counts(&mut self, from: usize, amount: usize) {
        self.counts[from..].iter_mut().for_each(|c| *c -= amount);
    }

    /// Rebuilds the counts for every child from `from` onwards
    pub(super) fn recount(&mut self, from: usize) {
        let mut total = self.prev_count(from);
        for (count, child) in self.counts[from..].iter_mut().zip(&self.children[from..]) {
            total += child.size();
            *count = total;
        }
    }

    /// Inserts `child` at index `at`, where the size of the neighbour at `at - 1` (or `at + 1`,
    /// if `at == 0`) may also have changed
    ///
    /// If this leaves the node with more than `C` children, the upper part is split off and
    /// returned as an overflow node, to be placed immediately after `self`.
    pub(super) fn absorb(&mut self, at: usize, child: Node<T, C>) -> Option<Self> {
        weak_assert!(child.height() + 1 == self.height);

        self.children.insert(at, child);
        self.counts.insert(at, 0);
        self.recount(at.saturating_sub(1));

        if self.children.len() <= C {
            return None;
        }

        debug_println!(
            "splitting internal node at height {} around child {at}",
            self.height
        );
        Some(self.split_off(half(C)))
    }

    /// Splits the node in two, keeping `children[..at]` and returning `children[at..]`
    ///
    /// The counts of the returned node are rebased instead of recomputed.
    pub(super) fn split_off(&mut self, at: usize) -> Self {
        let children = self.children.split_off(at);
        let mut counts = self.counts.split_off(at);
        let base = self.size();
        counts.iter_mut().for_each(|c| *c -= base);

        Internal {
            height: self.height,
            children,
            counts,
        }
    }

    /// Removes and returns the first child, rebasing the remaining counts
    pub(super) fn take_first(&mut self) -> Node<T, C> {
        let first = self.children.remove(0);
        let size = self.counts.remove(0);
        self.shrink_counts(0, size);
        first
    }

    /// Moves children between `self` and its right-hand neighbour `right`, either merging all of
    /// `right` into `self` or evening out the two. Returns true if they were merged (in which case
    /// `right` is left empty)
    fn rebalance(&mut self, right: &mut Self) -> bool {
        let total = self.children.len() + right.children.len();
        if total <= C {
            let base = self.size();
            self.children.append(&mut right.children);
            self.counts.extend(right.counts.drain(..).map(|c| c + base));
            return true;
        }

        let target = total / 2;
        if self.children.len() > target {
            let moved = self.split_off(target);
            let moved_size = moved.size();
            right.grow_counts(0, moved_size);
            right.children.splice(0..0, moved.children);
            right.counts.splice(0..0, moved.counts);
        } else if self.children.len() < target {
            let take = target - self.children.len();
            let base = self.size();
            let moved_size = right.counts[take - 1];
            self.children.extend(right.children.drain(..take));
            self.counts.extend(right.counts.drain(..take).map(|c| c + base));
            right.shrink_counts(0, moved_size);
        }

        false
    }
}

/// Inserts `value` at `at` into the full vector `left`, splitting it into two: `left` keeps the
/// first `half(C)` elements and the remaining `C + 1 - half(C)` are returned
pub(super) fn split_insert<E, const C: usize>(left: &mut Vec<E>, at: usize, value: E) -> Vec<E> {
    weak_assert!(left.len() == C);

    let h = half(C);
    if at < h {
        let right = left.split_off(h - 1);
        left.insert(at, value);
        right
    } else {
        let mut right = left.split_off(h);
        right.insert(at - h, value);
        right
    }
}

/// Merge-or-redistribute for two adjacent leaf holders' values
fn rebalance_items<E, const C: usize>(left: &mut Vec<E>, right: &mut Vec<E>) -> bool {
    let total = left.len() + right.len();
    if total <= C {
        left.append(right);
        return true;
    }

    let target = total / 2;
    if left.len() > target {
        let mut moved = left.split_off(target);
        moved.append(right);
        *right = moved;
    } else if left.len() < target {
        let take = target - left.len();
        left.extend(right.drain(..take));
    }

    false
}

/// Combines two adjacent nodes of the same height
///
/// If their combined length fits in a single node, everything is moved into `left` and this
/// function returns true, leaving `right` empty. Otherwise, entries are moved so that `left` has
/// half of the combined length (rounded down) and `right` has the rest.
pub(super) fn rebalance<T, const C: usize>(left: &mut Node<T, C>, right: &mut Node<T, C>) -> bool {
    let merged = match (left, right) {
        (Node::Leaf(l), Node::Leaf(r)) => rebalance_items::<T, C>(&mut l.items, &mut r.items),
        (Node::Internal(l), Node::Internal(r)) => {
            weak_assert!(l.height == r.height);
            l.rebalance(r)
        }
        (l, r) => unreachable!(
            "cannot rebalance nodes of different heights {} and {}",
            l.height(),
            r.height()
        ),
    };

    debug_println!("rebalance: merged = {merged}");
    merged
}

/// Removes single-child internal nodes (and empty nodes) from the top of the tree, returning the
/// new root
pub(super) fn collapse<T, const C: usize>(mut root: Option<Node<T, C>>) -> Option<Node<T, C>> {
    loop {
        match root {
            Some(Node::Internal(ref mut n)) if n.children.len() <= 1 => {
                debug_println!("collapsing root at height {}", n.height);
                root = n.children.pop();
            }
            Some(Node::Leaf(ref l)) if l.items.is_empty() => return None,
            other => return other,
        }
    }
}

/// Replaces `node` with a new internal node containing `[node, overflow]`
pub(super) fn grow_root<T, const C: usize>(node: &mut Node<T, C>, overflow: Node<T, C>) {
    debug_println!("growing root to height {}", node.height() + 1);
    let placeholder = Node::Leaf(Leaf { items: Vec::new() });
    let old = mem::replace(node, placeholder);
    *node = Node::Internal(Internal::from_children(vec![old, overflow]));
}
