//! Wrapper module containing the tree itself

use crate::{Cursor, PathComponent};
use std::fmt::{self, Debug, Formatter};
use std::ops;

mod build;
mod insert;
mod iter;
mod merge;
mod node;
mod remove;
mod roll;
mod split;
#[cfg(test)]
mod tests;
mod validate;

pub use iter::{IntoIter, Iter};
pub use validate::{InvalidKind, InvalidTree};

use node::{collapse, grow_root, Leaf, Node};

/// The default maximum number of entries in a node; default parameterization for [`SeqTree`]
///
/// Larger nodes make the tree shallower, at the cost of more copying when a node is split or
/// values are shifted within it. A capacity of 128 means that a tree of height 3 can already hold
/// at least 128 * 64 * 64 = 524 288 values (and usually far more).
pub const DEFAULT_CAPACITY: usize = 128;

/// Order-statistics sequence: a list of values that supports O(log n) access, insertion and
/// removal at any position, plus O(log n) concatenation, splitting and rotation
///
/// Internally, this is a B+-tree indexed by position instead of by key. Values are stored in
/// batches of up to `C` in the leaf holders at the bottom of the tree, and every internal node
/// keeps a running total of the sizes of its children. Looking up position `i` is then a binary
/// search at each level, and insertions and removals only update the totals along a single path.
///
/// The const parameter `C` sets the maximum number of children (or values) in each node. Every
/// node except the root has at least `ceil(C / 2)` entries, which keeps all of the leaf holders at
/// the same depth. `C` must be between 2 and 256, inclusive.
///
/// ## Examples
///
/// ```
/// use hyperion::SeqTree;
///
/// let mut tree: SeqTree<char> = "hello".chars().collect();
/// tree.insert_at(5, '!');
/// tree.delete_at(0);
/// tree.push_front('j');
/// assert_eq!(tree.iter().collect::<String>(), "jello!");
///
/// let (left, right) = tree.split(3);
/// assert_eq!(left.to_vec(), ['j', 'e', 'l']);
/// assert_eq!(right.to_vec(), ['l', 'o', '!']);
///
/// let tree = SeqTree::merge(right, left);
/// assert_eq!(tree.iter().collect::<String>(), "lo!jel");
/// ```
#[derive(Clone)]
pub struct SeqTree<T, const C: usize = DEFAULT_CAPACITY> {
    root: Option<Node<T, C>>,
    cursor: Option<Cursor>,
}

/// (*Internal*) Checks that the value of `C` provided for a `SeqTree` is within the allowed bounds
const fn assert_reasonable_capacity<const C: usize>() {
    // Paths through the tree store child indexes as a `u8`, so we can't have more than 256
    // children in a node.
    if C > 256 {
        panic!("cannot construct SeqTree: const C must be <= 256");
    }

    // With a capacity of one, splitting a node wouldn't make any progress.
    if C < 2 {
        panic!("cannot construct SeqTree: const C must be >= 2");
    }
}

impl<T, const C: usize> SeqTree<T, C> {
    /// The maximum number of children of an internal node, or values in a leaf holder
    pub const CAPACITY: usize = C;

    /// The minimum number of children (or values) of every node except the root
    pub const HALF_CAPACITY: usize = node::half(C);

    /// Creates a new, empty `SeqTree`
    ///
    /// This method will panic if `C` is not between 2 and 256.
    pub const fn new() -> Self {
        assert_reasonable_capacity::<C>();

        SeqTree {
            root: None,
            cursor: None,
        }
    }

    /// Creates a balanced `SeqTree` containing `items`, in O(n) time
    ///
    /// ## Panics
    ///
    /// Like [`new`](Self::new), this method will panic if `C` is not between 2 and 256.
    pub fn build_from(items: Vec<T>) -> Self {
        assert_reasonable_capacity::<C>();

        SeqTree {
            root: build::build(items),
            cursor: None,
        }
    }

    /// Returns the number of values in the tree
    pub fn size(&self) -> usize {
        self.root.as_ref().map(|r| r.size()).unwrap_or(0)
    }

    /// Returns true if the tree contains no values
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree: zero if it's empty, one if all values are stored in the
    /// root, and one more for each level of internal nodes above that
    pub fn height(&self) -> usize {
        self.root.as_ref().map(|r| r.height()).unwrap_or(0)
    }

    /// Removes every value from the tree
    pub fn clear(&mut self) {
        self.root = None;
        self.cursor = None;
    }

    /// Returns a reference to the value at `idx`, or `None` if it's out of bounds
    pub fn get(&self, idx: usize) -> Option<&T> {
        match self.root.as_ref() {
            Some(root) if idx < root.size() => Some(root.get(idx)),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value at `idx`, or `None` if it's out of bounds
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        match self.root.as_mut() {
            Some(root) if idx < root.size() => Some(root.get_mut(idx)),
            _ => None,
        }
    }

    /// Replaces the value at `idx`, returning the previous one
    ///
    /// If `idx` is out of bounds, the tree is left unchanged and `value` is dropped.
    pub fn set(&mut self, idx: usize, value: T) -> Option<T> {
        self.get_mut(idx).map(|v| std::mem::replace(v, value))
    }

    /// Returns the first value in the tree, if there is one
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the last value in the tree, if there is one
    pub fn last(&self) -> Option<&T> {
        self.size().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Inserts `value` at position `idx`, shifting all later values by one
    ///
    /// ## Panics
    ///
    /// This method will panic if `idx` is *greater* than [`self.size()`]. An index equal to the
    /// current size of the tree is explicitly allowed, and appends the value.
    ///
    /// [`self.size()`]: Self::size
    pub fn insert_at(&mut self, idx: usize, value: T) {
        let size = self.size();
        if idx > size {
            panic!("insertion index {idx} out of bounds for tree of size {size}");
        }

        self.cursor = None;

        match self.root.as_mut() {
            None => self.root = Some(Node::Leaf(Leaf::single(value))),
            Some(root) => {
                if let Some(overflow) = root.insert(idx, value) {
                    grow_root(root, overflow);
                }
            }
        }
    }

    /// Removes and returns the value at position `idx`, shifting all later values back by one
    ///
    /// Returns `None` if `idx` is out of bounds, leaving the tree unchanged.
    pub fn delete_at(&mut self, idx: usize) -> Option<T> {
        let root = match self.root.as_mut() {
            Some(r) if idx < r.size() => r,
            _ => return None,
        };

        self.cursor = None;
        let value = root.remove(idx);
        self.root = collapse(self.root.take());
        Some(value)
    }

    /// Adds `value` to the start of the tree
    pub fn push_front(&mut self, value: T) {
        self.cursor = None;
        let single = Some(Node::Leaf(Leaf::single(value)));
        self.root = merge::concat(single, self.root.take());
    }

    /// Adds `value` to the end of the tree
    pub fn push_back(&mut self, value: T) {
        self.cursor = None;
        let single = Some(Node::Leaf(Leaf::single(value)));
        self.root = merge::concat(self.root.take(), single);
    }

    /// Removes the first value from the tree and returns it, or `None` if the tree is empty
    pub fn pop_front(&mut self) -> Option<T> {
        self.delete_at(0)
    }

    /// Removes the last value from the tree and returns it, or `None` if the tree is empty
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.size().checked_sub(1)?;
        self.delete_at(last)
    }

    /// Concatenates two trees, so that all of the values in `left` come before those in `right`
    ///
    /// This takes O(log n) time; only the nodes along the edge where the two trees meet are
    /// changed.
    pub fn merge(mut left: Self, mut right: Self) -> Self {
        SeqTree {
            root: merge::concat(left.root.take(), right.root.take()),
            cursor: None,
        }
    }

    /// Moves all of the values in `other` to the end of `self`, leaving `other` empty
    pub fn append(&mut self, other: &mut Self) {
        self.cursor = None;
        other.cursor = None;
        self.root = merge::concat(self.root.take(), other.root.take());
    }

    /// Splits the tree in two, with the first `at` values on the left and the rest on the right
    ///
    /// ## Panics
    ///
    /// This method panics if `at` is greater than [`self.size()`](Self::size).
    pub fn split(mut self, at: usize) -> (Self, Self) {
        let right = self.split_off(at);
        (self, right)
    }

    /// Splits the tree at `at`, returning everything from `at` onwards and keeping the rest
    ///
    /// ## Panics
    ///
    /// This method panics if `at` is greater than [`self.size()`](Self::size).
    pub fn split_off(&mut self, at: usize) -> Self {
        let size = self.size();
        if at > size {
            panic!("split index {at} out of bounds for tree of size {size}");
        }

        self.cursor = None;
        let (left, right) = match self.root.take() {
            Some(root) => split::split(root, at),
            None => (None, None),
        };

        self.root = left;
        SeqTree {
            root: right,
            cursor: None,
        }
    }

    /// Searches for position `idx`, recording the path to it so that it can be accessed with
    /// [`get_data`] and [`set_data`]
    ///
    /// Returns false (and forgets any previous search) if `idx` is out of bounds.
    ///
    /// [`get_data`]: Self::get_data
    /// [`set_data`]: Self::set_data
    pub fn search_at(&mut self, idx: usize) -> bool {
        self.cursor = None;

        let mut node = match self.root.as_ref() {
            Some(r) if idx < r.size() => r,
            _ => return false,
        };

        let mut path = Vec::with_capacity(node.height() - 1);
        let mut offset = idx;
        while let Node::Internal(n) = node {
            let (pos, rem) = n.locate(offset);
            path.push(PathComponent {
                child_idx: pos as u8,
            });
            node = &n.children[pos];
            offset = rem;
        }

        self.cursor = Some(Cursor {
            path,
            offset,
            index: idx,
        });
        true
    }

    /// Returns the value found by the last successful [`search_at`], if the tree hasn't been
    /// restructured since
    ///
    /// [`search_at`]: Self::search_at
    pub fn get_data(&self) -> Option<&T> {
        let cursor = self.cursor.as_ref()?;
        let mut node = self.root.as_ref()?;
        for c in &cursor.path {
            node = match node {
                Node::Internal(n) => n.children.get(c.child_idx())?,
                Node::Leaf(_) => return None,
            };
        }

        match node {
            Node::Leaf(leaf) => leaf.items.get(cursor.offset),
            Node::Internal(_) => None,
        }
    }

    /// Replaces the value found by the last successful [`search_at`], returning true if there was
    /// one
    ///
    /// If there's no valid search to use, `value` is dropped and false is returned.
    ///
    /// [`search_at`]: Self::search_at
    pub fn set_data(&mut self, value: T) -> bool {
        let cursor = match self.cursor.as_ref() {
            Some(c) => c,
            None => return false,
        };

        let mut node = match self.root.as_mut() {
            Some(r) => r,
            None => return false,
        };
        for c in &cursor.path {
            node = match node {
                Node::Internal(n) => match n.children.get_mut(c.child_idx()) {
                    Some(child) => child,
                    None => return false,
                },
                Node::Leaf(_) => return false,
            };
        }

        match node {
            Node::Leaf(leaf) => match leaf.items.get_mut(cursor.offset) {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            },
            Node::Internal(_) => false,
        }
    }

    /// Returns the cursor recorded by the last successful [`search_at`], if it's still valid
    ///
    /// [`search_at`]: Self::search_at
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// Returns a double-ended iterator over the values in the tree, in order
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self.root.as_ref())
    }

    /// Copies all of the values in the tree into a `Vec`, in order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.size());
        if let Some(root) = self.root.as_ref() {
            root.extend_vec(&mut out);
        }
        out
    }
}

impl<T, const C: usize> Default for SeqTree<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, const C: usize> Debug for SeqTree<T, C> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const C: usize> PartialEq for SeqTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const C: usize> Eq for SeqTree<T, C> {}

impl<T, const C: usize> From<Vec<T>> for SeqTree<T, C> {
    fn from(items: Vec<T>) -> Self {
        Self::build_from(items)
    }
}

impl<T, const C: usize> FromIterator<T> for SeqTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from(iter.into_iter().collect())
    }
}

impl<T, const C: usize> Extend<T> for SeqTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail: Self = iter.into_iter().collect();
        self.append(&mut tail);
    }
}

impl<T, const C: usize> ops::Index<usize> for SeqTree<T, C> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        match self.get(idx) {
            Some(v) => v,
            None => panic!("index {idx} out of bounds for tree of size {}", self.size()),
        }
    }
}

impl<T, const C: usize> ops::IndexMut<usize> for SeqTree<T, C> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        let size = self.size();
        match self.get_mut(idx) {
            Some(v) => v,
            None => panic!("index {idx} out of bounds for tree of size {size}"),
        }
    }
}
