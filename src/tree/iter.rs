//! Wrapper module for [`SeqTree`](crate::SeqTree) iterator types -- [`Iter`] and [`IntoIter`]

use std::iter::FusedIterator;
use std::slice;

use super::node::Node;
use super::{SeqTree, DEFAULT_CAPACITY};

/// An iterator over references to the values in a [`SeqTree`], in order
///
/// This iterator is double-ended and knows its exact length. It's produced by the [`iter`] method
/// on [`SeqTree`].
///
/// [`SeqTree`]: crate::SeqTree
/// [`iter`]: crate::SeqTree::iter
pub struct Iter<'t, T, const C: usize = DEFAULT_CAPACITY> {
    fwd: IterStack<'t, T, C>,
    bkwd: IterStack<'t, T, C>,
    /// Number of values not yet yielded from either end
    remaining: usize,
}

/// One end of an [`Iter`]: the unvisited siblings at each level above the current leaf holder
///
/// Both ends walk the whole tree independently. They never overlap because `Iter` stops once
/// `remaining` hits zero.
struct IterStack<'t, T, const C: usize> {
    stack: Vec<slice::Iter<'t, Node<T, C>>>,
    head: slice::Iter<'t, T>,
}

impl<'t, T, const C: usize> IterStack<'t, T, C> {
    fn new(root: Option<&'t Node<T, C>>) -> Self {
        IterStack {
            stack: root.map(|r| vec![slice::from_ref(r).iter()]).unwrap_or_default(),
            head: <&[T]>::default().iter(),
        }
    }

    /// Moves `head` to the next leaf holder in the given direction, returning false if there
    /// aren't any left
    fn advance(&mut self, forward: bool) -> bool {
        while let Some(level) = self.stack.last_mut() {
            let next = match forward {
                true => level.next(),
                false => level.next_back(),
            };

            match next {
                None => {
                    self.stack.pop();
                }
                Some(Node::Internal(n)) => self.stack.push(n.children.iter()),
                Some(Node::Leaf(leaf)) => {
                    self.head = leaf.items.iter();
                    return true;
                }
            }
        }

        false
    }
}

impl<'t, T, const C: usize> Iter<'t, T, C> {
    pub(super) fn new(root: Option<&'t Node<T, C>>) -> Self {
        Iter {
            fwd: IterStack::new(root),
            bkwd: IterStack::new(root),
            remaining: root.map(|r| r.size()).unwrap_or(0),
        }
    }
}

impl<'t, T, const C: usize> Iterator for Iter<'t, T, C> {
    type Item = &'t T;

    fn next(&mut self) -> Option<&'t T> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            if let Some(v) = self.fwd.head.next() {
                self.remaining -= 1;
                return Some(v);
            } else if !self.fwd.advance(true) {
                return None;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'t, T, const C: usize> DoubleEndedIterator for Iter<'t, T, C> {
    fn next_back(&mut self) -> Option<&'t T> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            if let Some(v) = self.bkwd.head.next_back() {
                self.remaining -= 1;
                return Some(v);
            } else if !self.bkwd.advance(false) {
                return None;
            }
        }
    }
}

impl<'t, T, const C: usize> ExactSizeIterator for Iter<'t, T, C> {}

impl<'t, T, const C: usize> FusedIterator for Iter<'t, T, C> {}

impl<'t, T, const C: usize> Clone for Iter<'t, T, C> {
    fn clone(&self) -> Self {
        Iter {
            fwd: IterStack {
                stack: self.fwd.stack.clone(),
                head: self.fwd.head.clone(),
            },
            bkwd: IterStack {
                stack: self.bkwd.stack.clone(),
                head: self.bkwd.head.clone(),
            },
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over the values in a [`SeqTree`], in order
///
/// This is produced by the `IntoIterator` implementation for [`SeqTree`].
///
/// [`SeqTree`]: crate::SeqTree
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, const C: usize> IntoIterator for SeqTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let mut items = Vec::with_capacity(self.size());
        if let Some(root) = self.root.take() {
            root.drain_into(&mut items);
        }

        IntoIter {
            inner: items.into_iter(),
        }
    }
}

impl<'t, T, const C: usize> IntoIterator for &'t SeqTree<T, C> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T, C>;

    fn into_iter(self) -> Iter<'t, T, C> {
        self.iter()
    }
}
