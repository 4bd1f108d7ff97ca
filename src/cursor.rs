//! Wrapper module for [`Cursor`] and related types

/// The path through a [`SeqTree`] to a single value, recorded by [`SeqTree::search_at`]
///
/// A cursor lets [`get_data`] and [`set_data`] go straight to the value found by the last search,
/// without repeating the rank lookups at each level. The tree keeps at most one cursor, and throws
/// it away whenever its structure changes (any insertion, removal, merge, split or roll).
///
/// [`SeqTree`]: crate::SeqTree
/// [`SeqTree::search_at`]: crate::SeqTree::search_at
/// [`get_data`]: crate::SeqTree::get_data
/// [`set_data`]: crate::SeqTree::set_data
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) path: Vec<PathComponent>,
    pub(crate) offset: usize,
    pub(crate) index: usize,
}

/// Single component in a [`Cursor`]'s path through the tree
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathComponent {
    pub(crate) child_idx: u8,
}

impl PathComponent {
    /// Index of the child taken at this level
    pub fn child_idx(&self) -> usize {
        self.child_idx as usize
    }
}

impl Cursor {
    /// The child taken at each internal node, starting from the root
    pub fn path(&self) -> &[PathComponent] {
        &self.path
    }

    /// Position of the value within its leaf holder
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Global index of the value that the cursor points to
    pub fn index(&self) -> usize {
        self.index
    }
}
