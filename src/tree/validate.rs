//! Structural validation and debug output

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use super::node::{half, Internal, Node};
use super::SeqTree;

/// Error returned by [`SeqTree::check_invariants`], describing the first structural problem found
///
/// Well-behaved trees never produce this; it exists to help track down bugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTree {
    path: Vec<usize>,
    kind: InvalidKind,
}

/// The specific invariant that an [`InvalidTree`] violates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidKind {
    /// The root exists but holds no values
    EmptyRoot,
    /// The root is an internal node with fewer than two children
    RootTooSmall { len: usize },
    /// A non-root node has fewer than the minimum number of entries
    Underfull { len: usize, min: usize },
    /// A node has more than the maximum number of entries
    Overfull { len: usize, max: usize },
    /// A node's height doesn't match its depth in the tree
    Height { expected: usize, found: usize },
    /// An internal node has a different number of counts and children
    CountsLength { counts: usize, children: usize },
    /// An internal node's running total doesn't match its children
    Count {
        child: usize,
        expected: usize,
        found: usize,
    },
}

impl InvalidTree {
    /// The child indexes leading from the root to the offending node
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn kind(&self) -> InvalidKind {
        self.kind
    }
}

impl Display for InvalidKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::EmptyRoot => f.write_str("root holds no values"),
            Self::RootTooSmall { len } => write!(f, "internal root has {len} children"),
            Self::Underfull { len, min } => {
                write!(f, "node has {len} entries, less than minimum {min}")
            }
            Self::Overfull { len, max } => {
                write!(f, "node has {len} entries, more than maximum {max}")
            }
            Self::Height { expected, found } => {
                write!(f, "expected height {expected}, found {found}")
            }
            Self::CountsLength { counts, children } => {
                write!(f, "node has {counts} counts for {children} children")
            }
            Self::Count {
                child,
                expected,
                found,
            } => write!(f, "count for child {child} is {found}, expected {expected}"),
        }
    }
}

impl Display for InvalidTree {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "invalid tree at path {:?}: {}", self.path, self.kind)
    }
}

impl Error for InvalidTree {}

impl<T, const C: usize> SeqTree<T, C> {
    /// Checks every structural invariant of the tree, returning the first violation found
    ///
    /// Specifically: all leaf holders are at the same depth, every node's stored height is correct,
    /// every non-root node has between [`HALF_CAPACITY`] and [`CAPACITY`] entries, an internal
    /// root has at least two children, and every running total is exact.
    ///
    /// This takes O(n / C) time.
    ///
    /// [`HALF_CAPACITY`]: Self::HALF_CAPACITY
    /// [`CAPACITY`]: Self::CAPACITY
    pub fn check_invariants(&self) -> Result<(), InvalidTree> {
        let root = match self.root.as_ref() {
            Some(r) => r,
            None => return Ok(()),
        };

        let mut path = Vec::new();
        match root {
            Node::Leaf(leaf) if leaf.items.is_empty() => {
                return Err(InvalidTree {
                    path,
                    kind: InvalidKind::EmptyRoot,
                })
            }
            Node::Internal(n) if n.children.len() < 2 => {
                return Err(InvalidTree {
                    path,
                    kind: InvalidKind::RootTooSmall {
                        len: n.children.len(),
                    },
                })
            }
            _ => (),
        }

        check_node(root, &mut path, root.height())
    }

    /// Returns true if all of the tree's invariants hold; see [`check_invariants`]
    ///
    /// [`check_invariants`]: Self::check_invariants
    pub fn is_valid(&self) -> bool {
        self.check_invariants().is_ok()
    }
}

fn check_node<T, const C: usize>(
    node: &Node<T, C>,
    path: &mut Vec<usize>,
    expected_height: usize,
) -> Result<(), InvalidTree> {
    let fail = |path: &Vec<usize>, kind| {
        Err(InvalidTree {
            path: path.clone(),
            kind,
        })
    };

    if node.height() != expected_height {
        return fail(path, InvalidKind::Height {
            expected: expected_height,
            found: node.height(),
        });
    }

    let len = node.len();
    if len > C {
        return fail(path, InvalidKind::Overfull { len, max: C });
    } else if !path.is_empty() && len < half(C) {
        return fail(path, InvalidKind::Underfull { len, min: half(C) });
    }

    match node {
        Node::Leaf(_) => Ok(()),
        Node::Internal(n) => check_internal(n, path),
    }
}

fn check_internal<T, const C: usize>(
    node: &Internal<T, C>,
    path: &mut Vec<usize>,
) -> Result<(), InvalidTree> {
    if node.counts.len() != node.children.len() {
        return Err(InvalidTree {
            path: path.clone(),
            kind: InvalidKind::CountsLength {
                counts: node.counts.len(),
                children: node.children.len(),
            },
        });
    }

    let mut total = 0;
    for (i, (child, &count)) in node.children.iter().zip(&node.counts).enumerate() {
        path.push(i);
        check_node(child, path, node.height - 1)?;
        path.pop();

        total += child.size();
        if count != total {
            return Err(InvalidTree {
                path: path.clone(),
                kind: InvalidKind::Count {
                    child: i,
                    expected: total,
                    found: count,
                },
            });
        }
    }

    Ok(())
}

#[cfg(any(test, feature = "fuzz"))]
impl<T, const C: usize> SeqTree<T, C> {
    /// (*Test-only*) Validates the tree, panicking if any invariant doesn't hold
    ///
    /// This method basically exists for tests so that we can quickly narrow down exactly when a
    /// failure is introduced in a particular test case.
    pub fn validate(&self) {
        if let Err(e) = self.check_invariants() {
            panic!("{e}\n{}", self.dump());
        }
    }

    /// (*Test-only*) Produces a listing of every node in the tree, one per line, with its path
    /// from the root
    pub fn dump(&self) -> String {
        fn write_node<T, const C: usize>(
            node: &Node<T, C>,
            path: &mut Vec<usize>,
            out: &mut String,
        ) {
            let indent = "    ".repeat(path.len());
            match node {
                Node::Leaf(leaf) => {
                    let len = leaf.items.len();
                    out.push_str(&format!("{indent}{path:?}: leaf, {len} items\n"));
                }
                Node::Internal(n) => {
                    out.push_str(&format!(
                        "{indent}{path:?}: height {}, {} children, counts {:?}\n",
                        n.height,
                        n.children.len(),
                        n.counts,
                    ));
                    for (i, child) in n.children.iter().enumerate() {
                        path.push(i);
                        write_node(child, path, out);
                        path.pop();
                    }
                }
            }
        }

        let mut out = String::new();
        if let Some(root) = self.root.as_ref() {
            write_node(root, &mut Vec::new(), &mut out);
        }
        out
    }
}
