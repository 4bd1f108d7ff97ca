//! Linear-time construction of a balanced tree from a vector

use super::node::{Internal, Leaf, Node};

/// Builds a tree containing `items` in order, returning its root
///
/// Values are packed into leaf holders of `C` items each. The final `C + r` values (for
/// `1 <= r <= C`) are split evenly between the last two holders so that neither falls below the
/// minimum. Each level of internal nodes is grouped the same way, until only the root is left.
pub(super) fn build<T, const C: usize>(items: Vec<T>) -> Option<Node<T, C>> {
    if items.is_empty() {
        return None;
    }

    let mut level: Vec<Node<T, C>> = group::<T, C>(items)
        .into_iter()
        .map(|items| Node::Leaf(Leaf { items }))
        .collect();

    while level.len() > 1 {
        debug_println!("build: grouping {} nodes", level.len());
        level = group::<Node<T, C>, C>(level)
            .into_iter()
            .map(|children| Node::Internal(Internal::from_children(children)))
            .collect();
    }

    level.pop()
}

/// Splits a non-empty `items` into groups of between `half(C)` and `C` elements
fn group<E, const C: usize>(items: Vec<E>) -> Vec<Vec<E>> {
    let n = items.len();
    if n <= C {
        return vec![items];
    }

    let tail = C + (n - 1) % C + 1;
    let full = (n - tail) / C;

    let mut groups = Vec::with_capacity(full + 2);
    let mut rest = items.into_iter();
    for _ in 0..full {
        groups.push(rest.by_ref().take(C).collect());
    }
    groups.push(rest.by_ref().take((tail + 1) / 2).collect());
    groups.push(rest.collect());
    groups
}

#[cfg(feature = "fuzz")]
impl<'d, T, const C: usize> arbitrary::Arbitrary<'d> for super::SeqTree<T, C>
where
    T: arbitrary::Arbitrary<'d>,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'d>) -> arbitrary::Result<Self> {
        let items: Vec<T> = u.arbitrary()?;
        Ok(Self::build_from(items))
    }
}

#[cfg(test)]
mod tests {
    use super::group;
    use crate::tree::node::half;

    #[test]
    fn group_sizes() {
        let sizes = |n: usize| -> Vec<usize> {
            group::<usize, 4>((0..n).collect())
                .iter()
                .map(Vec::len)
                .collect()
        };

        assert_eq!(sizes(1), [1]);
        assert_eq!(sizes(4), [4]);
        assert_eq!(sizes(5), [3, 2]);
        assert_eq!(sizes(8), [4, 4]);
        assert_eq!(sizes(9), [4, 3, 2]);
        assert_eq!(sizes(13), [4, 4, 3, 2]);
    }

    #[test]
    fn groups_respect_minimum() {
        for n in 4..200 {
            let groups = group::<usize, 3>((0..n).collect());
            let flat: Vec<usize> = groups.iter().flatten().copied().collect();
            assert_eq!(flat, (0..n).collect::<Vec<_>>());
            for g in &groups {
                assert!(g.len() >= half(3) && g.len() <= 3, "bad group for n = {n}");
            }
        }
    }
}
