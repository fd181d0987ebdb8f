use std::{collections::BTreeSet, fmt::Debug};

use proptest::prelude::*;

use crate::{interval::Interval, IntervalTree, TimeInterval};

/// The exclusive upper bound of points generated by [`arbitrary_interval()`].
pub(crate) const RANGE_MAX: usize = 20;

/// Generate arbitrary (potentially empty) intervals with bounds from
/// [0..[`RANGE_MAX`]).
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<usize>> {
    (0..RANGE_MAX, 0..RANGE_MAX)
        .prop_map(|(a, b)| Interval::new_unchecked(a.min(b), a.max(b)))
}

/// Generate arbitrary non-empty intervals with bounds from [0..[`RANGE_MAX`]).
pub(crate) fn arbitrary_non_empty_interval() -> impl Strategy<Value = Interval<usize>> {
    arbitrary_interval().prop_filter("empty interval", |v| !v.is_empty())
}

/// Shorthand for a time of day interval.
pub(crate) fn hm(
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
) -> TimeInterval {
    TimeInterval::from_hm(start_hour, start_minute, end_hour, end_minute).unwrap()
}

/// Return the set of points in [0..[`RANGE_MAX`]) covered by at least one of
/// `intervals`.
pub(crate) fn covered_points<'a, I>(intervals: I) -> BTreeSet<usize>
where
    I: IntoIterator<Item = &'a Interval<usize>>,
{
    let intervals = intervals.into_iter().collect::<Vec<_>>();
    (0..RANGE_MAX)
        .filter(|p| intervals.iter().any(|v| v.contains_point(p)))
        .collect()
}

/// Assert the BST, AVL and interval tree properties of tree nodes, ensuring
/// the tree is well-formed.
pub(crate) fn validate_tree_structure<T>(t: &IntervalTree<T>)
where
    T: Ord + Debug + Clone,
{
    let root = match t.root() {
        Some(v) => v,
        None => {
            assert_eq!(t.len(), 0);
            return;
        }
    };

    let mut n_nodes = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        n_nodes += 1;

        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left child never starts after this node (ties
        // descend left, but rotations may move them to the right).
        assert!(n
            .left()
            .map(|v| v.interval().start() <= n.interval().start())
            .unwrap_or(true));

        // Invariant 2: the right child never starts before this node.
        assert!(n
            .right()
            .map(|v| v.interval().start() >= n.interval().start())
            .unwrap_or(true));

        // Invariant 3: the height of this node is always +1 of the
        // maximum child height, with a leaf at height 1.
        let left_height = n.left().map(|v| v.height()).unwrap_or_default();
        let right_height = n.right().map(|v| v.height()).unwrap_or_default();
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height(),
            want_height,
            "expect node with interval {:?} to have height {}, has {}",
            n.interval(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot
        // exceed 1.
        let balance = (left_height as i64 - right_height as i64).abs();
        assert!(
            balance <= 1,
            "balance={balance}, node={n:?}, stack={stack:?}"
        );

        // Invariant 5: the subtree max of "n" must be equal to either the
        // largest of the two child subtree maxes, or its own upper bound.
        //
        // This indirectly validates that the subtree max of "n" is
        // greater-than-or-equal-to that of the left and right child's
        // subtree max value.
        let child_max = n
            .left()
            .map(|v| v.subtree_max())
            .max(n.right().map(|v| v.subtree_max()));
        let want_max = child_max.max(Some(n.interval().end())).unwrap();
        assert_eq!(want_max, n.subtree_max());
    }

    // Invariant 6: the cached length matches the number of nodes.
    assert_eq!(n_nodes, t.len());
}
