use std::cmp::Ordering;

use crate::interval::{later_of, Interval};

#[derive(Debug, PartialEq, Eq)]
pub(super) enum RemoveResult {
    /// The interval was removed from the subtree rooted at this node.
    Removed,

    /// This node holds the interval but contains no children, and must be
    /// unlinked by the parent.
    ParentUnlink,

    /// The interval does not exist in the subtree rooted at this node.
    NotFound,
}

impl From<bool> for RemoveResult {
    fn from(removed: bool) -> Self {
        if removed {
            Self::Removed
        } else {
            Self::NotFound
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1.
    ///
    /// A u8 holds a maximum value of 255, which is far beyond the height of
    /// any balanced tree that fits in memory.
    height: u8,

    /// The latest upper bound of all intervals in the subtree rooted at this
    /// [`Node`].
    subtree_max: T,

    interval: Interval<T>,
}

impl<T> Node<T>
where
    T: Ord + Clone,
{
    pub(crate) fn new(interval: Interval<T>) -> Self {
        Self {
            subtree_max: interval.end().clone(),
            interval,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `interval` into the subtree rooted at `self`, rebalancing on the
    /// way back up.
    ///
    /// Intervals are keyed by their lower bound, with ties descending left.
    /// Duplicate intervals are stored as distinct nodes.
    pub(crate) fn insert(self: &mut Box<Self>, interval: Interval<T>) {
        let child = match interval.cmp_start(&self.interval) {
            Ordering::Less | Ordering::Equal => &mut self.left,
            Ordering::Greater => &mut self.right,
        };

        // The side of the child the interval descends into, which determines
        // the rotation case if this node becomes unbalanced.
        let descends_left = child
            .as_ref()
            .map(|c| interval.cmp_start(&c.interval) != Ordering::Greater);

        match child {
            Some(v) => v.insert(interval),
            None => *child = Some(Box::new(Self::new(interval))),
        }

        update_height(self);
        update_subtree_max(self);

        // Determine the balance factor of the subtree rooted at self and
        // correct it if the absolute difference in height between branches is
        // > 1.
        //
        // A newly linked leaf can never unbalance its parent, so an
        // unbalanced node always has a populated child on the heavy side.
        match (balance(self), descends_left) {
            // Left-left
            (2, Some(true)) => rotate_right(self),
            // Left-right
            (2, Some(false)) => {
                if let Some(l) = self.left.as_mut() {
                    rotate_left(l);
                }
                rotate_right(self);
            }
            // Right-right
            (-2, Some(false)) => rotate_left(self),
            // Right-left
            (-2, Some(true)) => {
                if let Some(r) = self.right.as_mut() {
                    rotate_right(r);
                }
                rotate_left(self);
            }
            (-1..=1, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);
    }

    /// Remove one node holding an interval equal to `interval` from the
    /// subtree rooted at `self`.
    ///
    /// The caller is responsible for rebalancing `self` after a
    /// [`RemoveResult::Removed`] and for unlinking `self` after a
    /// [`RemoveResult::ParentUnlink`].
    pub(super) fn remove(self: &mut Box<Self>, interval: &Interval<T>) -> RemoveResult {
        match interval.cmp_start(&self.interval) {
            Ordering::Less => return remove_recurse(&mut self.left, interval).into(),
            Ordering::Greater => return remove_recurse(&mut self.right, interval).into(),
            Ordering::Equal if self.interval != *interval => {
                // Ties descend left on insert, but a rotation may since have
                // placed an equal lower bound in either subtree.
                return (remove_recurse(&mut self.left, interval)
                    || remove_recurse(&mut self.right, interval))
                .into();
            }
            Ordering::Equal => { /* This node holds the interval */ }
        }

        // This node may have 0, 1 or 2 child node(s).
        //
        // With two children, the in-order successor (the left-most node of
        // the right subtree) is unlinked and its interval moves into this
        // node, preserving the binary search property. With a single child,
        // that child replaces this node outright.
        match (self.left.take(), self.right.take()) {
            (None, None) => {
                debug_assert_eq!(self.height, 1);
                return RemoveResult::ParentUnlink;
            }
            (Some(child), None) | (None, Some(child)) => {
                *self = child;
            }
            (Some(left), Some(mut right)) => {
                self.left = Some(left);
                self.interval = match extract_subtree_min(&mut right) {
                    Some(min) => {
                        self.right = Some(right);
                        min.interval
                    }
                    None => {
                        // The right child has no left subtree, and is
                        // therefore the successor itself.
                        debug_assert!(right.left.is_none());
                        self.right = right.right.take();
                        right.interval
                    }
                };
            }
        }

        RemoveResult::Removed
    }

    /// Returns true if an interval equal to `interval` is stored in the
    /// subtree rooted at `self`.
    pub(crate) fn contains(&self, interval: &Interval<T>) -> bool {
        // Prune this subtree from the search if the maximum upper bound in the
        // subtree is less than the search upper bound. If true, this subtree
        // cannot contain the search interval.
        if self.subtree_max < *interval.end() {
            return false;
        }

        let contains = |n: Option<&Self>| n.map(|v| v.contains(interval)).unwrap_or_default();

        match interval.cmp_start(&self.interval) {
            Ordering::Less => contains(self.left()),
            Ordering::Greater => contains(self.right()),
            Ordering::Equal if self.interval == *interval => true,
            Ordering::Equal => contains(self.left()) || contains(self.right()),
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn interval(&self) -> &Interval<T> {
        &self.interval
    }

    pub(crate) fn subtree_max(&self) -> &T {
        &self.subtree_max
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Consume this [`Node`], returning the [`Interval`] it holds.
    pub(crate) fn into_interval(self) -> Interval<T> {
        self.interval
    }
}

fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Recompute the subtree max of `n` from its own upper bound and the subtree
/// max of each child that is present.
fn update_subtree_max<T>(n: &mut Node<T>)
where
    T: Ord + Clone,
{
    let new_max = [n.left(), n.right()]
        .into_iter()
        .flatten()
        .map(|v| v.subtree_max())
        .fold(n.interval().end(), later_of);

    n.subtree_max = new_max.clone();
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// A no-op if `x` has no right child.
fn rotate_left<T>(x: &mut Box<Node<T>>)
where
    T: Ord + Clone,
{
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);
    update_subtree_max(&mut p);

    x.left = Some(p);
    update_height(x);
    update_subtree_max(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// A no-op if `y` has no left child.
fn rotate_right<T>(y: &mut Box<Node<T>>)
where
    T: Ord + Clone,
{
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);
    update_subtree_max(&mut p);

    y.right = Some(p);
    update_height(y);
    update_subtree_max(y);
}

/// Extracts the node holding the minimum subtree value in a descendent of
/// `root`, if any, linking the right subtree of the extracted node to in its
/// place.
///
/// Returns [`None`] if `root` has no left child, in which case `root` itself
/// is the minimum.
fn extract_subtree_min<T>(root: &mut Box<Node<T>>) -> Option<Box<Node<T>>>
where
    T: Ord + Clone,
{
    // Descend left to the leaf.
    let v = match extract_subtree_min(root.left.as_mut()?) {
        Some(v) => Some(v),
        None => {
            // The left child is the end of the left edge.
            //
            // ```text
            //                 6
            //                / \
            //    here ->   <4>   7
            //                \
            //                 5
            // ```
            //
            // Unlink the right node of the left root, which will become the new
            // left node of "root" (if any).
            let left_right = root.left.as_mut().and_then(|v| v.right.take());

            std::mem::replace(&mut root.left, left_right)
        }
    };

    rebalance_after_remove(root);
    v
}

/// Recurse into `node`, calling [`Node::remove()`] to remove the provided
/// `interval` from the subtree rooted at `node`, if it exists.
///
/// Returns true if a node was removed, clearing the `node` pointer if it was
/// the one removed and had no children.
pub(super) fn remove_recurse<T>(node: &mut Option<Box<Node<T>>>, interval: &Interval<T>) -> bool
where
    T: Ord + Clone,
{
    let Some(v) = node.as_mut() else {
        return false;
    };

    // Prune this subtree from the search if the maximum upper bound in the
    // subtree is less than the search upper bound. If true, this subtree
    // cannot contain the search interval.
    if *v.subtree_max() < *interval.end() {
        return false;
    }

    match v.remove(interval) {
        RemoveResult::Removed => {
            rebalance_after_remove(v);
            true
        }
        RemoveResult::ParentUnlink => {
            *node = None;
            true
        }
        RemoveResult::NotFound => false,
    }
}

/// Recompute the height and subtree max of `v` and restore the AVL balance of
/// the subtree rooted at it after a removal.
///
/// Unlike insertion, the rotation case is selected by the balance factor of
/// the heavy child itself.
fn rebalance_after_remove<T>(v: &mut Box<Node<T>>)
where
    T: Ord + Clone,
{
    // Recompute the height of the relocated node.
    update_height(v);

    // And rebalance the subtree.
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            if let Some(l) = v.left.as_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            if let Some(r) = v.right.as_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    update_subtree_max(v);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}
