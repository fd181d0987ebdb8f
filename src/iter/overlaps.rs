use crate::{interval::Interval, node::Node};

/// Yields the intervals of an [`IntervalTree`](crate::IntervalTree) that
/// [`Interval::overlaps()`] a half-open query, ordered by lower bound.
///
/// A subtree is skipped when its cached latest upper bound is at or before
/// the query start. A node and everything to its right is skipped when the
/// node starts at or after the query end. Intervals that only touch the
/// query at an endpoint are not yielded.
#[derive(Debug)]
pub struct Overlaps<'a, T> {
    query: &'a Interval<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Overlaps<'a, T>
where
    T: Ord,
{
    pub(crate) fn new(root: Option<&'a Node<T>>, query: &'a Interval<T>) -> Self {
        let mut this = Self {
            stack: vec![],
            query,
        };

        // Descend down the left side of the tree, pushing all the internal
        // nodes onto the stack until the left-most leaf is reached.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<T>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            if *self.query.start() >= *v.subtree_max() {
                // Prune this subtree rooted at "v" from the search.
                //
                // No interval in this subtree ends after the query starts.
                break;
            }

            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, T> Iterator for Overlaps<'a, T>
where
    T: Ord,
{
    type Item = &'a Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            if *self.query.end() <= *v.interval().start() {
                // Prune this node and the right subtree from the search.
                //
                // All values in the right subtree start at or after this node,
                // and therefore at or after the end of the query.
                continue;
            }

            // Push the right subtree to be visited next.
            if let Some(right) = v.right() {
                self.push_subtree(right);
            }

            // Yield this node if it overlaps with the query interval.
            if v.interval().overlaps(self.query) {
                return Some(v.interval());
            }
        }
    }
}
