use crate::{
    interval::Interval,
    iter::{IntoIter, Iter, Overlaps},
    node::{remove_recurse, Node},
};

/// An augmented AVL tree of [`Interval`], keyed by interval lower bound.
///
/// Each node caches the latest upper bound within its subtree, allowing
/// overlap queries to skip subtrees that cannot contain a match.
///
/// Duplicate intervals are permitted and stored individually.
#[derive(Debug, Clone)]
pub struct IntervalTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for IntervalTree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T> IntervalTree<T>
where
    T: Ord + Clone,
{
    /// Insert `interval` into the tree.
    pub fn insert(&mut self, interval: Interval<T>) {
        match self.root {
            Some(ref mut v) => v.insert(interval),
            None => self.root = Some(Box::new(Node::new(interval))),
        }
        self.len += 1;
    }

    /// Insert every interval yielded by `intervals` into the tree.
    pub fn insert_all<I>(&mut self, intervals: I)
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        for v in intervals {
            self.insert(v);
        }
    }

    /// Remove one interval equal to `interval` from the tree.
    ///
    /// Returns false, leaving the tree unchanged, if no such interval is
    /// stored.
    pub fn remove(&mut self, interval: &Interval<T>) -> bool {
        let removed = remove_recurse(&mut self.root, interval);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns true if an interval equal to `interval` is stored in the tree.
    pub fn contains(&self, interval: &Interval<T>) -> bool {
        self.root
            .as_ref()
            .map(|v| v.contains(interval))
            .unwrap_or_default()
    }

    /// Return an iterator of all intervals in the tree that overlap `query`,
    /// in ascending lower bound order.
    pub fn overlapping<'a>(&'a self, query: &'a Interval<T>) -> Overlaps<'a, T> {
        Overlaps::new(self.root.as_deref(), query)
    }

    /// Remove the points covered by `subtrahend` from every interval in the
    /// tree, replacing each overlapping interval with the pieces of it that
    /// remain.
    ///
    /// Returns the number of intervals that overlapped `subtrahend`.
    ///
    /// An empty `subtrahend` covers no points and leaves the tree unchanged,
    /// returning 0.
    pub fn subtract(&mut self, subtrahend: &Interval<T>) -> usize {
        if subtrahend.is_empty() {
            return 0;
        }

        let conflicts = self.overlapping(subtrahend).cloned().collect::<Vec<_>>();

        let mut pieces = Vec::with_capacity(conflicts.len());
        for v in &conflicts {
            pieces.extend(v.subtract(subtrahend));
        }

        for v in &conflicts {
            let removed = self.remove(v);
            debug_assert!(removed);
        }

        self.insert_all(pieces);

        conflicts.len()
    }
}

impl<T> IntervalTree<T> {
    /// Return an iterator of all intervals in the tree, in ascending lower
    /// bound order.
    ///
    /// Intervals sharing a lower bound are yielded in an unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Clone all intervals in the tree into a [`Vec`], in ascending lower
    /// bound order.
    pub fn collect_all(&self) -> Vec<Interval<T>>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The number of intervals stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The AVL height of the tree; 0 when empty.
    pub fn height(&self) -> u8 {
        self.root.as_ref().map(|v| v.height()).unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> IntoIterator for IntervalTree<T> {
    type Item = Interval<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}

impl<'a, T> IntoIterator for &'a IntervalTree<T> {
    type Item = &'a Interval<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<Interval<T>> for IntervalTree<T>
where
    T: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut t = Self::default();
        t.insert_all(iter);
        t
    }
}

impl<T> Extend<Interval<T>> for IntervalTree<T>
where
    T: Ord + Clone,
{
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}
