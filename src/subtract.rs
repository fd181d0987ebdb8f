use std::fmt::Debug;

use log::{debug, log_enabled, trace, Level};

use crate::{interval::Interval, tree::IntervalTree};

/// Compute the set difference `base - to_remove`.
///
/// Returns every non-empty piece of the `base` intervals that is not covered
/// by any interval in `to_remove`, ordered by lower bound. Duplicate `base`
/// intervals are retained individually, and overlapping `base` intervals are
/// not merged.
///
/// ```
/// # use interdiff::{subtract, TimeInterval};
/// let base = [TimeInterval::from_hm(9, 0, 10, 0).unwrap()];
/// let to_remove = [TimeInterval::from_hm(9, 0, 9, 15).unwrap()];
///
/// assert_eq!(
///     subtract(base, to_remove),
///     [TimeInterval::from_hm(9, 15, 10, 0).unwrap()],
/// );
/// ```
pub fn subtract<T, B, R>(base: B, to_remove: R) -> Vec<Interval<T>>
where
    T: Ord + Clone + Debug,
    B: IntoIterator<Item = Interval<T>>,
    R: IntoIterator<Item = Interval<T>>,
{
    // Empty intervals cover no points, and are never part of the result.
    let mut tree = base
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect::<IntervalTree<_>>();

    debug!("loaded {} base interval(s)", tree.len());

    for r in to_remove {
        if r.is_empty() {
            trace!("skipping empty subtrahend {r:?}");
            continue;
        }

        // Each subtrahend is applied to the pieces left by all prior
        // subtrahends.
        if log_enabled!(Level::Trace) {
            for v in tree.overlapping(&r) {
                trace!("{v:?} conflicts with {r:?}");
            }
        }

        let before = tree.len();
        let conflicts = tree.subtract(&r);

        // Each conflict is replaced by its pieces.
        let reinserted = tree.len() + conflicts - before;

        debug!(
            "subtracted {r:?}: {conflicts} overlapping interval(s), {reinserted} piece(s) reinserted"
        );
    }

    tree.into_iter().collect()
}
