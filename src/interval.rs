use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::Range,
};

use chrono::NaiveTime;

use crate::error::{Error, Result};

/// A half-open interval `[start, end)` of totally-ordered points.
///
/// An [`Interval`] always satisfies `start <= end`. An interval with
/// `start == end` is valid but empty: it covers no point.
///
/// Two intervals are equal when both bounds are equal. Intervals do not
/// implement [`Ord`] as the ordering used by the tree ([`Interval::cmp_start`])
/// only considers the lower bound and is therefore inconsistent with
/// equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T = NaiveTime> {
    start: T,
    end: T,
}

/// An [`Interval`] of times of day.
pub type TimeInterval = Interval<NaiveTime>;

impl<T> Interval<T>
where
    T: Ord,
{
    /// Construct the interval `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `start > end`.
    pub fn new(start: T, end: T) -> Result<Self>
    where
        T: Debug,
    {
        if start > end {
            return Err(Error::InvalidInterval {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            });
        }

        Ok(Self { start, end })
    }

    /// Construct the interval `[start, end)` without validating the bounds in
    /// release builds.
    pub(crate) fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// The inclusive lower bound.
    pub fn start(&self) -> &T {
        &self.start
    }

    /// The exclusive upper bound.
    pub fn end(&self) -> &T {
        &self.end
    }

    /// Explode this [`Interval`] into the `(start, end)` bounds it contains.
    pub fn into_bounds(self) -> (T, T) {
        (self.start, self.end)
    }

    /// Returns true if this interval covers no point (`start == end`).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `point` lies within `[start, end)`.
    pub fn contains_point(&self, point: &T) -> bool {
        self.start <= *point && *point < self.end
    }

    /// Returns true if every point of `other` also lies within `self`.
    ///
    /// An interval covers itself.
    pub fn covers(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns true if `self` and `other` share at least one point.
    ///
    /// Intervals that only touch at their endpoints do not overlap:
    ///
    /// ```
    /// # use interdiff::Interval;
    /// let a = Interval::new(1, 5).unwrap();
    /// let b = Interval::new(5, 9).unwrap();
    /// assert!(!a.overlaps(&b));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Order `self` relative to `other` by their lower bounds only.
    ///
    /// Intervals sharing a lower bound compare as [`Ordering::Equal`]
    /// regardless of their upper bounds.
    pub fn cmp_start(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start)
    }

    /// Remove the points of `other` from `self`, returning the (at most two)
    /// non-empty pieces of `self` that remain.
    ///
    /// If the intervals do not overlap, `self` is returned unchanged.
    ///
    /// ```
    /// # use interdiff::{Interval, Remainder};
    /// let a = Interval::new(0, 10).unwrap();
    /// let b = Interval::new(3, 6).unwrap();
    ///
    /// let got = a.subtract(&b).into_iter().collect::<Vec<_>>();
    /// assert_eq!(got, [Interval::new(0, 3).unwrap(), Interval::new(6, 10).unwrap()]);
    ///
    /// assert_eq!(b.subtract(&a), Remainder::Empty);
    /// ```
    pub fn subtract(&self, other: &Self) -> Remainder<T>
    where
        T: Clone,
    {
        if !self.overlaps(other) {
            return Remainder::One(self.clone());
        }

        // The subtrahend lies entirely within self, leaving up to one piece on
        // either side of it. This also handles self == other, for which both
        // pieces are empty.
        if self.covers(other) {
            return Remainder::from_pieces(
                Self::new_unchecked(self.start.clone(), other.start.clone()),
                Self::new_unchecked(other.end.clone(), self.end.clone()),
            );
        }

        if other.covers(self) {
            return Remainder::Empty;
        }

        // Only one side of self extends past the subtrahend.
        let piece = if self.start < other.start {
            Self::new_unchecked(self.start.clone(), other.start.clone())
        } else {
            Self::new_unchecked(other.end.clone(), self.end.clone())
        };

        debug_assert!(!piece.is_empty());
        Remainder::One(piece)
    }
}

impl Interval<NaiveTime> {
    /// Construct a time of day interval at minute resolution.
    ///
    /// ```
    /// # use interdiff::TimeInterval;
    /// let i = TimeInterval::from_hm(9, 0, 10, 30).unwrap();
    /// assert_eq!(i.to_string(), "(09:00:00-10:30:00)");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTime`] if either bound is not a valid time of
    /// day, or [`Error::InvalidInterval`] if the start is after the end.
    pub fn from_hm(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Result<Self> {
        Self::new(
            time_of_day(start_hour, start_minute)?,
            time_of_day(end_hour, end_minute)?,
        )
    }
}

fn time_of_day(hour: u32, minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(Error::InvalidTime { hour, minute })
}

/// Returns the later of two points, preferring `b` when they are equal.
pub fn later_of<T>(a: T, b: T) -> T
where
    T: Ord,
{
    if a > b {
        a
    } else {
        b
    }
}

impl<T> Display for Interval<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}-{})", self.start, self.end)
    }
}

impl<T> TryFrom<Range<T>> for Interval<T>
where
    T: Ord + Debug,
{
    type Error = Error;

    fn try_from(value: Range<T>) -> Result<Self> {
        Self::new(value.start, value.end)
    }
}

impl<T> TryFrom<(T, T)> for Interval<T>
where
    T: Ord + Debug,
{
    type Error = Error;

    fn try_from((start, end): (T, T)) -> Result<Self> {
        Self::new(start, end)
    }
}

impl<T> From<Interval<T>> for Range<T> {
    fn from(value: Interval<T>) -> Self {
        value.start..value.end
    }
}

/// The pieces of an [`Interval`] that survive [`Interval::subtract()`].
///
/// A [`Remainder`] never contains an empty interval. Iterating over it yields
/// the pieces in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remainder<T = NaiveTime> {
    /// Nothing remains; the interval was entirely covered.
    Empty,

    /// A single piece remains.
    One(Interval<T>),

    /// The subtrahend split the interval into a lower and an upper piece.
    Two(Interval<T>, Interval<T>),
}

impl<T> Remainder<T>
where
    T: Ord,
{
    /// Build a [`Remainder`] from a lower and upper piece, discarding either
    /// if it is empty.
    fn from_pieces(lower: Interval<T>, upper: Interval<T>) -> Self {
        match (lower.is_empty(), upper.is_empty()) {
            (true, true) => Self::Empty,
            (false, true) => Self::One(lower),
            (true, false) => Self::One(upper),
            (false, false) => Self::Two(lower, upper),
        }
    }
}

impl<T> Remainder<T> {
    /// The number of pieces in this [`Remainder`].
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
        }
    }

    /// Returns true if nothing remains.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl<T> IntoIterator for Remainder<T> {
    type Item = Interval<T>;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<Interval<T>>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        let pieces = match self {
            Self::Empty => [None, None],
            Self::One(a) => [Some(a), None],
            Self::Two(a, b) => [Some(a), Some(b)],
        };

        pieces.into_iter().flatten()
    }
}
