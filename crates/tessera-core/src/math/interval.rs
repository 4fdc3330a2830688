// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::algorithm::coalesce_pairs;
use crate::error::IntervalError;
use crate::math::shift::Shifter;
use smallvec::{SmallVec, smallvec};
use std::cmp::{max, min};

/// A closed interval `[begin, end]` over a totally ordered type.
///
/// Both bounds are inclusive, so two intervals that touch at a single point
/// intersect. The type makes no assumption about whether `T` is discrete or
/// continuous; operations that need the value just before or after a bound
/// take a [`Shifter`].
///
/// # Invariants
///
/// `begin` must always be less than or equal to `end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawInterval<T>", bound(deserialize = "T: Ord + serde::Deserialize<'de>"))
)]
pub struct ClosedInterval<T> {
    begin: T,
    end: T,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval<T> {
    begin: T,
    end: T,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawInterval<T>> for ClosedInterval<T>
where
    T: Ord,
{
    type Error = IntervalError;

    fn try_from(raw: RawInterval<T>) -> Result<Self, Self::Error> {
        Self::try_new(raw.begin, raw.end)
    }
}

impl<T> ClosedInterval<T>
where
    T: Ord,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert_eq!(*iv.begin(), 0);
    /// assert_eq!(*iv.end(), 10);
    /// ```
    #[inline]
    pub fn new(begin: T, end: T) -> Self {
        assert!(
            begin <= end,
            "Invalid interval: begin must be less than or equal to end"
        );
        Self { begin, end }
    }

    /// Creates a new `ClosedInterval` if the bounds are ordered.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Inverted`] if `begin > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::math::interval::ClosedInterval;
    /// # use tessera_core::error::IntervalError;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_ok());
    /// assert!(ClosedInterval::try_new(5, 5).is_ok());
    /// assert_eq!(ClosedInterval::try_new(10, 0), Err(IntervalError::Inverted));
    /// ```
    #[inline]
    pub fn try_new(begin: T, end: T) -> Result<Self, IntervalError> {
        if begin <= end {
            Ok(Self { begin, end })
        } else {
            Err(IntervalError::Inverted)
        }
    }

    /// Creates a new `ClosedInterval` without checking the invariant in release builds.
    ///
    /// The caller must ensure `begin <= end`. A `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub fn new_unchecked(begin: T, end: T) -> Self {
        debug_assert!(
            begin <= end,
            "Invalid interval: begin must be less than or equal to end"
        );
        Self { begin, end }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn begin(&self) -> &T {
        &self.begin
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Consumes the interval and returns `(begin, end)`.
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.begin, self.end)
    }

    /// Returns `true` if both bounds are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 5);
    /// assert!(a.equals(&ClosedInterval::new(1, 5)));
    /// assert!(!a.equals(&ClosedInterval::new(1, 6)));
    /// ```
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.begin == other.begin && self.end == other.end
    }

    /// Returns `true` if the intervals share at least one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.intersects(&ClosedInterval::new(5, 15)));
    /// assert!(a.intersects(&ClosedInterval::new(10, 20))); // Touching
    /// assert!(!a.intersects(&ClosedInterval::new(11, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.end >= other.begin && self.begin <= other.end
    }

    /// Returns `true` if `value` lies in `[begin, end]`.
    #[inline]
    pub fn contains_point(&self, value: &T) -> bool {
        self.begin <= *value && *value <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }
}

impl<T> ClosedInterval<T>
where
    T: Ord + Clone,
{
    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals do not intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(5, 15);
    /// assert_eq!(a.intersection(&b), Some(ClosedInterval::new(5, 10)));
    /// assert_eq!(a.intersection(&ClosedInterval::new(10, 12)), Some(ClosedInterval::new(10, 10)));
    /// assert_eq!(a.intersection(&ClosedInterval::new(11, 12)), None);
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        if self.equals(other) {
            return Some(self.clone());
        }

        let begin = max(&self.begin, &other.begin).clone();
        let end = min(&self.end, &other.end).clone();
        Some(Self::new_unchecked(begin, end))
    }

    /// Calculates the parts of `self` not covered by `other`.
    ///
    /// The `shifter` must be the true discrete step of `T`: the left
    /// remainder ends one step before `other.begin`, the right remainder
    /// starts one step after `other.end`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing, in axis order:
    /// * 0 intervals: If `other` fully covers `self`.
    /// * 1 interval: If `other` clips one side of `self` or is disjoint.
    /// * 2 intervals: If `other` lies strictly inside `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::math::interval::ClosedInterval;
    /// # use tessera_core::math::shift::DiscreteStep;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let hole = ClosedInterval::new(4, 6);
    ///
    /// let diff = a.difference(&hole, &DiscreteStep);
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], ClosedInterval::new(0, 3));
    /// assert_eq!(diff[1], ClosedInterval::new(7, 10));
    /// ```
    pub fn difference<S>(&self, other: &Self, shifter: &S) -> SmallVec<[Self; 2]>
    where
        S: Shifter<T>,
    {
        if !self.intersects(other) {
            return smallvec![self.clone()];
        }

        let mut result = SmallVec::new();
        if self.begin < other.begin {
            result.push(if self.end < other.begin {
                self.clone()
            } else {
                Self::new_unchecked(self.begin.clone(), shifter.shift(&other.begin, -1))
            });
        }
        if self.end > other.end {
            result.push(if self.begin > other.end {
                self.clone()
            } else {
                Self::new_unchecked(shifter.shift(&other.end, 1), self.end.clone())
            });
        }
        result
    }

    /// Coalesces `self` with `other` if they are equal, overlapping, or
    /// separated by exactly one discrete step.
    ///
    /// Returns `None` if a gap of at least one value lies between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_core::math::interval::ClosedInterval;
    /// # use tessera_core::math::shift::DiscreteStep;
    ///
    /// let a = ClosedInterval::new(1, 5);
    /// assert_eq!(
    ///     a.merge(&ClosedInterval::new(6, 10), &DiscreteStep),
    ///     Some(ClosedInterval::new(1, 10))
    /// );
    /// assert_eq!(a.merge(&ClosedInterval::new(7, 10), &DiscreteStep), None);
    /// ```
    pub fn merge<S>(&self, other: &Self, shifter: &S) -> Option<Self>
    where
        S: Shifter<T>,
    {
        let extended =
            Self::new_unchecked(shifter.shift(&self.begin, -1), shifter.shift(&self.end, 1));
        if !extended.intersects(other) {
            return None;
        }
        if self.equals(other) {
            return Some(self.clone());
        }

        Some(self.hull(other))
    }

    /// Returns the smallest interval containing both `self` and `other`.
    #[inline]
    pub fn hull(&self, other: &Self) -> Self {
        let begin = min(&self.begin, &other.begin).clone();
        let end = max(&self.end, &other.end).clone();
        Self::new_unchecked(begin, end)
    }
}

/// Reduces `intervals` by repeatedly merging the first mergeable pair.
///
/// The result covers exactly the same points. Pairs are scanned in
/// row-major `(i, j)` order with `i < j`; a merged pair is removed and the
/// merged interval appended before the scan restarts.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::math::interval::{coalesce, ClosedInterval};
/// # use tessera_core::math::shift::DiscreteStep;
///
/// let merged = coalesce(
///     vec![ClosedInterval::new(1, 3), ClosedInterval::new(8, 9), ClosedInterval::new(4, 6)],
///     &DiscreteStep,
/// );
/// assert_eq!(merged, vec![ClosedInterval::new(8, 9), ClosedInterval::new(1, 6)]);
/// ```
pub fn coalesce<T, S>(intervals: Vec<ClosedInterval<T>>, shifter: &S) -> Vec<ClosedInterval<T>>
where
    T: Ord + Clone,
    S: Shifter<T>,
{
    coalesce_pairs(intervals, |a, b| a.merge(b, shifter))
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.begin, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.begin)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<T> TryFrom<std::ops::RangeInclusive<T>> for ClosedInterval<T>
where
    T: Ord,
{
    type Error = IntervalError;

    #[inline]
    fn try_from(range: std::ops::RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (begin, end) = range.into_inner();
        Self::try_new(begin, end)
    }
}

impl<T> From<ClosedInterval<T>> for std::ops::RangeInclusive<T> {
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.begin..=iv.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::shift::DiscreteStep;
    use std::ops::{Bound, RangeBounds};

    fn iv(begin: i32, end: i32) -> ClosedInterval<i32> {
        ClosedInterval::new(begin, end)
    }

    #[test]
    fn test_construction_valid() {
        let a = iv(10, 20);
        assert_eq!(*a.begin(), 10);
        assert_eq!(*a.end(), 20);

        let point = iv(3, 3);
        assert_eq!(point.into_bounds(), (3, 3));
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5, 10).is_ok());
        assert!(ClosedInterval::try_new(5, 5).is_ok());
        // Invalid: begin > end
        assert_eq!(ClosedInterval::try_new(10, 5), Err(IntervalError::Inverted));
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_equals() {
        assert!(iv(1, 5).equals(&iv(1, 5)));
        assert!(!iv(1, 5).equals(&iv(2, 5)));
        assert!(!iv(1, 5).equals(&iv(1, 4)));
    }

    #[test]
    fn test_intersects() {
        let a = iv(0, 10);

        // Disjoint left
        assert!(!a.intersects(&iv(-5, -1)));
        // Touching left at a single point
        assert!(a.intersects(&iv(-5, 0)));
        // Overlap left
        assert!(a.intersects(&iv(-5, 5)));
        // Contained
        assert!(a.intersects(&iv(2, 8)));
        // Identity
        assert!(a.intersects(&a));
        // Touching right
        assert!(a.intersects(&iv(10, 15)));
        // Disjoint right
        assert!(!a.intersects(&iv(11, 15)));
    }

    #[test]
    fn test_contains() {
        let a = iv(0, 10);
        assert!(a.contains_point(&0));
        assert!(a.contains_point(&10));
        assert!(!a.contains_point(&11));
        assert!(a.contains_interval(&iv(0, 10)));
        assert!(a.contains_interval(&iv(2, 8)));
        assert!(!a.contains_interval(&iv(5, 11)));
    }

    #[test]
    fn test_intersection() {
        let a = iv(0, 10);

        assert_eq!(a.intersection(&iv(5, 15)), Some(iv(5, 10)));
        assert_eq!(a.intersection(&iv(2, 8)), Some(iv(2, 8)));
        assert_eq!(a.intersection(&iv(-3, 0)), Some(iv(0, 0)));
        assert_eq!(a.intersection(&a), Some(a));
        assert_eq!(a.intersection(&iv(12, 20)), None);
    }

    #[test]
    fn test_difference() {
        let base = iv(0, 10);

        // 1. Disjoint (No effect)
        let diff = base.difference(&iv(12, 15), &DiscreteStep);
        assert_eq!(diff.as_slice(), &[base]);

        // 2. Full cover (Empty result)
        assert!(base.difference(&iv(-5, 15), &DiscreteStep).is_empty());
        assert!(base.difference(&base, &DiscreteStep).is_empty());

        // 3. Clip right
        let diff = base.difference(&iv(8, 15), &DiscreteStep);
        assert_eq!(diff.as_slice(), &[iv(0, 7)]);

        // 4. Clip left
        let diff = base.difference(&iv(-5, 2), &DiscreteStep);
        assert_eq!(diff.as_slice(), &[iv(3, 10)]);

        // 5. Split, left remainder first
        let diff = base.difference(&iv(4, 6), &DiscreteStep);
        assert_eq!(diff.as_slice(), &[iv(0, 3), iv(7, 10)]);

        // 6. Single point hole at the boundary
        let diff = base.difference(&iv(10, 10), &DiscreteStep);
        assert_eq!(diff.as_slice(), &[iv(0, 9)]);
    }

    #[test]
    fn test_difference_uses_shifter() {
        let tens = |value: &i32, step: i64| value + 10 * step as i32;
        let diff = iv(0, 100).difference(&iv(40, 60), &tens);
        assert_eq!(diff.as_slice(), &[iv(0, 30), iv(70, 100)]);
    }

    #[test]
    fn test_difference_reconstructs() {
        let a = iv(0, 20);
        for b in [iv(-5, 3), iv(5, 9), iv(15, 30), iv(0, 20), iv(20, 20)] {
            let inter = a.intersection(&b).unwrap();
            let mut pieces: Vec<_> = a.difference(&b, &DiscreteStep).into_vec();
            pieces.push(inter);
            let covered: usize = pieces.iter().map(|p| (p.end() - p.begin() + 1) as usize).sum();
            assert_eq!(covered, 21);
            let merged = coalesce(pieces, &DiscreteStep);
            assert_eq!(merged, vec![a]);
        }
    }

    #[test]
    fn test_merge() {
        let a = iv(1, 5);

        // Adjacent on either side
        assert_eq!(a.merge(&iv(6, 10), &DiscreteStep), Some(iv(1, 10)));
        assert_eq!(a.merge(&iv(-3, 0), &DiscreteStep), Some(iv(-3, 5)));
        // Overlapping
        assert_eq!(a.merge(&iv(3, 8), &DiscreteStep), Some(iv(1, 8)));
        // Contained
        assert_eq!(a.merge(&iv(2, 3), &DiscreteStep), Some(a));
        // Equal
        assert_eq!(a.merge(&a, &DiscreteStep), Some(a));
        // Gap of one value
        assert_eq!(a.merge(&iv(7, 10), &DiscreteStep), None);
        assert_eq!(a.merge(&iv(-5, -1), &DiscreteStep), None);
    }

    #[test]
    fn test_merge_at_type_bounds() {
        let a: ClosedInterval<u8> = ClosedInterval::new(250, u8::MAX);
        let b = ClosedInterval::new(0, 249);
        assert_eq!(a.merge(&b, &DiscreteStep), Some(ClosedInterval::new(0, u8::MAX)));
        assert_eq!(b.merge(&a, &DiscreteStep), Some(ClosedInterval::new(0, u8::MAX)));
    }

    #[test]
    fn test_hull() {
        assert_eq!(iv(1, 3).hull(&iv(8, 9)), iv(1, 9));
    }

    #[test]
    fn test_coalesce_keeps_gaps() {
        let merged = coalesce(vec![iv(1, 2), iv(5, 6), iv(3, 3)], &DiscreteStep);
        assert_eq!(merged, vec![iv(5, 6), iv(1, 3)]);
    }

    #[test]
    fn test_traits_display_debug() {
        let a = iv(10, 20);
        assert_eq!(format!("{}", a), "[10, 20]");
        assert_eq!(format!("{:?}", a), "ClosedInterval { begin: 10, end: 20 }");
    }

    #[test]
    fn test_range_conversions() {
        let a = ClosedInterval::try_from(0..=10).unwrap();
        assert_eq!(a, iv(0, 10));
        assert!(ClosedInterval::try_from(10..=0).is_err());

        let range: std::ops::RangeInclusive<i32> = a.into();
        assert_eq!(range, 0..=10);
    }

    #[test]
    fn test_range_bounds() {
        let a = iv(5, 10);

        match a.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 5),
            _ => panic!("Wrong start bound"),
        }

        match a.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 10),
            _ => panic!("Wrong end bound"),
        }
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_date_axis() {
        use chrono::NaiveDate;

        let d = |day: u32| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let a = ClosedInterval::new(d(1), d(10));
        let diff = a.difference(&ClosedInterval::new(d(5), d(15)), &DiscreteStep);
        assert_eq!(diff.as_slice(), &[ClosedInterval::new(d(1), d(4))]);
        assert_eq!(
            a.merge(&ClosedInterval::new(d(11), d(20)), &DiscreteStep),
            Some(ClosedInterval::new(d(1), d(20)))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&iv(1, 5)).unwrap();
        assert_eq!(json, r#"{"begin":1,"end":5}"#);
        let back: ClosedInterval<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv(1, 5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_inverted_bounds() {
        let result = serde_json::from_str::<ClosedInterval<i32>>(r#"{"begin":5,"end":1}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains(&IntervalError::Inverted.to_string()));

        let point: ClosedInterval<i32> = serde_json::from_str(r#"{"begin":3,"end":3}"#).unwrap();
        assert_eq!(point, iv(3, 3));
    }
}
